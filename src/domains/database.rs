//! Database configuration
//!
//! The engine is a tagged union selected by the `engine` key, so a
//! configuration that names an engine but lacks its required fields is
//! rejected at construction time instead of at connection time.

use crate::error::ConfigResult;
use crate::validation::{validate_port_range, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Database engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "lowercase")]
pub enum DatabaseConfig {
    /// Embedded single-file engine (the default)
    Sqlite {
        /// Database file, resolved against the base directory when
        /// relative. The file is not required to exist at load time.
        #[serde(default = "default_sqlite_file")]
        file: PathBuf,
    },
    /// Network engine
    Postgres {
        #[serde(default = "default_postgres_name")]
        name: String,
        #[serde(default = "default_postgres_user")]
        user: String,
        /// May legitimately be empty (peer/trust authentication)
        #[serde(default)]
        password: String,
        #[serde(default = "default_postgres_host")]
        host: String,
        #[serde(default = "default_postgres_port")]
        port: u16,
    },
}

impl DatabaseConfig {
    /// Engine identifier as reported to the hosting framework
    pub fn engine_name(&self) -> &'static str {
        match self {
            DatabaseConfig::Sqlite { .. } => "sqlite3",
            DatabaseConfig::Postgres { .. } => "postgresql",
        }
    }

    /// Whether this is the embedded single-file engine
    pub fn is_embedded(&self) -> bool {
        matches!(self, DatabaseConfig::Sqlite { .. })
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig::Sqlite {
            file: default_sqlite_file(),
        }
    }
}

impl Validatable for DatabaseConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            DatabaseConfig::Sqlite { file } => {
                if file.as_os_str().is_empty() {
                    return Err(self.validation_error("file cannot be empty"));
                }
                Ok(())
            }
            DatabaseConfig::Postgres {
                name, user, host, port, ..
            } => {
                validate_required_string(name, "name", self.domain_name())?;
                validate_required_string(user, "user", self.domain_name())?;
                validate_required_string(host, "host", self.domain_name())?;
                validate_port_range(*port, "port", self.domain_name())?;
                Ok(())
            }
        }
    }

    fn domain_name(&self) -> &'static str {
        "database"
    }
}

// Default value functions
fn default_sqlite_file() -> PathBuf {
    PathBuf::from("db.sqlite3")
}

fn default_postgres_name() -> String {
    "shopzone".to_string()
}

fn default_postgres_user() -> String {
    "postgres".to_string()
}

fn default_postgres_host() -> String {
    "localhost".to_string()
}

fn default_postgres_port() -> u16 {
    5432
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.engine_name(), "sqlite3");
        assert!(config.is_embedded());
        assert_eq!(
            config,
            DatabaseConfig::Sqlite {
                file: PathBuf::from("db.sqlite3")
            }
        );
    }

    #[test]
    fn test_postgres_defaults_from_yaml() {
        let config: DatabaseConfig = serde_yaml::from_str("engine: postgres").unwrap();
        assert_eq!(config.engine_name(), "postgresql");
        assert_eq!(
            config,
            DatabaseConfig::Postgres {
                name: "shopzone".to_string(),
                user: "postgres".to_string(),
                password: String::new(),
                host: "localhost".to_string(),
                port: 5432,
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_config_validation() {
        let config = DatabaseConfig::Sqlite {
            file: PathBuf::new(),
        };
        assert!(config.validate().is_err());

        let config = DatabaseConfig::Postgres {
            name: String::new(),
            user: "postgres".to_string(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 5432,
        };
        assert!(config.validate().is_err());

        let config = DatabaseConfig::Postgres {
            name: "shopzone".to_string(),
            user: "postgres".to_string(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_password_is_valid() {
        let config: DatabaseConfig = serde_yaml::from_str("engine: postgres").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        let result: Result<DatabaseConfig, _> = serde_yaml::from_str("engine: oracle");
        assert!(result.is_err());
    }
}
