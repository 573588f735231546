//! Configuration loading, environment overrides and path resolution

use crate::domains::{database::DatabaseConfig, ShopZoneConfig};
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration loader
///
/// The base directory is injected explicitly so that path resolution is
/// deterministic and independent of the working directory. Loading runs
/// exactly once at process start, synchronously; the resulting snapshot
/// is never re-read from the environment.
pub struct ConfigLoader {
    /// Directory relative paths are resolved against
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a loader resolving paths against `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The injected base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<ShopZoneConfig> {
        let content = std::fs::read_to_string(path)?;
        let mut config: ShopZoneConfig = serde_yaml::from_str(&content)?;

        self.apply_env_overrides(&mut config)?;
        self.resolve_paths(&mut config);
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    ///
    /// This is a pure one-shot resolution: defaults, then environment
    /// overrides, then path resolution. It reads nothing but environment
    /// variables and cannot fail unless an override is malformed, since
    /// every recognized variable has a default.
    pub fn from_env(&self) -> ConfigResult<ShopZoneConfig> {
        let mut config = ShopZoneConfig::default();
        self.apply_env_overrides(&mut config)?;
        self.resolve_paths(&mut config);
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<ShopZoneConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut ShopZoneConfig) -> ConfigResult<()> {
        self.apply_security_overrides(&mut config.security)?;
        self.apply_database_overrides(&mut config.database)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    /// Apply security config overrides
    fn apply_security_overrides(
        &self,
        config: &mut crate::domains::security::SecurityConfig,
    ) -> ConfigResult<()> {
        if let Ok(secret_key) = self.get_env_var("SECRET_KEY") {
            config.secret_key = secret_key;
        }

        // Strict single-literal comparison: only the exact string "True"
        // enables debug; "true", "1" and everything else disable it
        if let Ok(debug) = self.get_env_var("DEBUG") {
            config.debug = debug == "True";
        }

        Ok(())
    }

    /// Apply database config overrides
    ///
    /// The `DB_*` variables are consulted only when the postgres engine
    /// is selected; under the embedded engine they are inert.
    fn apply_database_overrides(&self, config: &mut DatabaseConfig) -> ConfigResult<()> {
        let DatabaseConfig::Postgres {
            name,
            user,
            password,
            host,
            port,
        } = config
        else {
            return Ok(());
        };

        if let Ok(value) = self.get_env_var("DB_NAME") {
            *name = value;
        }
        if let Ok(value) = self.get_env_var("DB_USER") {
            *user = value;
        }
        if let Ok(value) = self.get_env_var("DB_PASSWORD") {
            *password = value;
        }
        if let Ok(value) = self.get_env_var("DB_HOST") {
            *host = value;
        }
        if let Ok(value) = self.get_env_var("DB_PORT") {
            *port = value
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("Invalid DB_PORT: {}", e)))?;
        }

        Ok(())
    }

    /// Apply logging config overrides
    fn apply_logging_overrides(
        &self,
        config: &mut crate::domains::logging::LoggingConfig,
    ) -> ConfigResult<()> {
        if let Ok(level) = self.get_env_var("LOG_LEVEL") {
            config.level = crate::domains::logging::LogLevel::from_str(&level)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {}", level)))?;
        }

        if let Ok(format) = self.get_env_var("LOG_FORMAT") {
            config.format = crate::domains::logging::LogFormat::from_str(&format)
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_FORMAT: {}", format)))?;
        }

        Ok(())
    }

    /// Join every relative path field to the base directory. Absolute
    /// paths pass through unchanged. No directory is created or checked
    /// for existence.
    fn resolve_paths(&self, config: &mut ShopZoneConfig) {
        for dir in &mut config.templates.dirs {
            self.resolve_path(dir);
        }
        for dir in &mut config.static_files.staticfiles_dirs {
            self.resolve_path(dir);
        }
        self.resolve_path(&mut config.static_files.static_root);
        self.resolve_path(&mut config.static_files.media_root);

        if let DatabaseConfig::Sqlite { file } = &mut config.database {
            self.resolve_path(file);
        }
    }

    fn resolve_path(&self, path: &mut PathBuf) {
        if path.is_relative() {
            let resolved = self.base_dir.join(path.as_path());
            *path = resolved;
        }
    }

    /// Get environment variable by its exact, unprefixed name
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use temp_env::with_vars;
    use tempfile::NamedTempFile;

    fn loader() -> ConfigLoader {
        ConfigLoader::new("/srv/shopzone")
    }

    #[test]
    fn test_relative_paths_join_base_dir() {
        let config = with_vars(vec![("DEBUG", None::<&str>)], || loader().from_env()).unwrap();

        assert_eq!(
            config.static_files.static_root,
            PathBuf::from("/srv/shopzone/staticfiles")
        );
        assert_eq!(
            config.static_files.media_root,
            PathBuf::from("/srv/shopzone/media")
        );
        assert_eq!(config.templates.dirs, vec![PathBuf::from("/srv/shopzone/templates")]);
        assert_eq!(
            config.database,
            DatabaseConfig::Sqlite {
                file: PathBuf::from("/srv/shopzone/db.sqlite3")
            }
        );
    }

    #[test]
    fn test_absolute_paths_pass_through() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "static_files:\n  media_root: /var/lib/shopzone/media\n"
        )
        .unwrap();

        let config = with_vars(vec![("DEBUG", None::<&str>)], || {
            loader().from_file(file.path())
        })
        .unwrap();
        assert_eq!(
            config.static_files.media_root,
            PathBuf::from("/var/lib/shopzone/media")
        );
        // Untouched relative siblings still resolve against the base
        assert_eq!(
            config.static_files.static_root,
            PathBuf::from("/srv/shopzone/staticfiles")
        );
    }

    #[test]
    fn test_missing_file_errors() {
        let result = loader().from_file("/nonexistent/shopzone.yaml");
        assert!(matches!(result, Err(ConfigError::FileReadError(_))));
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "security: [not a mapping").unwrap();

        let result = loader().from_file(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_fallback_chain() {
        let config = with_vars(vec![("DEBUG", None::<&str>)], || {
            loader().load(None::<&Path>)
        })
        .unwrap();
        assert!(config.security.debug);
    }
}
