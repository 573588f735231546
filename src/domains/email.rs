//! Outgoing email configuration

use crate::error::ConfigResult;
use crate::validation::{validate_port_range, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Email configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Delivery backend
    #[serde(default)]
    pub backend: EmailBackend,

    /// Default sender address
    #[serde(default = "default_from")]
    pub default_from: String,
}

/// Email delivery backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmailBackend {
    /// Write outgoing messages to the server log (development default)
    Console,
    /// Deliver through an SMTP relay
    Smtp {
        host: String,
        #[serde(default = "default_smtp_port")]
        port: u16,
        #[serde(default)]
        username: String,
        #[serde(default)]
        password: String,
        #[serde(default = "crate::domains::utils::default_true")]
        use_tls: bool,
    },
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            backend: EmailBackend::Console,
            default_from: default_from(),
        }
    }
}

impl Default for EmailBackend {
    fn default() -> Self {
        EmailBackend::Console
    }
}

impl Validatable for EmailConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.default_from, "default_from", self.domain_name())?;
        self.backend.validate()
    }

    fn domain_name(&self) -> &'static str {
        "email"
    }
}

impl Validatable for EmailBackend {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            EmailBackend::Console => Ok(()),
            EmailBackend::Smtp { host, port, .. } => {
                validate_required_string(host, "host", self.domain_name())?;
                validate_port_range(*port, "port", self.domain_name())?;
                Ok(())
            }
        }
    }

    fn domain_name(&self) -> &'static str {
        "email.backend"
    }
}

// Default value functions
fn default_from() -> String {
    "ShopZone <noreply@shopzone.com>".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.backend, EmailBackend::Console);
        assert_eq!(config.default_from, "ShopZone <noreply@shopzone.com>");
    }

    #[test]
    fn test_email_config_validation() {
        let mut config = EmailConfig::default();
        assert!(config.validate().is_ok());

        config.default_from = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_smtp_backend_validation() {
        let backend = EmailBackend::Smtp {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
            use_tls: true,
        };
        assert!(backend.validate().is_ok());

        let backend = EmailBackend::Smtp {
            host: String::new(),
            port: 587,
            username: String::new(),
            password: String::new(),
            use_tls: true,
        };
        assert!(backend.validate().is_err());
    }

    #[test]
    fn test_smtp_backend_from_yaml() {
        let yaml = "type: smtp\nhost: smtp.example.com\n";
        let backend: EmailBackend = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            backend,
            EmailBackend::Smtp {
                host: "smtp.example.com".to_string(),
                port: 587,
                username: String::new(),
                password: String::new(),
                use_tls: true,
            }
        );
    }
}
