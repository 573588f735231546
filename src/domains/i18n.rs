//! Internationalization configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Internationalization configuration
///
/// The time zone is an opaque identifier consumed by the hosting
/// framework; it is not parsed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// BCP 47-ish language code
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// IANA time zone name
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    /// Whether translation machinery is active
    #[serde(default = "crate::domains::utils::default_true")]
    pub use_i18n: bool,

    /// Whether datetimes are stored timezone-aware
    #[serde(default = "crate::domains::utils::default_true")]
    pub use_tz: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language_code: default_language_code(),
            time_zone: default_time_zone(),
            use_i18n: true,
            use_tz: true,
        }
    }
}

impl Validatable for I18nConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.language_code, "language_code", self.domain_name())?;
        validate_required_string(&self.time_zone, "time_zone", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "i18n"
    }
}

// Default value functions
fn default_language_code() -> String {
    "en-us".to_string()
}

fn default_time_zone() -> String {
    "Asia/Kolkata".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i18n_config_defaults() {
        let config = I18nConfig::default();
        assert_eq!(config.language_code, "en-us");
        assert_eq!(config.time_zone, "Asia/Kolkata");
        assert!(config.use_i18n);
        assert!(config.use_tz);
    }

    #[test]
    fn test_i18n_config_validation() {
        let mut config = I18nConfig::default();
        assert!(config.validate().is_ok());

        config.time_zone = String::new();
        assert!(config.validate().is_err());
    }
}
