//! Domain-specific configuration modules

pub mod apps;
pub mod auth;
pub mod database;
pub mod email;
pub mod i18n;
pub mod logging;
pub mod middleware;
pub mod security;
pub mod static_files;
pub mod templates;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// The immutable configuration snapshot for the ShopZone server,
/// combining all domains. Constructed once at process start and shared
/// by reference; no field is mutated afterwards, so concurrent readers
/// need no synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShopZoneConfig {
    /// Signing key, debug mode and allowed hosts
    #[serde(default)]
    pub security: security::SecurityConfig,

    /// Installed application modules (ordered)
    #[serde(default)]
    pub apps: apps::AppsConfig,

    /// Middleware pipeline (ordered)
    #[serde(default)]
    pub middleware: middleware::MiddlewareConfig,

    /// Template engine configuration
    #[serde(default)]
    pub templates: templates::TemplatesConfig,

    /// Database engine configuration
    #[serde(default)]
    pub database: database::DatabaseConfig,

    /// Static and media file serving
    #[serde(default)]
    pub static_files: static_files::StaticFilesConfig,

    /// Authentication redirects and password validators
    #[serde(default)]
    pub auth: auth::AuthConfig,

    /// Outgoing email
    #[serde(default)]
    pub email: email::EmailConfig,

    /// Internationalization
    #[serde(default)]
    pub i18n: i18n::I18nConfig,

    /// Server logging
    #[serde(default)]
    pub logging: logging::LoggingConfig,
}

impl ShopZoneConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.security.validate()?;
        self.apps.validate()?;
        self.middleware.validate()?;
        self.templates.validate()?;
        self.database.validate()?;
        self.static_files.validate()?;
        self.auth.validate()?;
        self.email.validate()?;
        self.i18n.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let config = ShopZoneConfig::default();
        serde_yaml::to_string(&config)
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}
