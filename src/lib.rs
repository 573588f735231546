//! Domain-driven configuration for the ShopZone storefront server
//!
//! This crate produces one immutable, validated configuration snapshot at
//! process start, from built-in defaults, an optional YAML settings file,
//! and environment variable overrides. Filesystem paths are resolved
//! against an explicitly injected base directory, never the working
//! directory. The snapshot is constructed once and passed by reference to
//! every component that needs it.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    apps::AppsConfig, auth::AuthConfig, database::DatabaseConfig, email::EmailConfig,
    i18n::I18nConfig, logging::LoggingConfig, middleware::MiddlewareConfig,
    security::SecurityConfig, static_files::StaticFilesConfig, templates::TemplatesConfig,
    ShopZoneConfig,
};
