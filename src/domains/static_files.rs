//! Static and media file serving configuration

use crate::error::ConfigResult;
use crate::validation::{validate_url_prefix, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static and media file configuration
///
/// Relative paths are resolved against the base directory by the loader.
/// None of the directories is created or checked for existence here; that
/// happens at deploy time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// URL prefix under which static assets are served
    #[serde(default = "default_static_url")]
    pub static_url: String,

    /// Input directories holding static assets
    #[serde(default = "default_staticfiles_dirs")]
    pub staticfiles_dirs: Vec<PathBuf>,

    /// Output directory collected assets are written to
    #[serde(default = "default_static_root")]
    pub static_root: PathBuf,

    /// URL prefix under which user uploads are served
    #[serde(default = "default_media_url")]
    pub media_url: String,

    /// Root directory for user-uploaded content
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            static_url: default_static_url(),
            staticfiles_dirs: default_staticfiles_dirs(),
            static_root: default_static_root(),
            media_url: default_media_url(),
            media_root: default_media_root(),
        }
    }
}

impl Validatable for StaticFilesConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url_prefix(&self.static_url, "static_url", self.domain_name())?;
        validate_url_prefix(&self.media_url, "media_url", self.domain_name())?;

        // Equal prefixes would make one mount shadow the other
        if self.static_url == self.media_url {
            return Err(self.validation_error("static_url and media_url cannot be equal"));
        }

        if self.static_root.as_os_str().is_empty() {
            return Err(self.validation_error("static_root cannot be empty"));
        }
        if self.media_root.as_os_str().is_empty() {
            return Err(self.validation_error("media_root cannot be empty"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "static_files"
    }
}

// Default value functions
fn default_static_url() -> String {
    "/static/".to_string()
}

fn default_staticfiles_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("static")]
}

fn default_static_root() -> PathBuf {
    PathBuf::from("staticfiles")
}

fn default_media_url() -> String {
    "/media/".to_string()
}

fn default_media_root() -> PathBuf {
    PathBuf::from("media")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_files_config_defaults() {
        let config = StaticFilesConfig::default();
        assert_eq!(config.static_url, "/static/");
        assert_eq!(config.media_url, "/media/");
        assert_eq!(config.staticfiles_dirs, vec![PathBuf::from("static")]);
        assert_eq!(config.static_root, PathBuf::from("staticfiles"));
        assert_eq!(config.media_root, PathBuf::from("media"));
    }

    #[test]
    fn test_static_files_config_validation() {
        let mut config = StaticFilesConfig::default();
        assert!(config.validate().is_ok());

        config.static_url = "static/".to_string();
        assert!(config.validate().is_err());

        config = StaticFilesConfig::default();
        config.media_url = config.static_url.clone();
        assert!(config.validate().is_err());

        config = StaticFilesConfig::default();
        config.media_root = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
