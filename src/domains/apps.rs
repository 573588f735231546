//! Installed application modules

use crate::error::ConfigResult;
use crate::validation::{validate_identifier_list, Validatable};
use serde::{Deserialize, Serialize};

/// Application module configuration
///
/// The declaration order is load-bearing: a later module's templates and
/// static files shadow an earlier module's on name collision. Duplicates
/// are deliberately not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppsConfig {
    /// Ordered module identifiers registered with the framework
    #[serde(default = "default_installed_apps")]
    pub installed_apps: Vec<String>,
}

impl Default for AppsConfig {
    fn default() -> Self {
        Self {
            installed_apps: default_installed_apps(),
        }
    }
}

impl Validatable for AppsConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_identifier_list(&self.installed_apps, "installed_apps", self.domain_name())
    }

    fn domain_name(&self) -> &'static str {
        "apps"
    }
}

// Default value functions
fn default_installed_apps() -> Vec<String> {
    [
        "admin",
        "auth",
        "content_types",
        "sessions",
        "messages",
        "static_files",
        "store",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
