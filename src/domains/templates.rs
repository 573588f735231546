//! Template engine configuration

use crate::error::ConfigResult;
use crate::validation::{validate_identifier_list, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Template engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Project-level template directories, searched before per-app ones.
    /// Relative entries are resolved against the base directory by the
    /// loader.
    #[serde(default = "default_dirs")]
    pub dirs: Vec<PathBuf>,

    /// Whether per-app template directories are searched
    #[serde(default = "crate::domains::utils::default_true")]
    pub app_dirs: bool,

    /// Ordered context processor identifiers, invoked per request to
    /// inject template variables. On key collision the later processor
    /// wins, so the order is load-bearing.
    #[serde(default = "default_context_processors")]
    pub context_processors: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dirs: default_dirs(),
            app_dirs: true,
            context_processors: default_context_processors(),
        }
    }
}

impl Validatable for TemplatesConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_identifier_list(
            &self.context_processors,
            "context_processors",
            self.domain_name(),
        )?;

        for (index, dir) in self.dirs.iter().enumerate() {
            if dir.as_os_str().is_empty() {
                return Err(self.validation_error(format!("dirs[{}] cannot be empty", index)));
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "templates"
    }
}

// Default value functions
fn default_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("templates")]
}

fn default_context_processors() -> Vec<String> {
    [
        "debug",
        "request",
        "auth",
        "messages",
        "store.cart_count",
        "store.wishlist_count",
        "store.categories",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
