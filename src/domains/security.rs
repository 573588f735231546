//! Security configuration: signing key, debug mode, allowed hosts

use crate::error::ConfigResult;
use crate::validation::{validate_identifier_list, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Development placeholder signing key. Deployments are expected to
/// override it through the `SECRET_KEY` environment variable.
pub const INSECURE_DEV_SECRET_KEY: &str =
    "shopzone-insecure-dev-key-change-in-production-abc123xyz";

/// Security configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Cryptographic signing key for sessions and tokens
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Whether the server runs with verbose error pages enabled.
    /// The `DEBUG` environment override is a strict comparison against
    /// the literal `"True"`; every other value resolves to `false`.
    #[serde(default = "crate::domains::utils::default_true")]
    pub debug: bool,

    /// Host/domain names this server may serve
    #[serde(default = "default_allowed_hosts")]
    pub allowed_hosts: Vec<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            debug: true,
            allowed_hosts: default_allowed_hosts(),
        }
    }
}

impl Validatable for SecurityConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.secret_key, "secret_key", self.domain_name())?;
        validate_identifier_list(&self.allowed_hosts, "allowed_hosts", self.domain_name())?;

        // Legal but suspicious in a non-debug deployment; enforcement is
        // the deployment's responsibility
        if !self.debug {
            if self.secret_key == INSECURE_DEV_SECRET_KEY {
                log::warn!("secret_key is the development placeholder while debug is off");
            }
            if self.allowed_hosts.is_empty() {
                log::warn!("allowed_hosts is empty while debug is off; no host will match");
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "security"
    }
}

// Default value functions
fn default_secret_key() -> String {
    INSECURE_DEV_SECRET_KEY.to_string()
}

fn default_allowed_hosts() -> Vec<String> {
    vec![
        "localhost".to_string(),
        "127.0.0.1".to_string(),
        "*".to_string(),
    ]
}
