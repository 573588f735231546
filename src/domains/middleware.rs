//! Middleware chain configuration

use crate::error::ConfigResult;
use crate::validation::{validate_identifier_list, Validatable};
use serde::{Deserialize, Serialize};

/// Middleware identifier that must run before session handling
const SECURITY_MIDDLEWARE: &str = "security";
const SESSION_MIDDLEWARE: &str = "session";

/// Middleware pipeline configuration
///
/// The chain is executed in declaration order on the way in and in
/// reverse on the way out; the order must be preserved exactly as
/// declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiddlewareConfig {
    /// Ordered middleware identifiers
    #[serde(default = "default_chain")]
    pub chain: Vec<String>,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            chain: default_chain(),
        }
    }
}

impl Validatable for MiddlewareConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_identifier_list(&self.chain, "chain", self.domain_name())?;

        // Session cookies must not be issued before security headers are
        // applied
        let security = self.chain.iter().position(|m| m == SECURITY_MIDDLEWARE);
        let session = self.chain.iter().position(|m| m == SESSION_MIDDLEWARE);
        if let (Some(security), Some(session)) = (security, session) {
            if security > session {
                return Err(self.validation_error(format!(
                    "'{}' middleware must precede '{}' in the chain",
                    SECURITY_MIDDLEWARE, SESSION_MIDDLEWARE
                )));
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "middleware"
    }
}

// Default value functions
fn default_chain() -> Vec<String> {
    [
        "security",
        "session",
        "common",
        "csrf",
        "authentication",
        "message",
        "clickjacking",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
