//! Authentication configuration: redirect targets and password validators

use crate::error::ConfigResult;
use crate::validation::{validate_url_path, Validatable};
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Login entry point unauthenticated requests are redirected to
    #[serde(default = "default_login_url")]
    pub login_url: String,

    /// Target after a successful login
    #[serde(default = "default_redirect_url")]
    pub login_redirect_url: String,

    /// Target after logout
    #[serde(default = "default_redirect_url")]
    pub logout_redirect_url: String,

    /// Ordered password validator chain. A candidate password must pass
    /// every validator; the credential check itself is performed by the
    /// auth module, not here.
    #[serde(default = "default_password_validators")]
    pub password_validators: Vec<PasswordValidator>,
}

/// Password validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum PasswordValidator {
    /// Rejects passwords too similar to the user's own attributes
    UserAttributeSimilarity,
    /// Rejects passwords shorter than `min_length`
    MinimumLength {
        #[serde(default = "default_min_length")]
        min_length: usize,
    },
    /// Rejects passwords found in the common-password list
    CommonPassword,
    /// Rejects passwords consisting only of digits
    NumericOnly,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            login_redirect_url: default_redirect_url(),
            logout_redirect_url: default_redirect_url(),
            password_validators: default_password_validators(),
        }
    }
}

impl Validatable for AuthConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_url_path(&self.login_url, "login_url", self.domain_name())?;
        validate_url_path(&self.login_redirect_url, "login_redirect_url", self.domain_name())?;
        validate_url_path(
            &self.logout_redirect_url,
            "logout_redirect_url",
            self.domain_name(),
        )?;

        for validator in &self.password_validators {
            validator.validate()?;
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "auth"
    }
}

impl Validatable for PasswordValidator {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            PasswordValidator::MinimumLength { min_length } => {
                if *min_length == 0 {
                    return Err(self.validation_error("min_length must be greater than 0"));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn domain_name(&self) -> &'static str {
        "auth.password_validator"
    }
}

// Default value functions
fn default_login_url() -> String {
    "/accounts/login/".to_string()
}

fn default_redirect_url() -> String {
    "/".to_string()
}

fn default_min_length() -> usize {
    8
}

fn default_password_validators() -> Vec<PasswordValidator> {
    vec![
        PasswordValidator::UserAttributeSimilarity,
        PasswordValidator::MinimumLength {
            min_length: default_min_length(),
        },
        PasswordValidator::CommonPassword,
        PasswordValidator::NumericOnly,
    ]
}
