//! Configuration validation traits and utilities

use crate::error::{ConfigError, ConfigResult};

/// Trait for validatable configuration
pub trait Validatable {
    /// Validate the configuration
    fn validate(&self) -> ConfigResult<()>;

    /// Get the domain name for error reporting
    fn domain_name(&self) -> &'static str;

    /// Helper to create a domain-specific validation error
    fn validation_error(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::DomainError {
            domain: self.domain_name().to_string(),
            message: message.into(),
        }
    }
}

/// Validate a required string field
pub fn validate_required_string(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}

/// Validate a list of identifiers: the list itself may be empty, but no
/// entry may be the empty string
pub fn validate_identifier_list(values: &[String], field_name: &str, domain: &str) -> ConfigResult<()> {
    for (index, value) in values.iter().enumerate() {
        if value.is_empty() {
            return Err(ConfigError::DomainError {
                domain: domain.to_string(),
                message: format!("{}[{}] cannot be empty", field_name, index),
            });
        }
    }
    Ok(())
}

/// Validate a URL prefix as served by the framework (e.g. "/static/"):
/// must begin and end with a slash
pub fn validate_url_prefix(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    validate_required_string(value, field_name, domain)?;

    if !value.starts_with('/') || !value.ends_with('/') {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!(
                "{} must start and end with '/', got '{}'",
                field_name, value
            ),
        });
    }

    Ok(())
}

/// Validate an absolute URL path (e.g. a redirect target): must begin
/// with a slash
pub fn validate_url_path(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    validate_required_string(value, field_name, domain)?;

    if !value.starts_with('/') {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} must start with '/', got '{}'", field_name, value),
        });
    }

    Ok(())
}

/// Validate a port number
pub fn validate_port_range(port: u16, field_name: &str, domain: &str) -> ConfigResult<()> {
    if port == 0 {
        return Err(ConfigError::DomainError {
            domain: domain.to_string(),
            message: format!("{} cannot be 0", field_name),
        });
    }

    // Port 1-1023 are typically reserved for system services
    if port <= 1023 {
        log::warn!("{} port {} is in the reserved range (1-1023)", field_name, port);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert!(validate_required_string("value", "field", "domain").is_ok());
        assert!(validate_required_string("", "field", "domain").is_err());
    }

    #[test]
    fn test_validate_identifier_list() {
        let ok = vec!["security".to_string(), "session".to_string()];
        assert!(validate_identifier_list(&ok, "chain", "middleware").is_ok());
        assert!(validate_identifier_list(&[], "chain", "middleware").is_ok());

        let bad = vec!["security".to_string(), String::new()];
        let err = validate_identifier_list(&bad, "chain", "middleware").unwrap_err();
        assert!(err.to_string().contains("chain[1]"));
    }

    #[test]
    fn test_validate_url_prefix() {
        assert!(validate_url_prefix("/static/", "static_url", "static_files").is_ok());
        assert!(validate_url_prefix("/", "static_url", "static_files").is_ok());
        assert!(validate_url_prefix("static/", "static_url", "static_files").is_err());
        assert!(validate_url_prefix("/static", "static_url", "static_files").is_err());
        assert!(validate_url_prefix("", "static_url", "static_files").is_err());
    }

    #[test]
    fn test_validate_url_path() {
        assert!(validate_url_path("/accounts/login/", "login_url", "auth").is_ok());
        assert!(validate_url_path("/", "login_url", "auth").is_ok());
        assert!(validate_url_path("accounts/login/", "login_url", "auth").is_err());
    }

    #[test]
    fn test_validate_port_range() {
        assert!(validate_port_range(5432, "port", "database").is_ok());
        assert!(validate_port_range(0, "port", "database").is_err());
    }
}
