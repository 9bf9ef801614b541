//! Error types for client configuration.
//!
//! This module contains error types used when constructing and validating
//! the client configuration.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use storefront_api::{ConfigError, EndpointUrl};
//!
//! let result = EndpointUrl::new("not-a-url");
//! assert!(matches!(result, Err(ConfigError::InvalidEndpointUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration values. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint environment variable is not set.
    #[error("Missing {var} environment variable. Set it to the absolute URL of the GraphQL endpoint.")]
    MissingEndpointVar {
        /// The name of the expected environment variable.
        var: &'static str,
    },

    /// The endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an absolute URL with scheme (e.g., 'https://demo.saleor.io/graphql/').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_var_names_the_variable() {
        let error = ConfigError::MissingEndpointVar {
            var: "SALEOR_API_URL",
        };
        let message = error.to_string();
        assert!(message.contains("SALEOR_API_URL"));
        assert!(message.contains("environment variable"));
    }

    #[test]
    fn test_invalid_endpoint_url_error_message() {
        let error = ConfigError::InvalidEndpointUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingEndpointVar {
            var: "SALEOR_API_URL",
        };
        let _: &dyn std::error::Error = &error;
    }
}
