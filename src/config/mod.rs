//! Configuration types for the storefront API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with a storefront GraphQL endpoint.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StorefrontConfig`]: The main configuration struct holding all client settings
//! - [`StorefrontConfigBuilder`]: A builder for constructing [`StorefrontConfig`] instances
//! - [`EndpointUrl`]: A validated endpoint URL newtype
//!
//! Configuration is read once, validated eagerly, and passed explicitly to the
//! client. There is no ambient global state: a missing or malformed endpoint is
//! reported at construction time, before any request can be issued.
//!
//! # Example
//!
//! ```rust
//! use storefront_api::{StorefrontConfig, EndpointUrl};
//!
//! let config = StorefrontConfig::builder()
//!     .endpoint(EndpointUrl::new("https://demo.saleor.io/graphql/").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://demo.saleor.io/graphql/");
//! ```

mod newtypes;

pub use newtypes::EndpointUrl;

use crate::error::ConfigError;

/// The environment variable holding the GraphQL endpoint URL.
pub const ENDPOINT_ENV_VAR: &str = "SALEOR_API_URL";

/// Configuration for the storefront API client.
///
/// This struct holds all configuration needed for client operations: the
/// GraphQL endpoint URL and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use storefront_api::{StorefrontConfig, EndpointUrl};
///
/// let config = StorefrontConfig::builder()
///     .endpoint(EndpointUrl::new("https://demo.saleor.io/graphql/").unwrap())
///     .user_agent_prefix("MyStorefront/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    endpoint: EndpointUrl,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Creates a configuration from the `SALEOR_API_URL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEndpointVar`] if the variable is not set,
    /// or [`ConfigError::InvalidEndpointUrl`] if its value is not an absolute URL.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use storefront_api::StorefrontConfig;
    ///
    /// let config = StorefrontConfig::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(ENDPOINT_ENV_VAR).map_err(|_| ConfigError::MissingEndpointVar {
            var: ENDPOINT_ENV_VAR,
        })?;

        Self::builder().endpoint(EndpointUrl::new(url)?).build()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// The only required field is `endpoint`.
///
/// # Example
///
/// ```rust
/// use storefront_api::{StorefrontConfig, EndpointUrl};
///
/// let config = StorefrontConfig::builder()
///     .endpoint(EndpointUrl::new("https://demo.saleor.io/graphql/").unwrap())
///     .user_agent_prefix("MyStorefront/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        Ok(StorefrontConfig {
            endpoint,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_endpoint() -> EndpointUrl {
        EndpointUrl::new("https://demo.saleor.io/graphql/").unwrap()
    }

    #[test]
    fn test_builder_requires_endpoint() {
        let result = StorefrontConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "endpoint" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StorefrontConfig::builder()
            .endpoint(test_endpoint())
            .build()
            .unwrap();

        assert_eq!(config.endpoint(), &test_endpoint());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_user_agent_prefix() {
        let config = StorefrontConfig::builder()
            .endpoint(test_endpoint())
            .user_agent_prefix("MyStorefront/1.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("MyStorefront/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorefrontConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = StorefrontConfig::builder()
            .endpoint(test_endpoint())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.endpoint(), config.endpoint());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StorefrontConfig"));
    }

    // from_env mutates process environment, so both paths run in one test to
    // avoid ordering races with other tests.
    #[test]
    fn test_from_env_round_trip() {
        std::env::remove_var(ENDPOINT_ENV_VAR);
        let missing = StorefrontConfig::from_env();
        assert!(matches!(
            missing,
            Err(ConfigError::MissingEndpointVar {
                var: "SALEOR_API_URL"
            })
        ));

        std::env::set_var(ENDPOINT_ENV_VAR, "https://demo.saleor.io/graphql/");
        let config = StorefrontConfig::from_env().unwrap();
        assert_eq!(config.endpoint().host_name(), Some("demo.saleor.io"));

        std::env::set_var(ENDPOINT_ENV_VAR, "not-a-url");
        let invalid = StorefrontConfig::from_env();
        assert!(matches!(
            invalid,
            Err(ConfigError::InvalidEndpointUrl { .. })
        ));

        std::env::remove_var(ENDPOINT_ENV_VAR);
    }
}
