//! Error types for GraphQL client operations.
//!
//! This module contains the closed set of errors a request can surface:
//! transport-level failures, non-2xx HTTP responses, GraphQL error envelopes,
//! and request construction failures.
//!
//! # Error Handling
//!
//! Nothing is caught or retried internally; every error propagates directly to
//! the caller as a [`ClientError`] variant carrying structured detail that can
//! be inspected programmatically, not just displayed.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_api::{ClientError, GraphqlClient};
//!
//! match client.execute(&operation, options).await {
//!     Ok(data) => println!("Data: {data:?}"),
//!     Err(ClientError::Http(e)) => {
//!         println!("HTTP {}: {}", e.code, e.body);
//!     }
//!     Err(ClientError::Graphql(e)) => {
//!         for entry in &e.errors {
//!             println!("GraphQL error: {}", entry.message);
//!         }
//!     }
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when the transport reports a non-2xx status.
///
/// Carries the status code, the canonical status text, and the best-effort raw
/// response body (empty string if the body could not be read).
///
/// # Example
///
/// ```rust
/// use storefront_api::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     status_text: "Not Found".to_string(),
///     body: "missing".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "HTTP error 404: Not Found\nmissing");
/// ```
#[derive(Debug, Error)]
#[error("HTTP error {code}: {status_text}\n{body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The canonical status text (e.g., "Not Found").
    pub status_text: String,
    /// Best-effort raw response body; empty if the body could not be read.
    pub body: String,
}

/// A single error record from a GraphQL error envelope.
///
/// Unknown sibling fields (`locations`, `path`, `extensions`) are ignored;
/// only the `message` is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorEntry {
    /// The human-readable error message.
    pub message: String,
}

/// Error returned when the response envelope contains an `errors` list.
///
/// Carries the full ordered error list. The display form joins all messages
/// with newlines, in their original order.
///
/// # Example
///
/// ```rust
/// use storefront_api::{GraphqlErrorEntry, GraphqlResponseError};
///
/// let error = GraphqlResponseError {
///     errors: vec![
///         GraphqlErrorEntry { message: "first".to_string() },
///         GraphqlErrorEntry { message: "second".to_string() },
///     ],
/// };
///
/// assert_eq!(error.to_string(), "first\nsecond");
/// ```
#[derive(Debug, Error)]
#[error("{}", .errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("\n"))]
pub struct GraphqlResponseError {
    /// The ordered error records from the response envelope.
    pub errors: Vec<GraphqlErrorEntry>,
}

/// Unified error type for all GraphQL client operations.
///
/// This enum provides a single closed error set for request execution, making
/// it easy to handle failures exhaustively at API boundaries.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_api::ClientError;
///
/// match client.execute(&operation, options).await {
///     Ok(data) => { /* handle success */ }
///     Err(ClientError::EmptyQuery) => { /* operation had no document */ }
///     Err(ClientError::Http(e)) => { /* non-2xx response */ }
///     Err(ClientError::Graphql(e)) => { /* errors envelope */ }
///     Err(ClientError::Json(e)) => { /* body was not a valid envelope */ }
///     Err(ClientError::Upload(e)) => { /* invalid file metadata */ }
///     Err(ClientError::Network(e)) => { /* transport failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// The operation serialized to an empty query document.
    ///
    /// Raised before any network activity.
    #[error("GraphQL operation produced an empty query document.")]
    EmptyQuery,

    /// Request payload serialization or response envelope decoding failed.
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A non-2xx HTTP response was received.
    #[error(transparent)]
    Http(#[from] HttpResponseError),

    /// The response envelope contained an `errors` list.
    #[error(transparent)]
    Graphql(#[from] GraphqlResponseError),

    /// The file upload metadata was invalid.
    #[error("Invalid file upload: {0}")]
    Upload(String),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
