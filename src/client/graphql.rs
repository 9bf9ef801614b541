//! GraphQL client implementation for storefront APIs.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! operations (standard JSON and multipart file-upload) against a configured
//! endpoint.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::errors::{ClientError, GraphqlErrorEntry, GraphqlResponseError, HttpResponseError};
use crate::client::operation::Operation;
use crate::client::options::{FileUpload, RequestOptions};
use crate::config::StorefrontConfig;

/// Client library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The fixed variable path the multipart `map` part binds form part `"0"` to.
///
/// Only a single upload target per call is supported, always at this path.
/// Multiple files and caller-chosen variable paths are not implemented.
pub const UPLOAD_VARIABLE_PATH: &str = "variables.input.image";

/// GraphQL client for a storefront API endpoint.
///
/// Provides methods ([`execute`](Self::execute),
/// [`execute_multipart`](Self::execute_multipart)) for executing GraphQL
/// operations with variable support, custom headers, and pass-through cache
/// hints. Each call issues exactly one request; there are no retries and no
/// caching beyond the hints forwarded to the transport.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async
/// tasks. Concurrent calls are fully independent.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_api::{GraphqlClient, Operation, RequestOptions, StorefrontConfig};
/// use serde_json::{json, Value};
///
/// let config = StorefrontConfig::from_env()?;
/// let client = GraphqlClient::new(&config);
///
/// // Simple query
/// let operation: Operation<Value> = Operation::new("query { shop { name } }");
/// let data = client.execute(&operation, RequestOptions::new()).await?;
///
/// // Query with variables
/// let operation: Operation<Value, Value> =
///     Operation::new("query Product($id: ID!) { product(id: $id) { name } }");
/// let data = client
///     .execute(
///         &operation,
///         RequestOptions::new().variables(json!({ "id": "UHJvZHVjdDox" })),
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The configured endpoint URL.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

/// The top-level response envelope, discriminated by the presence of `errors`.
///
/// A failure envelope is tried first so a body carrying both keys is treated
/// as a failure, matching the endpoint contract that the two shapes are
/// mutually exclusive.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GraphqlResponse<T> {
    Failure { errors: Vec<GraphqlErrorEntry> },
    Success { data: T },
}

/// JSON body for a standard (non-multipart) request.
#[derive(Serialize)]
struct RequestBody<'a, V> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a V>,
}

impl GraphqlClient {
    /// Creates a new GraphQL client for the configured endpoint.
    ///
    /// The configuration is validated at construction; a client can only exist
    /// with a well-formed endpoint URL, so no per-call configuration check is
    /// needed.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_api::{EndpointUrl, GraphqlClient, StorefrontConfig};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .endpoint(EndpointUrl::new("https://demo.saleor.io/graphql/").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GraphqlClient::new(&config);
    /// assert_eq!(client.endpoint(), "https://demo.saleor.io/graphql/");
    /// ```
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storefront API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_str().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a GraphQL operation against the endpoint.
    ///
    /// Serializes `{"query": ..., "variables"?: ...}` as a JSON body and issues
    /// a single POST with `Content-Type: application/json`. Caller headers from
    /// `options` take precedence over the client's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`]:
    /// - [`EmptyQuery`](ClientError::EmptyQuery) if the operation document is
    ///   empty (raised before any network activity)
    /// - [`Network`](ClientError::Network) for transport failures
    /// - [`Http`](ClientError::Http) for non-2xx responses, carrying status,
    ///   status text, and the best-effort body
    /// - [`Graphql`](ClientError::Graphql) when the envelope carries an
    ///   `errors` list
    /// - [`Json`](ClientError::Json) when the body is not a valid envelope
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use storefront_api::{Operation, RequestOptions};
    /// use serde_json::Value;
    ///
    /// let operation: Operation<Value> = Operation::new("query { shop { name } }");
    /// let data = client.execute(&operation, RequestOptions::new()).await?;
    /// println!("Shop: {}", data["shop"]["name"]);
    /// ```
    pub async fn execute<R, V>(
        &self,
        operation: &Operation<R, V>,
        options: RequestOptions<V>,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
        V: Serialize,
    {
        let query = operation.query();
        if query.is_empty() {
            return Err(ClientError::EmptyQuery);
        }

        let body = serde_json::to_string(&RequestBody {
            query,
            variables: options.variables.as_ref(),
        })?;

        // Merge headers: defaults, then content type and cache hints, then
        // caller headers (caller wins).
        let mut headers = self.default_headers.clone();
        headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
        if let Some(cache_control) = options.cache_control() {
            headers.insert("Cache-Control".to_string(), cache_control);
        }
        for (key, value) in &options.headers {
            headers.insert(key.clone(), value.clone());
        }

        tracing::debug!("Executing GraphQL operation against {}", self.endpoint);

        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body).send().await?;
        Self::handle_response(res).await
    }

    /// Executes a GraphQL operation with a single file upload.
    ///
    /// Constructs a multipart form per the GraphQL multipart request
    /// convention with three parts: `operations` (the JSON-encoded
    /// `{"query", "variables"}` payload, defaulting variables to `{}`), `map`
    /// (binding form part `"0"` to the fixed path
    /// [`UPLOAD_VARIABLE_PATH`]), and `"0"` (the raw file). The
    /// `Content-Type` header is left to the transport so it can set the
    /// multipart boundary; any caller-supplied `Content-Type` is dropped,
    /// while all other caller headers are merged in.
    ///
    /// # Errors
    ///
    /// Same contract as [`execute`](Self::execute), plus
    /// [`Upload`](ClientError::Upload) if the file's declared MIME type is
    /// invalid.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use storefront_api::{FileUpload, Operation, RequestOptions};
    /// use serde_json::{json, Value};
    ///
    /// let operation: Operation<Value, Value> = Operation::new(
    ///     "mutation Update($input: ProductInput!) { productUpdate(input: $input) { product { id } } }",
    /// );
    /// let file = FileUpload::new("photo.png", "image/png", bytes);
    /// let data = client
    ///     .execute_multipart(
    ///         &operation,
    ///         file,
    ///         RequestOptions::new().variables(json!({ "input": { "name": "Photo" } })),
    ///     )
    ///     .await?;
    /// ```
    pub async fn execute_multipart<R, V>(
        &self,
        operation: &Operation<R, V>,
        file: FileUpload,
        options: RequestOptions<V>,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
        V: Serialize,
    {
        let query = operation.query();
        if query.is_empty() {
            return Err(ClientError::EmptyQuery);
        }

        let variables = match options.variables.as_ref() {
            Some(variables) => serde_json::to_value(variables)?,
            None => serde_json::json!({}),
        };
        let operations = serde_json::json!({
            "query": query,
            "variables": variables,
        })
        .to_string();
        let map = serde_json::json!({ "0": [UPLOAD_VARIABLE_PATH] }).to_string();

        let (file_name, content_type, bytes) = file.into_parts();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|e| ClientError::Upload(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("operations", operations)
            .text("map", map)
            .part("0", part);

        // Merge headers, excluding Content-Type so the transport can set the
        // multipart boundary itself.
        let mut headers = self.default_headers.clone();
        if let Some(cache_control) = options.cache_control() {
            headers.insert("Cache-Control".to_string(), cache_control);
        }
        for (key, value) in &options.headers {
            if key.eq_ignore_ascii_case("content-type") {
                continue;
            }
            headers.insert(key.clone(), value.clone());
        }

        tracing::debug!(
            "Executing multipart GraphQL operation against {}",
            self.endpoint
        );

        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.multipart(form).send().await?;
        Self::handle_response(res).await
    }

    /// Shared response contract for both entry points.
    ///
    /// Non-2xx statuses become [`HttpResponseError`] with a best-effort body
    /// read; 2xx bodies are decoded as the response envelope and discriminated
    /// into data or an error list.
    async fn handle_response<R>(res: reqwest::Response) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(HttpResponseError {
                code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            }
            .into());
        }

        let text = res.text().await?;
        match serde_json::from_str::<GraphqlResponse<R>>(&text)? {
            GraphqlResponse::Failure { errors } => Err(GraphqlResponseError { errors }.into()),
            GraphqlResponse::Success { data } => Ok(data),
        }
    }
}
