//! Per-request options: variables, extra headers, and freshness hints.

use std::collections::HashMap;

/// A pass-through cache directive for the transport layer.
///
/// The client does not interpret these values; they are rendered as
/// `Cache-Control` request directives for whatever caching layer sits between
/// the client and the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// Bypass any cache entirely (`no-store`).
    NoStore,
    /// Revalidate with the origin before using a cached response (`no-cache`).
    NoCache,
    /// Prefer a cached response even if stale (`only-if-cached`).
    ForceCache,
}

impl CacheMode {
    /// Returns the `Cache-Control` directive for this mode.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::NoStore => "no-store",
            Self::NoCache => "no-cache",
            Self::ForceCache => "only-if-cached",
        }
    }
}

/// Options for a single GraphQL request.
///
/// All fields are optional. Caller-supplied headers take precedence over the
/// client's defaults; `cache` and `revalidate` are opaque freshness hints
/// passed through to the transport as `Cache-Control` directives.
///
/// # Example
///
/// ```rust
/// use storefront_api::{CacheMode, RequestOptions};
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .variables(json!({ "first": 12 }))
///     .header("Accept-Language", "en-US")
///     .cache(CacheMode::NoStore)
///     .revalidate(60);
/// ```
#[derive(Debug, Clone)]
pub struct RequestOptions<V = ()> {
    pub(crate) variables: Option<V>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) cache: Option<CacheMode>,
    pub(crate) revalidate: Option<u64>,
}

impl<V> Default for RequestOptions<V> {
    fn default() -> Self {
        Self {
            variables: None,
            headers: HashMap::new(),
            cache: None,
            revalidate: None,
        }
    }
}

impl<V> RequestOptions<V> {
    /// Creates empty request options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds variables to the operation.
    ///
    /// Required for operations whose variable type is non-empty; pointless
    /// (but harmless) otherwise.
    #[must_use]
    pub fn variables(mut self, variables: V) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Adds an extra request header.
    ///
    /// Caller headers take precedence over the client's default headers.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the pass-through cache directive.
    #[must_use]
    pub const fn cache(mut self, mode: CacheMode) -> Self {
        self.cache = Some(mode);
        self
    }

    /// Sets the pass-through freshness hint, in seconds.
    ///
    /// Rendered as a `Cache-Control: max-age` directive.
    #[must_use]
    pub const fn revalidate(mut self, seconds: u64) -> Self {
        self.revalidate = Some(seconds);
        self
    }

    /// Renders the cache hints as a `Cache-Control` header value, if any.
    pub(crate) fn cache_control(&self) -> Option<String> {
        let mut directives = Vec::new();
        if let Some(mode) = self.cache {
            directives.push(mode.as_directive().to_string());
        }
        if let Some(seconds) = self.revalidate {
            directives.push(format!("max-age={seconds}"));
        }
        if directives.is_empty() {
            None
        } else {
            Some(directives.join(", "))
        }
    }
}

/// A single binary payload for a multipart upload request.
///
/// # Example
///
/// ```rust
/// use storefront_api::FileUpload;
///
/// let file = FileUpload::new("logo.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]);
/// assert_eq!(file.file_name(), "logo.png");
/// ```
#[derive(Debug, Clone)]
pub struct FileUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates a file upload from a name, MIME type, and raw contents.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Returns the file name sent with the form part.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the declared MIME type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn into_parts(self) -> (String, String, Vec<u8>) {
        (self.file_name, self.content_type, self.bytes)
    }
}
