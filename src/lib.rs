//! # Storefront API Rust Client
//!
//! A Rust client for Saleor-style storefront GraphQL APIs, providing typed
//! operation execution (standard JSON and multipart file-upload) against a
//! single configured endpoint, plus currency-formatting helpers for
//! storefront prices.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - A validated [`EndpointUrl`] newtype, readable from the `SALEOR_API_URL`
//!   environment variable
//! - [`GraphqlClient`] for executing typed [`Operation`]s with variables,
//!   extra headers, and pass-through cache hints
//! - Single-file multipart uploads per the GraphQL multipart request convention
//! - A closed [`ClientError`] taxonomy separating HTTP-level and
//!   GraphQL-level failures
//! - Currency formatting helpers in [`money`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_api::{GraphqlClient, Operation, RequestOptions, StorefrontConfig};
//! use serde_json::Value;
//!
//! // Configuration is read once and passed explicitly; a missing endpoint
//! // fails here, before any request can be issued.
//! let config = StorefrontConfig::from_env()?;
//! let client = GraphqlClient::new(&config);
//!
//! let operation: Operation<Value> = Operation::new("query { shop { name } }");
//! let data = client.execute(&operation, RequestOptions::new()).await?;
//! println!("Shop: {}", data["shop"]["name"]);
//! ```
//!
//! ## Typed Operations
//!
//! An [`Operation`] pairs a document with its result and variable types at
//! compile time, so `execute` returns the right shape directly:
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use storefront_api::{Operation, RequestOptions};
//!
//! #[derive(Deserialize)]
//! struct ProductData { product: Option<Product> }
//!
//! #[derive(Deserialize)]
//! struct Product { name: String }
//!
//! #[derive(Serialize)]
//! struct ProductVariables { id: String }
//!
//! let operation: Operation<ProductData, ProductVariables> =
//!     Operation::new("query Product($id: ID!) { product(id: $id) { name } }");
//!
//! let data = client
//!     .execute(
//!         &operation,
//!         RequestOptions::new().variables(ProductVariables { id: "UHJvZHVjdDox".into() }),
//!     )
//!     .await?;
//! ```
//!
//! ## File Uploads
//!
//! ```rust,ignore
//! use storefront_api::{FileUpload, Operation, RequestOptions};
//! use serde_json::{json, Value};
//!
//! let operation: Operation<Value, Value> = Operation::new(
//!     "mutation Update($input: ProductInput!) { productUpdate(input: $input) { product { id } } }",
//! );
//! let file = FileUpload::new("photo.png", "image/png", bytes);
//! let data = client
//!     .execute_multipart(&operation, file, RequestOptions::new().variables(json!({ "input": {} })))
//!     .await?;
//! ```
//!
//! Note: uploads bind exactly one file to the fixed variable path
//! `variables.input.image`; multiple files and caller-chosen paths are not
//! supported.
//!
//! ## Error Handling
//!
//! Every failure surfaces as a [`ClientError`] variant with structured detail:
//! [`HttpResponseError`] for non-2xx responses (status code, status text, raw
//! body) and [`GraphqlResponseError`] for `errors` envelopes (the full ordered
//! error list). Nothing is caught or retried internally.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: The endpoint is validated on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One request per call**: No retries, no caching beyond pass-through hints

pub mod client;
pub mod config;
pub mod error;
pub mod money;

// Re-export public types at crate root for convenience
pub use client::{
    CacheMode, ClientError, FileUpload, GraphqlClient, GraphqlErrorEntry, GraphqlResponseError,
    HttpResponseError, Operation, RequestOptions, SDK_VERSION, UPLOAD_VARIABLE_PATH,
};
pub use config::{EndpointUrl, StorefrontConfig, StorefrontConfigBuilder, ENDPOINT_ENV_VAR};
pub use error::ConfigError;
pub use money::{format_money, format_money_range, Money, MoneyRange};
