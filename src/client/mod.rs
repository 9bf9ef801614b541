//! GraphQL request execution.
//!
//! This module provides the [`GraphqlClient`] for executing typed GraphQL
//! operations against a configured storefront endpoint, along with the
//! request option and error types it uses.

mod errors;
mod graphql;
mod operation;
mod options;

pub use errors::{ClientError, GraphqlErrorEntry, GraphqlResponseError, HttpResponseError};
pub use graphql::{GraphqlClient, SDK_VERSION, UPLOAD_VARIABLE_PATH};
pub use operation::Operation;
pub use options::{CacheMode, FileUpload, RequestOptions};
