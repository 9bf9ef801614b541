//! Typed GraphQL operation documents.
//!
//! An [`Operation`] pairs a query or mutation document with its expected
//! result and variable types at compile time. At runtime it is only a string;
//! the type parameters exist so that [`execute`](crate::GraphqlClient::execute)
//! can deserialize the `data` payload into the right shape and accept only
//! matching variables.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// A GraphQL query or mutation document paired with its result and variable types.
///
/// The type parameters are compile-time only: `R` is the result shape the
/// `data` payload deserializes into, and `V` is the variable shape the
/// operation accepts (`()` for operations that declare no variables).
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use storefront_api::Operation;
///
/// #[derive(Deserialize)]
/// struct ProductData {
///     product: Option<Product>,
/// }
///
/// #[derive(Deserialize)]
/// struct Product {
///     name: String,
/// }
///
/// #[derive(Serialize)]
/// struct ProductVariables {
///     id: String,
/// }
///
/// const PRODUCT_QUERY: &str =
///     "query Product($id: ID!) { product(id: $id) { name } }";
///
/// let operation: Operation<ProductData, ProductVariables> = Operation::new(PRODUCT_QUERY);
/// assert_eq!(operation.query(), PRODUCT_QUERY);
/// ```
pub struct Operation<R, V = ()> {
    query: Cow<'static, str>,
    _marker: PhantomData<fn(V) -> R>,
}

impl<R, V> Operation<R, V> {
    /// Creates an operation from a query or mutation document.
    #[must_use]
    pub fn new(query: impl Into<Cow<'static, str>>) -> Self {
        Self {
            query: query.into(),
            _marker: PhantomData,
        }
    }

    /// Returns the operation document as a string slice.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

// Manual impls to avoid spurious `R: Clone`/`R: Debug` bounds from derive.
impl<R, V> Clone for Operation<R, V> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R, V> fmt::Debug for Operation<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("query", &self.query)
            .finish()
    }
}

impl<R, V> From<&'static str> for Operation<R, V> {
    fn from(query: &'static str) -> Self {
        Self::new(query)
    }
}
