//! Domain-owned contract to the external product API.
//!
//! The query controller reaches the backend only through [`ProductSource`],
//! keeping the HTTP adapter swappable for fixtures and mocks. The filter
//! record owns the parameter-omission rules so they hold for every source
//! implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalogue::ALL_CATEGORIES_SLUG;
use crate::domain::product::Product;

/// Filter state one fetch serializes into query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Selected category slug; [`ALL_CATEGORIES_SLUG`] disables the filter.
    pub active_category: String,
    /// Held free-text query; empty means no text search.
    pub query_text: String,
}

impl ProductFilter {
    /// Value for the `q` parameter, or `None` when the query text is empty.
    ///
    /// Omission matters: an empty `q` would ask the backend to match an
    /// empty search term instead of skipping the text filter.
    #[must_use]
    pub fn query_param(&self) -> Option<&str> {
        (!self.query_text.is_empty()).then_some(self.query_text.as_str())
    }

    /// Value for the `category` parameter, or `None` for the sentinel slug.
    #[must_use]
    pub fn category_param(&self) -> Option<&str> {
        (self.active_category != ALL_CATEGORIES_SLUG).then_some(self.active_category.as_str())
    }
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES_SLUG.to_owned(),
            query_text: String::new(),
        }
    }
}

/// Failure reported by a product source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductSourceError {
    /// The request never produced a response.
    #[error("product API transport failed: {message}")]
    Transport {
        /// Transport failure detail.
        message: String,
    },
    /// The API answered with a non-success status.
    #[error("product API rejected the request: {message}")]
    Status {
        /// Status line and a short body preview.
        message: String,
    },
    /// The response body was not valid product JSON.
    #[error("product API payload could not be decoded: {message}")]
    Decode {
        /// Decoder failure detail.
        message: String,
    },
}

impl ProductSourceError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a rejected-status error.
    pub fn status(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
        }
    }

    /// Creates a payload-decoding error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port over the external product search endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches the products matching `filter`.
    ///
    /// # Errors
    /// Returns a [`ProductSourceError`] when the request cannot be sent, is
    /// rejected by the API, or yields an undecodable body.
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductSourceError>;
}

/// Product source that answers every search with a canned list.
#[derive(Debug, Clone, Default)]
pub struct FixtureProductSource {
    products: Vec<Product>,
}

impl FixtureProductSource {
    /// Creates a fixture returning `products` for every search.
    #[must_use]
    pub const fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for FixtureProductSource {
    async fn search(&self, _filter: &ProductFilter) -> Result<Vec<Product>, ProductSourceError> {
        Ok(self.products.clone())
    }
}
