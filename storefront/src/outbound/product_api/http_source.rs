//! HTTP adapter for the external product API.
//!
//! The products endpoint is resolved once at construction. Each search
//! serializes the filter into query parameters, omitting `q` for empty text
//! and `category` for the sentinel slug, and maps failures onto the port's
//! error variants. A valid JSON body that is not an array counts as "no
//! results" rather than a decoding failure.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};
use thiserror::Error;

use crate::domain::ports::{ProductFilter, ProductSource, ProductSourceError};
use crate::domain::product::Product;

const PRODUCTS_PATH: &str = "api/products";
const PREVIEW_CHAR_LIMIT: usize = 160;

/// Failure to construct the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductApiBuildError {
    /// The configured base URL cannot host the products path.
    #[error("invalid product API base URL: {message}")]
    Endpoint {
        /// URL resolution failure detail.
        message: String,
    },
    /// The HTTP client could not be built.
    #[error("failed to build product API client: {message}")]
    Client {
        /// Client construction failure detail.
        message: String,
    },
}

impl ProductApiBuildError {
    /// Create an endpoint error with the given message.
    pub fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint {
            message: message.into(),
        }
    }

    /// Create a client error with the given message.
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }
}

/// [`ProductSource`] backed by the product API over HTTP.
pub struct HttpProductSource {
    client: Client,
    endpoint: Url,
}

impl HttpProductSource {
    /// Creates an adapter for the API rooted at `base_url`.
    ///
    /// Any path prefix in `base_url` is kept, so a deployment under
    /// `/shop` resolves the endpoint at `/shop/api/products`.
    ///
    /// No request timeout is configured; call duration is bounded only by
    /// the transport's defaults.
    ///
    /// # Errors
    /// Returns a [`ProductApiBuildError`] when the products path cannot be
    /// resolved against `base_url` or the HTTP client cannot be built.
    pub fn new(mut base_url: Url) -> Result<Self, ProductApiBuildError> {
        // The join is relative so a path prefix in the base URL survives;
        // `Url::join` drops the last segment unless the path ends in a slash.
        if !base_url.path().ends_with('/') {
            let prefixed = format!("{}/", base_url.path());
            base_url.set_path(&prefixed);
        }
        let endpoint = base_url
            .join(PRODUCTS_PATH)
            .map_err(|error| ProductApiBuildError::endpoint(error.to_string()))?;
        let client = Client::builder()
            .build()
            .map_err(|error| ProductApiBuildError::client(error.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductSourceError> {
        let params = query_pairs(filter);
        let mut request = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json");
        if !params.is_empty() {
            request = request.query(&params);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_products(body.as_ref())
    }
}

fn query_pairs(filter: &ProductFilter) -> Vec<(&'static str, &str)> {
    let mut pairs = Vec::new();
    if let Some(query) = filter.query_param() {
        pairs.push(("q", query));
    }
    if let Some(category) = filter.category_param() {
        pairs.push(("category", category));
    }
    pairs
}

fn parse_products(body: &[u8]) -> Result<Vec<Product>, ProductSourceError> {
    let decoded: serde_json::Value = serde_json::from_slice(body).map_err(|error| {
        ProductSourceError::decode(format!("invalid product JSON payload: {error}"))
    })?;
    // Wrapped or error-shaped objects count as no results, not a failure.
    if !decoded.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(decoded)
        .map_err(|error| ProductSourceError::decode(format!("unexpected product shape: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> ProductSourceError {
    ProductSourceError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ProductSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };
    ProductSourceError::status(message)
}

fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let compact = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if compact.chars().count() <= PREVIEW_CHAR_LIMIT {
        return compact;
    }
    let truncated: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
    format!("{truncated}...")
}
