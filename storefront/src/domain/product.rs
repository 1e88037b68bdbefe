//! Product records as served by the product API.
//!
//! Products are transient: every resolved fetch replaces the whole list, so
//! nothing here is cached, merged, or deduplicated. The record mirrors the
//! wire shape; presentation fallbacks for the optional fields live in the
//! accessors rather than in the stored data.

use serde::Deserialize;

/// Description shown when the API omits one for a product.
pub const DESCRIPTION_PLACEHOLDER: &str = "Premium selection";

/// Rating assumed when the API omits one for a product.
pub const DEFAULT_RATING: f64 = 4.5;

/// One product in the grid, keyed by its API identifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// The backend serves Mongo-style documents, so accept `_id` too.
    #[serde(alias = "_id")]
    id: String,
    title: String,
    price: f64,
    description: Option<String>,
    rating: Option<f64>,
    image: Option<String>,
}

impl Product {
    /// Creates a product with the required fields only.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: None,
            rating: None,
            image: None,
        }
    }

    /// Attaches a description, replacing the placeholder fallback.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a rating, replacing the default fallback.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attaches an image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Unique identifier within one result set; the rendering key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Product title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw numeric price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Price formatted to two decimals for display, e.g. `120` → `"120.00"`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Description, falling back to [`DESCRIPTION_PLACEHOLDER`].
    #[must_use]
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(DESCRIPTION_PLACEHOLDER)
    }

    /// Rating, falling back to [`DEFAULT_RATING`].
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Image URL when the API provided one; rendering a placeholder
    /// otherwise is the consumer's concern.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
