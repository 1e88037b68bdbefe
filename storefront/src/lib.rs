//! Behavioural core of a single-page storefront.
//!
//! The crate is headless: it owns the category catalogue, the product query
//! controller, and the HTTP adapter to the product API, and leaves rendering
//! to its consumers. Category selection refetches immediately; free-text
//! search is held until an explicit submit; every fetch failure collapses to
//! an empty grid at the controller boundary.
//!
//! Wiring a controller against a deployed API:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ortho_config::OrthoConfig;
//! use storefront::config::StorefrontSettings;
//! use storefront::domain::{CategoryRegistry, ProductQueryController};
//! use storefront::outbound::product_api::HttpProductSource;
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = StorefrontSettings::load()?;
//! let source = HttpProductSource::new(settings.api_base()?)?;
//! let controller = ProductQueryController::new(Arc::new(source), CategoryRegistry::default());
//! controller.start().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod outbound;

pub use config::StorefrontSettings;
pub use domain::{CategoryRegistry, ProductQueryController};
pub use outbound::product_api::HttpProductSource;
