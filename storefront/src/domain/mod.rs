//! Domain model of the storefront query core.
//!
//! Public surface:
//! - [`catalogue`]: categories, the sentinel slug, and section titles.
//! - [`product`]: the product record and its display fallbacks.
//! - [`ports`]: the product source contract and its failure modes.
//! - [`product_query`]: the controller owning filter and grid state.

pub mod catalogue;
pub mod ports;
pub mod product;
pub mod product_query;

pub use catalogue::{ALL_CATEGORIES_SLUG, Category, CategoryRegistry, DEFAULT_SECTION_TITLE};
pub use ports::{FixtureProductSource, ProductFilter, ProductSource, ProductSourceError};
pub use product::{DEFAULT_RATING, DESCRIPTION_PLACEHOLDER, Product};
pub use product_query::ProductQueryController;
