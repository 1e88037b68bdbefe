//! Outbound adapter for the external product API.

mod http_source;

pub use http_source::{HttpProductSource, ProductApiBuildError};
