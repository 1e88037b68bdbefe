//! Outbound adapters implementing the domain ports.
//!
//! Adapters translate between domain contracts and concrete transports; the
//! domain never imports anything from this tree.

pub mod product_api;
