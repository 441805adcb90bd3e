//! Product catalog module.
//!
//! Read-only views of what the storefront API serves.

mod product;
mod stock;

pub use product::Product;
pub use stock::Stock;
