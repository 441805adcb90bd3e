//! Shopping cart module.

#[allow(clippy::module_inception)]
mod cart;

pub use cart::{Cart, LineItem};
