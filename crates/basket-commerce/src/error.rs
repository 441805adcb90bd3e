//! Cart error types.

use std::fmt;

use thiserror::Error;

use crate::ids::ProductId;
use crate::store::notify;

/// The mutating cart operations, used to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl Operation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddProduct => "add_product",
            Operation::RemoveProduct => "remove_product",
            Operation::UpdateProductAmount => "update_product_amount",
        }
    }

    /// Generic message shown when this operation fails unexpectedly.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::AddProduct => notify::ADD_FAILED,
            Operation::RemoveProduct => notify::REMOVE_FAILED,
            Operation::UpdateProductAmount => notify::UPDATE_FAILED,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from the remote stock and catalog lookups.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service does not know the product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Transport or HTTP failure.
    #[error(transparent)]
    Fetch(#[from] basket_data::FetchError),

    /// The service answered with something unusable.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Any other lookup failure.
    #[error("Lookup unavailable: {0}")]
    Unavailable(String),
}

/// Why a cart operation was rejected. The cart is unchanged in every case.
#[derive(Error, Debug)]
pub enum CartError {
    /// Business rule rejection: the product has no stock.
    #[error("Product {product_id} is out of stock")]
    OutOfStock {
        operation: Operation,
        product_id: ProductId,
    },

    /// Transport or unexpected failure during the operation.
    #[error("{operation} failed for product {product_id}: {source}")]
    OperationFailed {
        operation: Operation,
        product_id: ProductId,
        #[source]
        source: LookupError,
    },
}

impl CartError {
    pub(crate) fn failed(operation: Operation, product_id: ProductId, source: LookupError) -> Self {
        CartError::OperationFailed {
            operation,
            product_id,
            source,
        }
    }

    /// The operation that was rejected.
    pub fn operation(&self) -> Operation {
        match self {
            CartError::OutOfStock { operation, .. }
            | CartError::OperationFailed { operation, .. } => *operation,
        }
    }

    /// The product the operation targeted.
    pub fn product_id(&self) -> ProductId {
        match self {
            CartError::OutOfStock { product_id, .. }
            | CartError::OperationFailed { product_id, .. } => *product_id,
        }
    }

    /// Whether this is the out-of-stock business rejection.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::OutOfStock { .. })
    }

    /// The user-facing notification for this error.
    pub fn notification(&self) -> &'static str {
        match self {
            CartError::OutOfStock { .. } => notify::OUT_OF_STOCK,
            CartError::OperationFailed { operation, .. } => operation.failure_message(),
        }
    }
}
