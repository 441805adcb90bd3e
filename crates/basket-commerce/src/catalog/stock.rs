//! Stock records.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Available quantity for a product (`GET /stock/{id}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Product the record describes.
    pub id: ProductId,
    /// Units available. May be reported as zero or negative.
    pub amount: i64,
}

impl Stock {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self { id, amount }
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.amount <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock_threshold() {
        assert!(Stock::new(ProductId::new(1), 0).is_out_of_stock());
        assert!(Stock::new(ProductId::new(1), -2).is_out_of_stock());
        assert!(!Stock::new(ProductId::new(1), 1).is_out_of_stock());
    }
}
