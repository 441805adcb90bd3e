//! Cart and line item types.
//!
//! A [`Cart`] is an immutable value as far as the store is concerned: every
//! change produces a new cart, which the store then commits wholesale.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Deserializer, Serialize};

/// An ordered list of line items, at most one per product.
///
/// Serializes as a bare JSON array, which is also the persisted form.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id() == product_id)
    }

    /// Whether the cart has a line for this product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Get number of unique items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get total item count (sum of amounts).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Sum of `price * amount` over all items.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// A new cart with `item` appended after the existing items.
    ///
    /// If the product is already present its line is replaced in place, so
    /// the one-line-per-product invariant holds.
    pub fn with_item(&self, item: LineItem) -> Cart {
        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.id() == item.id()) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Cart { items }
    }

    /// A new cart where `product_id`'s amount is `current + delta`.
    ///
    /// Other lines keep their values and positions. No floor is applied, and
    /// an absent product yields an unchanged copy.
    pub fn with_amount_delta(&self, product_id: ProductId, delta: i64) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == product_id {
                    LineItem {
                        amount: item.amount.saturating_add(delta),
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// A new cart without any line for `product_id`.
    pub fn without(&self, product_id: ProductId) -> Cart {
        let items = self
            .items
            .iter()
            .filter(|i| i.id() != product_id)
            .cloned()
            .collect();
        Cart { items }
    }
}

/// Builds a cart from items, keeping the first line seen for each product.
impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        items
            .into_iter()
            .fold(Cart::new(), |cart, item| {
                if cart.contains(item.id()) {
                    cart
                } else {
                    cart.with_item(item)
                }
            })
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<LineItem>::deserialize(deserializer).map(Cart::from)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A line item in the cart: product metadata plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Denormalized product fields, including any extra catalog fields.
    #[serde(flatten)]
    pub product: Product,
    /// Quantity.
    pub amount: i64,
}

impl LineItem {
    /// Create a new line item.
    ///
    /// A catalog field named `amount` is dropped; the quantity owns that key.
    pub fn new(mut product: Product, amount: i64) -> Self {
        product.extra.remove("amount");
        Self { product, amount }
    }

    /// The product this line is for.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// `price * amount`.
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.amount as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, amount: i64) -> LineItem {
        LineItem::new(
            Product::new(ProductId::new(id), format!("Product {}", id), 10.0),
            amount,
        )
    }

    fn ids(cart: &Cart) -> Vec<u64> {
        cart.iter().map(|i| i.id().get()).collect()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_with_item_appends_in_order() {
        let cart = Cart::new().with_item(item(3, 1)).with_item(item(1, 1));
        assert_eq!(ids(&cart), vec![3, 1]);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_with_item_replaces_existing_line() {
        let cart = Cart::new().with_item(item(1, 1)).with_item(item(2, 1));
        let cart = cart.with_item(item(1, 5));
        assert_eq!(ids(&cart), vec![1, 2]);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 5);
    }

    #[test]
    fn test_with_amount_delta_only_touches_target() {
        let cart = Cart::from(vec![item(1, 2), item(2, 4), item(3, 1)]);
        let next = cart.with_amount_delta(ProductId::new(2), -1);

        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(next.get(ProductId::new(1)).unwrap().amount, 2);
        assert_eq!(next.get(ProductId::new(2)).unwrap().amount, 3);
        assert_eq!(next.get(ProductId::new(3)).unwrap().amount, 1);
        // original untouched
        assert_eq!(cart.get(ProductId::new(2)).unwrap().amount, 4);
    }

    #[test]
    fn test_with_amount_delta_has_no_floor() {
        let cart = Cart::from(vec![item(1, 1)]);
        let next = cart.with_amount_delta(ProductId::new(1), -3);
        assert_eq!(next.get(ProductId::new(1)).unwrap().amount, -2);
    }

    #[test]
    fn test_with_amount_delta_missing_product_is_noop() {
        let cart = Cart::from(vec![item(1, 1)]);
        assert_eq!(cart.with_amount_delta(ProductId::new(9), 1), cart);
    }

    #[test]
    fn test_without_preserves_order() {
        let cart = Cart::from(vec![item(1, 1), item(2, 1), item(3, 1)]);
        assert_eq!(ids(&cart.without(ProductId::new(2))), vec![1, 3]);
        assert_eq!(cart.without(ProductId::new(9)), cart);
    }

    #[test]
    fn test_from_vec_drops_duplicate_products() {
        let cart = Cart::from(vec![item(1, 1), item(2, 1), item(1, 7)]);
        assert_eq!(ids(&cart), vec![1, 2]);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 1);
    }

    #[test]
    fn test_totals() {
        let cart = Cart::from(vec![item(1, 2), item(2, 1)]);
        assert_eq!(cart.item_count(), 3);
        assert!((cart.subtotal() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_as_flat_array() {
        let cart = Cart::from(vec![LineItem::new(
            Product::new(ProductId::new(7), "X", 10.0),
            1,
        )]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"id": 7, "name": "X", "price": 10.0, "amount": 1}])
        );

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_extra_catalog_fields_persist_with_the_line() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 5,
            "title": "Boot",
            "price": 20,
            "priceFormatted": "$20.00",
            "amount": 99
        }))
        .unwrap();
        let cart = Cart::new().with_item(LineItem::new(product, 1));

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json[0]["priceFormatted"], "$20.00");
        assert_eq!(json[0]["amount"], 1);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
        assert_eq!(back.items()[0].amount, 1);
    }
}
