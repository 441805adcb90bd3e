//! Catalog product metadata.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product metadata as served by the catalog (`GET /products/{id}`).
///
/// Carries no quantity; a [`crate::cart::LineItem`] adds that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name. Catalogs that call it `title` are accepted too.
    #[serde(alias = "title")]
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Any other catalog fields, kept as served.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Create a product without an image.
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: None,
            extra: Map::new(),
        }
    }

    /// Attach an image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_title_alias() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"title":"Running shoe","price":179.9,"image":"https://cdn/1.jpg"}"#,
        )
        .unwrap();
        assert_eq!(product.name, "Running shoe");
        assert_eq!(product.image.as_deref(), Some("https://cdn/1.jpg"));
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let json = r#"{"id":3,"name":"Boot","price":99.5,"priceFormatted":"$99.50","sizes":[40,41]}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.extra["priceFormatted"], "$99.50");
        assert_eq!(product.extra["sizes"], serde_json::json!([40, 41]));

        let back: serde_json::Value = serde_json::to_value(&product).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(json).unwrap());
    }

    #[test]
    fn test_image_is_optional() {
        let product: Product = serde_json::from_str(r#"{"id":7,"name":"X","price":10}"#).unwrap();
        assert_eq!(product, Product::new(ProductId::new(7), "X", 10.0));
        assert_eq!(
            serde_json::to_string(&product).unwrap(),
            r#"{"id":7,"name":"X","price":10.0}"#
        );
    }
}
