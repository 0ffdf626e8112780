//! Product domain types.

use serde::{Deserialize, Serialize};

use vitrine_core::{Price, ProductId};

/// A catalog product (domain type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID, immutable once assigned.
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
    /// Image URI. Not checked for reachability.
    pub image: String,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    /// Merge the supplied fields onto this product. The ID never changes.
    pub fn merge(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Fields for creating a product. The registry assigns the ID.
///
/// `image` and `category` fall back to the catalog defaults when `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub in_stock: bool,
}

/// Partial product update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Values applied to fields a caller leaves out when creating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDefaults {
    /// Image used when none is supplied.
    pub placeholder_image: String,
    /// Category used when none is supplied.
    pub category: String,
}

impl ProductDefaults {
    pub const PLACEHOLDER_IMAGE: &'static str = "https://via.placeholder.com/150";
    pub const CATEGORY: &'static str = "Geral";
}

impl Default for ProductDefaults {
    fn default() -> Self {
        Self {
            placeholder_image: Self::PLACEHOLDER_IMAGE.to_owned(),
            category: Self::CATEGORY.to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_id_and_untouched_fields() {
        let mut product = Product {
            id: ProductId::new("p1"),
            name: "Widget".to_owned(),
            price: Price::parse("9.99").unwrap(),
            description: "A widget".to_owned(),
            image: "https://img/widget.png".to_owned(),
            category: "Tools".to_owned(),
            in_stock: true,
        };
        let before = product.clone();

        product.merge(ProductUpdate {
            in_stock: Some(false),
            ..Default::default()
        });

        assert_eq!(product.id, before.id);
        assert!(!product.in_stock);
        assert_eq!(product.name, before.name);
        assert_eq!(product.price, before.price);
        assert_eq!(product.image, before.image);
    }

    #[test]
    fn test_seed_shape_uses_camel_case() {
        let json = r#"{
            "id": "1",
            "name": "Camiseta",
            "price": 49.9,
            "description": "Camiseta de algodão",
            "image": "https://via.placeholder.com/150",
            "category": "Roupas",
            "inStock": false
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.in_stock);
        assert_eq!(product.price, Price::parse("49.9").unwrap());

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["inStock"], serde_json::Value::Bool(false));
    }
}
