//! Product entity - A purchasable diamond package for one game.
//!
//! Products are display-ready: the category is resolved and the image is something a
//! front end can render directly. Identity is the backend id alone.

use super::category::Category;
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Where a product image comes from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImageSource {
    /// Absolute `http(s)://` URL
    Url(String),
    /// Inline `data:image/...;base64,...` URI
    DataUri(String),
    /// Bundled local asset id, used when the backend gives nothing usable
    Asset(&'static str),
}

impl ImageSource {
    /// The URL, data URI or asset id as a plain string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(value) | Self::DataUri(value) => value,
            Self::Asset(asset) => asset,
        }
    }

    /// True when the image is a bundled fallback rather than backend data.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Asset(_))
    }
}

/// Catalog product
#[derive(Clone, Debug, Serialize)]
pub struct Product {
    /// Unique identifier from the backend
    pub id: i64,
    /// Game this product tops up
    pub category: Category,
    /// Display name (e.g., "100 Diamonds")
    pub name: String,
    /// Units available; never negative
    pub stock: i64,
    /// Unit price in whole Rupiah
    pub price: i64,
    /// Free-text description
    pub description: String,
    /// Resolved image
    pub image: ImageSource,
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn product(id: i64, name: &str, price: i64) -> Product {
        Product {
            id,
            category: Category::FreeFire,
            name: name.to_string(),
            stock: 10,
            price,
            description: String::new(),
            image: ImageSource::Asset("ff"),
        }
    }

    #[test]
    fn test_equality_is_by_id_only() {
        assert_eq!(product(1, "100 Diamonds", 20_000), product(1, "Renamed", 99));
        assert_ne!(product(1, "100 Diamonds", 20_000), product(2, "100 Diamonds", 20_000));
    }

    #[test]
    fn test_hash_follows_equality() {
        let mut set = HashSet::new();
        set.insert(product(7, "a", 1));
        set.insert(product(7, "b", 2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_image_source_as_str() {
        assert_eq!(ImageSource::Asset("mlbb").as_str(), "mlbb");
        assert!(ImageSource::Asset("mlbb").is_fallback());
        assert!(!ImageSource::Url("https://x/y.png".to_string()).is_fallback());
    }
}
