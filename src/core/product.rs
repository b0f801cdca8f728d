//! Product normalization and catalog queries.
//!
//! Converts raw `produk.php` records into [`Product`]s and provides the read-only
//! helpers the catalog screens use: lookup by id, category filter and text search.

use super::{category, image};
use crate::{
    api::ApiProduct,
    entities::{Category, ImageSource, Product},
};
use tracing::{debug, warn};

/// Converts one raw record into a display-ready product.
///
/// The image falls back to the category's bundled asset whenever it cannot be resolved.
/// Negative stock is reported by some backends for sold-out items and is clamped to 0.
pub fn normalize(raw: ApiProduct, base_url: &str) -> Product {
    let category = category::resolve(raw.category_id, raw.kategori.as_deref());

    let image = match image::resolve_image(raw.gambar.as_deref().unwrap_or_default(), base_url) {
        Ok(source) => source,
        Err(e) => {
            debug!(
                "Using {} asset for product {} ({}): {}",
                category.asset(),
                raw.id,
                raw.nama_produk,
                e
            );
            ImageSource::Asset(category.asset())
        }
    };

    if raw.stok < 0 {
        warn!("Product {} reported negative stock {}", raw.id, raw.stok);
    }

    Product {
        id: raw.id,
        category,
        name: raw.nama_produk,
        stock: raw.stok.max(0),
        price: raw.harga,
        description: raw.deskripsi,
        image,
    }
}

/// Converts a whole `produk.php` payload, preserving order.
pub fn normalize_all(raw: Vec<ApiProduct>, base_url: &str) -> Vec<Product> {
    raw.into_iter()
        .map(|product| normalize(product, base_url))
        .collect()
}

/// Finds a product by id.
pub fn find(products: &[Product], id: i64) -> Option<&Product> {
    products.iter().find(|product| product.id == id)
}

/// Products in the given category. [`Category::All`] returns everything.
pub fn in_category(products: &[Product], category: Category) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| category == Category::All || product.category == category)
        .collect()
}

/// Case-insensitive substring search over name and description. A blank query
/// matches everything.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .collect()
}
