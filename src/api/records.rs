//! Raw wire records for `produk.php` and `transaksi.php`.
//!
//! Field names follow the backend. The PHP backend is loose with types, so integer
//! fields also accept numeric strings (`"25000"`) and text fields accept `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope every endpoint wraps its payload in
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// `"success"`/`"error"` on most endpoints; informational only
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    /// Numeric status some `produk.php` versions send instead of `status`
    #[serde(default)]
    pub response: Option<i64>,
    /// Human-readable message from the backend
    #[serde(default)]
    pub message: Option<String>,
    /// Payload; `null` or absent on empty results
    pub data: Option<T>,
}

/// Product as sent by `GET produk.php`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiProduct {
    /// Backend primary key
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    /// Free-text game name
    #[serde(default)]
    pub kategori: Option<String>,
    /// Numeric game id, preferred over `kategori`
    #[serde(default, deserialize_with = "lenient_opt_int")]
    pub category_id: Option<i64>,
    /// Product name; `null` becomes empty
    #[serde(default, deserialize_with = "lenient_text")]
    pub nama_produk: String,
    /// Units in stock
    #[serde(deserialize_with = "lenient_int")]
    pub stok: i64,
    /// Unit price in whole Rupiah
    #[serde(deserialize_with = "lenient_int")]
    pub harga: i64,
    /// Description; `null` becomes empty
    #[serde(default, deserialize_with = "lenient_text")]
    pub deskripsi: String,
    /// URL, data URI, raw base64, or a path relative to the backend
    #[serde(default)]
    pub gambar: Option<String>,
}

/// Transaction as sent by `GET transaksi.php` and echoed by `POST`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiTransaction {
    /// Backend primary key
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    /// Product that was bought; may no longer exist
    #[serde(deserialize_with = "lenient_int")]
    pub product_id: i64,
    /// Units bought
    #[serde(deserialize_with = "lenient_int")]
    pub qty: i64,
    /// Amount charged in whole Rupiah
    #[serde(deserialize_with = "lenient_int")]
    pub total_harga: i64,
    /// `yyyy-MM-dd HH:mm:ss`, local time. `null` or a non-string becomes empty and
    /// is later replaced by the current time.
    #[serde(default, deserialize_with = "lenient_text")]
    pub tanggal: String,
}

/// Body of `POST transaksi.php`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateTransactionRequest {
    /// Product being bought
    pub product_id: i64,
    /// Units, within `[1, stock]`
    pub qty: i64,
    /// `price × qty` in whole Rupiah
    pub total_harga: i64,
}

/// Body of `PUT transaksi.php?id=<id>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateTransactionRequest {
    /// Transaction being edited; repeated from the query string
    pub id: i64,
    /// Product bought
    pub product_id: i64,
    /// New quantity
    pub qty: i64,
    /// New total in whole Rupiah
    pub total_harga: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Strings pass through; numbers and booleans are rendered; `null` and anything
/// else become an empty string.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Bool(flag) => flag.to_string(),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            String::new()
        }
    })
}

fn lenient_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(value)) => Ok(Some(value)),
        Some(IntOrString::Str(text)) if text.trim().is_empty() => Ok(None),
        Some(IntOrString::Str(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_product_accepts_numeric_strings() {
        let json = r#"{
            "id": "3",
            "kategori": "Free Fire",
            "category_id": "",
            "nama_produk": "100 Diamonds",
            "stok": "50",
            "harga": 20000,
            "deskripsi": "Top up FF",
            "gambar": null
        }"#;

        let product: ApiProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.category_id, None);
        assert_eq!(product.stok, 50);
        assert_eq!(product.harga, 20_000);
        assert_eq!(product.gambar, None);
    }

    #[test]
    fn test_product_optional_fields_may_be_absent() {
        let json = r#"{"id": 1, "nama_produk": "x", "stok": 0, "harga": 1}"#;
        let product: ApiProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.kategori, None);
        assert_eq!(product.deskripsi, "");
    }

    #[test]
    fn test_response_with_null_data() {
        let json = r#"{"status": "success", "message": "kosong", "data": null}"#;
        let response: ApiResponse<Vec<ApiTransaction>> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.message.as_deref(), Some("kosong"));
    }

    #[test]
    fn test_response_with_numeric_status_field() {
        let json = r#"{"response": 200, "message": "ok", "data": []}"#;
        let response: ApiResponse<Vec<ApiProduct>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.response, Some(200));
        assert_eq!(response.data.map(|d| d.len()), Some(0));
    }

    #[test]
    fn test_null_text_fields_become_empty() {
        let json = r#"{
            "id": 2,
            "nama_produk": null,
            "stok": 5,
            "harga": 10000,
            "deskripsi": null
        }"#;
        let product: ApiProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.nama_produk, "");
        assert_eq!(product.deskripsi, "");
    }

    #[test]
    fn test_non_string_tanggal_becomes_empty() {
        let json = r#"{"id": 1, "product_id": 1, "qty": 1, "total_harga": 1, "tanggal": null}"#;
        let tx: ApiTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.tanggal, "");

        let json = r#"{"id": 1, "product_id": 1, "qty": 1, "total_harga": 1, "tanggal": {"date": "x"}}"#;
        let tx: ApiTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.tanggal, "");
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        let json = r#"{"id": "abc", "product_id": 1, "qty": 1, "total_harga": 1}"#;
        assert!(serde_json::from_str::<ApiTransaction>(json).is_err());
    }

    #[test]
    fn test_create_request_serializes_backend_field_names() {
        let request = CreateTransactionRequest {
            product_id: 4,
            qty: 2,
            total_harga: 80_000,
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({"product_id": 4, "qty": 2, "total_harga": 80_000})
        );
    }
}
