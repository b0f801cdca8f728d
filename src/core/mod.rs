//! Normalization layer - framework-agnostic conversion of backend records into
//! display-ready entities, plus the small amount of checkout and formatting logic the
//! screens share.

/// Category resolution from numeric ids and free-text names
pub mod category;
/// Quantity clamping and order validation
pub mod checkout;
/// Currency and date display formatting
pub mod format;
/// Image source resolution and magic-byte sniffing
pub mod image;
/// Product normalization and catalog queries
pub mod product;
/// Transaction normalization, history and receipts
pub mod transaction;
