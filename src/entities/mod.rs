//! Entity module - Display-ready domain records.
//! These are what view-state holders store and front ends render. Raw backend records
//! live in [`crate::api::records`] and are converted by [`crate::core`].

pub mod category;
pub mod product;
pub mod transaction;

pub use category::Category;
pub use product::{ImageSource, Product};
pub use transaction::Transaction;
