//! Checkout - quantity selection and order validation.
//!
//! An [`Order`] can only be built for a quantity in `[1, stock]`, so a create request is
//! never sent for a quantity the user should not have been able to pick.

use crate::{
    api::CreateTransactionRequest,
    entities::Product,
    errors::{Error, Result},
};

/// Clamps a quantity picker value into `[1, stock]`.
///
/// With no stock the result is 1; [`Order::new`] still rejects it.
pub fn clamp_quantity(requested: i64, stock: i64) -> i64 {
    requested.min(stock).max(1)
}

/// A validated purchase, ready to send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    /// Product being bought
    pub product_id: i64,
    /// Units, within `[1, stock]` at validation time
    pub quantity: i64,
    /// `price × quantity` in whole Rupiah
    pub total_price: i64,
}

impl Order {
    /// Validates `quantity` against the product's stock and prices the order.
    ///
    /// # Errors
    /// - [`Error::OutOfStock`] if the product has no stock
    /// - [`Error::InvalidQuantity`] if `quantity` is outside `[1, stock]`
    /// - [`Error::InvalidAmount`] if the total overflows or is negative
    pub fn new(product: &Product, quantity: i64) -> Result<Self> {
        if product.stock <= 0 {
            return Err(Error::OutOfStock {
                product_id: product.id,
            });
        }

        if quantity < 1 || quantity > product.stock {
            return Err(Error::InvalidQuantity {
                requested: quantity,
                stock: product.stock,
            });
        }

        let total_price = product
            .price
            .checked_mul(quantity)
            .ok_or(Error::InvalidAmount {
                amount: product.price,
            })?;
        if total_price < 0 {
            return Err(Error::InvalidAmount {
                amount: total_price,
            });
        }

        Ok(Self {
            product_id: product.id,
            quantity,
            total_price,
        })
    }

    /// Request body for `POST transaksi.php`.
    pub const fn to_request(&self) -> CreateTransactionRequest {
        CreateTransactionRequest {
            product_id: self.product_id,
            qty: self.quantity,
            total_harga: self.total_price,
        }
    }
}
