use thiserror::Error;

/// Failures surfaced by the menu, cart and ordering operations.
///
/// None of these are fatal: the caller reports them and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("menu position {position} is outside 1..={size}")]
    InvalidIndex { position: i64, size: usize },

    #[error("quantity {quantity} is not a positive count")]
    InvalidQuantity { quantity: i64 },

    #[error("cart is empty, nothing to check out")]
    EmptyCartCheckout,

    #[error("menu item name must not be empty")]
    EmptyItemName,

    #[error("menu item {name:?} has a negative price")]
    NegativePrice { name: String },

    #[error("menu item {name:?} is listed more than once")]
    DuplicateItem { name: String },
}

pub type Result<T> = std::result::Result<T, OrderError>;
