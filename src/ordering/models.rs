//! Ordering Result Models
//!
//! Values handed back to whatever drives the ordering service. They carry
//! plain data only; rendering is left to the caller.

use crate::cart::CartLine;
use crate::money::Money;
use serde::Serialize;

/// One row of the menu as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// 1-based position the user types to pick the item
    pub position: usize,
    pub name: String,
    pub unit_price: Money,
}

/// Confirmation returned by a successful add
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConfirmation {
    pub name: String,

    /// Units added by this request
    pub quantity_added: u32,

    /// Units of the item in the cart after merging
    pub quantity_in_cart: u32,
}

/// One cart line as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartViewLine {
    pub name: String,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&CartLine> for CartViewLine {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name().to_owned(),
            quantity: line.quantity(),
            line_total: line.line_total(),
        }
    }
}

/// Snapshot of the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CartView {
    Empty,
    Items { lines: Vec<CartViewLine>, total: Money },
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        matches!(self, CartView::Empty)
    }

    pub fn total(&self) -> Money {
        match self {
            CartView::Empty => Money::ZERO,
            CartView::Items { total, .. } => *total,
        }
    }
}

/// Record of a completed checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Identifier generated for the order
    pub order_id: String,

    /// Lines that were in the cart when it was checked out
    pub lines: Vec<CartViewLine>,

    /// Sum of the line totals
    pub total: Money,
}
