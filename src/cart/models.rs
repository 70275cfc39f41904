//! Shopping Cart Domain Models
//!
//! This module contains the data structures held by the cart.

use crate::menu::MenuItem;
use crate::money::Money;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One aggregated entry in the cart
///
/// The quantity is always at least 1; a line is never kept at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The menu item this line is for
    pub(crate) item: Arc<MenuItem>,

    /// Units of the item in the cart
    pub(crate) quantity: u32,
}

impl CartLine {
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn name(&self) -> &str {
        self.item.name()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity
    pub fn line_total(&self) -> Money {
        self.item.unit_price() * self.quantity
    }
}

impl fmt::Display for CartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} - {}", self.name(), self.quantity, self.line_total())
    }
}
