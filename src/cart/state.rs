//! Shopping Cart State
//!
//! The cart owned by one ordering session: an insertion-ordered list of
//! lines, unique by item name.

use super::helpers::{merge_into_lines, validate_quantity};
use super::models::CartLine;
use crate::error::Result;
use crate::menu::MenuItem;
use crate::money::Money;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item`, merging with an existing line.
    ///
    /// Non-positive quantities are rejected and leave the cart unchanged.
    /// Returns the quantity of `item` now in the cart.
    pub fn add_or_merge(&mut self, item: &Arc<MenuItem>, quantity: i64) -> Result<u32> {
        self.merge(item, validate_quantity(quantity)?)
    }

    /// Like [`Cart::add_or_merge`] for a quantity already checked by
    /// [`validate_quantity`].
    pub fn merge(&mut self, item: &Arc<MenuItem>, quantity: u32) -> Result<u32> {
        merge_into_lines(&mut self.lines, item, quantity)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
