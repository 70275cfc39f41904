//! Menu Domain Models

use crate::error::{OrderError, Result};
use crate::money::Money;
use serde::Serialize;
use std::fmt;

/// A purchasable item on the menu
///
/// Items are identified by name; two items with the same name are the same
/// item as far as the cart is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Display name of the item
    name: String,

    /// Price of a single unit
    unit_price: Money,
}

impl MenuItem {
    /// Creates an item, rejecting blank names and negative prices.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OrderError::EmptyItemName);
        }
        if unit_price.is_negative() {
            return Err(OrderError::NegativePrice { name });
        }
        Ok(Self { name, unit_price })
    }

    /// Seed entries are constants known to satisfy the checks in `new`.
    pub(super) fn seeded(name: &str, unit_price: Money) -> Self {
        Self {
            name: name.to_owned(),
            unit_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.unit_price)
    }
}
