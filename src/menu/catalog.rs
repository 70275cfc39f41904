//! The fixed menu, addressed by 1-based position.

use super::models::MenuItem;
use crate::error::{OrderError, Result};
use crate::money::Money;
use std::collections::HashSet;
use std::sync::Arc;

/// Items offered at startup, in display order.
const SEED_ITEMS: [(&str, i64); 4] = [
    ("Original Recipe Chicken", 1200),
    ("Spicy Chicken Burger", 1800),
    ("Fries (Medium)", 900),
    ("Cola (Medium)", 700),
];

/// Ordered, immutable list of menu items
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<Arc<MenuItem>>,
}

impl MenuCatalog {
    /// Builds the standard menu.
    pub fn initialize() -> Self {
        let items = SEED_ITEMS
            .iter()
            .map(|&(name, cents)| Arc::new(MenuItem::seeded(name, Money::from_cents(cents))))
            .collect();
        Self { items }
    }

    /// Builds a menu from an explicit list, keeping its order.
    ///
    /// Fails with [`OrderError::DuplicateItem`] when two items share a name.
    pub fn with_items(items: impl IntoIterator<Item = MenuItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for item in items {
            if !seen.insert(item.name().to_owned()) {
                return Err(OrderError::DuplicateItem {
                    name: item.name().to_owned(),
                });
            }
            list.push(Arc::new(item));
        }
        Ok(Self { items: list })
    }

    /// Looks up the item shown at `position` (1-based).
    pub fn item_at(&self, position: i64) -> Result<&Arc<MenuItem>> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|index| self.items.get(index))
            .ok_or(OrderError::InvalidIndex {
                position,
                size: self.items.len(),
            })
    }

    /// Every item paired with its display position.
    pub fn list_all(&self) -> impl Iterator<Item = (usize, &MenuItem)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (index + 1, item.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, major: i64) -> MenuItem {
        MenuItem::new(name, Money::from_major(major)).unwrap()
    }

    #[test]
    fn seed_menu_is_in_display_order() {
        let catalog = MenuCatalog::initialize();
        let listed: Vec<_> = catalog
            .list_all()
            .map(|(pos, item)| (pos, item.name().to_owned(), item.unit_price().cents()))
            .collect();

        assert_eq!(
            listed,
            vec![
                (1, "Original Recipe Chicken".to_owned(), 1200),
                (2, "Spicy Chicken Burger".to_owned(), 1800),
                (3, "Fries (Medium)".to_owned(), 900),
                (4, "Cola (Medium)".to_owned(), 700),
            ]
        );
    }

    #[test]
    fn item_at_is_one_based() {
        let catalog = MenuCatalog::initialize();
        assert_eq!(catalog.item_at(1).unwrap().name(), "Original Recipe Chicken");
        assert_eq!(catalog.item_at(4).unwrap().name(), "Cola (Medium)");
    }

    #[test]
    fn item_at_rejects_out_of_range_positions() {
        let catalog = MenuCatalog::initialize();
        for position in [0, -1, 5, 99, i64::MIN, i64::MAX] {
            assert_eq!(
                catalog.item_at(position).unwrap_err(),
                OrderError::InvalidIndex { position, size: 4 }
            );
        }
    }

    #[test]
    fn with_items_rejects_duplicate_names() {
        let err = MenuCatalog::with_items([item("ItemA", 1), item("ItemA", 2)]).unwrap_err();
        assert_eq!(
            err,
            OrderError::DuplicateItem {
                name: "ItemA".into()
            }
        );
    }

    #[test]
    fn empty_catalog_has_no_valid_position() {
        let catalog = MenuCatalog::with_items(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.item_at(1).is_err());
    }
}
