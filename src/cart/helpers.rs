//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartLine;
use crate::error::{OrderError, Result};
use crate::menu::MenuItem;
use crate::money::Money;
use std::sync::Arc;

/// Checks that a requested quantity is a positive count that fits a line.
pub fn validate_quantity(quantity: i64) -> Result<u32> {
    u32::try_from(quantity)
        .ok()
        .filter(|&q| q > 0)
        .ok_or(OrderError::InvalidQuantity { quantity })
}

/// Merges `quantity` units of `item` into `lines`.
///
/// # Behaviour
///
/// * If a line with the same item name already exists, its `quantity` is
///   increased in place and it keeps its position.
/// * Otherwise a new line is appended at the end.
///
/// Returns the quantity the line holds afterwards. When the merged quantity,
/// its line total or the cart total would overflow, `lines` is left
/// untouched. Every stored line total and the cart total therefore fit in
/// [`Money`].
pub fn merge_into_lines(
    lines: &mut Vec<CartLine>,
    item: &Arc<MenuItem>,
    quantity: u32,
) -> Result<u32> {
    let too_many = OrderError::InvalidQuantity {
        quantity: i64::from(quantity),
    };
    let existing = lines.iter().position(|l| l.name() == item.name());
    let previous = existing.map_or(0, |index| lines[index].quantity);
    let merged = previous.checked_add(quantity).ok_or(too_many.clone())?;

    let other_lines: Money = lines
        .iter()
        .filter(|l| l.name() != item.name())
        .map(CartLine::line_total)
        .sum();
    item.unit_price()
        .checked_mul(merged)
        .and_then(|line_total| other_lines.checked_add(line_total))
        .ok_or(too_many)?;

    match existing {
        Some(index) => lines[index].quantity = merged,
        None => lines.push(CartLine {
            item: Arc::clone(item),
            quantity: merged,
        }),
    }
    Ok(merged)
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Fries (Medium), 1x Cola (Medium)"`.
pub fn format_item_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Arc<MenuItem> {
        Arc::new(MenuItem::new(name, Money::from_major(1)).unwrap())
    }

    #[test]
    fn validate_quantity_accepts_only_positive_u32() {
        assert_eq!(validate_quantity(1), Ok(1));
        assert_eq!(validate_quantity(i64::from(u32::MAX)), Ok(u32::MAX));
        for quantity in [0, -3, i64::from(u32::MAX) + 1] {
            assert_eq!(
                validate_quantity(quantity),
                Err(OrderError::InvalidQuantity { quantity })
            );
        }
    }

    #[test]
    fn merge_keeps_first_position() {
        let (apple, banana) = (item("Apple"), item("Banana"));
        let mut lines = Vec::new();

        merge_into_lines(&mut lines, &apple, 2).unwrap();
        merge_into_lines(&mut lines, &banana, 1).unwrap();
        assert_eq!(merge_into_lines(&mut lines, &apple, 3), Ok(5));

        assert_eq!(format_item_summary(&lines), "5x Apple, 1x Banana");
    }

    #[test]
    fn merge_overflow_leaves_line_untouched() {
        let apple = item("Apple");
        let mut lines = Vec::new();
        merge_into_lines(&mut lines, &apple, u32::MAX).unwrap();

        assert!(merge_into_lines(&mut lines, &apple, 1).is_err());
        assert_eq!(lines[0].quantity(), u32::MAX);
    }

    #[test]
    fn merge_rejects_line_total_past_money_range() {
        let pricey = Arc::new(MenuItem::new("Pricey", Money::from_cents(i64::MAX / 2)).unwrap());
        let mut lines = Vec::new();

        assert_eq!(merge_into_lines(&mut lines, &pricey, 2), Ok(2));
        assert_eq!(
            merge_into_lines(&mut lines, &pricey, 1),
            Err(OrderError::InvalidQuantity { quantity: 1 })
        );
        assert_eq!(lines[0].quantity(), 2);
    }

    #[test]
    fn merge_rejects_cart_total_past_money_range() {
        let pricey = Arc::new(MenuItem::new("Pricey", Money::from_cents(i64::MAX / 2)).unwrap());
        let other = Arc::new(MenuItem::new("Other", Money::from_cents(i64::MAX / 2)).unwrap());
        let mut lines = Vec::new();
        merge_into_lines(&mut lines, &pricey, 1).unwrap();
        merge_into_lines(&mut lines, &other, 1).unwrap();

        assert!(merge_into_lines(&mut lines, &other, 1).is_err());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].quantity(), 1);
    }

    #[test]
    fn summary_of_nothing_is_empty() {
        assert_eq!(format_item_summary(&[]), "");
    }
}
