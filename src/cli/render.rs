//! Display text for the console
//!
//! Every function here is pure: it turns a service result into the lines
//! printed on stdout.

use crate::error::OrderError;
use crate::ordering::{AddConfirmation, CartView, MenuEntry, Receipt};
use std::fmt::Write;

pub const ACTIONS: &str = "\
Choose an action:
1. Show menu
2. Add item to cart
3. View cart
4. Checkout
5. Exit";

pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const MALFORMED_NUMBER: &str = "Please enter a whole number.";
pub const GOODBYE: &str = "Thanks for ordering, goodbye!";

pub fn render_menu(entries: &[MenuEntry]) -> String {
    let mut text = String::from("Menu:");
    for entry in entries {
        // Writing to a String cannot fail
        let _ = write!(text, "\n{}. {} - {}", entry.position, entry.name, entry.unit_price);
    }
    text
}

pub fn render_added(confirmation: &AddConfirmation) -> String {
    format!(
        "{} x {} added to cart.",
        confirmation.name, confirmation.quantity_added
    )
}

pub fn render_cart(view: &CartView) -> String {
    match view {
        CartView::Empty => "Cart:\nYour cart is empty.".to_owned(),
        CartView::Items { lines, total } => {
            let mut text = String::from("Cart:");
            for line in lines {
                let _ = write!(text, "\n{} x {} - {}", line.name, line.quantity, line.line_total);
            }
            let _ = write!(text, "\nTotal: {total}");
            text
        }
    }
}

pub fn render_receipt(receipt: &Receipt) -> String {
    format!(
        "Checkout complete! Order {}. Total: {}",
        receipt.order_id, receipt.total
    )
}

/// The message shown to the user for a rejected request.
pub fn render_error(error: &OrderError) -> &'static str {
    match error {
        OrderError::InvalidIndex { .. } => "Invalid item number, please choose again.",
        OrderError::InvalidQuantity { .. } => "Invalid quantity, please enter a positive number.",
        OrderError::EmptyCartCheckout => "Your cart is empty, nothing to check out.",
        OrderError::EmptyItemName
        | OrderError::NegativePrice { .. }
        | OrderError::DuplicateItem { .. } => "The menu is not available right now.",
    }
}
