//! Ordering service
//!
//! Ties the menu and the cart together and exposes the four operations a
//! driver calls: show the menu, add to the cart, view the cart, check out.

use super::helpers::new_order_id;
use super::models::{AddConfirmation, CartView, CartViewLine, MenuEntry, Receipt};
use crate::cart::helpers::format_item_summary;
use crate::cart::helpers::validate_quantity;
use crate::cart::Cart;
use crate::error::{OrderError, Result};
use crate::menu::MenuCatalog;

/// One ordering session: a fixed menu and the cart being filled from it
#[derive(Debug, Default)]
pub struct OrderingService {
    catalog: MenuCatalog,
    cart: Cart,
}

impl OrderingService {
    /// Creates a service over `catalog` with an empty cart.
    pub fn new(catalog: MenuCatalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn show_menu(&self) -> Vec<MenuEntry> {
        self.catalog
            .list_all()
            .map(|(position, item)| MenuEntry {
                position,
                name: item.name().to_owned(),
                unit_price: item.unit_price(),
            })
            .collect()
    }

    /// Adds `quantity` units of the item at menu `position`.
    ///
    /// An unknown position or a non-positive quantity leaves the cart as it
    /// was and is returned as the matching [`OrderError`].
    pub fn add_to_cart(&mut self, position: i64, quantity: i64) -> Result<AddConfirmation> {
        let item = self.catalog.item_at(position).inspect_err(|e| {
            tracing::debug!(position, error = %e, "Rejected add: unknown menu position");
        })?;

        let (quantity_added, quantity_in_cart) = validate_quantity(quantity)
            .and_then(|added| Ok((added, self.cart.merge(item, added)?)))
            .inspect_err(|e| {
                tracing::debug!(
                    item = item.name(),
                    quantity,
                    error = %e,
                    "Rejected add: bad quantity"
                );
            })?;
        tracing::debug!(
            item = item.name(),
            quantity_added,
            quantity_in_cart,
            "Added to cart"
        );

        Ok(AddConfirmation {
            name: item.name().to_owned(),
            quantity_added,
            quantity_in_cart,
        })
    }

    pub fn view_cart(&self) -> CartView {
        if self.cart.is_empty() {
            return CartView::Empty;
        }
        CartView::Items {
            lines: self.cart.lines().iter().map(CartViewLine::from).collect(),
            total: self.cart.total(),
        }
    }

    /// Empties the cart and returns a receipt for what was in it.
    ///
    /// Reading the lines and total and clearing the cart happen under the
    /// one `&mut self` borrow, so the receipt always matches what was
    /// cleared.
    pub fn checkout(&mut self) -> Result<Receipt> {
        if self.cart.is_empty() {
            tracing::debug!("Rejected checkout: cart is empty");
            return Err(OrderError::EmptyCartCheckout);
        }

        let lines = self.cart.lines().to_vec();
        let total = self.cart.total();
        self.cart.clear();
        let order_id = new_order_id();

        tracing::info!(
            order_id = %order_id,
            total = %total,
            items = %format_item_summary(&lines),
            "Checked out"
        );

        Ok(Receipt {
            order_id,
            lines: lines.iter().map(CartViewLine::from).collect(),
            total,
        })
    }
}
