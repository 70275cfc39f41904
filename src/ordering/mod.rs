//! Ordering Module
//!
//! The request/response surface over the menu and the cart:
//! - Result models (menu entries, confirmations, cart views, receipts)
//! - The ordering service itself

pub mod helpers;
pub mod models;
pub mod service;

pub use models::{AddConfirmation, CartView, CartViewLine, MenuEntry, Receipt};
pub use service::OrderingService;
