//! Menu Domain Module
//!
//! - Domain models (MenuItem)
//! - The fixed, position-addressed catalog

pub mod catalog;
pub mod models;

pub use catalog::MenuCatalog;
pub use models::MenuItem;
