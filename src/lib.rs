//! Food Ordering Library
//!
//! This library provides the menu, cart and checkout bookkeeping for an
//! interactive console ordering tool, plus the console driver itself.

// Domain modules
pub mod cart;
pub mod error;
pub mod menu;
pub mod money;
pub mod ordering;

// Infrastructure
pub mod cli;
pub mod logger;

pub use error::{OrderError, Result};
pub use money::Money;
