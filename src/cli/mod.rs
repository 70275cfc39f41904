//! Console Front End
//!
//! The interactive driver around the ordering service:
//! - Process flags
//! - Line-oriented prompting and integer parsing
//! - Rendering of service results
//! - The action loop

pub mod args;
pub mod prompt;
pub mod render;
pub mod session;

pub use args::Cli;
pub use session::run_session;
