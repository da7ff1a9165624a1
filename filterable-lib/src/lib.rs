//! Table row filtering engine
//!
//! Decides which rows of a table stay visible given per-column filter
//! checkboxes and a free-text search box. A row is visible when it passes
//! every active column filter and at least one of its cells contains the
//! search term.

pub mod error;
pub mod filter;
pub mod model;

mod config;
mod engine;

pub use config::*;
pub use engine::*;
