//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analyze;
pub mod budget;
pub mod health;
pub mod tips;

// Re-export all handlers for use in router
pub use analyze::*;
pub use budget::*;
pub use health::*;
pub use tips::*;
