//! Dashboard Commands
//!
//! Frontend actions against the foods backend, organized by domain.

mod food;

// Re-export all public items
pub use food::*;
