//! Command handlers
//!
//! Entry points that tie the core extraction to the output writers.

pub mod export;

// Re-export command types
pub use export::*;
