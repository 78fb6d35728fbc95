//! Utility modules and helper functions
//!
//! Shared helpers for paths, logging and input validation.

pub mod file_utils;
pub mod logging;
pub mod validation;

// Re-export commonly used utilities
pub use file_utils::*;
pub use logging::*;
pub use validation::*;
