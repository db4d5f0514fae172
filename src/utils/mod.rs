//! Utility modules for common functionality
//!
//! Logging backend and progress reporting shared by the commands.

pub mod logger;
pub mod progress;
