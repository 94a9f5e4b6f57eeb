//! Utility functions
//!
//! Provides logging, validation, and network utilities.

pub mod logging;
pub mod network;
pub mod validation;
