//! Utilities
pub mod fmt;
