//! Error handling
//!
//! Defines error types and handling for the package cache helpers.

pub mod handlers;
pub mod types;

pub use types::*;
