//! Core utilities shared by every layer
//!
//! Macros must be declared before the modules that use them.

#[macro_use]
pub mod utils;
