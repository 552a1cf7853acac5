//! Core operations.
//!
//! This module contains the business logic for sprig commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod list;

pub use generate::{GenerateOptions, Switches, generate, split_options, target};
pub use list::list;
