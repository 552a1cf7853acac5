//! Core types and utilities for the sprig scaffolding generator.
//!
//! This crate provides the error taxonomy, identifier resolution,
//! project configuration and the file materializer shared across
//! the sprig crates.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod config;
mod error;
mod file;
mod manifest;
pub mod naming;

pub use config::{CONFIG_FILE, ProjectConfig, ProjectSection};
pub use error::{Error, Result};
// File operations
pub use file::{Materializer, Outcome, OverwritePolicy, RenderedFile};
pub use manifest::{Manifest, ManifestEntry};
// Naming
pub use naming::{CaseVariants, ResolvedName, resolve};
