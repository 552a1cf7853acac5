//! Blueprint definitions for the sprig scaffolding generator.
//!
//! # Module Organization
//!
//! - [`Blueprint`] - what a generator keyword produces and where
//! - [`options`] - option schema validation
//! - [`BlueprintRegistry`] - keyword lookup and template sources
//! - [`builtin`] - the component, container, screen, list, redux and saga blueprints

mod blueprint;
pub mod builtin;
pub mod options;
mod registry;
mod templates;

pub use blueprint::{Blueprint, Incompatible, OptionKind, OptionSpec, TemplateSelect, TemplateSpec};
pub use options::{OptionValue, RawFlags, ResolvedOptions};
pub use registry::BlueprintRegistry;
pub use templates::BUILTIN_TEMPLATES;
