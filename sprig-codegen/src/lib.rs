//! Rendering and generation pipeline for the sprig scaffolding generator.
//!
//! # Module Organization
//!
//! - [`ResolutionContext`] - validated inputs of one invocation, as template variables
//! - [`Renderer`] - strict handlebars rendering of blueprint templates
//! - [`Generator`] - lookup, resolution, rendering and materialization in order

mod context;
mod generator;
mod render;

pub use context::{ResolutionContext, TemplateData};
pub use generator::{GenerateError, Generator, Plan, Request};
pub use render::Renderer;
