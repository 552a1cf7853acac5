//! Keyword to blueprint lookup.
//!
//! The registry is built once at startup and handed to the generator by
//! reference; nothing mutates it afterwards.
//!
//! # Example
//!
//! ```ignore
//! let registry = BlueprintRegistry::builtin();
//! let component = registry.get("component")?;
//! assert_eq!(component.roots(), vec!["Components"]);
//! ```

use indexmap::IndexMap;
use sprig_core::{Error, Result};
use tracing::debug;

use crate::{Blueprint, builtin, templates::BUILTIN_TEMPLATES};

/// Blueprints by keyword, plus the template sources they reference.
#[derive(Debug, Clone, Default)]
pub struct BlueprintRegistry {
    blueprints: IndexMap<&'static str, Blueprint>,
    templates: IndexMap<&'static str, &'static str>,
}

impl BlueprintRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in blueprint and template.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for blueprint in builtin::blueprints() {
            registry.register(blueprint);
        }
        for &(id, source) in BUILTIN_TEMPLATES {
            registry.register_template(id, source);
        }
        registry
    }

    /// Register a blueprint, replacing any previous one with the same keyword.
    pub fn register(&mut self, blueprint: Blueprint) {
        self.blueprints.insert(blueprint.keyword, blueprint);
    }

    /// Register a template source under an id.
    pub fn register_template(&mut self, id: &'static str, source: &'static str) {
        self.templates.insert(id, source);
    }

    /// Look up a blueprint by keyword.
    pub fn get(&self, keyword: &str) -> Result<&Blueprint> {
        match self.blueprints.get(keyword) {
            Some(blueprint) => {
                debug!(keyword, "blueprint found");
                Ok(blueprint)
            }
            None => Err(Box::new(Error::UnknownGenerator {
                keyword: keyword.to_string(),
                available: self.keywords().join(", "),
            })),
        }
    }

    /// Registered keywords, in registration order.
    pub fn keywords(&self) -> Vec<&'static str> {
        self.blueprints.keys().copied().collect()
    }

    /// All blueprints, in registration order.
    pub fn blueprints(&self) -> impl Iterator<Item = &Blueprint> {
        self.blueprints.values()
    }

    /// All template sources as `(id, source)`.
    pub fn templates(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.templates.iter().map(|(id, source)| (*id, *source))
    }

    /// Source of a single template.
    pub fn template(&self, id: &str) -> Option<&'static str> {
        self.templates.get(id).copied()
    }
}
