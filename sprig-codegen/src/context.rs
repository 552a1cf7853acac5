//! The single input threaded into every render of one invocation.

use serde::Serialize;
use sprig_blueprint::ResolvedOptions;
use sprig_core::ResolvedName;

/// Validated, immutable inputs of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    name: ResolvedName,
    options: ResolvedOptions,
    extension: String,
}

impl ResolutionContext {
    pub fn new(name: ResolvedName, options: ResolvedOptions, extension: impl Into<String>) -> Self {
        Self {
            name,
            options,
            extension: extension.into(),
        }
    }

    pub fn name(&self) -> &ResolvedName {
        &self.name
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Variables visible to templates.
    pub fn template_data(&self) -> TemplateData<'_> {
        let case = &self.name.case;
        TemplateData {
            name: &case.pascal,
            pascal: &case.pascal,
            camel: &case.camel,
            kebab: &case.kebab,
            constant: &case.constant,
            base_name: &self.name.base_name,
            segments: &self.name.segments,
            dir: self.name.dir(),
            stem: self.name.stem(),
            up: "../".repeat(self.name.depth()),
            folder: self.name.folder_mode,
            ext: &self.extension,
            options: &self.options,
        }
    }
}

/// Serialized view of a [`ResolutionContext`].
#[derive(Debug, Serialize)]
pub struct TemplateData<'a> {
    /// Symbol name (Pascal case)
    pub name: &'a str,
    pub pascal: &'a str,
    pub camel: &'a str,
    pub kebab: &'a str,
    pub constant: &'a str,
    pub base_name: &'a str,
    pub segments: &'a [String],
    /// Subfolder path below the blueprint root, `/`-terminated or empty
    pub dir: String,
    /// Primary file stem (`index` in folder mode)
    pub stem: &'a str,
    /// One `../` per level of `dir`
    pub up: String,
    pub folder: bool,
    pub ext: &'a str,
    pub options: &'a ResolvedOptions,
}
