//! List command report data structures.

use super::output::{Output, Report};

/// Report data listing the available generators.
#[derive(Debug)]
pub struct ListReport {
    pub generators: Vec<GeneratorInfo>,
}

/// One generator, as it applies to the current project.
#[derive(Debug)]
pub struct GeneratorInfo {
    pub keyword: String,
    pub description: String,
    /// Project-relative directories the generator writes into.
    pub roots: Vec<String>,
    pub folder_mode: bool,
    pub options: Vec<OptionInfo>,
}

#[derive(Debug)]
pub struct OptionInfo {
    pub name: String,
    pub description: String,
    pub allowed: Vec<String>,
    /// Effective default, after `sprig.toml` overrides.
    pub default: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Generators ({})", self.generators.len()));
        for generator in &self.generators {
            out.newline();
            out.key_value(&generator.keyword, &generator.description);
            out.key_value_indented("writes", &generator.roots.join(", "));
            if generator.folder_mode {
                out.key_value_indented("--folder", "generate <Name>/index files");
            }
            for option in &generator.options {
                out.key_value_indented(
                    &format!("--{}", option.name),
                    &format!(
                        "{} [{}] (default: {})",
                        option.description,
                        option.allowed.join("|"),
                        option.default
                    ),
                );
            }
        }
    }
}
