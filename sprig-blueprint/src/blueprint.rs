//! Blueprint definitions.
//!
//! A blueprint is the static description of one generator keyword: the
//! templates it renders, where each rendered file goes, and the options the
//! invocation may pass.

use crate::ResolvedOptions;

/// Static definition of a generator.
#[derive(Debug, Clone)]
pub struct Blueprint {
    /// Generator keyword (e.g., "component")
    pub keyword: &'static str,
    /// One-line summary shown by `sprig list`
    pub description: &'static str,
    /// Files produced, in manifest order
    pub templates: &'static [TemplateSpec],
    /// Declared options
    pub options: &'static [OptionSpec],
    /// Option combinations rejected after per-option validation
    pub constraints: &'static [Incompatible],
    /// Whether `--folder` is accepted
    pub folder_mode: bool,
    /// Suffix removed from the base name before casing
    pub strip_suffix: Option<&'static str>,
}

impl Blueprint {
    /// Look up a declared option by name.
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Names of all declared options, in declaration order.
    pub fn option_names(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.name).collect()
    }

    /// Distinct roots this blueprint writes into, in first-use order.
    pub fn roots(&self) -> Vec<&'static str> {
        let mut roots = Vec::new();
        for spec in self.templates {
            if !roots.contains(&spec.root) {
                roots.push(spec.root);
            }
        }
        roots
    }

    /// Base name with [`Blueprint::strip_suffix`] removed, unless that would empty it.
    pub fn base_name<'a>(&self, name: &'a str) -> &'a str {
        match self.strip_suffix.and_then(|suffix| name.strip_suffix(suffix)) {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => name,
        }
    }
}

/// One output file of a blueprint.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    /// Directory below the app directory (e.g., "Components")
    pub root: &'static str,
    /// Output path below `root`, itself a template (e.g., "{{dir}}{{stem}}.{{ext}}")
    pub output: &'static str,
    /// Which template renders the content
    pub template: TemplateSelect,
    /// Boolean option that must be set for this file to be produced
    pub when: Option<&'static str>,
}

impl TemplateSpec {
    /// Template id to render for the given options.
    pub fn template_id(&self, options: &ResolvedOptions) -> &'static str {
        match self.template {
            TemplateSelect::Fixed(id) => id,
            TemplateSelect::ByOptions(select) => select(options),
        }
    }

    /// Whether this file is produced for the given options.
    pub fn is_enabled(&self, options: &ResolvedOptions) -> bool {
        self.when.is_none_or(|flag| options.flag(flag))
    }
}

/// How a template id is chosen.
#[derive(Debug, Clone, Copy)]
pub enum TemplateSelect {
    /// Always the same template
    Fixed(&'static str),
    /// Chosen from the resolved options
    ByOptions(fn(&ResolvedOptions) -> &'static str),
}

/// A declared option.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Flag name, as typed after `--`
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
}

/// Value schema of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// One of a fixed set of values
    Choice {
        allowed: &'static [&'static str],
        default: &'static str,
    },
    /// `true` or `false`
    Flag { default: bool },
}

impl OptionKind {
    /// Allowed values, as shown to the user.
    pub fn allowed(&self) -> &'static [&'static str] {
        match self {
            OptionKind::Choice { allowed, .. } => allowed,
            OptionKind::Flag { .. } => &["true", "false"],
        }
    }

    /// Default value, as shown to the user.
    pub fn default_display(&self) -> &'static str {
        match self {
            OptionKind::Choice { default, .. } => default,
            OptionKind::Flag { default: true } => "true",
            OptionKind::Flag { default: false } => "false",
        }
    }
}

/// Two option values that cannot be combined.
#[derive(Debug, Clone, Copy)]
pub struct Incompatible {
    /// `(option, value)`
    pub first: (&'static str, &'static str),
    /// `(option, value)`
    pub second: (&'static str, &'static str),
    pub reason: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[TemplateSpec] = &[
        TemplateSpec {
            root: "Redux",
            output: "{{dir}}{{name}}Redux.{{ext}}",
            template: TemplateSelect::Fixed("redux/redux"),
            when: None,
        },
        TemplateSpec {
            root: "Tests/Redux",
            output: "{{dir}}{{name}}ReduxTest.{{ext}}",
            template: TemplateSelect::Fixed("redux/test"),
            when: Some("tests"),
        },
        TemplateSpec {
            root: "Redux",
            output: "{{dir}}{{name}}Selectors.{{ext}}",
            template: TemplateSelect::Fixed("redux/selectors"),
            when: None,
        },
    ];

    fn blueprint() -> Blueprint {
        Blueprint {
            keyword: "redux",
            description: "",
            templates: SPECS,
            options: &[OptionSpec {
                name: "tests",
                description: "",
                kind: OptionKind::Flag { default: false },
            }],
            constraints: &[],
            folder_mode: false,
            strip_suffix: Some("Redux"),
        }
    }

    #[test]
    fn test_roots_are_distinct_and_ordered() {
        assert_eq!(blueprint().roots(), vec!["Redux", "Tests/Redux"]);
    }

    #[test]
    fn test_option_lookup() {
        let bp = blueprint();
        assert!(bp.option("tests").is_some());
        assert!(bp.option("codeType").is_none());
        assert_eq!(bp.option_names(), vec!["tests"]);
    }

    #[test]
    fn test_strip_suffix() {
        let bp = blueprint();
        assert_eq!(bp.base_name("UserRedux"), "User");
        assert_eq!(bp.base_name("User"), "User");
        assert_eq!(bp.base_name("Redux"), "Redux");
    }

    #[test]
    fn test_option_kind_display() {
        let choice = OptionKind::Choice {
            allowed: &["Row", "Grid"],
            default: "Row",
        };
        assert_eq!(choice.allowed(), &["Row", "Grid"]);
        assert_eq!(choice.default_display(), "Row");
        assert_eq!(OptionKind::Flag { default: false }.allowed(), &["true", "false"]);
        assert_eq!(OptionKind::Flag { default: true }.default_display(), "true");
    }
}
