//! Option parsing against a blueprint's option schema.

use indexmap::IndexMap;
use serde::Serialize;
use sprig_core::{Error, Result};
use tracing::debug;

use crate::{Blueprint, OptionKind};

/// Raw `--name=value` flags as given by the caller, in the order given.
pub type RawFlags = IndexMap<String, String>;

/// A validated option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Choice(String),
    Flag(bool),
}

impl OptionValue {
    fn matches(&self, value: &str) -> bool {
        match self {
            OptionValue::Choice(v) => v == value,
            OptionValue::Flag(b) => parse_bool(value) == Some(*b),
        }
    }
}

/// Every declared option of a blueprint, with a validated value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedOptions {
    values: IndexMap<&'static str, OptionValue>,
}

impl ResolvedOptions {
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Value of a choice option.
    pub fn choice(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(OptionValue::Choice(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Value of a flag option; `false` when absent.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(OptionValue::Flag(true)))
    }

    /// Whether option `name` currently holds `value`.
    pub fn is(&self, name: &str, value: &str) -> bool {
        self.values.get(name).is_some_and(|v| v.matches(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validate `raw` against the blueprint's schema and fill in defaults.
///
/// Unknown flags are rejected first, then each value is checked against its
/// option, then cross-option constraints are applied.
pub fn parse(blueprint: &Blueprint, raw: &RawFlags) -> Result<ResolvedOptions> {
    if let Some(unknown) = raw.keys().find(|name| blueprint.option(name).is_none()) {
        return Err(Error::unknown_option(
            unknown.as_str(),
            blueprint.keyword,
            &blueprint.option_names(),
        ));
    }

    let mut values = IndexMap::new();
    for spec in blueprint.options {
        let value = match raw.get(spec.name) {
            Some(given) => parse_value(spec.name, spec.kind, given)?,
            None => {
                debug!(option = spec.name, default = spec.kind.default_display(), "using default");
                default_value(spec.kind)
            }
        };
        values.insert(spec.name, value);
    }
    let resolved = ResolvedOptions { values };

    for constraint in blueprint.constraints {
        let (first, first_value) = constraint.first;
        let (second, second_value) = constraint.second;
        if resolved.is(first, first_value) && resolved.is(second, second_value) {
            return Err(Box::new(Error::IncompatibleOptions {
                first: first.to_string(),
                second: second.to_string(),
                reason: constraint.reason.to_string(),
            }));
        }
    }

    Ok(resolved)
}

/// Choices match case-insensitively and are stored in their declared spelling.
fn parse_value(name: &str, kind: OptionKind, given: &str) -> Result<OptionValue> {
    match kind {
        OptionKind::Choice { allowed, .. } => allowed
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(given))
            .map(|canonical| OptionValue::Choice(canonical.to_string()))
            .ok_or_else(|| Error::invalid_option(name, given, allowed)),
        OptionKind::Flag { .. } => parse_bool(given)
            .map(OptionValue::Flag)
            .ok_or_else(|| Error::invalid_option(name, given, kind.allowed())),
    }
}

fn default_value(kind: OptionKind) -> OptionValue {
    match kind {
        OptionKind::Choice { default, .. } => OptionValue::Choice(default.to_string()),
        OptionKind::Flag { default } => OptionValue::Flag(default),
    }
}

/// A bare `--flag` arrives as an empty value and means `true`.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Incompatible, OptionSpec};

    const LIST_OPTIONS: &[OptionSpec] = &[
        OptionSpec {
            name: "type",
            description: "",
            kind: OptionKind::Choice {
                allowed: &["Row", "Grid"],
                default: "Row",
            },
        },
        OptionSpec {
            name: "dataType",
            description: "",
            kind: OptionKind::Choice {
                allowed: &["Single", "Sectioned"],
                default: "Single",
            },
        },
        OptionSpec {
            name: "tests",
            description: "",
            kind: OptionKind::Flag { default: false },
        },
    ];

    fn blueprint() -> Blueprint {
        Blueprint {
            keyword: "list",
            description: "",
            templates: &[],
            options: LIST_OPTIONS,
            constraints: &[Incompatible {
                first: ("type", "Grid"),
                second: ("dataType", "Sectioned"),
                reason: "grids cannot be sectioned",
            }],
            folder_mode: false,
            strip_suffix: None,
        }
    }

    fn flags(pairs: &[(&str, &str)]) -> RawFlags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_fill_every_option() {
        let resolved = parse(&blueprint(), &RawFlags::new()).unwrap();

        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved.choice("type"), Some("Row"));
        assert_eq!(resolved.choice("dataType"), Some("Single"));
        assert!(!resolved.flag("tests"));
    }

    #[test]
    fn test_supplied_values_override_defaults() {
        let resolved = parse(&blueprint(), &flags(&[("type", "grid"), ("tests", "")])).unwrap();

        assert_eq!(resolved.choice("type"), Some("Grid"));
        assert!(resolved.flag("tests"));
        assert!(resolved.is("type", "Grid"));
        assert!(resolved.is("tests", "true"));
    }

    #[test]
    fn test_invalid_choice() {
        let err = parse(&blueprint(), &flags(&[("type", "Column")])).unwrap_err();
        match *err {
            Error::InvalidOption {
                ref option,
                ref value,
                ref allowed,
            } => {
                assert_eq!(option, "type");
                assert_eq!(value, "Column");
                assert_eq!(allowed, "Row, Grid");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_flag_value() {
        let err = parse(&blueprint(), &flags(&[("tests", "maybe")])).unwrap_err();
        assert!(matches!(*err, Error::InvalidOption { ref allowed, .. } if allowed == "true, false"));
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&blueprint(), &flags(&[("codeTpye", "flatlist")])).unwrap_err();
        match *err {
            Error::UnknownOption {
                ref option,
                ref generator,
                ..
            } => {
                assert_eq!(option, "codeTpye");
                assert_eq!(generator, "list");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_incompatible_options() {
        let err = parse(
            &blueprint(),
            &flags(&[("type", "Grid"), ("dataType", "Sectioned")]),
        )
        .unwrap_err();
        match *err {
            Error::IncompatibleOptions {
                ref first,
                ref second,
                ..
            } => {
                assert_eq!(first, "type");
                assert_eq!(second, "dataType");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }
}
