//! Identifier resolution and casing.
//!
//! An identifier such as `My/SubFolder/Test` names the thing to generate:
//! every segment before the last is a subfolder kept verbatim, the last one
//! is the base name from which all symbol and file names are derived.

use serde::Serialize;

use crate::{Error, Result};

/// Separators accepted between identifier segments.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Casing variants of a base name, computed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariants {
    /// `TestGrid`
    pub pascal: String,
    /// `testGrid`
    pub camel: String,
    /// `test-grid`
    pub kebab: String,
    /// `TEST_GRID`
    pub constant: String,
}

impl CaseVariants {
    /// Derive all variants from a single base name.
    pub fn new(base: &str) -> Self {
        Self {
            pascal: to_pascal_case(base),
            camel: to_camel_case(base),
            kebab: to_kebab_case(base),
            constant: to_constant_case(base),
        }
    }
}

/// A parsed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedName {
    /// Subfolder chain, in order, exactly as written.
    pub segments: Vec<String>,
    /// Last segment, as written.
    pub base_name: String,
    pub case: CaseVariants,
    /// Whether output goes into a `<base>/index` folder layout.
    pub folder_mode: bool,
}

impl ResolvedName {
    /// Directory relative to the blueprint root, with a trailing `/` unless empty.
    ///
    /// In folder mode the Pascal base name becomes the innermost directory.
    pub fn dir(&self) -> String {
        let mut dir = String::new();
        for segment in &self.segments {
            dir.push_str(segment);
            dir.push('/');
        }
        if self.folder_mode {
            dir.push_str(&self.case.pascal);
            dir.push('/');
        }
        dir
    }

    /// File stem of the primary output.
    pub fn stem(&self) -> &str {
        if self.folder_mode {
            "index"
        } else {
            &self.case.pascal
        }
    }

    /// Number of directory levels created beneath a blueprint root.
    pub fn depth(&self) -> usize {
        self.segments.len() + usize::from(self.folder_mode)
    }
}

/// Parse a raw identifier into subfolders, base name and casing variants.
pub fn resolve(identifier: &str, folder_mode: bool) -> Result<ResolvedName> {
    if identifier.trim().is_empty() {
        return Err(Error::invalid_identifier(identifier, "the identifier is empty"));
    }
    if identifier.chars().all(|c| SEPARATORS.contains(&c)) {
        return Err(Error::invalid_identifier(
            identifier,
            "the identifier contains only separators",
        ));
    }
    if identifier.starts_with(SEPARATORS) {
        return Err(Error::invalid_identifier(
            identifier,
            "absolute paths are not allowed",
        ));
    }
    if identifier.ends_with(SEPARATORS) {
        return Err(Error::invalid_identifier(
            identifier,
            "the name must not end with a separator",
        ));
    }

    let mut parts: Vec<&str> = identifier.split(SEPARATORS).collect();
    let base_name = parts.pop().unwrap_or_default();

    for segment in &parts {
        if let Some(reason) = validate_segment(segment) {
            return Err(Error::invalid_identifier(identifier, reason));
        }
    }
    if let Some(reason) = validate_base_name(base_name) {
        return Err(Error::invalid_identifier(identifier, reason));
    }

    Ok(ResolvedName {
        segments: parts.iter().map(|s| s.to_string()).collect(),
        base_name: base_name.to_string(),
        case: CaseVariants::new(base_name),
        folder_mode,
    })
}

fn validate_segment(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return Some("folder names must not be empty".to_string());
    }
    if segment == "." || segment == ".." {
        return Some(format!("'{}' is not a valid folder name", segment));
    }
    segment
        .chars()
        .find(|c| !is_name_char(*c))
        .map(|c| format!("folder '{}' contains '{}'", segment, c))
}

fn validate_base_name(name: &str) -> Option<String> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("the name is empty".to_string()),
        Some(c) if !c.is_ascii_alphabetic() => {
            Some(format!("the name must start with a letter, not '{}'", c))
        }
        _ => chars
            .find(|c| !is_name_char(*c))
            .map(|c| format!("the name contains '{}'", c)),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Split a name into words at `_`, `-`, whitespace and case transitions.
///
/// An uppercase run followed by a lowercase letter ends one character early,
/// so `HTTPServer` splits into `HTTP` and `Server`.
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a name to PascalCase (e.g., "test-grid" -> "TestGrid")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a name to camelCase (e.g., "TestGrid" -> "testGrid")
pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut iter = words.iter();
    let mut result = match iter.next() {
        Some(first) => first.to_lowercase(),
        None => return String::new(),
    };
    for word in iter {
        result.push_str(&capitalize(word));
    }
    result
}

/// Convert a name to kebab-case (e.g., "TestGrid" -> "test-grid")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a name to CONSTANT_CASE (e.g., "testGrid" -> "TEST_GRID")
pub fn to_constant_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}
