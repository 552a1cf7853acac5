//! Project configuration (`sprig.toml`).

use std::path::{Component, Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Error, Result};

/// Default configuration filename, looked up in the project directory.
pub const CONFIG_FILE: &str = "sprig.toml";

/// Root of `sprig.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectSection,

    /// Per-generator option defaults, e.g. `[generators.list] codeType = "flatlist"`
    #[serde(default)]
    pub generators: IndexMap<String, IndexMap<String, toml::Value>>,
}

/// The `[project]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Directory holding every blueprint root
    #[serde(default = "default_app_dir")]
    pub app_dir: PathBuf,

    /// Extension of generated files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_app_dir() -> PathBuf {
    PathBuf::from("App")
}

fn default_extension() -> String {
    "js".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
            extension: default_extension(),
        }
    }
}

impl ProjectSection {
    /// Check that `app_dir` stays inside the project and `extension` is a bare extension.
    pub fn validate(&self) -> Result<()> {
        let app_dir_escapes = self.app_dir.as_os_str().is_empty()
            || self
                .app_dir
                .components()
                .any(|c| !matches!(c, Component::Normal(_)));
        if app_dir_escapes {
            return Err(Error::invalid_config(
                "app_dir",
                self.app_dir.display().to_string(),
                "app_dir must be a relative path inside the project, without '.' or '..'",
            ));
        }

        let ext = &self.extension;
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(Error::invalid_config(
                "extension",
                ext.clone(),
                "extension is written without the leading dot and without path separators",
            ));
        }
        Ok(())
    }
}

impl ProjectConfig {
    /// Read and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_path(&content, path)
    }

    /// Read `path` if it exists, otherwise fall back to defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse configuration content, attributing errors to `path`.
    pub fn from_str_with_path(content: &str, path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            Box::new(Error::Config {
                path: path.as_ref().to_path_buf(),
                source: e,
            })
        })?;
        config.project.validate()?;
        Ok(config)
    }

    /// Option defaults configured for a generator, as raw flag strings.
    pub fn generator_defaults(&self, keyword: &str) -> IndexMap<String, String> {
        self.generators
            .get(keyword)
            .map(|table| {
                table
                    .iter()
                    .map(|(name, value)| (name.clone(), toml_value_to_string(value)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Convert a TOML value to the string form a command-line flag would carry
pub fn toml_value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}
