use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for sprig operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid identifier '{identifier}'")]
    #[diagnostic(
        code(sprig::invalid_identifier),
        help(
            "{reason}. Names start with a letter and use only letters, digits, '_' or '-'; folders are separated by '/'."
        )
    )]
    InvalidIdentifier { identifier: String, reason: String },

    #[error("unknown generator '{keyword}'")]
    #[diagnostic(
        code(sprig::unknown_generator),
        help("available generators are: {available}")
    )]
    UnknownGenerator { keyword: String, available: String },

    #[error("invalid value '{value}' for option '--{option}'")]
    #[diagnostic(code(sprig::invalid_option), help("allowed values are: {allowed}"))]
    InvalidOption {
        option: String,
        value: String,
        allowed: String,
    },

    #[error("unknown option '--{option}' for generator '{generator}'")]
    #[diagnostic(code(sprig::unknown_option), help("{known}"))]
    UnknownOption {
        option: String,
        generator: String,
        known: String,
    },

    #[error("options '--{first}' and '--{second}' cannot be combined")]
    #[diagnostic(code(sprig::incompatible_options), help("{reason}"))]
    IncompatibleOptions {
        first: String,
        second: String,
        reason: String,
    },

    #[error("template '{template}' references undefined variable '{variable}'")]
    #[diagnostic(
        code(sprig::template_variable_missing),
        help("the blueprint and its template are out of sync")
    )]
    TemplateVariableMissing { template: String, variable: String },

    #[error("failed to render template '{template}': {message}")]
    #[diagnostic(
        code(sprig::template),
        help("check the template source for unbalanced or unknown expressions")
    )]
    Template { template: String, message: String },

    #[error("'{}' already exists", path.display())]
    #[diagnostic(
        code(sprig::target_exists),
        help("pass --force to overwrite it or --skip-existing to keep it")
    )]
    TargetExists { path: PathBuf },

    #[error("'{}' resolves outside of '{}'", path.display(), root.display())]
    #[diagnostic(
        code(sprig::outside_root),
        help("generated paths and the configured app_dir must stay inside the project")
    )]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(
        code(sprig::write_failure),
        help("files listed before this one were already written")
    )]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(sprig::io), help("check that the file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}'", path.display())]
    #[diagnostic(code(sprig::config), help("see the [project] and [generators] tables"))]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {key} '{value}' in [project]")]
    #[diagnostic(code(sprig::config::invalid), help("{reason}"))]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}

impl Error {
    /// Create an invalid identifier error
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid option error listing the allowed values
    pub fn invalid_option(
        option: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Box<Self> {
        Box::new(Error::InvalidOption {
            option: option.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        })
    }

    /// Create an unknown option error listing the options the generator accepts
    pub fn unknown_option(
        option: impl Into<String>,
        generator: impl Into<String>,
        known: &[&str],
    ) -> Box<Self> {
        let known = if known.is_empty() {
            "this generator takes no options".to_string()
        } else {
            format!(
                "known options are: {}",
                known
                    .iter()
                    .map(|name| format!("--{}", name))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        };
        Box::new(Error::UnknownOption {
            option: option.into(),
            generator: generator.into(),
            known,
        })
    }

    /// Create a write failure for the given path
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::WriteFailure {
            path: path.into(),
            source,
        })
    }

    /// Create an invalid `[project]` setting error
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    /// Stable name of the failure kind, used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidIdentifier { .. } => "InvalidIdentifier",
            Error::UnknownGenerator { .. } => "UnknownGenerator",
            Error::InvalidOption { .. } => "InvalidOption",
            Error::UnknownOption { .. } => "UnknownOption",
            Error::IncompatibleOptions { .. } => "IncompatibleOptions",
            Error::TemplateVariableMissing { .. } => "TemplateVariableMissing",
            Error::Template { .. } => "Template",
            Error::TargetExists { .. } => "TargetExists",
            Error::OutsideRoot { .. } => "OutsideRoot",
            Error::WriteFailure { .. } => "WriteFailure",
            Error::Io { .. } => "Io",
            Error::Config { .. } => "Config",
            Error::InvalidConfig { .. } => "InvalidConfig",
        }
    }
}
