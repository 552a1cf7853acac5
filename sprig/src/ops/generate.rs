//! Generate operation - run one generator against the project directory.

use std::path::Path;

use eyre::Result;
use sprig_blueprint::{BlueprintRegistry, RawFlags};
use sprig_codegen::{GenerateError, Generator, Request};
use sprig_core::{OverwritePolicy, ProjectConfig};
use tracing::debug;

use crate::reports::{GenerateReport, PreviewFile};

/// Generic switches, which may also appear among the trailing generator options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Switches {
    pub folder: bool,
    pub force: bool,
    pub skip_existing: bool,
    pub dry_run: bool,
    pub json: bool,
}

impl Switches {
    /// Collision policy selected by `--force` / `--skip-existing`.
    pub fn policy(&self) -> Result<OverwritePolicy> {
        match (self.force, self.skip_existing) {
            (true, true) => eyre::bail!("--force and --skip-existing cannot be combined"),
            (true, false) => Ok(OverwritePolicy::Force),
            (false, true) => Ok(OverwritePolicy::Skip),
            (false, false) => Ok(OverwritePolicy::Fail),
        }
    }

    fn slot(&mut self, name: &str) -> Option<&mut bool> {
        match name {
            "folder" => Some(&mut self.folder),
            "force" => Some(&mut self.force),
            "skip-existing" => Some(&mut self.skip_existing),
            "dry-run" => Some(&mut self.dry_run),
            "json" => Some(&mut self.json),
            _ => None,
        }
    }
}

fn switch_value(name: &str, value: &str) -> Result<bool> {
    match value {
        "" | "true" => Ok(true),
        "false" => Ok(false),
        other => eyre::bail!("invalid value '{}' for --{}; expected true or false", other, name),
    }
}

/// Identifier and folder mode for `<identifier> [<name>]`.
///
/// With `--folder`, a second name is generated as a plain file inside the folder
/// chain given first: `--folder Folder InFolder` yields `Folder/InFolder`.
pub fn target(identifier: &str, name: Option<&str>, folder: bool) -> Result<(String, bool)> {
    match name {
        None => Ok((identifier.to_string(), folder)),
        Some(name) if folder => Ok((format!("{}/{}", identifier, name), false)),
        Some(name) => eyre::bail!(
            "unexpected argument '{}'; a second name is only accepted with --folder",
            name
        ),
    }
}

/// Split trailing `--name=value`, `--name value` and bare `--name` arguments into
/// generator flags, picking out generic switches along the way.
///
/// A bare flag carries an empty value.
pub fn split_options(args: &[String], switches: &mut Switches) -> Result<RawFlags> {
    let mut flags = RawFlags::new();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        let Some(flag) = arg.strip_prefix("--").filter(|f| !f.is_empty()) else {
            eyre::bail!("unexpected argument '{}'; generator options look like --name=value", arg);
        };

        if let Some((name, value)) = flag.split_once('=') {
            match switches.slot(name) {
                Some(slot) => *slot = switch_value(name, value)?,
                None => {
                    flags.insert(name.to_string(), value.to_string());
                }
            }
            continue;
        }
        if let Some(slot) = switches.slot(flag) {
            *slot = true;
            continue;
        }

        let value = match iter.peek() {
            Some(next) if !next.starts_with("--") => iter.next().cloned().unwrap_or_default(),
            _ => String::new(),
        };
        flags.insert(flag.to_string(), value);
    }

    Ok(flags)
}

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory generated paths are relative to.
    pub project_dir: &'a Path,
    pub config: &'a ProjectConfig,
    pub request: Request,
    /// Render without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Option defaults from `[generators.<keyword>]` apply beneath the request's own flags.
pub fn generate(opts: GenerateOptions) -> std::result::Result<GenerateReport, GenerateError> {
    let mut request = opts.request;
    let mut flags = opts.config.generator_defaults(&request.keyword);
    flags.extend(std::mem::take(&mut request.flags));
    request.flags = flags;
    debug!(keyword = %request.keyword, flags = ?request.flags, "merged option defaults");

    let registry = BlueprintRegistry::builtin();
    let generator = Generator::new(&registry, opts.config.project.clone())?;

    if opts.dry_run {
        let files = generator
            .preview(&request)?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path().display().to_string(),
                content: f.content,
            })
            .collect();
        return Ok(GenerateReport::preview(files));
    }

    let manifest = generator.generate(opts.project_dir, &request)?;
    Ok(GenerateReport::written(manifest))
}
