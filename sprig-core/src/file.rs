use std::{
    io::Write,
    path::{Component, Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// How to handle files that already exist on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Refuse to touch existing files
    #[default]
    Fail,
    /// Replace existing files
    Force,
    /// Leave existing files alone
    Skip,
}

/// What happened to a single target path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// File did not exist and was written
    Created,
    /// File existed and was left untouched
    Skipped,
    /// File existed and was replaced
    Overwritten,
    /// Writing the file failed
    Failed,
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Blueprint root, relative to the project directory (e.g. `App/Components`)
    pub root: PathBuf,
    /// Path below the root (e.g. `My/SubFolder/Test.js`)
    pub relative: PathBuf,
    /// File content
    pub content: String,
}

impl RenderedFile {
    pub fn new(
        root: impl Into<PathBuf>,
        relative: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            relative: relative.into(),
            content: content.into(),
        }
    }

    /// Path relative to the project directory.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.relative)
    }
}

/// Writes rendered files below a project directory.
#[derive(Debug, Clone)]
pub struct Materializer {
    base: PathBuf,
    policy: OverwritePolicy,
}

impl Materializer {
    pub fn new(base: impl Into<PathBuf>, policy: OverwritePolicy) -> Self {
        Self {
            base: base.into(),
            policy,
        }
    }

    /// Project directory all blueprint roots are relative to.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn policy(&self) -> OverwritePolicy {
        self.policy
    }

    /// Absolute target of a rendered file, refusing roots that leave the project
    /// directory and paths that leave their root.
    pub fn target(&self, file: &RenderedFile) -> Result<PathBuf> {
        if !is_plain(&file.root) {
            return Err(Box::new(Error::OutsideRoot {
                path: file.root.clone(),
                root: self.base.clone(),
            }));
        }
        if file.relative.as_os_str().is_empty() || !is_plain(&file.relative) {
            return Err(Box::new(Error::OutsideRoot {
                path: file.relative.clone(),
                root: file.root.clone(),
            }));
        }
        Ok(self.base.join(file.path()))
    }

    /// Check a file against the collision policy without writing anything.
    pub fn preflight(&self, file: &RenderedFile) -> Result<()> {
        let target = self.target(file)?;
        if self.policy == OverwritePolicy::Fail && target.exists() {
            return Err(Box::new(Error::TargetExists { path: file.path() }));
        }
        Ok(())
    }

    /// Write a single file according to the collision policy.
    pub fn materialize(&self, file: &RenderedFile) -> Result<Outcome> {
        let target = self.target(file)?;
        let existed = target.exists();

        let outcome = match (self.policy, existed) {
            (OverwritePolicy::Fail, true) => {
                return Err(Box::new(Error::TargetExists { path: file.path() }));
            }
            (OverwritePolicy::Skip, true) => Outcome::Skipped,
            (OverwritePolicy::Force, true) => {
                write_file(&target, &file.content, true)
                    .map_err(|e| Error::write_failure(file.path(), e))?;
                Outcome::Overwritten
            }
            (policy, false) => {
                let clobber = policy != OverwritePolicy::Fail;
                match write_file(&target, &file.content, clobber) {
                    Ok(()) => Outcome::Created,
                    Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && target.exists() => {
                        return Err(Box::new(Error::TargetExists { path: file.path() }));
                    }
                    Err(e) => return Err(Error::write_failure(file.path(), e)),
                }
            }
        };

        debug!(path = %file.path().display(), ?outcome, "materialized");
        Ok(outcome)
    }
}

/// Only named components: no root, prefix, `.` or `..`.
fn is_plain(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_)))
}

/// Stage `content` next to `path` and rename it into place.
///
/// Without `clobber` the rename fails with `AlreadyExists` if `path` appeared meanwhile.
fn write_file(path: &Path, content: &str, clobber: bool) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut staged = tempfile::Builder::new()
        .prefix(".sprig-")
        .suffix(".tmp")
        .tempfile_in(parent)?;
    staged.write_all(content.as_bytes())?;
    staged.flush()?;

    if clobber {
        staged.persist(path).map_err(|e| e.error)?;
    } else {
        staged.persist_noclobber(path).map_err(|e| e.error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn component(relative: &str, content: &str) -> RenderedFile {
        RenderedFile::new("App/Components", relative, content)
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_noclobber_refuses_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "first").unwrap();

        let err = write_file(&path, "second", false).unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_write_file_leaves_no_staging_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "content", true).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("test.txt")]);
    }

    #[test]
    fn test_materialize_creates() {
        let temp = TempDir::new().unwrap();
        let materializer = Materializer::new(temp.path(), OverwritePolicy::Fail);

        let outcome = materializer
            .materialize(&component("My/SubFolder/Test.js", "x"))
            .unwrap();

        assert_eq!(outcome, Outcome::Created);
        let written = temp.path().join("App/Components/My/SubFolder/Test.js");
        assert_eq!(fs::read_to_string(written).unwrap(), "x");
    }

    #[test]
    fn test_materialize_fail_policy_rejects_existing() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("App/Components/Test.js");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "user code").unwrap();
        let materializer = Materializer::new(temp.path(), OverwritePolicy::Fail);

        let err = materializer
            .materialize(&component("Test.js", "generated"))
            .unwrap_err();

        assert!(matches!(*err, Error::TargetExists { ref path } if path == Path::new("App/Components/Test.js")));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "user code");
    }

    #[test]
    fn test_materialize_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("App/Components/Test.js");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "user code").unwrap();
        let materializer = Materializer::new(temp.path(), OverwritePolicy::Force);

        let outcome = materializer
            .materialize(&component("Test.js", "generated"))
            .unwrap();

        assert_eq!(outcome, Outcome::Overwritten);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "generated");
    }

    #[test]
    fn test_materialize_skip_keeps_existing() {
        let temp = TempDir::new().unwrap();
        let existing = temp.path().join("App/Components/Test.js");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "user code").unwrap();
        let materializer = Materializer::new(temp.path(), OverwritePolicy::Skip);

        let outcome = materializer
            .materialize(&component("Test.js", "generated"))
            .unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(fs::read_to_string(&existing).unwrap(), "user code");
    }

    #[test]
    fn test_preflight_does_not_write() {
        let temp = TempDir::new().unwrap();
        let materializer = Materializer::new(temp.path(), OverwritePolicy::Fail);

        materializer.preflight(&component("Test.js", "x")).unwrap();

        assert!(!temp.path().join("App").exists());
    }

    #[test]
    fn test_target_rejects_escaping_paths() {
        let materializer = Materializer::new("/project", OverwritePolicy::Fail);

        for relative in ["../Test.js", "/etc/passwd", "./Test.js", ""] {
            let err = materializer.target(&component(relative, "")).unwrap_err();
            assert!(
                matches!(*err, Error::OutsideRoot { .. }),
                "{relative} should be rejected"
            );
        }
    }

    #[test]
    fn test_target_rejects_escaping_roots() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let materializer = Materializer::new(&project, OverwritePolicy::Fail);

        for root in ["../escaped/Redux", "/tmp/Redux", "./App/Redux"] {
            let file = RenderedFile::new(root, "TestRedux.js", "x");
            let err = materializer.materialize(&file).unwrap_err();
            assert!(
                matches!(*err, Error::OutsideRoot { .. }),
                "{root} should be rejected"
            );
        }
        assert!(!temp.path().join("escaped").exists());
    }

    #[test]
    fn test_write_failure_reports_path() {
        let temp = TempDir::new().unwrap();
        // A regular file where a directory is needed makes create_dir_all fail.
        fs::write(temp.path().join("App"), "not a directory").unwrap();
        let materializer = Materializer::new(temp.path(), OverwritePolicy::Fail);

        let err = materializer
            .materialize(&component("Test.js", "x"))
            .unwrap_err();

        assert!(matches!(*err, Error::WriteFailure { ref path, .. } if path == Path::new("App/Components/Test.js")));
    }
}
