//! Ordered record of what one generator invocation did to the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Outcome;

/// A single manifest line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Path relative to the project directory.
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Per-file outcomes, in blueprint template order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a path.
    pub fn record(&mut self, path: impl Into<PathBuf>, outcome: Outcome) {
        self.entries.push(ManifestEntry {
            path: path.into(),
            outcome,
        });
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Outcome recorded for a path, if any.
    pub fn outcome(&self, path: impl AsRef<Path>) -> Option<Outcome> {
        self.entries
            .iter()
            .find(|e| e.path == path.as_ref())
            .map(|e| e.outcome)
    }

    /// Number of entries with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    /// True when no entry failed.
    pub fn is_complete(&self) -> bool {
        self.count(Outcome::Failed) == 0
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
