//! Generate command report data structures.

use sprig_core::{Manifest, Outcome};

use super::output::{Output, Report};

/// Report data from one generator invocation.
#[derive(Debug)]
pub struct GenerateReport {
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were materialized; one entry per target.
    Written(Manifest),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the project directory.
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    pub fn written(manifest: Manifest) -> Self {
        Self {
            result: GenerationResult::Written(manifest),
        }
    }

    pub fn preview(files: Vec<PreviewFile>) -> Self {
        Self {
            result: GenerationResult::Preview(files),
        }
    }

    /// JSON form: the manifest entries, or the previewed paths and contents.
    pub fn to_json(&self) -> serde_json::Result<String> {
        match &self.result {
            GenerationResult::Written(manifest) => serde_json::to_string_pretty(manifest.entries()),
            GenerationResult::Preview(files) => {
                let files: Vec<_> = files
                    .iter()
                    .map(|f| serde_json::json!({ "path": f.path, "content": f.content }))
                    .collect();
                serde_json::to_string_pretty(&files)
            }
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(manifest) => render_manifest(out, manifest),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

fn render_manifest(out: &mut dyn Output, manifest: &Manifest) {
    for entry in manifest {
        let path = entry.path.display().to_string();
        match entry.outcome {
            Outcome::Created => out.added_item(&path),
            Outcome::Overwritten => out.changed_item(&path),
            Outcome::Skipped => out.unchanged_item(&path),
            Outcome::Failed => out.failed_item(&path),
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}
