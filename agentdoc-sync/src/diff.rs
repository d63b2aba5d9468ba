//! Unified diff of what a generation run would change, for `agentdoc diff`.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use agentdoc_renderer::Renderer;

use crate::pipeline::{load_records, GenerateOptions};
use crate::writer::read_existing;
use crate::SyncError;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render every selected role and compare it to what is on disk.
///
/// Missing files diff against empty content. No files are written.
pub fn diff_catalog(opts: &GenerateOptions) -> Result<Vec<FileDiff>, SyncError> {
    let (records, _issues) = load_records(opts.catalog_dir.as_deref(), &opts.only)?;
    let renderer = Renderer::new(opts.render_context());

    let mut diffs = Vec::new();
    for doc in renderer.render_all(&records, &opts.out_dir) {
        let rendered = normalize_line_endings(&doc.content);
        let existing = read_existing_or_empty(&doc.path)?;
        if existing == rendered {
            continue;
        }

        let relative = doc
            .path
            .strip_prefix(&opts.out_dir)
            .unwrap_or(doc.path.as_path());
        let old_header = format!("a/{}", relative.display());
        let new_header = format!("b/{}", relative.display());
        let unified = TextDiff::from_lines(&existing, &rendered)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff {
            path: doc.path,
            unified_diff: unified,
        });
    }
    Ok(diffs)
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    Ok(read_existing(path)?
        .map(|bytes| normalize_line_endings(&String::from_utf8_lossy(&bytes)))
        .unwrap_or_default())
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
