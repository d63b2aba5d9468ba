//! Generation pipeline shared by `agentdoc generate`, `show` and `diff`.
//!
//! resolve catalog → lint (warn only) → select → render → write.
//! Records are processed one after another; the first I/O error aborts.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use agentdoc_core::{catalog, lint, LintIssue, RoleRecord};
use agentdoc_renderer::{RenderContext, Renderer};

use crate::error::{io_err, SyncError};
use crate::writer::{write_document, WriteResult};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "agents";

/// Knobs for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory that receives `<id>.md` files.
    pub out_dir: PathBuf,
    /// Optional directory of YAML role records layered over the built-ins.
    pub catalog_dir: Option<PathBuf>,
    /// Date stamped into documents; `None` means today.
    pub date: Option<NaiveDate>,
    /// Restrict the run to these role ids. Empty means every role.
    pub only: Vec<String>,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            catalog_dir: None,
            date: None,
            only: Vec::new(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    pub fn render_context(&self) -> RenderContext {
        match self.date {
            Some(date) => RenderContext::for_date(date),
            None => RenderContext::today(),
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub out_dir: PathBuf,
    pub writes: Vec<WriteResult>,
    pub issues: Vec<LintIssue>,
}

/// Resolve the catalog, log lint issues and apply the `only` filter.
pub fn load_records(
    catalog_dir: Option<&Path>,
    only: &[String],
) -> Result<(Vec<RoleRecord>, Vec<LintIssue>), SyncError> {
    let records = catalog::resolve(catalog_dir)?;
    let issues = lint(&records);
    for issue in &issues {
        tracing::warn!("{issue}");
    }
    Ok((select(records, only)?, issues))
}

/// Keep records whose id is in `only`, in catalog order.
///
/// An empty filter keeps everything; an id that matches nothing is an error.
pub fn select(records: Vec<RoleRecord>, only: &[String]) -> Result<Vec<RoleRecord>, SyncError> {
    if only.is_empty() {
        return Ok(records);
    }
    if let Some(missing) = only
        .iter()
        .find(|id| !records.iter().any(|r| r.id.as_str() == id.as_str()))
    {
        return Err(SyncError::UnknownRole {
            id: missing.clone(),
        });
    }
    Ok(records
        .into_iter()
        .filter(|r| only.iter().any(|id| id == r.id.as_str()))
        .collect())
}

/// Regenerate documents into `opts.out_dir`.
pub fn run(opts: &GenerateOptions) -> Result<GenerateReport, SyncError> {
    let (records, issues) = load_records(opts.catalog_dir.as_deref(), &opts.only)?;
    let renderer = Renderer::new(opts.render_context());

    if !opts.dry_run {
        std::fs::create_dir_all(&opts.out_dir).map_err(|e| io_err(&opts.out_dir, e))?;
    }

    let mut writes = Vec::with_capacity(records.len());
    for doc in renderer.render_all(&records, &opts.out_dir) {
        writes.push(write_document(&doc.path, &doc.content, opts.dry_run)?);
    }

    tracing::info!(
        "generated {} role document(s) dated {} into {}",
        writes.len(),
        renderer.context().date_string(),
        opts.out_dir.display()
    );
    Ok(GenerateReport {
        out_dir: opts.out_dir.clone(),
        writes,
        issues,
    })
}
