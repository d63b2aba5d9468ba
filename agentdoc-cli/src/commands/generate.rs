//! `agentdoc generate`: render every role and write it to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use agentdoc_sync::{
    pipeline::{self, DEFAULT_OUT_DIR},
    GenerateOptions, WriteResult,
};

use super::CatalogArgs;

/// Arguments for `agentdoc generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory for `<id>.md` files (created if absent).
    #[arg(long, short = 'o', value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Date stamped into front-matter and changelog (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Only generate this role id; repeat for several.
    #[arg(long, value_name = "ID")]
    pub only: Vec<String>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        GenerateArgs {
            out: PathBuf::from(DEFAULT_OUT_DIR),
            catalog: CatalogArgs::default(),
            date: None,
            only: Vec::new(),
            dry_run: false,
        }
    }
}

impl GenerateArgs {
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            out_dir: self.out.clone(),
            catalog_dir: self.catalog.catalog.clone(),
            date: self.date,
            only: self.only.clone(),
            dry_run: self.dry_run,
        }
    }

    pub fn run(self) -> Result<()> {
        let report = pipeline::run(&self.options())
            .with_context(|| format!("generate failed for '{}'", self.out.display()))?;
        print_results(&report.out_dir, &report.writes, self.dry_run);
        Ok(())
    }
}

fn print_results(out_dir: &Path, writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let count = |pred: fn(&WriteResult) -> bool| writes.iter().filter(|w| pred(w)).count();
    let created = count(|w| matches!(w, WriteResult::Created { .. }));
    let updated = count(|w| matches!(w, WriteResult::Updated { .. }));
    let identical = count(|w| matches!(w, WriteResult::Identical { .. }));

    if dry_run {
        println!(
            "{prefix}✓ {} document(s) would be written to {}",
            writes.len(),
            out_dir.display()
        );
    } else {
        println!(
            "{prefix}✓ regenerated {} document(s) in {} ({created} created, {updated} updated, {identical} identical)",
            writes.len(),
            out_dir.display()
        );
    }

    for w in writes {
        let path = w.path().display();
        match w {
            WriteResult::Created { .. } => println!("  {}  {path}", "+".green()),
            WriteResult::Updated { .. } => println!("  {}  {path}", "✎".yellow()),
            WriteResult::Identical { .. } => println!("  {}  {path}", "·".bright_black()),
            WriteResult::WouldWrite { .. } => println!("  ~  {path}"),
        }
    }
}
