//! `agentdoc diff`: show unified diffs for what `generate` would write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use agentdoc_sync::{diff_catalog, pipeline::DEFAULT_OUT_DIR, GenerateOptions};

use super::CatalogArgs;

/// Arguments for `agentdoc diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Output directory to compare against.
    #[arg(long, short = 'o', value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Date stamped into the rendered side (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Only diff this role id; repeat for several.
    #[arg(long, value_name = "ID")]
    pub only: Vec<String>,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let opts = GenerateOptions {
            out_dir: self.out.clone(),
            catalog_dir: self.catalog.catalog,
            date: self.date,
            only: self.only,
            dry_run: true,
        };
        let diffs = diff_catalog(&opts)
            .with_context(|| format!("diff failed for '{}'", self.out.display()))?;

        if diffs.is_empty() {
            println!("No differences in '{}'.", self.out.display());
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}
