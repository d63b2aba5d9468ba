//! `agentdoc check`: lint the resolved catalog.
//!
//! Generation never blocks on these issues; this command is the strict gate
//! and exits non-zero when any are found.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use agentdoc_core::{catalog, lint};

use super::CatalogArgs;

/// Arguments for `agentdoc check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let records =
            catalog::resolve(self.catalog.catalog.as_deref()).context("failed to load catalog")?;
        let issues = lint(&records);

        if issues.is_empty() {
            println!("{} {} role(s), no issues", "✓".green(), records.len());
            return Ok(());
        }

        for issue in &issues {
            println!("  {}  {issue}", "✗".red());
        }
        bail!("{} issue(s) found in {} role(s)", issues.len(), records.len());
    }
}
