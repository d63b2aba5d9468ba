//! `agentdoc eject <dir>`: write the built-in roles as editable YAML.
//!
//! The resulting directory can be passed back via `--catalog`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agentdoc_core::catalog;

/// Arguments for `agentdoc eject`.
#[derive(Args, Debug)]
pub struct EjectArgs {
    /// Directory that receives `<id>.yaml` files.
    pub dir: PathBuf,

    /// Overwrite files that already exist.
    #[arg(long)]
    pub force: bool,
}

impl EjectArgs {
    pub fn run(self) -> Result<()> {
        let records = catalog::builtin().context("failed to load built-in roles")?;

        let mut written = 0usize;
        let mut skipped = 0usize;
        for record in &records {
            let path = catalog::record_path_at(&self.dir, record.id.as_str());
            if path.exists() && !self.force {
                println!("  {}  {} (exists, use --force)", "·".bright_black(), path.display());
                skipped += 1;
                continue;
            }
            let path = catalog::save_record_at(&self.dir, record)
                .with_context(|| format!("failed to write role '{}'", record.id))?;
            println!("  {}  {}", "+".green(), path.display());
            written += 1;
        }

        println!(
            "✓ ejected {written} role(s) into {} ({skipped} skipped)",
            self.dir.display()
        );
        Ok(())
    }
}
