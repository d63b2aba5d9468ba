//! `agentdoc show <id>`: print one rendered document.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use agentdoc_renderer::{RenderContext, Renderer};
use agentdoc_sync::pipeline::load_records;

use super::CatalogArgs;

/// Arguments for `agentdoc show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Role id to render.
    pub id: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Date stamped into front-matter and changelog (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let (records, _) = load_records(self.catalog.catalog.as_deref(), &[self.id.clone()])
            .with_context(|| format!("cannot show '{}'", self.id))?;
        let ctx = self.date.map_or_else(RenderContext::today, RenderContext::for_date);
        let renderer = Renderer::new(ctx);
        for record in &records {
            print!("{}", renderer.render(record));
        }
        Ok(())
    }
}
