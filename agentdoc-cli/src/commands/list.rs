//! `agentdoc list`: roles in the resolved catalog.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use agentdoc_core::{catalog, RoleRecord};

use super::CatalogArgs;

/// Arguments for `agentdoc list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let records =
            catalog::resolve(self.catalog.catalog.as_deref()).context("failed to load catalog")?;
        if self.json {
            print_json(&records)?;
            return Ok(());
        }
        print_table(&records);
        Ok(())
    }
}

#[derive(Serialize)]
struct RoleSummaryJson<'a> {
    id: &'a str,
    title: &'a str,
    responsibilities: usize,
    tool_categories: usize,
    templates: usize,
    raci_rows: usize,
}

#[derive(Tabled)]
struct RoleTableRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "responsibilities")]
    responsibilities: usize,
    #[tabled(rename = "tool categories")]
    tool_categories: usize,
    #[tabled(rename = "templates")]
    templates: usize,
    #[tabled(rename = "raci rows")]
    raci_rows: usize,
}

fn print_json(records: &[RoleRecord]) -> Result<()> {
    let payload: Vec<RoleSummaryJson<'_>> = records
        .iter()
        .map(|r| RoleSummaryJson {
            id: r.id.as_str(),
            title: &r.title,
            responsibilities: r.responsibilities.len(),
            tool_categories: r.tools.len(),
            templates: r.templates.len(),
            raci_rows: r.handoff.raci.len(),
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize role list")?
    );
    Ok(())
}

fn print_table(records: &[RoleRecord]) {
    if records.is_empty() {
        println!("No roles in catalog.");
        return;
    }
    let rows: Vec<RoleTableRow> = records
        .iter()
        .map(|r| RoleTableRow {
            id: r.id.to_string(),
            title: r.title.clone(),
            responsibilities: r.responsibilities.len(),
            tool_categories: r.tools.len(),
            templates: r.templates.len(),
            raci_rows: r.handoff.raci.len(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{} role(s)", records.len());
}
