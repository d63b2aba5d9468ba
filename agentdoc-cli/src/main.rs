//! agentdoc: generate agent role documentation from the role catalog.
//!
//! # Usage
//!
//! ```text
//! agentdoc                                   (same as `agentdoc generate`)
//! agentdoc generate [--out DIR] [--catalog DIR] [--date YYYY-MM-DD] [--only ID]... [--dry-run]
//! agentdoc list [--catalog DIR] [--json]
//! agentdoc show <ID> [--catalog DIR] [--date YYYY-MM-DD]
//! agentdoc diff [--out DIR] [--catalog DIR] [--date YYYY-MM-DD] [--only ID]...
//! agentdoc check [--catalog DIR]
//! agentdoc eject <DIR> [--force]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    check::CheckArgs, diff::DiffArgs, eject::EjectArgs, generate::GenerateArgs, list::ListArgs,
    show::ShowArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "agentdoc",
    version,
    about = "Generate markdown documentation for agent roles",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every role and write `<out>/<id>.md` (the default command).
    Generate(GenerateArgs),

    /// List roles in the catalog.
    List(ListArgs),

    /// Print one rendered role document to stdout.
    Show(ShowArgs),

    /// Show a unified diff of what `generate` would change.
    Diff(DiffArgs),

    /// Check role records for empty, unsafe or duplicate ids.
    Check(CheckArgs),

    /// Write the built-in roles as editable YAML files.
    Eject(EjectArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        None => GenerateArgs::default().run(),
        Some(Commands::Generate(args)) => args.run(),
        Some(Commands::List(args)) => args.run(),
        Some(Commands::Show(args)) => args.run(),
        Some(Commands::Diff(args)) => args.run(),
        Some(Commands::Check(args)) => args.run(),
        Some(Commands::Eject(args)) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
