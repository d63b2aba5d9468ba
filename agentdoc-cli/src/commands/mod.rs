//! Subcommand implementations.

pub mod check;
pub mod diff;
pub mod eject;
pub mod generate;
pub mod list;
pub mod show;

use std::path::PathBuf;

use clap::Args;

/// `--catalog DIR`, shared by every command that reads roles.
#[derive(Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// Directory of YAML role records layered over the built-in roles.
    #[arg(long, value_name = "DIR")]
    pub catalog: Option<PathBuf>,
}
