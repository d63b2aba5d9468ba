//! agentdoc core library: role record types, the role catalog, lint checks.
//!
//! - [`types`]: [`RoleRecord`] and its parts
//! - [`catalog`]: built-in roles, user catalog directories, merge / save
//! - [`lint`]: optional, non-blocking record checks
//! - [`error`]: [`CatalogError`]

pub mod catalog;
pub mod error;
pub mod lint;
pub mod types;

pub use error::CatalogError;
pub use lint::{lint, LintIssue};
pub use types::{
    Contract, DocTemplate, Handoff, RaciRow, Responsibility, RoleId, RoleRecord, Scope,
    ToolCategories, ToolCategory,
};
