//! Non-blocking checks over a set of role records.
//!
//! Rendering never consults these; callers decide whether an issue is worth a
//! warning or a failed exit code.

use std::collections::HashSet;
use std::fmt;

use crate::types::{RoleId, RoleRecord};

/// A problem found in a role record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintIssue {
    /// The identifier is empty; the output file would be `.md`.
    EmptyId { index: usize },
    /// The identifier contains characters outside `[a-z0-9._-]` or starts with `.`.
    UnsafeId { id: RoleId },
    /// Two records share an identifier and would write the same file.
    DuplicateId { id: RoleId },
    /// The record has no title.
    EmptyTitle { id: RoleId },
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintIssue::EmptyId { index } => write!(f, "record #{index} has an empty id"),
            LintIssue::UnsafeId { id } => {
                write!(f, "id '{id}' is not filesystem/URL safe (use [a-z0-9._-])")
            }
            LintIssue::DuplicateId { id } => write!(f, "id '{id}' is used by more than one record"),
            LintIssue::EmptyTitle { id } => write!(f, "role '{id}' has an empty title"),
        }
    }
}

/// Check every record; issues come back in record order.
pub fn lint(records: &[RoleRecord]) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&RoleId> = HashSet::new();
    let mut reported: HashSet<&RoleId> = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        let id = &record.id;
        if id.as_str().is_empty() {
            issues.push(LintIssue::EmptyId { index });
        } else if !is_safe_id(id.as_str()) {
            issues.push(LintIssue::UnsafeId { id: id.clone() });
        }

        if !seen.insert(id) && reported.insert(id) {
            issues.push(LintIssue::DuplicateId { id: id.clone() });
        }

        if record.title.trim().is_empty() {
            issues.push(LintIssue::EmptyTitle { id: id.clone() });
        }
    }
    issues
}

fn is_safe_id(id: &str) -> bool {
    !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
}
