//! Render context: the date and document metadata shared by every record.

use chrono::{Local, NaiveDate};

use agentdoc_core::RoleRecord;

use crate::frontmatter::FrontMatter;

/// Relative link to the shared agent base instructions.
pub const BASE_LINK: &str = "../instructions/agent-base.md";

/// Relative link to the shared metrics glossary.
pub const METRICS_LINK: &str = "../instructions/metrics-glossary.md";

/// Version tag stamped into front-matter and changelog.
pub const DEFAULT_DOC_VERSION: &str = "0.2";

/// Document language stamped into front-matter.
pub const DEFAULT_LANGUAGE: &str = "zh-CN";

/// Everything a render depends on besides the record itself.
///
/// The date is the only input that changes between runs; pin it with
/// [`RenderContext::for_date`] for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub date: NaiveDate,
    pub doc_version: String,
    pub language: String,
}

impl RenderContext {
    /// Context stamped with `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        RenderContext {
            date,
            doc_version: DEFAULT_DOC_VERSION.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Context stamped with the local calendar date.
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Front-matter block for `record`: id, name, version, last_updated, language.
    pub fn front_matter(&self, record: &RoleRecord) -> FrontMatter {
        FrontMatter::new()
            .scalar("id", record.id.as_str())
            .scalar("name", &record.title)
            .scalar("version", &self.doc_version)
            .scalar("last_updated", self.date_string())
            .scalar("language", &self.language)
    }
}
