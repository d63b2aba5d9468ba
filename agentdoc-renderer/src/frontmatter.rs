//! `---`-delimited metadata block.

/// A front-matter value: a scalar or a list rendered as an indented sub-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontMatterValue {
    Scalar(String),
    List(Vec<String>),
}

/// Ordered key/value metadata. Keys render in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontMatter {
    entries: Vec<(String, FrontMatterValue)>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push((key.into(), FrontMatterValue::Scalar(value.into())));
        self
    }

    pub fn list<I, S>(mut self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.entries.push((key.into(), FrontMatterValue::List(items)));
        self
    }

    /// The block from opening to closing `---`, with no trailing newline.
    pub fn render(&self) -> String {
        let mut lines = vec!["---".to_string()];
        for (key, value) in &self.entries {
            match value {
                FrontMatterValue::Scalar(v) => lines.push(format!("{key}: {v}")),
                FrontMatterValue::List(items) => {
                    lines.push(format!("{key}:"));
                    lines.extend(items.iter().map(|item| format!("  - {item}")));
                }
            }
        }
        lines.push("---".to_string());
        lines.join("\n")
    }
}
