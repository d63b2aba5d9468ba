//! Domain types for agent role records.
//!
//! A [`RoleRecord`] is a plain value: it is built once (from YAML or in code)
//! and only ever read afterwards. Every list keeps author order, which is the
//! order the renderer emits.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Identifier of a role; doubles as the output filename stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl RoleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RoleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RoleId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Record parts
// ---------------------------------------------------------------------------

/// What the role covers and what it explicitly leaves to others.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scope {
    pub included: Vec<String>,
    pub excluded: Vec<String>,
}

/// Input/output contract plus the questions to ask when inputs are missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Contract {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub clarifying_questions: Vec<String>,
}

/// One core responsibility with its standard process.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Responsibility {
    pub title: String,
    /// Suggested duration, free text (e.g. "1-3 个工作日/发布").
    pub duration: String,
    pub steps: Vec<String>,
    pub metrics: Vec<String>,
    /// Definition-of-done items.
    pub done_criteria: Vec<String>,
}

/// A named, copy-ready template body. The body is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocTemplate {
    pub title: String,
    pub body: String,
}

/// A tool category label and its tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCategory {
    pub label: String,
    pub tools: Vec<String>,
}

/// Tool categories in insertion order.
///
/// Serialized as a YAML mapping. Key order on disk is the render order, so
/// this is a list of pairs rather than a hash map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolCategories(pub Vec<ToolCategory>);

impl ToolCategories {
    pub fn iter(&self) -> std::slice::Iter<'_, ToolCategory> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, Vec<String>)> for ToolCategories {
    fn from_iter<I: IntoIterator<Item = (L, Vec<String>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, tools)| ToolCategory {
                    label: label.into(),
                    tools,
                })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ToolCategories {
    type Item = &'a ToolCategory;
    type IntoIter = std::slice::Iter<'a, ToolCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for ToolCategories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.label, &category.tools)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ToolCategories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = ToolCategories;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of tool category to a list of tool names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, tools)) = access.next_entry::<String, Vec<String>>()? {
                    categories.push(ToolCategory { label, tools });
                }
                Ok(ToolCategories(categories))
            }

            // `tools: ~` or a bare `tools:` key.
            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(ToolCategories::default())
            }
        }

        deserializer.deserialize_any(OrderedVisitor)
    }
}

type RaciTuple = (String, String, String, String, String);

/// One RACI row: scenario, Responsible, Accountable, Consulted, Informed.
///
/// Stored on disk as a 5-element sequence in exactly that column order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RaciTuple", into = "RaciTuple")]
pub struct RaciRow {
    pub scenario: String,
    pub responsible: String,
    pub accountable: String,
    pub consulted: String,
    pub informed: String,
}

impl RaciRow {
    pub fn new(
        scenario: impl Into<String>,
        responsible: impl Into<String>,
        accountable: impl Into<String>,
        consulted: impl Into<String>,
        informed: impl Into<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            responsible: responsible.into(),
            accountable: accountable.into(),
            consulted: consulted.into(),
            informed: informed.into(),
        }
    }

    /// Cells in table column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.scenario,
            &self.responsible,
            &self.accountable,
            &self.consulted,
            &self.informed,
        ]
    }
}

impl From<RaciTuple> for RaciRow {
    fn from((scenario, responsible, accountable, consulted, informed): RaciTuple) -> Self {
        Self {
            scenario,
            responsible,
            accountable,
            consulted,
            informed,
        }
    }
}

impl From<RaciRow> for RaciTuple {
    fn from(row: RaciRow) -> Self {
        (
            row.scenario,
            row.responsible,
            row.accountable,
            row.consulted,
            row.informed,
        )
    }
}

/// Upstream needs, downstream deliverables and the RACI table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Handoff {
    pub upstream: Vec<String>,
    pub downstream: Vec<String>,
    pub raci: Vec<RaciRow>,
}

// ---------------------------------------------------------------------------
// RoleRecord
// ---------------------------------------------------------------------------

/// Full documentation content for one agent role.
///
/// No field is validated on construction; see [`crate::lint`] for the
/// optional checks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleRecord {
    pub id: RoleId,
    pub title: String,
    pub description: String,
    pub scope: Scope,
    pub contract: Contract,
    pub responsibilities: Vec<Responsibility>,
    pub tools: ToolCategories,
    pub quality_gates: Vec<String>,
    pub templates: Vec<DocTemplate>,
    pub kpis: Vec<String>,
    pub handoff: Handoff,
    pub changelog_note: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
