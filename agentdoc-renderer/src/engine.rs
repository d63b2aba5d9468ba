//! Document assembly: [`Section`] order and [`Renderer`].
//!
//! # Document layout
//!
//! | #  | Section       | Opens with                          |
//! |----|---------------|-------------------------------------|
//! | 1  | FrontMatter   | `---`                               |
//! | 2  | Header        | `# <title>` then `## 角色描述`       |
//! | 3  | Scope         | `## 适用范围 / 不适用范围`            |
//! | 4  | Contract      | `## 输入/输出契约（Contract）`        |
//! | 5  | Responsibilities | `## 核心职责与标准化流程`          |
//! | 6  | Tools         | `## 技能与工具`                       |
//! | 7  | QualityGates  | `## 质量门禁（Quality Gates）`        |
//! | 8  | Templates     | `## 模板（可复制使用）`                |
//! | 9  | Kpis          | `## KPI（用于复盘与绩效）`             |
//! | 10 | Handoff       | `## 协作与交接（Handoff + RACI）`      |
//! | 11 | Changelog     | `## Changelog`                        |

use std::path::{Path, PathBuf};

use agentdoc_core::{RoleId, RoleRecord};

use crate::context::RenderContext;
use crate::sections;

/// File extension of rendered documents.
pub const DOC_EXTENSION: &str = "md";

/// Every `##` heading a document contains, in document order.
pub const SECTION_HEADINGS: [&str; 10] = [
    sections::DESCRIPTION_HEADING,
    sections::SCOPE_HEADING,
    sections::CONTRACT_HEADING,
    sections::RESPONSIBILITIES_HEADING,
    sections::TOOLS_HEADING,
    sections::QUALITY_GATES_HEADING,
    sections::TEMPLATES_HEADING,
    sections::KPI_HEADING,
    sections::HANDOFF_HEADING,
    sections::CHANGELOG_HEADING,
];

/// `<out_dir>/<id>.md`: pure, no I/O.
pub fn output_path(out_dir: &Path, id: &RoleId) -> PathBuf {
    out_dir.join(format!("{id}.{DOC_EXTENSION}"))
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// The fixed sequence of document fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    FrontMatter,
    Header,
    Scope,
    Contract,
    Responsibilities,
    Tools,
    QualityGates,
    Templates,
    Kpis,
    Handoff,
    Changelog,
}

impl Section {
    /// All sections in render order.
    pub fn all() -> &'static [Section] {
        &[
            Section::FrontMatter,
            Section::Header,
            Section::Scope,
            Section::Contract,
            Section::Responsibilities,
            Section::Tools,
            Section::QualityGates,
            Section::Templates,
            Section::Kpis,
            Section::Handoff,
            Section::Changelog,
        ]
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// One rendered document and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDoc {
    pub id: RoleId,
    pub path: PathBuf,
    pub content: String,
}

/// Pure record-to-markdown renderer.
///
/// Output depends only on the record and the [`RenderContext`]; the same
/// pair always yields byte-identical text.
#[derive(Debug, Clone)]
pub struct Renderer {
    ctx: RenderContext,
}

impl Renderer {
    pub fn new(ctx: RenderContext) -> Self {
        Renderer { ctx }
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Render a single section fragment of `record`.
    pub fn render_section(&self, record: &RoleRecord, section: Section) -> String {
        match section {
            Section::FrontMatter => self.ctx.front_matter(record).render(),
            Section::Header => sections::header(&record.title, &record.description),
            Section::Scope => sections::scope(&record.scope),
            Section::Contract => sections::contract(&record.contract),
            Section::Responsibilities => sections::responsibilities(&record.responsibilities),
            Section::Tools => sections::tools(&record.tools),
            Section::QualityGates => sections::quality_gates(&record.quality_gates),
            Section::Templates => sections::templates(&record.templates),
            Section::Kpis => sections::kpis(&record.kpis),
            Section::Handoff => sections::handoff(&record.handoff),
            Section::Changelog => sections::changelog(
                &self.ctx.date_string(),
                &self.ctx.doc_version,
                &record.changelog_note,
            ),
        }
    }

    /// Render the full document: every section in order, joined by `\n`,
    /// ending in exactly one newline.
    pub fn render(&self, record: &RoleRecord) -> String {
        let fragments: Vec<String> = Section::all()
            .iter()
            .map(|section| self.render_section(record, *section))
            .collect();
        let mut doc = fragments.join("\n").trim_end().to_string();
        doc.push('\n');
        doc
    }

    /// Render every record and pair it with its path under `out_dir`.
    pub fn render_all(&self, records: &[RoleRecord], out_dir: &Path) -> Vec<RenderedDoc> {
        records
            .iter()
            .map(|record| RenderedDoc {
                id: record.id.clone(),
                path: output_path(out_dir, &record.id),
                content: self.render(record),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use agentdoc_core::{Handoff, RaciRow, Responsibility, Scope};
    use chrono::NaiveDate;

    fn renderer() -> Renderer {
        Renderer::new(RenderContext::for_date(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        ))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn qa_record() -> RoleRecord {
        RoleRecord {
            id: RoleId::from("qa-engineer"),
            title: "QA Engineer Agent".to_string(),
            description: "QA".to_string(),
            scope: Scope {
                included: strings(&["in-1", "in-2", "in-3"]),
                excluded: strings(&["out-1"]),
            },
            responsibilities: vec![Responsibility {
                title: "测试策略与计划".to_string(),
                duration: "2-5 个工作日/迭代".to_string(),
                steps: strings(&["参与需求评审", "定义测试范围", "定义准入/准出标准"]),
                metrics: strings(&["需求覆盖率 = 100%", "计划偏差 ≤ 15%"]),
                done_criteria: strings(&["测试计划已评审", "风险已登记"]),
            }],
            handoff: Handoff {
                raci: vec![RaciRow::new(
                    "发布Go/No-Go",
                    "发布经理",
                    "PM/业务负责人",
                    "QA/DevOps/开发",
                    "全体",
                )],
                ..Default::default()
            },
            changelog_note: "初版".to_string(),
            ..Default::default()
        }
    }

    fn heading_positions(doc: &str) -> Vec<usize> {
        SECTION_HEADINGS
            .iter()
            .map(|h| {
                doc.find(&format!("\n## {h}\n"))
                    .unwrap_or_else(|| panic!("missing heading {h}"))
            })
            .collect()
    }

    #[test]
    fn render_is_deterministic() {
        let r = renderer();
        let record = qa_record();
        assert_eq!(r.render(&record), r.render(&record));
    }

    #[test]
    fn all_headings_present_in_order_for_empty_record() {
        let doc = renderer().render(&RoleRecord::default());
        let positions = heading_positions(&doc);
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(doc.starts_with("---\nid: \n"));
        assert!(doc.ends_with('\n') && !doc.ends_with("\n\n"));
    }

    #[test]
    fn qa_scenario_steps_and_metrics() {
        let doc = renderer().render(&qa_record());
        assert!(doc.contains("\n### 测试策略与计划\n"));
        assert!(doc.contains("1. 参与需求评审\n2. 定义测试范围\n3. 定义准入/准出标准\n"));
        assert!(!doc.contains("\n4. "));
        assert!(doc.contains("**可量化指标（建议阈值）**：\n- 需求覆盖率 = 100%\n- 计划偏差 ≤ 15%\n"));
    }

    #[test]
    fn scope_items_appear_once_in_order() {
        let doc = renderer().render(&qa_record());
        let lines: Vec<_> = doc.lines().filter(|l| l.starts_with("- in-")).collect();
        assert_eq!(lines, ["- in-1", "- in-2", "- in-3"]);
    }

    #[test]
    fn raci_table_row_count() {
        let doc = renderer().render(&qa_record());
        let rows: Vec<_> = doc.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(rows.len(), 1 + 2);
        assert_eq!(
            rows[2],
            "| 发布Go/No-Go | 发布经理 | PM/业务负责人 | QA/DevOps/开发 | 全体 |"
        );
    }

    #[test]
    fn date_only_touches_front_matter_and_changelog() {
        let record = qa_record();
        let a = renderer().render(&record);
        let b = Renderer::new(RenderContext::for_date(
            NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        ))
        .render(&record);
        let diff: Vec<_> = a.lines().zip(b.lines()).filter(|(x, y)| x != y).collect();
        assert_eq!(
            diff,
            [
                ("last_updated: 2025-01-15", "last_updated: 2030-06-01"),
                ("- 2025-01-15 v0.2 — 初版", "- 2030-06-01 v0.2 — 初版"),
            ]
        );
    }

    #[test]
    fn render_all_maps_ids_to_paths() {
        let records = vec![qa_record(), RoleRecord {
            id: RoleId::from("architect"),
            ..Default::default()
        }];
        let docs = renderer().render_all(&records, Path::new("/out"));
        let paths: Vec<_> = docs.iter().map(|d| d.path.clone()).collect();
        assert_eq!(
            paths,
            [PathBuf::from("/out/qa-engineer.md"), PathBuf::from("/out/architect.md")]
        );
    }

    #[test]
    fn section_list_is_complete() {
        assert_eq!(Section::all().len(), 11);
        assert_eq!(Section::all()[0], Section::FrontMatter);
        assert_eq!(Section::all()[10], Section::Changelog);
    }
}
