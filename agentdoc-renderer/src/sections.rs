//! Section sub-renderers.
//!
//! Each function takes only the slice of the record it renders and returns a
//! self-contained fragment. [`crate::Renderer`] joins fragments with a single
//! `\n`; the leading `\n` in every `##` heading produces the blank lines
//! between sections. Text fields are emitted as-is, with no markdown escaping.

use agentdoc_core::{Contract, DocTemplate, Handoff, Responsibility, Scope, ToolCategories};

use crate::context::{BASE_LINK, METRICS_LINK};

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const DESCRIPTION_HEADING: &str = "角色描述";
pub const SCOPE_HEADING: &str = "适用范围 / 不适用范围";
pub const CONTRACT_HEADING: &str = "输入/输出契约（Contract）";
pub const RESPONSIBILITIES_HEADING: &str = "核心职责与标准化流程";
pub const TOOLS_HEADING: &str = "技能与工具";
pub const QUALITY_GATES_HEADING: &str = "质量门禁（Quality Gates）";
pub const TEMPLATES_HEADING: &str = "模板（可复制使用）";
pub const KPI_HEADING: &str = "KPI（用于复盘与绩效）";
pub const HANDOFF_HEADING: &str = "协作与交接（Handoff + RACI）";
pub const CHANGELOG_HEADING: &str = "Changelog";

const RACI_HEADER: &str = "| 场景 | R | A | C | I |";
const RACI_SEPARATOR: &str = "|---|---|---|---|---|";

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

fn section(title: &str) -> String {
    format!("\n## {title}\n")
}

fn sub(title: &str) -> String {
    format!("\n### {title}\n")
}

fn bullets(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("- {item}"))
}

fn bullet_lines(items: &[String]) -> String {
    bullets(items).collect::<Vec<_>>().join("\n")
}

/// Join parts with `\n` and close the fragment with one more `\n`.
fn finish(parts: Vec<String>) -> String {
    parts.join("\n") + "\n"
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Title line, narrative description and the horizontal rule below it.
pub fn header(title: &str, description: &str) -> String {
    [
        format!("# {title}\n"),
        format!("## {DESCRIPTION_HEADING}\n{}\n", description.trim()),
        "---\n".to_string(),
    ]
    .join("\n")
}

pub fn scope(scope: &Scope) -> String {
    let body = format!(
        "**适用范围**：\n{}\n\n**不适用范围**：\n{}\n",
        bullet_lines(&scope.included),
        bullet_lines(&scope.excluded),
    );
    format!("{}\n{body}", section(SCOPE_HEADING))
}

pub fn contract(contract: &Contract) -> String {
    let mut parts = vec![section(CONTRACT_HEADING), "**输入（Inputs）**：".to_string()];
    parts.extend(bullets(&contract.inputs));
    parts.push("\n**输出（Outputs）**：".to_string());
    parts.extend(bullets(&contract.outputs));
    parts.push("\n**输入缺失时优先追问（默认问题清单）**：".to_string());
    parts.extend(bullets(&contract.clarifying_questions));
    finish(parts)
}

/// One responsibility block. Step numbering starts at 1 for every block.
pub fn responsibility(resp: &Responsibility) -> String {
    let mut parts = vec![
        sub(&resp.title),
        format!("**建议时长**：{}\n", resp.duration),
        "**标准化流程**：\n".to_string(),
    ];
    parts.extend(
        resp.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1)),
    );
    parts.push("\n**可量化指标（建议阈值）**：".to_string());
    parts.extend(bullets(&resp.metrics));
    parts.push("\n**交付标准（DoD）**：".to_string());
    parts.extend(bullets(&resp.done_criteria));
    finish(parts)
}

pub fn responsibilities(items: &[Responsibility]) -> String {
    let blocks: Vec<String> = items.iter().map(responsibility).collect();
    format!(
        "{}\n{}\n",
        section(RESPONSIBILITIES_HEADING),
        blocks.join("\n")
    )
}

/// Bold label plus bullets per category, in insertion order.
pub fn tools(tools: &ToolCategories) -> String {
    let mut parts = vec![section(TOOLS_HEADING)];
    for category in tools {
        parts.push(format!("**{}**：", category.label));
        parts.extend(bullets(&category.tools));
        parts.push(String::new());
    }
    finish(parts)
}

pub fn quality_gates(gates: &[String]) -> String {
    let mut parts = vec![
        section(QUALITY_GATES_HEADING),
        format!("通用门禁定义见 [{BASE_LINK}]({BASE_LINK})。\n"),
        "**本角色专属门禁**：".to_string(),
    ];
    parts.extend(bullets(gates));
    finish(parts)
}

/// Each body goes verbatim into a fenced block, minus leading/trailing blank lines.
pub fn templates(items: &[DocTemplate]) -> String {
    let mut parts = vec![
        section(TEMPLATES_HEADING),
        format!("通用模板见 [{BASE_LINK}]({BASE_LINK})。\n"),
    ];
    for template in items {
        parts.push(format!("### {}\n", template.title));
        parts.push(format!("```\n{}\n```\n", template.body.trim_matches('\n')));
    }
    finish(parts)
}

pub fn kpis(items: &[String]) -> String {
    let mut parts = vec![
        section(KPI_HEADING),
        format!("常用指标口径见 [{METRICS_LINK}]({METRICS_LINK})。\n"),
    ];
    parts.extend(bullets(items));
    finish(parts)
}

/// Upstream/downstream lists and the 5-column RACI table.
pub fn handoff(handoff: &Handoff) -> String {
    let mut parts = vec![
        section(HANDOFF_HEADING),
        "**上游我需要（Upstream）**：".to_string(),
    ];
    parts.extend(bullets(&handoff.upstream));
    parts.push("\n**我交付给下游（Downstream）**：".to_string());
    parts.extend(bullets(&handoff.downstream));
    parts.push("\n**RACI（示例）**：\n".to_string());
    parts.push(RACI_HEADER.to_string());
    parts.push(RACI_SEPARATOR.to_string());
    parts.extend(
        handoff
            .raci
            .iter()
            .map(|row| format!("| {} |", row.cells().join(" | "))),
    );
    finish(parts)
}

pub fn changelog(date: &str, version: &str, note: &str) -> String {
    format!("\n## {CHANGELOG_HEADING}\n\n- {date} v{version} — {note}\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use agentdoc_core::RaciRow;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_trims_description() {
        assert_eq!(
            header("QA Engineer Agent", "  负责质量。\n"),
            "# QA Engineer Agent\n\n## 角色描述\n负责质量。\n\n---\n"
        );
    }

    #[test]
    fn scope_lists_both_sides() {
        let out = scope(&Scope {
            included: strings(&["a", "b"]),
            excluded: strings(&["c"]),
        });
        assert_eq!(
            out,
            "\n## 适用范围 / 不适用范围\n\n**适用范围**：\n- a\n- b\n\n**不适用范围**：\n- c\n"
        );
    }

    #[test]
    fn responsibility_numbers_steps_from_one() {
        let out = responsibility(&Responsibility {
            title: "测试策略与计划".to_string(),
            duration: "2 天".to_string(),
            steps: strings(&["s1", "s2", "s3"]),
            metrics: strings(&["m1", "m2"]),
            done_criteria: strings(&["d1", "d2"]),
        });
        assert_eq!(
            out,
            "\n### 测试策略与计划\n\n**建议时长**：2 天\n\n**标准化流程**：\n\n\
             1. s1\n2. s2\n3. s3\n\n**可量化指标（建议阈值）**：\n- m1\n- m2\n\n\
             **交付标准（DoD）**：\n- d1\n- d2\n"
        );
    }

    #[test]
    fn numbering_restarts_per_responsibility() {
        let resp = Responsibility {
            title: "t".to_string(),
            steps: strings(&["x", "y"]),
            ..Default::default()
        };
        let out = responsibilities(&[resp.clone(), resp]);
        assert_eq!(out.matches("1. x").count(), 2);
        assert_eq!(out.matches("2. y").count(), 2);
        assert!(!out.contains("3. "));
    }

    #[test]
    fn tools_in_insertion_order() {
        let tools: ToolCategories = [
            ("协作", strings(&["Jira"])),
            ("发布", strings(&["Runbook", "Feature Flags"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            super::tools(&tools),
            "\n## 技能与工具\n\n**协作**：\n- Jira\n\n**发布**：\n- Runbook\n- Feature Flags\n\n"
        );
    }

    #[test]
    fn zero_templates_keeps_only_link() {
        let out = templates(&[]);
        assert_eq!(
            out,
            "\n## 模板（可复制使用）\n\n通用模板见 [../instructions/agent-base.md](../instructions/agent-base.md)。\n\n"
        );
        assert!(!out.contains("```"));
    }

    #[test]
    fn template_body_trimmed_of_blank_lines_only() {
        let out = templates(&[DocTemplate {
            title: "T".to_string(),
            body: "\n\n  indented\n- item\n\n".to_string(),
        }]);
        assert!(out.contains("### T\n\n```\n  indented\n- item\n```\n"));
    }

    #[test]
    fn gates_and_kpis_carry_fixed_links() {
        assert!(quality_gates(&[]).contains("](../instructions/agent-base.md)"));
        assert!(kpis(&strings(&["k"])).contains("](../instructions/metrics-glossary.md)。\n\n- k\n"));
    }

    #[test]
    fn handoff_table_has_header_separator_and_rows() {
        let out = handoff(&Handoff {
            upstream: strings(&["u"]),
            downstream: strings(&["d"]),
            raci: vec![RaciRow::new(
                "发布Go/No-Go",
                "发布经理",
                "PM/业务负责人",
                "QA/DevOps/开发",
                "全体",
            )],
        });
        let table: Vec<_> = out.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(
            table,
            [
                "| 场景 | R | A | C | I |",
                "|---|---|---|---|---|",
                "| 发布Go/No-Go | 发布经理 | PM/业务负责人 | QA/DevOps/开发 | 全体 |",
            ]
        );
    }

    #[test]
    fn empty_sections_keep_headings() {
        assert!(contract(&Contract::default()).starts_with("\n## 输入/输出契约（Contract）\n"));
        assert_eq!(responsibilities(&[]), "\n## 核心职责与标准化流程\n\n\n");
        assert_eq!(super::tools(&ToolCategories::default()), "\n## 技能与工具\n\n");
    }

    #[test]
    fn changelog_line() {
        assert_eq!(
            changelog("2025-01-15", "0.2", "初版"),
            "\n## Changelog\n\n- 2025-01-15 v0.2 — 初版\n"
        );
    }
}
