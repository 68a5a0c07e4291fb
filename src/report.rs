//! Markdown report generation.
//!
//! [`build_report`] is a pure projection of the worksheet: it never mutates
//! state, and the generation timestamp is a parameter so output is fully
//! determined by its inputs. Free text goes into the document verbatim;
//! escaping is an HTML concern, not a Markdown one.

use chrono::{DateTime, Local};

use crate::models::{heuristic, Worksheet};

/// Placeholder for empty optional fields. Sections are never omitted.
fn dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Render the full Markdown report.
///
/// Section order is fixed: header, group, interface, tasks, the complete
/// 10-heuristic reference appendix, every issue in insertion order, the
/// top-3 recap in selection order, and a closing recommendation.
pub fn build_report(worksheet: &Worksheet, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();

    out.push_str("# Heuristic Usability Evaluation – Nielsen\n");
    out.push_str(&format!(
        "**Date:** {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    let group = &worksheet.group;
    let members = group.members.join(", ");
    out.push_str("## Group\n");
    out.push_str(&format!("- **Group name:** {}\n", dash(&group.name)));
    out.push_str(&format!("- **Course:** {}\n", dash(&group.course)));
    out.push_str(&format!("- **Members:** {}\n\n", dash(&members)));

    let iface = &worksheet.iface;
    out.push_str("## Interface under evaluation\n");
    out.push_str(&format!("- **Type:** {}\n", dash(&iface.kind)));
    out.push_str(&format!("- **Name:** {}\n", dash(&iface.name)));
    out.push_str(&format!("- **URL:** {}\n\n", dash(&iface.url)));

    out.push_str("## Simulated tasks\n");
    if iface.tasks.is_empty() {
        out.push_str("-\n");
    } else {
        for task in &iface.tasks {
            out.push_str(&format!("- {}\n", task));
        }
    }
    out.push_str("\n---\n\n");

    // Fixed reference appendix: all 10 entries, regardless of usage.
    out.push_str("## Review of Nielsen's heuristics\n");
    for h in heuristic::catalog() {
        out.push_str(&format!("- **{}. {}** — {}\n", h.id, h.title, h.tip));
    }
    out.push_str("\n---\n\n");

    out.push_str("## Identified issues\n");
    if worksheet.issues.is_empty() {
        out.push_str("_No issues recorded._\n");
    } else {
        for issue in &worksheet.issues {
            let title = heuristic::title_for(issue.heuristic_id);
            out.push_str(&format!("### #{} — {}\n", issue.id, title));
            out.push_str(&format!("**Description:** {}\n", issue.desc));
            out.push_str(&format!("**Violated heuristic:** {}\n", title));
            out.push_str(&format!("**Proposed solution:** {}\n", issue.solution));
            out.push_str(&format!("**Severity:** {}\n\n", issue.severity));
        }
    }
    out.push_str("---\n\n");

    out.push_str("## Top 3 issues for presentation\n");
    let top = worksheet.top3_issues();
    if top.is_empty() {
        out.push_str("_None selected._\n");
    } else {
        for issue in top {
            let h = heuristic::by_id(issue.heuristic_id);
            let title = h.map(|h| h.title).unwrap_or("(unknown heuristic)");
            out.push_str(&format!(
                "- #{} — **{}** (Sev {}): {}\n",
                issue.id, title, issue.severity, issue.desc
            ));
        }
    }
    out.push_str("\n---\n\n");

    out.push_str("## Conclusion\n");
    out.push_str(
        "The proposed fixes aim to improve efficiency, reduce errors, and raise user \
         satisfaction. Prioritize severity 3–4 corrections on critical tasks.\n",
    );

    out
}
