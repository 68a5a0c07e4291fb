//! Slide deck generation.
//!
//! [`build_slides`] is the second pure projection of the worksheet. The
//! sequence is fixed (title/team, interface, criteria, one slide per top-3
//! pick or a single placeholder when nothing is selected, closing) and no
//! slide is ever skipped for missing data; blanks render as placeholders.

use serde::{Deserialize, Serialize};

use crate::models::{heuristic, Worksheet};

/// One slide: a title line and a plain-text body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

fn dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Render the slide sequence. For a top-3 selection of size `k` the deck
/// has `3 + max(k, 1) + 1` slides.
pub fn build_slides(worksheet: &Worksheet) -> Vec<Slide> {
    let mut slides = Vec::new();

    let group = &worksheet.group;
    let group_name = if group.name.is_empty() {
        "Evaluation team"
    } else {
        group.name.as_str()
    };
    let members = group.members.join(", ");
    slides.push(Slide {
        title: "Title & Team".to_string(),
        body: format!(
            "{}\nCourse: {}\nMembers: {}",
            group_name,
            dash(&group.course),
            dash(&members)
        ),
    });

    let iface = &worksheet.iface;
    let tasks = if iface.tasks.is_empty() {
        "- -".to_string()
    } else {
        iface
            .tasks
            .iter()
            .map(|t| format!("- {}", t))
            .collect::<Vec<_>>()
            .join("\n")
    };
    slides.push(Slide {
        title: "Chosen interface".to_string(),
        body: format!(
            "Type: {}\nName: {}\nURL: {}\n\nSimulated tasks:\n{}",
            dash(&iface.kind),
            dash(&iface.name),
            dash(&iface.url),
            tasks
        ),
    });

    // Criteria: id and title only, the tip stays in the report appendix.
    let criteria = heuristic::catalog()
        .iter()
        .map(|h| format!("{}. {}", h.id, h.title))
        .collect::<Vec<_>>()
        .join("\n");
    slides.push(Slide {
        title: "Criteria (Nielsen)".to_string(),
        body: criteria,
    });

    let selected = worksheet.top3_issues();
    if selected.is_empty() {
        slides.push(Slide {
            title: "Top 3 issues".to_string(),
            body: "Select up to 3 issues from the list to build these slides.".to_string(),
        });
    } else {
        for (rank, issue) in selected.iter().enumerate() {
            let h = heuristic::by_id(issue.heuristic_id);
            let title = h.map(|h| h.title).unwrap_or("(unknown heuristic)");
            slides.push(Slide {
                title: format!("Top {}: {} (Sev {})", rank + 1, title, issue.severity),
                body: format!("Problem: {}\nSolution: {}", issue.desc, issue.solution),
            });
        }
    }

    slides.push(Slide {
        title: "Closing".to_string(),
        body: "Questions? Thank you!\nNext steps: prioritization and implementation.".to_string(),
    });

    slides
}
