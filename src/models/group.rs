use serde::{Deserialize, Serialize};

/// The evaluating team.
///
/// A singleton field of the worksheet; there is no identity beyond that.
/// `members` keeps the order the names were entered in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub course: String,
    pub members: Vec<String>,
}

/// The interface under evaluation.
///
/// `kind` is a free-form category (e.g. "Academic system", "E-commerce",
/// "Mobile app"); the conventional set is suggested by the CLI but not
/// enforced. `tasks` lists the simulated tasks in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interface {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub tasks: Vec<String>,
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            kind: "Academic system".to_string(),
            name: String::new(),
            url: String::new(),
            tasks: Vec::new(),
        }
    }
}

/// Normalize a line-oriented list field: trim every entry and drop blanks,
/// preserving order. Used for group members and simulated tasks.
pub fn clean_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|s| {
            let t = s.as_ref().trim();
            (!t.is_empty()).then(|| t.to_string())
        })
        .collect()
}
