use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::group::{clean_lines, Group, Interface};
use super::issue::{CreateIssueInput, Issue, MAX_SEVERITY};

/// Maximum number of issues in the presentation-emphasis selection.
pub const TOP3_CAP: usize = 3;

/// Validation errors raised at the mutation boundary.
///
/// Every variant leaves the worksheet unchanged; callers surface the message
/// and move on. There are no retries or partial states to roll back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorksheetError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("severity {0} is out of range (expected 0..={MAX_SEVERITY})")]
    SeverityOutOfRange(u8),
    #[error("at most {TOP3_CAP} issues can be selected as top findings")]
    Top3Full,
}

/// Outcome of [`Worksheet::toggle_top3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Top3Change {
    Added,
    Removed,
}

/// The full evaluation worksheet: group and interface metadata, the issue
/// log, the top-3 selection, and an optional countdown deadline.
///
/// This is the sole unit of persistence; the store serializes and replaces
/// it whole. All mutations go through the methods below, which keep the
/// aggregate self-consistent (no dangling top-3 ids, live-set id allocation,
/// capped selection). Callers persist after each successful mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub group: Group,
    pub iface: Interface,
    /// Insertion-ordered issue log.
    pub issues: Vec<Issue>,
    /// Ids of the issues picked for presentation, in selection order.
    pub top3: Vec<u32>,
    /// Countdown deadline as epoch milliseconds; `None` means no countdown.
    pub timer_end: Option<i64>,
}

impl Worksheet {
    /// Replace the group section wholesale. Member lines are trimmed and
    /// blanks dropped.
    pub fn set_group<I, S>(&mut self, name: &str, course: &str, members: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.group = Group {
            name: name.trim().to_string(),
            course: course.trim().to_string(),
            members: clean_lines(members),
        };
    }

    /// Replace the interface section wholesale. Task lines are trimmed and
    /// blanks dropped.
    pub fn set_iface<I, S>(&mut self, kind: &str, name: &str, url: &str, tasks: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.iface = Interface {
            kind: kind.trim().to_string(),
            name: name.trim().to_string(),
            url: url.trim().to_string(),
            tasks: clean_lines(tasks),
        };
    }

    /// The id the next added issue will receive: one more than the highest
    /// id among currently-live issues (1 when the log is empty). Deleting
    /// the highest-id issue frees its id for reuse.
    pub fn next_issue_id(&self) -> u32 {
        self.issues.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    /// Record a new issue at the end of the log.
    ///
    /// Fails without mutating when `desc` or `solution` trims to empty or
    /// the severity exceeds [`MAX_SEVERITY`].
    pub fn add_issue(&mut self, input: CreateIssueInput) -> Result<&Issue, WorksheetError> {
        let desc = input.desc.trim();
        let solution = input.solution.trim();
        if desc.is_empty() {
            return Err(WorksheetError::EmptyField("description"));
        }
        if solution.is_empty() {
            return Err(WorksheetError::EmptyField("solution"));
        }
        if input.severity > MAX_SEVERITY {
            return Err(WorksheetError::SeverityOutOfRange(input.severity));
        }

        let issue = Issue {
            id: self.next_issue_id(),
            heuristic_id: input.heuristic_id,
            severity: input.severity,
            desc: desc.to_string(),
            solution: solution.to_string(),
        };
        self.issues.push(issue);
        Ok(self.issues.last().expect("just pushed"))
    }

    /// Delete an issue and, atomically, its top-3 membership. Deleting an
    /// id that is not present is a silent no-op.
    pub fn delete_issue(&mut self, id: u32) -> bool {
        let before = self.issues.len();
        self.issues.retain(|i| i.id != id);
        let removed = self.issues.len() < before;
        if removed {
            self.top3.retain(|&t| t != id);
        }
        removed
    }

    /// Toggle an issue's membership in the top-3 selection.
    ///
    /// Removes the id if selected; otherwise appends it, rejecting with
    /// [`WorksheetError::Top3Full`] (state unchanged) when three issues are
    /// already selected. An id is never added twice.
    pub fn toggle_top3(&mut self, id: u32) -> Result<Top3Change, WorksheetError> {
        if let Some(pos) = self.top3.iter().position(|&t| t == id) {
            self.top3.remove(pos);
            return Ok(Top3Change::Removed);
        }
        if self.top3.len() >= TOP3_CAP {
            return Err(WorksheetError::Top3Full);
        }
        self.top3.push(id);
        Ok(Top3Change::Added)
    }

    /// Start (or restart) the presentation countdown: the deadline becomes
    /// `now + minutes`, replacing any previous countdown. Returns the new
    /// deadline in epoch milliseconds.
    pub fn start_countdown(&mut self, minutes: u64, now_ms: i64) -> i64 {
        let end = now_ms + minutes as i64 * 60_000;
        self.timer_end = Some(end);
        end
    }

    /// Look up a live issue by id.
    pub fn issue(&self, id: u32) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    /// Issues in review-list display order: descending severity, ties kept
    /// in insertion order (stable). Distinct from the insertion order the
    /// report uses and from the top-3 selection order.
    pub fn issues_by_severity(&self) -> Vec<&Issue> {
        let mut sorted: Vec<&Issue> = self.issues.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity));
        sorted
    }

    /// The selected top issues in selection order. Ids with no live issue
    /// are skipped rather than reported; selections beyond the cap are
    /// still returned so oversized lists render in full.
    pub fn top3_issues(&self) -> Vec<&Issue> {
        self.top3.iter().filter_map(|&id| self.issue(id)).collect()
    }
}
