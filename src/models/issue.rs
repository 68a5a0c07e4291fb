use serde::{Deserialize, Serialize};

/// Highest severity accepted by [`Worksheet::add_issue`](super::Worksheet::add_issue).
///
/// The scale is 0 = cosmetic .. 4 = catastrophic. Stored worksheets are read
/// tolerantly: an out-of-range value in a loaded blob still renders.
pub const MAX_SEVERITY: u8 = 4;

/// A recorded usability problem.
///
/// Issues are never edited in place: the workflow for a correction is to add
/// an updated issue and delete the original. `id` is unique among the
/// currently-live issues only; after the highest-id issue is deleted, the
/// next issue added takes that id again (max-plus-one over the live set).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: u32,
    /// Catalog id of the violated heuristic (1..=10 by convention).
    pub heuristic_id: u8,
    /// 0 = cosmetic .. 4 = catastrophic.
    pub severity: u8,
    /// What the problem is. Required non-empty at creation.
    pub desc: String,
    /// Proposed fix. Required non-empty at creation.
    pub solution: String,
}

/// Input for recording a new issue. The worksheet assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssueInput {
    pub heuristic_id: u8,
    pub severity: u8,
    pub desc: String,
    pub solution: String,
}
