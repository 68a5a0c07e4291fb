//! Domain model for the evaluation worksheet.
//!
//! # Core Concepts
//!
//! ## Reference data
//!
//! - [`Heuristic`]: one of Nielsen's ten usability criteria. The catalog in
//!   [`heuristic::catalog`] is fixed and ordered; its 1-based `id` is the
//!   foreign key issues point at.
//!
//! ## The aggregate
//!
//! - [`Worksheet`]: group info, interface under test, the issue log, the
//!   top-3 selection, and the countdown deadline, persisted as one blob.
//! - [`Issue`]: a recorded usability problem. Issues are append-and-delete
//!   only; "editing" is adding a corrected issue and deleting the original.
//!
//! Three orderings coexist and must not be confused: the issue log keeps
//! insertion order (used by the report), the review list sorts by descending
//! severity with a stable tie-break, and the top-3 selection keeps the order
//! the user picked (used by both generators' top sections).

pub mod heuristic;

mod group;
mod issue;
mod worksheet;

pub use group::*;
pub use heuristic::Heuristic;
pub use issue::*;
pub use worksheet::*;
