//! heurdesk: a worksheet for Nielsen heuristic usability evaluations.
//!
//! The library holds the domain core: the [`models::Worksheet`] aggregate
//! and its mutations, the fixed heuristic catalog, whole-blob persistence,
//! the two pure generators ([`report`] and [`slides`]), and the countdown
//! state machine in [`timer`]. The binary is a thin CLI adapter that maps
//! each user action onto one mutation followed by a save.

pub mod models;
pub mod report;
pub mod slides;
pub mod store;
pub mod timer;
