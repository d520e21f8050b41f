//! Board core: pure aggregation and transition over entity collections.
//!
//! The board holds no state of its own. The shell (CLI, seed loader) owns the
//! entity collection and hands it in whole; aggregation returns borrowed
//! buckets, transitions return a replacement collection. Re-running any
//! function with the same inputs gives the same outputs.

pub mod aggregate;
pub mod transition;

pub use aggregate::*;
pub use transition::*;

use crate::models::BoardStatus;

/// An entity that lives on a board: a lead in the funnel or a project task.
///
/// `search_text` feeds the text filter; `assignee` feeds the assignee filter.
/// Everything else on the concrete type is opaque payload the board carries
/// but never interprets.
pub trait BoardItem {
    type Status: BoardStatus;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
    fn assignee(&self) -> &str;
    fn search_text(&self) -> String;
}
