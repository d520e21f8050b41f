//! Board filter state
//!
//! Two independent axes, combined with AND:
//! - free-text query: case-insensitive substring over the item's search text
//! - assignee selector: everyone (`all`) or one exact name
//!
//! Buckets are recomputed from scratch whenever either axis or the
//! collection changes; at board scale there is nothing to cache.

use crate::board::BoardItem;

/// Assignee axis of the board filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssigneeFilter {
    #[default]
    All,
    Only(String),
}

impl AssigneeFilter {
    /// CLI boundary: absent or the literal "all" means everyone.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => AssigneeFilter::All,
            Some(a) if a.eq_ignore_ascii_case("all") => AssigneeFilter::All,
            Some(a) => AssigneeFilter::Only(a.to_string()),
        }
    }

    fn matches(&self, assignee: &str) -> bool {
        match self {
            AssigneeFilter::All => true,
            AssigneeFilter::Only(name) => assignee == name,
        }
    }
}

/// Value object holding the active filters. An empty query matches
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFilter {
    pub query: String,
    pub assignee: AssigneeFilter,
}

impl BoardFilter {
    pub fn with_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            assignee: AssigneeFilter::All,
        }
    }

    pub fn matches<T: BoardItem>(&self, item: &T) -> bool {
        let text_ok = self.query.is_empty()
            || item
                .search_text()
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        text_ok && self.assignee.matches(item.assignee())
    }
}
