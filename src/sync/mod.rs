//! External calendar sync boundary.
//!
//! Sync is a seam, not a feature: the core never talks to Google Calendar
//! and never waits on a timer. Providers take the event collection and
//! report an outcome; the shipped provider completes immediately, which is
//! the whole behavior the boards depend on.

use crate::agenda::Appointment;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};

/// Per-event sync state with the external calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Synced,
    Pending,
    Error,
}

/// Result of one sync pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    pub provider: String,
    pub status: SyncStatus,
    pub events_synced: usize,
    pub synced_at: NaiveDateTime,
}

/// Boundary for external calendar integrations.
pub trait SyncProvider {
    fn name(&self) -> &str;
    fn sync(&self, events: &[Appointment]) -> Result<SyncOutcome>;
}

/// Provider that marks everything synced with no external call and no
/// delay. Stands in for the real Google Calendar integration.
pub struct InstantSync {
    name: String,
}

impl InstantSync {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Default for InstantSync {
    fn default() -> Self {
        Self::new("Google Calendar")
    }
}

impl SyncProvider for InstantSync {
    fn name(&self) -> &str {
        &self.name
    }

    fn sync(&self, events: &[Appointment]) -> Result<SyncOutcome> {
        Ok(SyncOutcome {
            provider: self.name.clone(),
            status: SyncStatus::Synced,
            events_synced: events.len(),
            synced_at: Local::now().naive_local(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_instant_sync_reports_all_events() {
        let events = seed::sample_events();
        let outcome = InstantSync::default().sync(&events).unwrap();
        assert_eq!(outcome.status, SyncStatus::Synced);
        assert_eq!(outcome.events_synced, events.len());
        assert_eq!(outcome.provider, "Google Calendar");
    }

    #[test]
    fn test_instant_sync_empty_collection() {
        let outcome = InstantSync::default().sync(&[]).unwrap();
        assert_eq!(outcome.events_synced, 0);
        assert_eq!(outcome.status, SyncStatus::Synced);
    }
}
