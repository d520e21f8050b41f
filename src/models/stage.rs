use std::fmt;
use thiserror::Error;

/// Closed status enumeration backing one board kind.
///
/// `ALL` fixes the canonical stage order; `as_str`/`from_str` are the string
/// boundary for snapshots and CLI arguments. Strings outside the enumeration
/// never construct a value.
pub trait BoardStatus: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn from_str(s: &str) -> Option<Self>;
    fn label(&self) -> &'static str;
}

/// Raised when external input names a stage outside the board's enumeration.
#[derive(Debug, Clone, Error)]
#[error("unknown stage '{value}' (expected one of: {expected})")]
pub struct InvalidStatus {
    pub value: String,
    pub expected: String,
}

/// Parse a stage name at the boundary, rejecting anything outside the set.
pub fn parse_status<S: BoardStatus>(s: &str) -> Result<S, InvalidStatus> {
    S::from_str(s).ok_or_else(|| InvalidStatus {
        value: s.to_string(),
        expected: S::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// One column of a board: a status value plus its display metadata.
///
/// `order` is rendering position only. It never restricts which transitions
/// are legal; a lead can move from the first stage straight to the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage<S> {
    pub status: S,
    pub label: &'static str,
    pub order: usize,
}

/// Derive the full stage registry for a board kind from its status enum.
pub fn stages<S: BoardStatus>() -> Vec<Stage<S>> {
    S::ALL
        .iter()
        .enumerate()
        .map(|(order, &status)| Stage {
            status,
            label: status.label(),
            order,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeadStatus;

    #[test]
    fn test_stage_registry_order() {
        let registry = stages::<LeadStatus>();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry[0].status, LeadStatus::Novo);
        assert_eq!(registry[0].order, 0);
        assert_eq!(registry[4].status, LeadStatus::Perdida);
        assert_eq!(registry[4].order, 4);
    }

    #[test]
    fn test_parse_status_rejects_unknown() {
        let err = parse_status::<LeadStatus>("arquivado").unwrap_err();
        assert_eq!(err.value, "arquivado");
        assert!(err.expected.contains("novo"));
        assert!(err.expected.contains("perdida"));
    }

    #[test]
    fn test_parse_status_accepts_members() {
        assert_eq!(
            parse_status::<LeadStatus>("proposta").unwrap(),
            LeadStatus::Proposta
        );
    }
}
