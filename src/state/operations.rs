//! In-flight request tracking.
//!
//! Every request the client issues is registered under its own token and
//! removed when its outcome is reduced. The client counts as loading while any
//! token is outstanding, and controls are gated on the kind of work in flight
//! rather than on a single flag.

use super::BetId;
use std::collections::HashMap;
use uuid::Uuid;

/// Token identifying one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(Uuid);

impl OperationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an in-flight request is doing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationKind {
    LoadBets,
    CreateBet,
    SignBet(BetId),
    FetchBet(BetId),
}

impl OperationKind {
    /// Message shown when this kind of request fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::LoadBets => "Failed to fetch bets",
            Self::CreateBet => "Failed to create bet",
            Self::SignBet(_) => "Failed to sign bet",
            Self::FetchBet(_) => "Failed to fetch bet",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadBets => write!(f, "load bets"),
            Self::CreateBet => write!(f, "create bet"),
            Self::SignBet(id) => write!(f, "sign bet {id}"),
            Self::FetchBet(id) => write!(f, "fetch bet {id}"),
        }
    }
}

/// Set of outstanding requests.
#[derive(Debug, Default)]
pub struct PendingOperations {
    inflight: HashMap<OperationId, OperationKind>,
}

impl PendingOperations {
    /// Register a new request and return its token.
    pub fn begin(&mut self, kind: OperationKind) -> OperationId {
        let op = OperationId::new();
        tracing::debug!(%op, %kind, "operation started");
        self.inflight.insert(op, kind);
        op
    }

    /// Remove a finished request, returning what it was.
    pub fn finish(&mut self, op: OperationId) -> Option<OperationKind> {
        let kind = self.inflight.remove(&op);
        if kind.is_none() {
            tracing::warn!(%op, "completion for unknown operation");
        }
        kind
    }

    /// Whether a request of exactly this kind is outstanding.
    pub fn is_pending(&self, kind: &OperationKind) -> bool {
        self.inflight.values().any(|k| k == kind)
    }

    /// Whether any request is outstanding.
    pub fn is_loading(&self) -> bool {
        !self.inflight.is_empty()
    }

    /// Number of outstanding requests.
    pub fn len(&self) -> usize {
        self.inflight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inflight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_operations_are_tracked_separately() {
        let mut ops = PendingOperations::default();
        let create = ops.begin(OperationKind::CreateBet);
        let sign = ops.begin(OperationKind::SignBet(BetId::new("7")));

        assert!(ops.is_loading());
        assert_eq!(ops.len(), 2);

        assert_eq!(ops.finish(create), Some(OperationKind::CreateBet));
        assert!(ops.is_loading());
        assert!(!ops.is_pending(&OperationKind::CreateBet));
        assert!(ops.is_pending(&OperationKind::SignBet(BetId::new("7"))));
        assert!(!ops.is_pending(&OperationKind::SignBet(BetId::new("8"))));

        ops.finish(sign);
        assert!(!ops.is_loading());
        assert!(ops.is_empty());
    }

    #[test]
    fn test_finishing_twice_is_harmless() {
        let mut ops = PendingOperations::default();
        let op = ops.begin(OperationKind::LoadBets);
        assert!(ops.finish(op).is_some());
        assert!(ops.finish(op).is_none());
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(OperationKind::LoadBets.failure_message(), "Failed to fetch bets");
        assert_eq!(OperationKind::CreateBet.failure_message(), "Failed to create bet");
        assert_eq!(
            OperationKind::SignBet(BetId::new("1")).failure_message(),
            "Failed to sign bet"
        );
    }
}
