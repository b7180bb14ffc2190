use async_trait::async_trait;
use thiserror::Error;

use domain::{PayoutState, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("session limit reached ({0} open)")]
    SessionLimitReached(usize),
}

/// Storage for calculator sessions. Each session owns one snapshot.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn load(
        &self,
        session_id: SessionId,
    ) -> Option<PayoutState>;

    async fn save(
        &self,
        session_id: SessionId,
        state: PayoutState,
    );

    /// Returns whether the session existed.
    async fn remove(
        &self,
        session_id: SessionId,
    ) -> bool;

    /// Number of open sessions.
    async fn count(&self) -> usize;
}
