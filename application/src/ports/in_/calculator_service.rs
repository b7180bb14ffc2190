use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::ports::out_::{ServiceError, SessionRepository};
use domain::{CalculatorConfig, PayoutAction, PayoutState, PayoutSummary, SessionId};

/// Open sessions allowed unless configured otherwise.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// A session's current snapshot together with the values derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: SessionId,
    pub state: PayoutState,
    pub summary: PayoutSummary,
}

pub struct CalculatorService {
    repository: Arc<dyn SessionRepository>,
    config: CalculatorConfig,
    max_sessions: usize,
}

impl CalculatorService {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        config: CalculatorConfig,
    ) -> Self {
        Self {
            repository,
            config,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    #[must_use]
    pub fn with_max_sessions(
        mut self,
        max_sessions: usize,
    ) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Opens a session holding the seed state. Fails once `max_sessions`
    /// sessions are open.
    pub async fn create_session(&self) -> Result<SessionView, ServiceError> {
        let open = self.repository.count().await;
        if open >= self.max_sessions {
            warn!(open, max_sessions = self.max_sessions, "Session limit reached");
            return Err(ServiceError::SessionLimitReached(open));
        }

        let session_id = SessionId::new();
        let state = PayoutState::default();
        self.repository.save(session_id, state.clone()).await;
        info!(
            session_id = %session_id,
            split_strategy = %self.config.split_strategy,
            open = open + 1,
            "Session created"
        );
        Ok(self.view(session_id, state))
    }

    pub async fn snapshot(
        &self,
        session_id: SessionId,
    ) -> Result<SessionView, ServiceError> {
        let state = self.load(session_id).await?;
        Ok(self.view(session_id, state))
    }

    /// Applies one action and stores the resulting snapshot.
    pub async fn dispatch(
        &self,
        session_id: SessionId,
        action: PayoutAction,
    ) -> Result<SessionView, ServiceError> {
        let current = self.load(session_id).await?;
        let next = current.reduce(&action);

        if next == current {
            debug!(session_id = %session_id, action = action.name(), "Action left state unchanged");
        } else {
            debug!(session_id = %session_id, action = action.name(), "Action applied");
            self.repository.save(session_id, next.clone()).await;
        }

        Ok(self.view(session_id, next))
    }

    /// Puts the session back to the seed state.
    pub async fn reset(
        &self,
        session_id: SessionId,
    ) -> Result<SessionView, ServiceError> {
        self.load(session_id).await?;
        let state = PayoutState::default();
        self.repository.save(session_id, state.clone()).await;
        info!(session_id = %session_id, "Session reset");
        Ok(self.view(session_id, state))
    }

    pub async fn close_session(
        &self,
        session_id: SessionId,
    ) -> Result<(), ServiceError> {
        if self.repository.remove(session_id).await {
            let open = self.repository.count().await;
            info!(session_id = %session_id, open, "Session closed");
            Ok(())
        } else {
            warn!(session_id = %session_id, "Close requested for unknown session");
            Err(ServiceError::SessionNotFound(session_id))
        }
    }

    async fn load(
        &self,
        session_id: SessionId,
    ) -> Result<PayoutState, ServiceError> {
        match self.repository.load(session_id).await {
            Some(state) => Ok(state),
            None => {
                warn!(session_id = %session_id, "Unknown session");
                Err(ServiceError::SessionNotFound(session_id))
            }
        }
    }

    fn view(
        &self,
        session_id: SessionId,
        state: PayoutState,
    ) -> SessionView {
        let summary = PayoutSummary::compute(&state, self.config.split_strategy);
        SessionView {
            session_id,
            state,
            summary,
        }
    }
}
