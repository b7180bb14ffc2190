use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use application::ports::out_::SessionRepository;
use domain::{PayoutState, SessionId};

pub struct InMemory {
    sessions: RwLock<HashMap<SessionId, PayoutState>>,
}

impl InMemory {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemory {
    async fn load(
        &self,
        session_id: SessionId,
    ) -> Option<PayoutState> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    async fn save(
        &self,
        session_id: SessionId,
        state: PayoutState,
    ) {
        self.sessions.write().await.insert(session_id, state);
    }

    async fn remove(
        &self,
        session_id: SessionId,
    ) -> bool {
        self.sessions.write().await.remove(&session_id).is_some()
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
