use std::sync::Arc;

use tokio::sync::RwLock;

use application::ports::in_::CalculatorService;
use application::ports::out_::SessionRepository;
use domain::CalculatorConfig;

use crate::InMemory;

pub struct AppState {
    // Snapshot reads share the lock. Anything that saves takes it
    // exclusively, so each load-reduce-save runs as one step.
    pub calculator_service: Arc<RwLock<CalculatorService>>,
}

impl AppState {
    pub fn new(calculator_service: Arc<RwLock<CalculatorService>>) -> Self {
        Self { calculator_service }
    }
}

pub fn create_app_state(
    config: CalculatorConfig,
    max_sessions: usize,
) -> Arc<AppState> {
    let repository: Arc<dyn SessionRepository> = Arc::new(InMemory::new());
    let calculator_service = CalculatorService::new(repository, config).with_max_sessions(max_sessions);

    Arc::new(AppState::new(Arc::new(RwLock::new(calculator_service))))
}
