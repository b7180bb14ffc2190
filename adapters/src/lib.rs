mod in_memory;
pub mod web;

pub use in_memory::InMemory;
pub use web::{ApiError, AppState, create_app_state, router};
