pub mod calculator_service;

pub use calculator_service::{CalculatorService, DEFAULT_MAX_SESSIONS, SessionView};
