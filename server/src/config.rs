use std::net::SocketAddr;

use thiserror::Error;

use application::ports::in_::DEFAULT_MAX_SESSIONS;
use domain::{CalculatorConfig, DomainError, SplitStrategy};

pub const BIND_ADDR_VAR: &str = "PAYOUT_BIND_ADDR";
pub const SPLIT_STRATEGY_VAR: &str = "PAYOUT_SPLIT_STRATEGY";
pub const MAX_SESSIONS_VAR: &str = "PAYOUT_MAX_SESSIONS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PAYOUT_BIND_ADDR `{value}`: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("invalid PAYOUT_SPLIT_STRATEGY: {0}")]
    SplitStrategy(#[from] DomainError),

    #[error("invalid PAYOUT_MAX_SESSIONS `{0}`: expected a positive integer")]
    MaxSessions(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub split_strategy: SplitStrategy,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            split_strategy: SplitStrategy::default(),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = match read(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::BindAddr { value, source })?,
            None => defaults.bind_addr,
        };

        let split_strategy = match read(SPLIT_STRATEGY_VAR) {
            Some(value) => value.parse::<SplitStrategy>()?,
            None => defaults.split_strategy,
        };

        let max_sessions = match read(MAX_SESSIONS_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(max) if max > 0 => max,
                _ => return Err(ConfigError::MaxSessions(value)),
            },
            None => defaults.max_sessions,
        };

        Ok(Self {
            bind_addr,
            split_strategy,
            max_sessions,
        })
    }

    #[must_use]
    pub fn calculator(&self) -> CalculatorConfig {
        CalculatorConfig {
            split_strategy: self.split_strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.calculator().split_strategy, SplitStrategy::ReimburseExpenses);
        assert_eq!(config.max_sessions, DEFAULT_MAX_SESSIONS);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:8080"),
            (SPLIT_STRATEGY_VAR, "average"),
            (MAX_SESSIONS_VAR, " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.split_strategy, SplitStrategy::AverageExpenses);
        assert_eq!(config.max_sessions, 25);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "  "), (SPLIT_STRATEGY_VAR, "")])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::BindAddr { .. }), "got {err:?}");

        let err = ServerConfig::from_lookup(lookup(&[(SPLIT_STRATEGY_VAR, "lottery")])).unwrap_err();
        assert!(matches!(err, ConfigError::SplitStrategy(_)), "got {err:?}");

        for bad in ["0", "-3", "lots"] {
            let err = ServerConfig::from_lookup(lookup(&[(MAX_SESSIONS_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::MaxSessions(_)), "got {err:?} for {bad}");
        }
    }
}
