use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown split strategy: {0} (expected `reimburse` or `average`)")]
    UnknownSplitStrategy(String),
}
