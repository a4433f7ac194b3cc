use thiserror::Error;

/// Errors raised by the quiz itself. None of them are fatal: the caller shows
/// the message inline and the session is left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("times table must be between 1 and 10, got {0}")]
    InvalidTable(u8),
    #[error("no times table selected")]
    NoSelection,
    #[error("cannot {action} while the session is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
}

/// Errors raised while persisting progress.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("could not determine a data directory")]
    NoDataDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}
