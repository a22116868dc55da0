//! Errors surfaced by the turn driver.
//!
//! Validation failures never show up here; they travel inside
//! `Action::Impossible`. What remains are broken invariants and wiring
//! mistakes in the surrounding driver.

use tactics_core::{EntityId, ErrorSeverity, GameError, WorldError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Invariant(#[from] WorldError),

    #[error("entity {0} is not part of the world")]
    UnknownEntity(EntityId),

    #[error("no controller bound to actor {0}")]
    ControllerNotBound(EntityId),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Invariant(error) => error.severity(),
            Self::UnknownEntity(_) => ErrorSeverity::Internal,
            Self::ControllerNotBound(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Invariant(error) => error.error_code(),
            Self::UnknownEntity(_) => "RUNTIME_UNKNOWN_ENTITY",
            Self::ControllerNotBound(_) => "RUNTIME_CONTROLLER_NOT_BOUND",
        }
    }
}
