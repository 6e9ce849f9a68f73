//! Action queue errors.

use crate::error::{ErrorSeverity, GameError};
use crate::resolve::ResolveError;
use crate::state::EntityId;

/// Misuse of the action queue protocol.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// ADD, COMMIT or ABORT without a selected unit.
    #[error("no unit selected")]
    NoEntitySelected,

    /// Declaration made by a unit other than the selected one.
    #[error("declaration by {actual} while {selected} is selected")]
    WrongAttacker {
        selected: EntityId,
        actual: EntityId,
    },

    /// A legality gate rejected the declaration.
    #[error("illegal declaration: {reason}")]
    Illegal { reason: String },

    /// The declaration referenced something that does not exist.
    #[error(transparent)]
    Fault(#[from] ResolveError),

    #[error("pending queue is full")]
    QueueFull,
}

impl GameError for QueueError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoEntitySelected | Self::WrongAttacker { .. } => ErrorSeverity::Validation,
            Self::Illegal { .. } | Self::QueueFull => ErrorSeverity::Recoverable,
            Self::Fault(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoEntitySelected => "QUEUE_NO_ENTITY_SELECTED",
            Self::WrongAttacker { .. } => "QUEUE_WRONG_ATTACKER",
            Self::Illegal { .. } => "QUEUE_ILLEGAL",
            Self::Fault(inner) => inner.error_code(),
            Self::QueueFull => "QUEUE_FULL",
        }
    }
}
