use crate::error::{ErrorSeverity, GameError};
use crate::geometry::Coords;
use crate::state::{EntityId, EquipmentId};

/// A declaration that references something that does not exist.
///
/// These are caller bugs, distinct from a rules-driven `Impossible` result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("attacker {0} not found")]
    AttackerNotFound(EntityId),

    #[error("target {0} not found")]
    TargetNotFound(String),

    #[error("equipment {equipment} not mounted on {entity}")]
    EquipmentNotFound {
        entity: EntityId,
        equipment: EquipmentId,
    },

    #[error("equipment {equipment} on {entity} is not a {expected}")]
    WrongEquipment {
        entity: EntityId,
        equipment: EquipmentId,
        expected: &'static str,
    },
}

impl ResolveError {
    pub(crate) fn missing_entity(id: EntityId) -> Self {
        Self::TargetNotFound(id.to_string())
    }

    pub(crate) fn missing_hex(coords: Coords) -> Self {
        Self::TargetNotFound(format!("hex {coords}"))
    }
}

impl GameError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AttackerNotFound(_) => "RESOLVE_ATTACKER_NOT_FOUND",
            Self::TargetNotFound(_) => "RESOLVE_TARGET_NOT_FOUND",
            Self::EquipmentNotFound { .. } => "RESOLVE_EQUIPMENT_NOT_FOUND",
            Self::WrongEquipment { .. } => "RESOLVE_WRONG_EQUIPMENT",
        }
    }
}
