//! Attack declarations.
use crate::env::{Location, Side};
use crate::geometry::Coords;
use crate::state::{EntityId, EquipmentId, PodId};

/// What an attack is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetRef {
    Entity(EntityId),
    /// A hex, for searchlights and area fire.
    Hex(Coords),
    /// The building standing in a hex.
    Building(Coords),
    /// A homing pod attached to a unit.
    Pod { carrier: EntityId, pod: PodId },
}

impl TargetRef {
    pub const fn entity(self) -> Option<EntityId> {
        match self {
            Self::Entity(id) => Some(id),
            _ => None,
        }
    }
}

/// Kind-specific payload of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackAction {
    Punch { arm: Side },
    Kick { leg: Side },
    Club { club: EquipmentId },
    Push,
    BrushOff { arm: Side },
    Thrash,
    Searchlight,
    WeaponFire {
        weapon: EquipmentId,
        /// Called shot at a specific location.
        #[cfg_attr(feature = "serde", serde(default))]
        aim: Option<Location>,
    },
    GuidedFire { weapon: EquipmentId },
}

/// Attack kind tag used to route a declaration to its resolver.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackKind {
    Punch,
    Kick,
    Club,
    Push,
    BrushOff,
    Thrash,
    Searchlight,
    WeaponFire,
    GuidedFire,
}

impl AttackAction {
    pub const fn kind(&self) -> AttackKind {
        match self {
            Self::Punch { .. } => AttackKind::Punch,
            Self::Kick { .. } => AttackKind::Kick,
            Self::Club { .. } => AttackKind::Club,
            Self::Push => AttackKind::Push,
            Self::BrushOff { .. } => AttackKind::BrushOff,
            Self::Thrash => AttackKind::Thrash,
            Self::Searchlight => AttackKind::Searchlight,
            Self::WeaponFire { .. } => AttackKind::WeaponFire,
            Self::GuidedFire { .. } => AttackKind::GuidedFire,
        }
    }

    /// Mounted equipment the action refers to, if any.
    pub const fn equipment(&self) -> Option<EquipmentId> {
        match *self {
            Self::Club { club } => Some(club),
            Self::WeaponFire { weapon, .. } | Self::GuidedFire { weapon } => Some(weapon),
            _ => None,
        }
    }
}

/// One attack: who attacks what, and how.
///
/// Immutable once built; each declaration maps to exactly one resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDeclaration {
    attacker: EntityId,
    target: TargetRef,
    action: AttackAction,
}

impl AttackDeclaration {
    pub const fn new(attacker: EntityId, target: TargetRef, action: AttackAction) -> Self {
        Self {
            attacker,
            target,
            action,
        }
    }

    pub const fn against(attacker: EntityId, target: EntityId, action: AttackAction) -> Self {
        Self::new(attacker, TargetRef::Entity(target), action)
    }

    pub const fn attacker(&self) -> EntityId {
        self.attacker
    }

    pub const fn target(&self) -> TargetRef {
        self.target
    }

    pub const fn action(&self) -> AttackAction {
        self.action
    }

    pub const fn kind(&self) -> AttackKind {
        self.action.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_payload() {
        let decl = AttackDeclaration::against(
            EntityId(1),
            EntityId(2),
            AttackAction::WeaponFire {
                weapon: EquipmentId(4),
                aim: None,
            },
        );
        assert_eq!(decl.kind(), AttackKind::WeaponFire);
        assert_eq!(decl.action().equipment(), Some(EquipmentId(4)));
        assert_eq!(decl.target().entity(), Some(EntityId(2)));
        assert_eq!(AttackKind::BrushOff.to_string(), "brush_off");
    }
}
