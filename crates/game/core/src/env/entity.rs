//! Read-only view of a single unit.
use bitflags::bitflags;

use super::equipment::{EquipmentKind, Mounted, modes};
use crate::config::RulesConfig;
use crate::geometry::{Coords, Facing};
use crate::state::{EntityId, EquipmentId, PlayerId, PodId, TeamId};

/// Broad unit category; drives which attacks a unit may make or receive.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitClass {
    #[default]
    BipedMek,
    QuadMek,
    Tank,
    Vtol,
    Infantry,
    BattleArmor,
    ProtoMek,
}

impl UnitClass {
    pub const fn is_mek(self) -> bool {
        matches!(self, Self::BipedMek | Self::QuadMek)
    }

    pub const fn is_infantry(self) -> bool {
        matches!(self, Self::Infantry | Self::BattleArmor)
    }

    /// Unarmored foot troops, as opposed to battle armor.
    pub const fn is_conventional_infantry(self) -> bool {
        matches!(self, Self::Infantry)
    }

    pub const fn can_fly(self) -> bool {
        matches!(self, Self::Vtol)
    }
}

bitflags! {
    /// Posture and condition flags of a unit.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Posture: u16 {
        const PRONE = 1 << 0;
        const HULL_DOWN = 1 << 1;
        const SHUT_DOWN = 1 << 2;
        const IMMOBILE = 1 << 3;
        /// Arms rotated to fire into the rear arc.
        const ARMS_FLIPPED = 1 << 4;
        const EVADING = 1 << 5;
    }
}

/// Left or right limb of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Hit location on a unit.
///
/// Quad meks record their front legs in the arm locations.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Head,
    CenterTorso,
    RightTorso,
    LeftTorso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
    /// Single location of units without limbs.
    Body,
}

impl Location {
    pub const ARMS: [Location; 2] = [Location::LeftArm, Location::RightArm];
    pub const LEGS: [Location; 2] = [Location::LeftLeg, Location::RightLeg];

    pub const fn arm(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftArm,
            Side::Right => Self::RightArm,
        }
    }

    pub const fn leg(side: Side) -> Self {
        match side {
            Side::Left => Self::LeftLeg,
            Side::Right => Self::RightLeg,
        }
    }

    pub const fn is_arm(self) -> bool {
        matches!(self, Self::LeftArm | Self::RightArm)
    }

    pub const fn is_leg(self) -> bool {
        matches!(self, Self::LeftLeg | Self::RightLeg)
    }

    /// Side of a limb location; `None` for torso, head and body.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::LeftArm | Self::LeftLeg | Self::LeftTorso => Some(Side::Left),
            Self::RightArm | Self::RightLeg | Self::RightTorso => Some(Side::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationStatus {
    #[default]
    Intact,
    Breached,
    Destroyed,
}

/// Limb actuators whose condition gates and penalizes physical attacks.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Actuator {
    Shoulder,
    UpperArm,
    LowerArm,
    Hand,
    Hip,
    UpperLeg,
    LowerLeg,
    Foot,
}

/// How a unit moved this turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveMode {
    #[default]
    Stationary,
    Walked,
    Ran,
    Jumped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    pub mode: MoveMode,
    /// Hexes left behind this turn.
    pub hexes: u32,
}

impl Movement {
    pub const STATIONARY: Self = Self {
        mode: MoveMode::Stationary,
        hexes: 0,
    };

    pub const fn new(mode: MoveMode, hexes: u32) -> Self {
        Self { mode, hexes }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplacementKind {
    Push,
    Charge,
    DeathFromAbove,
}

/// A declared attack that will move its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub kind: DisplacementKind,
    pub target: EntityId,
}

/// Read-only queries resolvers make about a unit.
///
/// Implementations are owned by whatever drives the game; the core never
/// writes through this trait.
pub trait EntityView {
    fn id(&self) -> EntityId;
    fn name(&self) -> &str;
    fn owner(&self) -> PlayerId;
    fn team(&self) -> Option<TeamId>;
    fn class(&self) -> UnitClass;
    /// Mass in tons.
    fn weight(&self) -> u32;

    fn posture(&self) -> Posture;
    fn position(&self) -> Coords;
    /// Elevation above (or below, when negative) the floor of its hex.
    fn elevation(&self) -> i32;
    fn facing(&self) -> Option<Facing>;
    fn movement(&self) -> Movement;

    /// Levels the unit rises above its elevation. Standing meks are one
    /// level tall, everything else is flat.
    fn height(&self) -> i32 {
        i32::from(self.class().is_mek() && !self.is_prone())
    }

    /// Torso facing after a twist; defaults to the leg facing.
    fn secondary_facing(&self) -> Option<Facing> {
        self.facing()
    }

    fn piloting(&self) -> i32;
    fn gunnery(&self) -> i32;
    fn heat(&self) -> i32;
    fn sensor_hits(&self) -> u8;

    fn location_status(&self, location: Location) -> LocationStatus;
    fn location_submerged(&self, location: Location) -> bool;
    fn has_working_actuator(&self, location: Location, actuator: Actuator) -> bool;
    /// Weapons in `location` fired earlier this turn, as tracked by the host.
    fn weapon_fired_from(&self, location: Location) -> bool;

    fn equipment(&self) -> &[Mounted];

    fn grapple_partner(&self) -> Option<EntityId>;
    /// Unit this one is swarming.
    fn swarm_target(&self) -> Option<EntityId>;
    /// Unit swarming this one.
    fn swarm_attacker(&self) -> Option<EntityId>;
    /// Unit carrying this one.
    fn transport(&self) -> Option<EntityId>;
    /// Push, charge or death-from-above this unit declared this turn.
    fn displacement(&self) -> Option<Displacement>;
    /// Designated by a TAG this turn.
    fn is_tagged(&self) -> bool;
    fn attached_pods(&self) -> &[PodId];

    fn is_prone(&self) -> bool {
        self.posture().contains(Posture::PRONE)
    }

    fn is_location_bad(&self, location: Location) -> bool {
        self.location_status(location) != LocationStatus::Intact
    }

    fn mounted(&self, id: EquipmentId) -> Option<&Mounted> {
        self.equipment().iter().find(|m| m.id == id)
    }

    fn has_claw(&self, location: Location) -> bool {
        self.equipment().iter().any(|m| {
            m.location == location && !m.destroyed && matches!(m.kind, EquipmentKind::Claw)
        })
    }

    /// Triple-strength myomer that the current heat level has switched on.
    fn has_active_tsm(&self) -> bool {
        self.heat() >= RulesConfig::TSM_HEAT_THRESHOLD
            && self.has_working(|kind| matches!(kind, EquipmentKind::Tsm))
    }

    fn has_industrial_tsm(&self) -> bool {
        self.has_working(|kind| matches!(kind, EquipmentKind::IndustrialTsm))
    }

    fn has_active_exoskeleton(&self) -> bool {
        self.equipment().iter().any(|m| {
            !m.destroyed
                && matches!(m.kind, EquipmentKind::Exoskeleton)
                && m.mode_is(modes::ACTIVE)
        })
    }

    fn has_targeting_computer(&self) -> bool {
        self.has_working(|kind| matches!(kind, EquipmentKind::TargetingComputer))
    }

    fn searchlight(&self) -> Option<&Mounted> {
        self.equipment()
            .iter()
            .find(|m| matches!(m.kind, EquipmentKind::Searchlight))
    }

    fn has_working(&self, predicate: fn(&EquipmentKind) -> bool) -> bool {
        self.equipment()
            .iter()
            .any(|m| !m.destroyed && predicate(&m.kind))
    }

    /// Same owner, or both on the same team.
    fn is_friendly_to(&self, other: &dyn EntityView) -> bool {
        self.owner() == other.owner()
            || matches!((self.team(), other.team()), (Some(a), Some(b)) if a == b)
    }
}
