use super::entity::Location;
use crate::combat::MeleeKind;
use crate::state::EquipmentId;

/// Mode strings carried by switchable equipment.
///
/// Modes are matched literally, case included.
pub mod modes {
    /// Powered vibroblades and engaged exoskeleton assist.
    pub const ACTIVE: &str = "Active";
    /// Retractable blade out of its housing.
    pub const EXTENDED: &str = "extended";
    /// Shield held in the passive (bashing) stance.
    pub const PASSIVE: &str = "Passive";
    /// Searchlight switched on.
    pub const ON: &str = "On";
}

/// A piece of equipment mounted on a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mounted {
    pub id: EquipmentId,
    pub name: String,
    pub kind: EquipmentKind,
    pub location: Location,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rear_mounted: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub destroyed: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: Option<String>,
    /// Ammunition bin feeding this weapon.
    #[cfg_attr(feature = "serde", serde(default))]
    pub linked_ammo: Option<EquipmentId>,
}

impl Mounted {
    pub fn new(id: EquipmentId, name: impl Into<String>, kind: EquipmentKind, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            location,
            rear_mounted: false,
            destroyed: false,
            mode: None,
            linked_ammo: None,
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn linked_to(mut self, ammo: EquipmentId) -> Self {
        self.linked_ammo = Some(ammo);
        self
    }

    pub fn rear(mut self) -> Self {
        self.rear_mounted = true;
        self
    }

    pub fn mode_is(&self, mode: &str) -> bool {
        self.mode.as_deref() == Some(mode)
    }

    pub fn melee_kind(&self) -> Option<MeleeKind> {
        match self.kind {
            EquipmentKind::Melee(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn weapon_profile(&self) -> Option<&WeaponProfile> {
        match &self.kind {
            EquipmentKind::Weapon(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn ammo_bin(&self) -> Option<&AmmoBin> {
        match &self.kind {
            EquipmentKind::Ammo(bin) => Some(bin),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentKind {
    Weapon(WeaponProfile),
    Ammo(AmmoBin),
    Melee(MeleeKind),
    Claw,
    Searchlight,
    TargetingComputer,
    Tsm,
    IndustrialTsm,
    Exoskeleton,
}

/// Range brackets of a ranged weapon, in hexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProfile {
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_range: u32,
    pub short: u32,
    pub medium: u32,
    pub long: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub uses_ammo: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeBand {
    Short,
    Medium,
    Long,
}

impl WeaponProfile {
    /// Range band for a distance, or `None` when out of range.
    pub const fn band(&self, distance: u32) -> Option<RangeBand> {
        if distance <= self.short {
            Some(RangeBand::Short)
        } else if distance <= self.medium {
            Some(RangeBand::Medium)
        } else if distance <= self.long {
            Some(RangeBand::Long)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoBin {
    #[cfg_attr(feature = "serde", serde(default))]
    pub munition: Munition,
    pub shots: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Munition {
    #[default]
    Standard,
    /// Laser-guided rounds that home on TAG designation.
    SemiGuided,
    /// Artillery rounds that only strike a TAG-designated target.
    Homing,
}

impl Munition {
    pub const fn is_guided(self) -> bool {
        matches!(self, Self::SemiGuided | Self::Homing)
    }
}
