//! Melee weapon subtypes and their rule parameters.
//!
//! One table row per subtype: base-value offset, damage formula, whether
//! triple-strength myomer doubles the damage, and how the weapon is held.
use strum::EnumCount;

use crate::env::modes;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeleeKind {
    Club,
    Sword,
    Hatchet,
    Mace,
    Lance,
    RetractableBlade,
    ChainWhip,
    Flail,
    WreckingBall,
    PileDriver,
    Chainsaw,
    DualSaw,
    Backhoe,
    Combine,
    RockCutter,
    SpotWelder,
    SmallVibroblade,
    MediumVibroblade,
    LargeVibroblade,
    SmallShield,
    MediumShield,
    LargeShield,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

/// How a melee weapon turns attacker tonnage into damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageFormula {
    /// `round(weight / divisor) + bonus`.
    Weight {
        divisor: u32,
        rounding: Rounding,
        bonus: u32,
    },
    Fixed(u32),
}

impl DamageFormula {
    pub const fn apply(self, weight: u32) -> u32 {
        match self {
            Self::Weight {
                divisor,
                rounding,
                bonus,
            } => {
                let base = match rounding {
                    Rounding::Down => weight / divisor,
                    Rounding::Up => weight.div_ceil(divisor),
                };
                base + bonus
            }
            Self::Fixed(damage) => damage,
        }
    }
}

/// Rule parameters of one melee subtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeleeSpec {
    /// Added to piloting skill to form the base value.
    pub offset: i32,
    pub damage: DamageFormula,
    /// Damage while the weapon is powered, replacing `damage`.
    pub active_damage: Option<u32>,
    pub tsm_eligible: bool,
    pub two_handed: bool,
    pub needs_hand: bool,
    /// Mode the weapon must be in to attack at all.
    pub required_mode: Option<&'static str>,
}

const fn weight(divisor: u32, rounding: Rounding, bonus: u32) -> DamageFormula {
    DamageFormula::Weight {
        divisor,
        rounding,
        bonus,
    }
}

const SWORD_DAMAGE: DamageFormula = weight(10, Rounding::Up, 1);

const fn spec(offset: i32, damage: DamageFormula, tsm_eligible: bool) -> MeleeSpec {
    MeleeSpec {
        offset,
        damage,
        active_damage: None,
        tsm_eligible,
        two_handed: false,
        needs_hand: false,
        required_mode: None,
    }
}

const fn handheld(offset: i32, damage: DamageFormula, tsm_eligible: bool) -> MeleeSpec {
    MeleeSpec {
        needs_hand: true,
        ..spec(offset, damage, tsm_eligible)
    }
}

const fn vibroblade(offset: i32, active: u32) -> MeleeSpec {
    MeleeSpec {
        active_damage: Some(active),
        ..spec(offset, SWORD_DAMAGE, true)
    }
}

const fn shield(offset: i32, damage: u32) -> MeleeSpec {
    MeleeSpec {
        required_mode: Some(modes::PASSIVE),
        ..spec(offset, DamageFormula::Fixed(damage), false)
    }
}

/// Indexed by `MeleeKind as usize`.
static CATALOG: [MeleeSpec; MeleeKind::COUNT] = [
    // Club
    MeleeSpec {
        two_handed: true,
        ..handheld(-1, weight(5, Rounding::Down, 0), true)
    },
    // Sword
    handheld(-2, SWORD_DAMAGE, true),
    // Hatchet
    handheld(-1, weight(5, Rounding::Down, 0), true),
    // Mace
    handheld(2, weight(4, Rounding::Down, 0), true),
    // Lance
    handheld(1, weight(5, Rounding::Up, 0), true),
    // RetractableBlade
    MeleeSpec {
        required_mode: Some(modes::EXTENDED),
        ..spec(-2, weight(10, Rounding::Up, 0), true)
    },
    // ChainWhip
    handheld(-2, DamageFormula::Fixed(3), false),
    // Flail
    spec(1, DamageFormula::Fixed(9), false),
    // WreckingBall
    spec(1, DamageFormula::Fixed(8), false),
    // PileDriver
    spec(2, DamageFormula::Fixed(10), false),
    // Chainsaw
    spec(1, DamageFormula::Fixed(5), false),
    // DualSaw
    spec(1, DamageFormula::Fixed(7), false),
    // Backhoe
    spec(1, DamageFormula::Fixed(6), true),
    // Combine
    spec(1, DamageFormula::Fixed(3), false),
    // RockCutter
    spec(1, DamageFormula::Fixed(5), false),
    // SpotWelder
    spec(1, DamageFormula::Fixed(5), false),
    // SmallVibroblade
    vibroblade(-1, 7),
    // MediumVibroblade
    vibroblade(-2, 10),
    // LargeVibroblade
    vibroblade(-3, 14),
    // SmallShield
    shield(-2, 3),
    // MediumShield
    shield(-3, 5),
    // LargeShield
    shield(-4, 7),
];

impl MeleeKind {
    pub fn spec(self) -> &'static MeleeSpec {
        &CATALOG[self as usize]
    }

    pub const fn is_shield(self) -> bool {
        matches!(self, Self::SmallShield | Self::MediumShield | Self::LargeShield)
    }

    pub const fn is_vibroblade(self) -> bool {
        matches!(
            self,
            Self::SmallVibroblade | Self::MediumVibroblade | Self::LargeVibroblade
        )
    }
}

impl MeleeSpec {
    /// Unmodified damage and whether TSM may double it, given the current mode.
    pub fn base_damage(&self, weight: u32, mode: Option<&str>) -> (u32, bool) {
        match self.active_damage {
            Some(active) if mode == Some(modes::ACTIVE) => (active, false),
            _ => (self.damage.apply(weight), self.tsm_eligible),
        }
    }
}
