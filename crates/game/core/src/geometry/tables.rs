//! Hit-location table and attack-direction table selection.
use super::arc::Bearing;
use super::coords::{Coords, Facing};

/// Hit-location table the damage roll will use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum HitTable {
    #[default]
    Normal,
    Punch,
    Kick,
}

/// Side of the target an attack strikes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum SideTable {
    #[default]
    Front,
    Left,
    Right,
    Rear,
}

/// Picks the hit table from the level the blow lands at.
///
/// `strike_level` is the absolute level of the striking limb or weapon. The
/// target occupies `target_elevation` up to `target_elevation + target_height`;
/// airborne targets are treated as one level taller. A blow at or above the
/// target's top hits the upper body, one at or below its base hits the legs.
pub fn select_hit_table(
    strike_level: i32,
    target_elevation: i32,
    target_height: i32,
    flying: bool,
) -> HitTable {
    let height = target_height + i32::from(flying);
    if height <= 0 {
        return HitTable::Normal;
    }
    if strike_level >= target_elevation + height {
        HitTable::Punch
    } else if strike_level <= target_elevation {
        HitTable::Kick
    } else {
        HitTable::Normal
    }
}

/// Side of the target facing the attacker.
///
/// Units without a facing and attackers sharing the target's hex always
/// strike the front.
pub fn select_side_table(
    attacker: Coords,
    target: Coords,
    target_facing: Option<Facing>,
) -> SideTable {
    let Some(facing) = target_facing else {
        return SideTable::Front;
    };
    let Some(bearing) = Bearing::between(target, attacker) else {
        return SideTable::Front;
    };
    match bearing.relative_to(facing) {
        3..=10 => SideTable::Right,
        11..=13 => SideTable::Rear,
        14..=21 => SideTable::Left,
        _ => SideTable::Front,
    }
}
