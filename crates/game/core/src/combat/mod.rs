//! Melee subtype catalog and physical attack damage.
//!
//! Everything here is pure: the catalog is a static table and the damage
//! helpers only read the attacker and target views.

pub mod catalog;
pub mod damage;

pub use catalog::{DamageFormula, MeleeKind, MeleeSpec, Rounding};
pub use damage::{
    club_damage, expected_damage, kick_damage, punch_damage, thrash_damage, versus_target,
};
