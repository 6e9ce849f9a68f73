//! Fire with TAG-guided munitions.
//!
//! Semi-guided rounds ignore a designated target's movement. Homing rounds
//! only strike a designated target, and then always at the same number.
use super::context::AttackContext;
use super::gate::Gate;
use super::shared;
use super::weapon::{self, FireOptions};
use crate::config::RulesConfig;
use crate::env::Munition;
use crate::tohit::{ModifierStack, ToHitResult};

pub const NOT_DESIGNATED: &str = "Target not designated by TAG";

pub const GATES: &[Gate] = &[
    shared::SELF_TARGET,
    shared::FRIENDLY_TARGET,
    weapon::SHUT_DOWN,
    shared::ATTACKER_PASSENGER,
    weapon::SWARM_LOCK,
    shared::TARGET_PASSENGER,
    weapon::WEAPON_DESTROYED,
    weapon::ALREADY_FIRED,
    weapon::NO_AMMO_LINKED,
    weapon::AMMO_EMPTY,
    Gate::new(
        "unguided",
        "Weapon is not loaded with guided munitions",
        |ctx| !munition(ctx).is_some_and(Munition::is_guided),
    ),
    weapon::ATTACKER_EVADING,
    weapon::OUT_OF_RANGE,
    weapon::WEAPON_ARC,
    weapon::LINE_OF_SIGHT,
    weapon::TARGET_UNDERWATER,
];

fn munition(ctx: &AttackContext<'_>) -> Option<Munition> {
    ctx.ammo
        .and_then(|bin| bin.ammo_bin())
        .map(|bin| bin.munition)
}

fn designated(ctx: &AttackContext<'_>) -> bool {
    ctx.target_unit().is_some_and(|t| t.is_tagged())
}

pub fn evaluate(ctx: &AttackContext<'_>) -> ToHitResult {
    match munition(ctx) {
        Some(Munition::Homing) if designated(ctx) => {
            ModifierStack::new(RulesConfig::HOMING_TARGET_NUMBER, "homing shot").finish()
        }
        Some(Munition::Homing) => ToHitResult::automatic_fail(NOT_DESIGNATED),
        Some(Munition::SemiGuided) => weapon::evaluate_with(
            ctx,
            FireOptions {
                ignore_target_movement: designated(ctx),
            },
        ),
        _ => weapon::evaluate(ctx),
    }
}
