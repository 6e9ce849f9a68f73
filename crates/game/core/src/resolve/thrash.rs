//! Thrash: a prone mek flails at infantry sharing its hex.
use super::context::AttackContext;
use super::gate::Gate;
use super::shared;
use crate::env::Location;
use crate::tohit::ToHitResult;

pub const THRASH_ALWAYS_HITS: &str = "thrash attacks always hit";

pub const GATES: &[Gate] = &[
    shared::FRIENDLY_TARGET,
    Gate::new("non_mek", "Only Meks can thrash at infantry", |ctx| {
        !ctx.attacker.class().is_mek()
    }),
    shared::GRAPPLED,
    Gate::new("not_prone", "Only prone Meks can thrash at infantry", |ctx| {
        !ctx.attacker.is_prone()
    }),
    Gate::new("target_kind", "Can only thrash at infantry", |ctx| {
        !ctx.target_unit().is_some_and(|t| t.class().is_infantry())
    }),
    Gate::new("swarming", "Can't thrash at swarming infantry", |ctx| {
        ctx.target_unit().is_some_and(|t| t.swarm_target().is_some())
    }),
    Gate::new("range", "Target not in range", |ctx| ctx.distance() != 0),
    Gate::new("elevation", "Target elevation not in range", |ctx| {
        ctx.attacker_level() != ctx.target_level()
    }),
    Gate::new("limb_fired", "Weapons fired from a limb this turn", |ctx| {
        thrashing_limbs(ctx).any(|limb| ctx.fired_from(limb))
    }),
    Gate::new("no_limbs", "Mek has no arms or legs to thrash", |ctx| {
        thrashing_limbs(ctx).next().is_none()
    }),
];

/// Intact arms and legs.
fn thrashing_limbs<'c>(ctx: &'c AttackContext<'_>) -> impl Iterator<Item = Location> + 'c {
    Location::ARMS
        .into_iter()
        .chain(Location::LEGS)
        .filter(|&limb| !ctx.attacker.is_location_bad(limb))
}

pub fn evaluate(_ctx: &AttackContext<'_>) -> ToHitResult {
    ToHitResult::automatic_success(THRASH_ALWAYS_HITS)
}
