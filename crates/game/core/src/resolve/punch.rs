//! Punch: a mek strikes an adjacent target with one arm.
use super::context::AttackContext;
use super::gate::Gate;
use super::shared::{self, arms_flipped};
use crate::env::{Actuator, Side};
use crate::geometry::{Arc, select_hit_table};
use crate::tohit::{ModifierStack, ToHitResult};

pub const GATES: &[Gate] = &[
    Gate::new("non_mek", "Non-meks can't punch", |ctx| {
        !ctx.attacker.class().is_mek()
    }),
    shared::QUAD,
    Gate::new(
        "arms_flipped",
        "Arms are flipped to the rear. Can not punch.",
        arms_flipped,
    ),
    Gate::new("arm_missing", "Arm missing", |ctx| {
        ctx.limb.is_some_and(|arm| ctx.attacker.is_location_bad(arm))
    }),
    Gate::new("shoulder", "Shoulder destroyed", |ctx| {
        ctx.limb
            .is_some_and(|arm| !ctx.attacker.has_working_actuator(arm, Actuator::Shoulder))
    }),
    Gate::new("arm_fired", "Weapons fired from arm this turn", |ctx| {
        ctx.limb.is_some_and(|arm| ctx.fired_from(arm))
    }),
    shared::ATTACKER_PRONE,
    shared::UNIT_OR_BUILDING,
    shared::SELF_TARGET,
    shared::FRIENDLY_TARGET,
    shared::ATTACKER_PASSENGER,
    shared::TARGET_PASSENGER,
    shared::GRAPPLED,
    shared::TARGET_SWARMING,
    shared::TARGET_DFA,
    shared::MELEE_RANGE,
    Gate::new("elevation", "Target elevation not in range", |ctx| {
        let reach = ctx.attacker_top();
        reach < ctx.target_level() || reach > ctx.target_top()
    }),
    Gate::new("arc", "Target not in arc", |ctx| {
        !ctx.target_in_arc(ctx.attacker.secondary_facing(), arm_arc(ctx))
    }),
];

/// Firing arc of the striking arm.
pub(crate) fn arm_arc(ctx: &AttackContext<'_>) -> Arc {
    match ctx.limb.and_then(|arm| arm.side()) {
        Some(Side::Left) => Arc::LeftArm,
        _ => Arc::RightArm,
    }
}

pub fn evaluate(ctx: &AttackContext<'_>) -> ToHitResult {
    if let Some(result) = shared::building_shortcut(ctx) {
        return result;
    }

    let mut stack = ModifierStack::new(ctx.attacker.piloting(), "base");
    if let Some(arm) = ctx.limb {
        stack.append(shared::arm_actuator_modifiers(ctx.attacker, arm));
    }
    stack.append(shared::limb_equipment_modifiers(ctx.attacker, ctx.limb));
    shared::physical_situation_modifiers(ctx, &mut stack);
    stack.select_hit_table(select_hit_table(
        ctx.attacker_top(),
        ctx.target_level(),
        ctx.target_height(),
        ctx.target_unit().is_some_and(|t| t.class().can_fly()),
    ));
    shared::finish_physical(ctx, stack)
}
