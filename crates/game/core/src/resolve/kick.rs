//! Kick: a mek strikes with one leg while standing on the other.
use super::context::AttackContext;
use super::gate::Gate;
use super::shared;
use crate::env::{Actuator, EntityView, Location, UnitClass};
use crate::geometry::{Arc, select_hit_table};
use crate::tohit::{ModifierBundle, ModifierStack, ModifierStage, ToHitResult};

pub const GATES: &[Gate] = &[
    Gate::new("non_mek", "Non-meks can't kick", |ctx| {
        !ctx.attacker.class().is_mek()
    }),
    Gate::new("leg_missing", "Leg missing", |ctx| {
        kicking_pair(ctx.attacker)
            .iter()
            .any(|&leg| ctx.attacker.is_location_bad(leg))
    }),
    Gate::new("hip", "Hip destroyed", |ctx| {
        kicking_pair(ctx.attacker)
            .iter()
            .any(|&leg| !ctx.attacker.has_working_actuator(leg, Actuator::Hip))
    }),
    Gate::new("leg_fired", "Weapons fired from leg this turn", |ctx| {
        ctx.limb.is_some_and(|leg| ctx.fired_from(leg))
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
        let foot = ctx.attacker_level();
        foot < ctx.target_level() || foot > ctx.target_top()
    }),
    Gate::new("arc", "Target not in arc", |ctx| {
        !ctx.target_in_arc(ctx.attacker.facing(), Arc::Forward)
    }),
];

/// The legs a kick uses: both hind legs for bipeds, both front legs for quads.
fn kicking_pair(attacker: &dyn EntityView) -> [Location; 2] {
    if attacker.class() == UnitClass::QuadMek {
        Location::ARMS
    } else {
        Location::LEGS
    }
}

pub(crate) fn leg_actuator_modifiers(attacker: &dyn EntityView, leg: Location) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::DamageState);
    if !attacker.has_working_actuator(leg, Actuator::UpperLeg) {
        bundle.push(2, "Upper leg actuator destroyed");
    }
    if !attacker.has_working_actuator(leg, Actuator::LowerLeg) {
        bundle.push(2, "Lower leg actuator destroyed");
    }
    if !attacker.has_working_actuator(leg, Actuator::Foot) {
        bundle.push(1, "Foot actuator destroyed");
    }
    bundle
}

pub fn evaluate(ctx: &AttackContext<'_>) -> ToHitResult {
    if let Some(result) = shared::building_shortcut(ctx) {
        return result;
    }

    let mut stack = ModifierStack::new(ctx.attacker.piloting() - 2, "base");
    if let Some(leg) = ctx.limb {
        stack.append(leg_actuator_modifiers(ctx.attacker, leg));
    }
    stack.append(shared::limb_equipment_modifiers(ctx.attacker, None));
    shared::physical_situation_modifiers(ctx, &mut stack);
    stack.select_hit_table(select_hit_table(
        ctx.attacker_level(),
        ctx.target_level(),
        ctx.target_height(),
        ctx.target_unit().is_some_and(|t| t.class().can_fly()),
    ));
    shared::finish_physical(ctx, stack)
}
