//! Melee weapon attacks: clubs, blades, shields and industrial tools.
use super::context::AttackContext;
use super::gate::Gate;
use super::shared::{self, arms_flipped};
use crate::combat::{MeleeKind, MeleeSpec};
use crate::env::{Actuator, Location, Side};
use crate::geometry::{Arc, HitTable, select_hit_table};
use crate::tohit::{ModifierBundle, ModifierStack, ModifierStage, ToHitResult};

pub const GATES: &[Gate] = &[
    Gate::new("non_mek", "Non-meks can't club", |ctx| {
        !ctx.attacker.class().is_mek()
    }),
    shared::QUAD,
    Gate::new(
        "arms_flipped",
        "Arms are flipped to the rear. Can not club.",
        arms_flipped,
    ),
    Gate::new("arm_missing", "Arm missing", |ctx| {
        club_arms(ctx)
            .iter()
            .any(|&arm| ctx.attacker.is_location_bad(arm))
    }),
    Gate::new("arm_fired", "Weapons fired from arm this turn", |ctx| {
        club_arms(ctx).iter().any(|&arm| ctx.fired_from(arm))
    }),
    Gate::new("shoulder", "Shoulder actuator destroyed", |ctx| {
        club_arms(ctx)
            .iter()
            .any(|&arm| !ctx.attacker.has_working_actuator(arm, Actuator::Shoulder))
    }),
    Gate::new("hand", "Hand actuator destroyed", |ctx| {
        melee_spec(ctx).is_some_and(|spec| spec.two_handed || spec.needs_hand)
            && club_arms(ctx)
                .iter()
                .any(|&arm| !ctx.attacker.has_working_actuator(arm, Actuator::Hand))
    }),
    Gate::new("shield_mode", "Shield not in passive mode", |ctx| {
        melee_kind(ctx).is_some_and(MeleeKind::is_shield) && !mode_satisfied(ctx)
    }),
    Gate::new("flail_upper", "Upper actuator destroyed", |ctx| {
        flail_arm(ctx).is_some_and(|arm| !ctx.attacker.has_working_actuator(arm, Actuator::UpperArm))
    }),
    Gate::new("flail_lower", "Lower actuator destroyed", |ctx| {
        flail_arm(ctx).is_some_and(|arm| !ctx.attacker.has_working_actuator(arm, Actuator::LowerArm))
    }),
    Gate::new("blade_retracted", "Blade is Retracted.", |ctx| {
        melee_kind(ctx) == Some(MeleeKind::RetractableBlade) && !mode_satisfied(ctx)
    }),
    Gate::new("weapon_destroyed", "Melee weapon destroyed", |ctx| {
        ctx.equipment.is_some_and(|club| club.destroyed)
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
        ctx.attacker_top() < ctx.target_level() || ctx.attacker_level() > ctx.target_top()
    }),
    Gate::new("arc", "Target not in arc", |ctx| {
        !ctx.target_in_arc(ctx.attacker.secondary_facing(), club_arc(ctx))
    }),
];

fn melee_kind(ctx: &AttackContext<'_>) -> Option<MeleeKind> {
    ctx.equipment.and_then(|club| club.melee_kind())
}

fn melee_spec(ctx: &AttackContext<'_>) -> Option<&'static MeleeSpec> {
    melee_kind(ctx).map(MeleeKind::spec)
}

fn two_handed(ctx: &AttackContext<'_>) -> bool {
    melee_spec(ctx).is_some_and(|spec| spec.two_handed)
}

/// Arms that swing the weapon: both for two-handed weapons, otherwise the
/// arm it is mounted in.
fn club_arms(ctx: &AttackContext<'_>) -> Vec<Location> {
    if two_handed(ctx) {
        Location::ARMS.to_vec()
    } else {
        ctx.limb.filter(|loc| loc.is_arm()).into_iter().collect()
    }
}

fn flail_arm(ctx: &AttackContext<'_>) -> Option<Location> {
    (melee_kind(ctx) == Some(MeleeKind::Flail))
        .then_some(ctx.limb)
        .flatten()
}

fn mode_satisfied(ctx: &AttackContext<'_>) -> bool {
    match (melee_spec(ctx).and_then(|spec| spec.required_mode), ctx.equipment) {
        (Some(required), Some(club)) => club.mode_is(required),
        _ => true,
    }
}

fn club_arc(ctx: &AttackContext<'_>) -> Arc {
    if two_handed(ctx) {
        return Arc::Forward;
    }
    match ctx.limb.and_then(Location::side) {
        Some(Side::Left) => Arc::LeftArm,
        Some(Side::Right) => Arc::RightArm,
        None => Arc::Forward,
    }
}

fn club_actuator_modifiers(ctx: &AttackContext<'_>) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::DamageState);
    for arm in club_arms(ctx) {
        if !ctx.attacker.has_working_actuator(arm, Actuator::UpperArm) {
            bundle.push(2, "Upper arm actuator destroyed");
        }
        if !ctx.attacker.has_working_actuator(arm, Actuator::LowerArm) {
            bundle.push(2, "Lower arm actuator destroyed");
        }
    }
    bundle
}

pub fn evaluate(ctx: &AttackContext<'_>) -> ToHitResult {
    if let Some(result) = shared::building_shortcut(ctx) {
        return result;
    }

    let offset = melee_spec(ctx).map_or(0, |spec| spec.offset);
    let mut stack = ModifierStack::new(ctx.attacker.piloting() + offset, "base");
    stack.append(club_actuator_modifiers(ctx));
    stack.append(shared::limb_equipment_modifiers(ctx.attacker, None));
    shared::physical_situation_modifiers(ctx, &mut stack);

    let table = if ctx.attacker_level() == ctx.target_level() {
        HitTable::Normal
    } else {
        select_hit_table(
            ctx.attacker_top(),
            ctx.target_level(),
            ctx.target_height(),
            ctx.target_unit().is_some_and(|t| t.class().can_fly()),
        )
    };
    stack.select_hit_table(table);
    shared::finish_physical(ctx, stack)
}
