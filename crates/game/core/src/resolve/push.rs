//! Push: a mek shoves the unit standing directly ahead of it one hex back.
use super::context::AttackContext;
use super::gate::Gate;
use super::shared::{self, arms_flipped};
use crate::env::{Actuator, DisplacementKind, Location};
use crate::geometry::HitTable;
use crate::tohit::{ModifierBundle, ModifierStack, ModifierStage, ToHitResult};

pub const GATES: &[Gate] = &[
    shared::SELF_TARGET,
    shared::FRIENDLY_TARGET,
    Gate::new("non_mek", "Non-meks can't push", |ctx| {
        !ctx.attacker.class().is_mek()
    }),
    shared::QUAD,
    shared::GRAPPLED,
    Gate::new("target_not_mek", "Target is not a Mek", |ctx| {
        !ctx.target_unit().is_some_and(|t| t.class().is_mek())
    }),
    Gate::new(
        "arms_flipped",
        "Arms are flipped to the rear. Can not push.",
        arms_flipped,
    ),
    Gate::new("arm_missing", "Arm missing", |ctx| {
        Location::ARMS
            .iter()
            .any(|&arm| ctx.attacker.is_location_bad(arm))
    }),
    Gate::new("arm_fired", "Weapons fired from arm this turn", |ctx| {
        Location::ARMS.iter().any(|&arm| ctx.fired_from(arm))
    }),
    Gate::new("range", "Target not in range", |ctx| ctx.distance() != 1),
    Gate::new("elevation", "Target not at same elevation", |ctx| {
        ctx.attacker_level() != ctx.target_level()
    }),
    Gate::new(
        "target_displacing",
        "Target is making a charge/DFA attack",
        |ctx| {
            target_displacement(ctx).is_some_and(|kind| {
                matches!(kind, DisplacementKind::Charge | DisplacementKind::DeathFromAbove)
            })
        },
    ),
    Gate::new("target_pushing", "Target is pushing another mech", |ctx| {
        target_displacement(ctx) == Some(DisplacementKind::Push)
    }),
    Gate::new(
        "attacker_displaced",
        "Attacker is the target of another push/charge/DFA",
        |ctx| {
            ctx.env
                .roster()
                .displacement_against(ctx.attacker.id())
                .is_some()
        },
    ),
    Gate::new(
        "target_displaced",
        "Target is the target of another push/charge/DFA",
        |ctx| {
            ctx.target_unit().is_some_and(|target| {
                ctx.env
                    .roster()
                    .displacement_against(target.id())
                    .is_some_and(|(source, _)| source != ctx.attacker.id())
            })
        },
    ),
    Gate::new("ahead", "Target not directly ahead of feet", |ctx| {
        match ctx.attacker.facing() {
            Some(facing) => ctx.attacker.position().translated(facing) != ctx.target.position(),
            None => true,
        }
    }),
    Gate::new("attacker_prone", "Attacker is prone", |ctx| {
        ctx.attacker.is_prone()
    }),
    Gate::new("target_prone", "Target is prone", |ctx| {
        ctx.target_unit().is_some_and(|t| t.is_prone())
    }),
    shared::ATTACKER_PASSENGER,
    shared::TARGET_PASSENGER,
    shared::TARGET_SWARMING,
];

fn target_displacement(ctx: &AttackContext<'_>) -> Option<DisplacementKind> {
    ctx.target_unit()
        .and_then(|t| t.displacement())
        .map(|d| d.kind)
}

fn shoulder_modifiers(ctx: &AttackContext<'_>) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::DamageState);
    for arm in Location::ARMS {
        if !ctx.attacker.has_working_actuator(arm, Actuator::Shoulder) {
            bundle.push(2, "Shoulder actuator destroyed");
        }
    }
    bundle
}

pub fn evaluate(ctx: &AttackContext<'_>) -> ToHitResult {
    let mut stack = ModifierStack::new(ctx.attacker.piloting() - 1, "base");
    stack.append(shoulder_modifiers(ctx));
    stack.append(shared::limb_equipment_modifiers(ctx.attacker, None));
    shared::physical_situation_modifiers(ctx, &mut stack);
    stack.select_hit_table(HitTable::Normal);
    shared::finish_physical(ctx, stack)
}
