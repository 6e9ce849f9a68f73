//! Brush-off: a mek swats swarming infantry or an attached pod off itself.
use super::context::{AttackContext, Target};
use super::gate::Gate;
use super::shared::{self, arms_flipped};
use crate::env::Actuator;
use crate::geometry::{HitTable, SideTable};
use crate::tohit::{ModifierStack, ToHitResult};

pub const GATES: &[Gate] = &[
    Gate::new(
        "non_mek",
        "Only Meks can brush off swarming infantry or iNarc Pods",
        |ctx| !ctx.attacker.class().is_mek(),
    ),
    shared::GRAPPLED,
    Gate::new(
        "arms_flipped",
        "Arms are flipped to the rear. Can not brush off.",
        arms_flipped,
    ),
    Gate::new(
        "not_swarming",
        "Can only brush off swarming infantry",
        |ctx| match ctx.target {
            Target::Unit(unit) => {
                ctx.attacker.swarm_attacker() != Some(unit.id())
                    || unit.swarm_target() != Some(ctx.attacker.id())
            }
            _ => false,
        },
    ),
    Gate::new("foreign_pod", "Can only brush off attached iNarc Pods", |ctx| {
        match ctx.target {
            Target::Pod { carrier, .. } => carrier.id() != ctx.attacker.id(),
            _ => false,
        }
    }),
    Gate::new(
        "target_kind",
        "Can only brush off swarming infantry or iNarc Pods",
        |ctx| !matches!(ctx.target, Target::Unit(_) | Target::Pod { .. }),
    ),
    shared::QUAD,
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
    shared::TARGET_DFA,
    shared::ATTACKER_PRONE,
];

pub fn evaluate(ctx: &AttackContext<'_>) -> ToHitResult {
    let mut stack = ModifierStack::new(ctx.attacker.piloting() + 4, "base PSR +4");
    if let Some(arm) = ctx.limb {
        stack.append(shared::arm_actuator_modifiers(ctx.attacker, arm));
    }
    stack.append(shared::limb_equipment_modifiers(ctx.attacker, ctx.limb));
    stack.select_hit_table(HitTable::Normal);
    stack.select_side_table(SideTable::Front);
    stack.append(shared::ruleset_toggle_modifiers(ctx.attacker, ctx.options()));
    stack.append(shared::evasion_modifiers(ctx));
    stack.finish()
}
