//! Gates and modifier bundles shared by several attack kinds.
use super::context::{AttackContext, Target};
use super::gate::Gate;
use crate::config::{RulesConfig, WeightClass};
use crate::env::{
    Actuator, DisplacementKind, EntityView, GameOptionsView, Location, Mounted, Posture, Side,
    UnitClass, keys,
};
use crate::geometry::{
    Arc, SideTable, attacker_movement_modifiers, prone_target_modifiers, select_side_table,
    target_movement_modifiers, target_terrain_modifiers,
};
use crate::tohit::{ModifierBundle, ModifierStack, ModifierStage, ToHitResult};

// ============================================================================
// Gates
// ============================================================================

pub const SELF_TARGET: Gate = Gate::new("self_target", "You can't target yourself", |ctx| {
    ctx.targets_self()
});

pub const FRIENDLY_TARGET: Gate = Gate::new(
    "friendly_target",
    "A friendly unit can never be the target of a direct attack.",
    |ctx| ctx.target_is_friendly() && !ctx.friendly_fire_allowed(),
);

pub const ATTACKER_PASSENGER: Gate = Gate::new(
    "attacker_passenger",
    "Attacker is a passenger.",
    |ctx| ctx.attacker.transport().is_some(),
);

pub const TARGET_PASSENGER: Gate = Gate::new("target_passenger", "Target is a passenger.", |ctx| {
    ctx.target_unit().is_some_and(|t| t.transport().is_some())
});

pub const GRAPPLED: Gate = Gate::new("grappled", "Locked in Grapple", |ctx| {
    ctx.attacker.grapple_partner().is_some()
});

pub const TARGET_SWARMING: Gate = Gate::new(
    "target_swarming",
    "Target is swarming a Mek.",
    |ctx| ctx.target_unit().is_some_and(|t| t.swarm_target().is_some()),
);

pub const TARGET_DFA: Gate = Gate::new(
    "target_dfa",
    "Target is making a DFA attack",
    |ctx| {
        ctx.target_unit().is_some_and(|t| {
            t.displacement()
                .is_some_and(|d| d.kind == DisplacementKind::DeathFromAbove)
        })
    },
);

pub const UNIT_OR_BUILDING: Gate = Gate::new("target_kind", "Invalid attack target", |ctx| {
    !matches!(ctx.target, Target::Unit(_) | Target::Building { .. })
});

pub const MELEE_RANGE: Gate = Gate::new("range", "Target not in range", |ctx| {
    ctx.distance() > 1
});

pub const ATTACKER_PRONE: Gate = Gate::new("attacker_prone", "Attacker is prone", |ctx| {
    ctx.attacker.is_prone()
});

pub const QUAD: Gate = Gate::new("quad", "Attacker is a quad", |ctx| {
    ctx.attacker.class() == UnitClass::QuadMek
});

pub fn arms_flipped(ctx: &AttackContext<'_>) -> bool {
    ctx.attacker.posture().contains(Posture::ARMS_FLIPPED)
}

// ============================================================================
// Shortcuts and tables
// ============================================================================

pub const ADJACENT_BUILDING: &str = "Targeting adjacent building.";

/// Physical attacks against a building never miss.
pub fn building_shortcut(ctx: &AttackContext<'_>) -> Option<ToHitResult> {
    matches!(ctx.target, Target::Building { .. })
        .then(|| ToHitResult::automatic_success(ADJACENT_BUILDING))
}

/// Side of the target facing the attacker; non-unit targets use the front.
pub fn side_table(ctx: &AttackContext<'_>) -> SideTable {
    match ctx.target_unit() {
        Some(target) => select_side_table(ctx.attacker.position(), target.position(), target.facing()),
        None => SideTable::Front,
    }
}

// ============================================================================
// Modifier bundles
// ============================================================================

/// Upper and lower arm actuators, then the hand unless a claw replaces it.
pub fn arm_actuator_modifiers(attacker: &dyn EntityView, arm: Location) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::DamageState);
    if !attacker.has_working_actuator(arm, Actuator::UpperArm) {
        bundle.push(2, "Upper arm actuator destroyed");
    }
    if !attacker.has_working_actuator(arm, Actuator::LowerArm) {
        bundle.push(2, "Lower arm actuator destroyed");
    }
    if !attacker.has_claw(arm) && !attacker.has_working_actuator(arm, Actuator::Hand) {
        bundle.push(1, "Hand actuator destroyed");
    }
    bundle
}

/// Claws on the striking arm and exoskeleton assist.
pub fn limb_equipment_modifiers(attacker: &dyn EntityView, limb: Option<Location>) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::Equipment);
    if limb.is_some_and(|arm| attacker.has_claw(arm)) {
        bundle.push(2, "Using claws");
    }
    if attacker.has_active_exoskeleton() {
        bundle.push(-1, "exoskeleton assist");
    }
    bundle
}

/// Attacker and target movement, prone target and target hex terrain.
pub fn physical_situation_modifiers(ctx: &AttackContext<'_>, stack: &mut ModifierStack) {
    stack.append(attacker_movement_modifiers(ctx.attacker));
    if let Some(target) = ctx.target_unit() {
        stack.append(target_movement_modifiers(target));
        stack.append(prone_target_modifiers(target, true));
        stack.append(target_terrain_modifiers(ctx.board(), target));
    }
}

/// Weight-class attack bonus and the industrial TSM penalty.
pub fn ruleset_toggle_modifiers(
    attacker: &dyn EntityView,
    options: &dyn GameOptionsView,
) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::RulesetToggles);
    if options.is_enabled(keys::WEIGHT_CLASS_ATTACK_BONUS) {
        match WeightClass::from_tons(attacker.weight()) {
            WeightClass::Light => bundle.push(-2, "light weight class"),
            WeightClass::Medium => bundle.push(-1, "medium weight class"),
            WeightClass::Heavy | WeightClass::Assault => {}
        }
    }
    let penalty_on = options.boolean(keys::INDUSTRIAL_TSM_PENALTY) != Some(false);
    if penalty_on && attacker.has_industrial_tsm() {
        bundle.push(RulesConfig::INDUSTRIAL_TSM_PENALTY, "industrial TSM");
    }
    bundle
}

pub fn evasion_modifiers(ctx: &AttackContext<'_>) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::EvasionAndTargeting);
    if ctx
        .target_unit()
        .is_some_and(|t| t.posture().contains(Posture::EVADING))
    {
        bundle.push(1, "target evading");
    }
    bundle
}

/// Side table, ruleset toggles and evasion, the tail every physical attack shares.
///
/// Callers have already applied damage-state, equipment and situation
/// modifiers and selected the hit table.
pub fn finish_physical(ctx: &AttackContext<'_>, mut stack: ModifierStack) -> ToHitResult {
    stack.select_side_table(side_table(ctx));
    stack.append(ruleset_toggle_modifiers(ctx.attacker, ctx.options()));
    stack.append(evasion_modifiers(ctx));
    stack.finish()
}

/// Arc test for a mounted weapon or searchlight.
///
/// Rear mounts cover the rear arc, arm mounts their arm arc; both follow the
/// torso. Leg mounts point where the legs do.
pub fn mount_in_arc(ctx: &AttackContext<'_>, mounted: &Mounted) -> bool {
    let torso = ctx.attacker.secondary_facing();
    if mounted.rear_mounted {
        return ctx.target_in_arc(torso, Arc::Rear);
    }
    match mounted.location.side() {
        Some(Side::Left) if mounted.location.is_arm() => ctx.target_in_arc(torso, Arc::LeftArm),
        Some(Side::Right) if mounted.location.is_arm() => ctx.target_in_arc(torso, Arc::RightArm),
        _ if mounted.location.is_leg() => ctx.target_in_arc(ctx.attacker.facing(), Arc::Forward),
        _ => ctx.target_in_arc(torso, Arc::Forward),
    }
}
