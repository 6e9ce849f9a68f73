//! Standard ranged weapon fire.
use super::context::{AttackContext, Target};
use super::gate::Gate;
use super::shared;
use crate::action::AttackAction;
use crate::env::{Actuator, Location, Posture, RangeBand, WeaponProfile};
use crate::geometry::{
    HitTable, attacker_movement_modifiers, has_partial_cover, is_underwater,
    prone_target_modifiers, target_movement_modifiers, target_terrain_modifiers,
};
use crate::state::UsageMark;
use crate::tohit::{ModifierBundle, ModifierStack, ModifierStage, ToHitResult};

// ============================================================================
// Gates
// ============================================================================

pub const SHUT_DOWN: Gate = Gate::new("shut_down", "Attacker is shut down", |ctx| {
    ctx.attacker.posture().contains(Posture::SHUT_DOWN)
});

pub const SWARM_LOCK: Gate = Gate::new("swarm_lock", "Can only attack the swarmed unit", |ctx| {
    ctx.attacker
        .swarm_target()
        .is_some_and(|swarmed| ctx.target_unit().is_none_or(|t| t.id() != swarmed))
});

pub const WEAPON_DESTROYED: Gate = Gate::new("weapon_destroyed", "Weapon is destroyed", |ctx| {
    ctx.equipment.is_some_and(|weapon| weapon.destroyed)
});

pub const ALREADY_FIRED: Gate = Gate::new(
    "already_fired",
    "Weapon already fired this round",
    |ctx| {
        ctx.equipment
            .is_some_and(|weapon| ctx.flags.weapon_fired(ctx.attacker.id(), weapon.id))
    },
);

pub const NO_AMMO_LINKED: Gate = Gate::new("no_ammo", "Weapon has no ammo linked", |ctx| {
    profile(ctx).is_some_and(|p| p.uses_ammo) && ctx.ammo.is_none()
});

pub const AMMO_EMPTY: Gate = Gate::new("ammo_empty", "Linked ammo bin is empty", |ctx| {
    ctx.ammo
        .and_then(|bin| bin.ammo_bin())
        .is_some_and(|bin| bin.shots == 0)
});

pub const ATTACKER_EVADING: Gate = Gate::new("evading", "Attacker is evading", |ctx| {
    ctx.attacker.posture().contains(Posture::EVADING)
});

pub const OUT_OF_RANGE: Gate = Gate::new("range", "Target out of range", |ctx| {
    range_band(ctx).is_none()
});

pub const WEAPON_ARC: Gate = Gate::new("arc", "Target not in arc", |ctx| {
    ctx.equipment
        .is_some_and(|weapon| !shared::mount_in_arc(ctx, weapon))
});

pub const LINE_OF_SIGHT: Gate = Gate::new("line_of_sight", "No line of sight to target", |ctx| {
    !ctx.board().has_line_of_sight(
        ctx.attacker.position(),
        ctx.attacker_top(),
        ctx.target.position(),
        ctx.target_top(),
    )
});

pub const TARGET_UNDERWATER: Gate = Gate::new("underwater", "Target is underwater", |ctx| {
    ctx.target_unit()
        .is_some_and(|t| is_underwater(ctx.board(), t))
});

pub const AIM_TARGET: Gate = Gate::new("aim_target", "Only units can be aimed at", |ctx| {
    aimed_location(ctx).is_some() && ctx.target_unit().is_none()
});

pub const AIM_SYSTEM: Gate = Gate::new(
    "aim_system",
    "Aimed shots need a targeting computer or an immobile target",
    |ctx| aimed_location(ctx).is_some() && !ctx.attacker.has_targeting_computer() && !target_immobile(ctx),
);

pub const AIM_HEAD: Gate = Gate::new(
    "aim_head",
    "Only an immobile target can be aimed at the head",
    |ctx| aimed_location(ctx) == Some(Location::Head) && !target_immobile(ctx),
);

pub const GATES: &[Gate] = &[
    shared::SELF_TARGET,
    shared::FRIENDLY_TARGET,
    SHUT_DOWN,
    shared::ATTACKER_PASSENGER,
    SWARM_LOCK,
    shared::TARGET_PASSENGER,
    WEAPON_DESTROYED,
    ALREADY_FIRED,
    NO_AMMO_LINKED,
    AMMO_EMPTY,
    ATTACKER_EVADING,
    OUT_OF_RANGE,
    WEAPON_ARC,
    LINE_OF_SIGHT,
    TARGET_UNDERWATER,
    AIM_TARGET,
    AIM_SYSTEM,
    AIM_HEAD,
];

// ============================================================================
// Helpers
// ============================================================================

fn profile<'a>(ctx: &AttackContext<'a>) -> Option<&'a WeaponProfile> {
    ctx.equipment.and_then(|weapon| weapon.weapon_profile())
}

fn range_band(ctx: &AttackContext<'_>) -> Option<RangeBand> {
    profile(ctx).and_then(|p| p.band(ctx.distance()))
}

fn aimed_location(ctx: &AttackContext<'_>) -> Option<Location> {
    match ctx.declaration.action() {
        AttackAction::WeaponFire { aim, .. } => aim,
        _ => None,
    }
}

/// Hexes and buildings never move.
fn target_immobile(ctx: &AttackContext<'_>) -> bool {
    match ctx.target {
        Target::Unit(unit) => unit.posture().contains(Posture::IMMOBILE),
        Target::Hex(_) | Target::Building { .. } => true,
        Target::Pod { carrier, .. } => carrier.posture().contains(Posture::IMMOBILE),
    }
}

/// How a guided munition alters the standard fire computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FireOptions {
    pub ignore_target_movement: bool,
}

// ============================================================================
// Modifier bundles
// ============================================================================

fn heat_penalty(heat: i32) -> i32 {
    match heat {
        24.. => 4,
        17.. => 3,
        13.. => 2,
        8.. => 1,
        _ => 0,
    }
}

fn damage_state_modifiers(ctx: &AttackContext<'_>) -> ModifierBundle {
    let attacker = ctx.attacker;
    let mut bundle = ModifierBundle::new(ModifierStage::DamageState);
    bundle.push(heat_penalty(attacker.heat()), "heat");
    bundle.push(2 * i32::from(attacker.sensor_hits()), "sensor damage");

    let Some(weapon) = ctx.equipment else {
        return bundle;
    };
    let arm = weapon.location;
    if arm.is_arm() {
        if !attacker.has_working_actuator(arm, Actuator::Shoulder) {
            bundle.push(4, "Shoulder actuator destroyed");
        } else {
            if !attacker.has_working_actuator(arm, Actuator::UpperArm) {
                bundle.push(1, "Upper arm actuator destroyed");
            }
            if !attacker.has_working_actuator(arm, Actuator::LowerArm) {
                bundle.push(1, "Lower arm actuator destroyed");
            }
        }
    }
    bundle
}

fn equipment_modifiers(ctx: &AttackContext<'_>) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::Equipment);
    if aimed_location(ctx).is_some() {
        bundle.push(3, "aimed shot");
    }
    bundle
}

fn range_modifiers(ctx: &AttackContext<'_>) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::MovementAndTerrain);
    match range_band(ctx) {
        Some(RangeBand::Medium) => bundle.push(2, "medium range"),
        Some(RangeBand::Long) => bundle.push(4, "long range"),
        Some(RangeBand::Short) | None => {}
    }
    if let Some(p) = profile(ctx) {
        let distance = ctx.distance();
        if p.min_range > 0 && distance <= p.min_range {
            let penalty = p.min_range - distance + 1;
            bundle.push(i32::try_from(penalty).unwrap_or(i32::MAX), "minimum range");
        }
    }
    bundle
}

fn situation_modifiers(ctx: &AttackContext<'_>, fire: FireOptions) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::MovementAndTerrain);
    let mut merge = |other: ModifierBundle| {
        for (delta, label) in other.entries() {
            bundle.push(delta, label);
        }
    };
    merge(range_modifiers(ctx));
    merge(attacker_movement_modifiers(ctx.attacker));

    let mut own = ModifierBundle::new(ModifierStage::MovementAndTerrain);
    if ctx.attacker.is_prone() {
        own.push(2, "attacker prone");
    }
    match ctx.target {
        Target::Unit(target) => {
            if !fire.ignore_target_movement {
                merge(target_movement_modifiers(target));
            }
            merge(prone_target_modifiers(target, ctx.distance() <= 1));
            merge(target_terrain_modifiers(ctx.board(), target));
            if has_partial_cover(ctx.board(), target) {
                own.push(1, "target has partial cover");
            }
        }
        Target::Hex(_) | Target::Building { .. } => own.push(-4, "target immobile"),
        Target::Pod { .. } => {}
    }
    merge(own);
    bundle
}

fn targeting_modifiers(ctx: &AttackContext<'_>) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::EvasionAndTargeting);
    if aimed_location(ctx).is_none() && ctx.attacker.has_targeting_computer() {
        bundle.push(-1, "targeting computer");
    }
    bundle
}

// ============================================================================
// Resolution
// ============================================================================

pub fn evaluate(ctx: &AttackContext<'_>) -> ToHitResult {
    evaluate_with(ctx, FireOptions::default())
}

pub(crate) fn evaluate_with(ctx: &AttackContext<'_>, fire: FireOptions) -> ToHitResult {
    if matches!(ctx.target, Target::Building { .. }) && ctx.distance() <= 1 {
        return ToHitResult::automatic_success(shared::ADJACENT_BUILDING);
    }

    let mut stack = ModifierStack::new(ctx.attacker.gunnery(), "base");
    stack.append(damage_state_modifiers(ctx));
    stack.append(equipment_modifiers(ctx));
    stack.append(situation_modifiers(ctx, fire));

    let covered = ctx
        .target_unit()
        .is_some_and(|t| has_partial_cover(ctx.board(), t));
    stack.select_hit_table(if covered { HitTable::Punch } else { HitTable::Normal });
    stack.select_side_table(shared::side_table(ctx));
    stack.append(targeting_modifiers(ctx));
    stack.append(shared::evasion_modifiers(ctx));
    stack.finish()
}

pub fn marks(ctx: &AttackContext<'_>) -> Vec<UsageMark> {
    ctx.equipment
        .map(|weapon| UsageMark::WeaponFired {
            entity: ctx.attacker.id(),
            weapon: weapon.id,
            location: weapon.location,
        })
        .into_iter()
        .collect()
}
