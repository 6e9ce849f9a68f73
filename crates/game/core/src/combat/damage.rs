//! Physical attack damage.
//!
//! Damage is only computed here; applying it to armor is the host's job.

use crate::action::AttackAction;
use crate::env::{Actuator, EntityView, Env, Location, Mounted};
use crate::resolve::{AttackContext, ResolveError};
use crate::state::RoundUsageFlags;

// ============================================================================
// Adjustments
// ============================================================================

/// Situational adjustments shared by every physical blow.
///
/// # Formula
///
/// ```text
/// damage = base
/// if tsm_eligible and attacker has active TSM: damage *= 2
/// damage /= 2 for each destroyed upper/lower actuator in the limb
/// if limb is underwater:                       damage /= 2
/// if target is conventional infantry:          damage = max(1, damage / 10)
/// ```
struct Blow<'a> {
    attacker: &'a dyn EntityView,
    limb: Option<Location>,
    halving_actuators: &'static [Actuator],
}

const ARM_ACTUATORS: &[Actuator] = &[Actuator::UpperArm, Actuator::LowerArm];
const LEG_ACTUATORS: &[Actuator] = &[Actuator::UpperLeg, Actuator::LowerLeg];

impl Blow<'_> {
    fn adjust(&self, base: u32, tsm_eligible: bool, target: Option<&dyn EntityView>) -> u32 {
        let mut damage = base;
        if tsm_eligible && self.attacker.has_active_tsm() {
            damage *= 2;
        }
        if let Some(limb) = self.limb {
            for &actuator in self.halving_actuators {
                if !self.attacker.has_working_actuator(limb, actuator) {
                    damage /= 2;
                }
            }
            if self.attacker.location_submerged(limb) {
                damage /= 2;
            }
        }
        versus_target(damage, target)
    }
}

/// Conventional infantry only take a tenth, but never less than one point.
pub fn versus_target(damage: u32, target: Option<&dyn EntityView>) -> u32 {
    if target.is_some_and(|t| t.class().is_conventional_infantry()) {
        (damage / 10).max(1)
    } else {
        damage
    }
}

// ============================================================================
// Per-kind damage
// ============================================================================

/// `ceil(weight / 10)`, halved per destroyed arm actuator.
pub fn punch_damage(attacker: &dyn EntityView, arm: Location, target: Option<&dyn EntityView>) -> u32 {
    Blow {
        attacker,
        limb: Some(arm),
        halving_actuators: ARM_ACTUATORS,
    }
    .adjust(attacker.weight().div_ceil(10), true, target)
}

/// `floor(weight / 5)`, halved per destroyed leg actuator.
pub fn kick_damage(attacker: &dyn EntityView, leg: Location, target: Option<&dyn EntityView>) -> u32 {
    Blow {
        attacker,
        limb: Some(leg),
        halving_actuators: LEG_ACTUATORS,
    }
    .adjust(attacker.weight() / 5, true, target)
}

/// Catalog damage for the weapon's subtype and current mode.
///
/// Returns `None` when `club` is not a melee weapon.
pub fn club_damage(
    attacker: &dyn EntityView,
    club: &Mounted,
    target: Option<&dyn EntityView>,
) -> Option<u32> {
    let spec = club.melee_kind()?.spec();
    let (base, tsm_eligible) = spec.base_damage(attacker.weight(), club.mode.as_deref());
    let blow = Blow {
        attacker,
        limb: Some(club.location),
        halving_actuators: &[],
    };
    Some(blow.adjust(base, tsm_eligible, target))
}

/// `ceil(weight / 3)`.
pub fn thrash_damage(attacker: &dyn EntityView, target: Option<&dyn EntityView>) -> u32 {
    versus_target(attacker.weight().div_ceil(3), target)
}

/// Damage a declaration would deal if it hits.
///
/// `None` for attacks that deal no direct damage (push, searchlight) and for
/// ranged fire, whose damage belongs to the weapon rather than the rules.
///
/// # Errors
///
/// Returns [`ResolveError`] when the declaration references something that
/// does not exist.
pub fn expected_damage(
    env: Env<'_>,
    declaration: &crate::action::AttackDeclaration,
) -> Result<Option<u32>, ResolveError> {
    let flags = RoundUsageFlags::new();
    let ctx = AttackContext::build(env, declaration, &flags)?;
    let attacker = ctx.attacker;
    let target = ctx.target_unit();

    let damage = match declaration.action() {
        AttackAction::Punch { .. } | AttackAction::BrushOff { .. } => ctx
            .limb
            .map(|arm| punch_damage(attacker, arm, target)),
        AttackAction::Kick { .. } => ctx.limb.map(|leg| kick_damage(attacker, leg, target)),
        AttackAction::Club { .. } => ctx
            .equipment
            .and_then(|club| club_damage(attacker, club, target)),
        AttackAction::Thrash => Some(thrash_damage(attacker, target)),
        AttackAction::Push
        | AttackAction::Searchlight
        | AttackAction::WeaponFire { .. }
        | AttackAction::GuidedFire { .. } => None,
    };
    Ok(damage)
}
