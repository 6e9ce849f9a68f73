//! Searchlight: lights up every unit along the beam.
//!
//! Declaring a searchlight never misses. On commit the attacker's searchlight
//! is marked used for the round and each unit it lights is marked illuminated.
use super::context::AttackContext;
use super::gate::Gate;
use super::shared;
use crate::config::RulesConfig;
use crate::env::{EntityView, Env, keys, modes};
use crate::geometry::{Coords, intervening, unit_top};
use crate::state::{EntityId, UsageMark};
use crate::tohit::ToHitResult;

pub const SEARCHLIGHT_LIT: &str = "Searchlight illuminates target";

pub const GATES: &[Gate] = &[
    shared::SELF_TARGET,
    Gate::new("no_searchlight", "Attacker has no searchlight", |ctx| {
        ctx.equipment.is_none_or(|light| light.destroyed)
    }),
    Gate::new("not_lit", "Searchlight is not lit", |ctx| {
        ctx.equipment.is_some_and(|light| !light.mode_is(modes::ON))
    }),
    Gate::new("already_used", "Searchlight already used this round", |ctx| {
        ctx.flags.searchlight_used(ctx.attacker.id())
    }),
    Gate::new("arc", "Target not in arc", |ctx| {
        ctx.equipment
            .is_some_and(|light| !shared::mount_in_arc(ctx, light))
    }),
    Gate::new("range", "Target out of searchlight range", |ctx| {
        ctx.distance() > searchlight_range(ctx)
    }),
    Gate::new("line_of_sight", "No line of sight to target", |ctx| {
        !ctx.board().has_line_of_sight(
            ctx.attacker.position(),
            ctx.attacker_top(),
            ctx.target.position(),
            ctx.target_top(),
        )
    }),
];

/// Configured range in hexes; negative values clamp to zero.
fn searchlight_range(ctx: &AttackContext<'_>) -> u32 {
    ctx.options()
        .integer(keys::SEARCHLIGHT_RANGE)
        .map_or(RulesConfig::DEFAULT_SEARCHLIGHT_RANGE, |range| {
            u32::try_from(range).unwrap_or(0)
        })
}

pub fn evaluate(_ctx: &AttackContext<'_>) -> ToHitResult {
    ToHitResult::automatic_success(SEARCHLIGHT_LIT)
}

pub fn marks(ctx: &AttackContext<'_>) -> Vec<UsageMark> {
    let attacker = ctx.attacker.id();
    std::iter::once(UsageMark::SearchlightUsed(attacker))
        .chain(
            illuminated_by(ctx.env, ctx.attacker, ctx.target.position())
                .into_iter()
                .map(UsageMark::Illuminated),
        )
        .collect()
}

/// Units a searchlight aimed from `attacker` at `target` would light.
///
/// Every unit standing in the corridor of hexes between the two, the target
/// hex included, that the attacker can see. The attacker itself is never lit.
pub fn illuminated_by(env: Env<'_>, attacker: &dyn EntityView, target: Coords) -> Vec<EntityId> {
    let board = env.board();
    let origin = attacker.position();
    let eye = unit_top(board, attacker);

    let mut lit = Vec::new();
    for hex in intervening(origin, target) {
        for unit in env.roster().entities_at(hex) {
            if unit.id() == attacker.id() || lit.contains(&unit.id()) {
                continue;
            }
            if board.has_line_of_sight(origin, eye, hex, unit_top(board, unit)) {
                lit.push(unit.id());
            }
        }
    }
    lit
}
