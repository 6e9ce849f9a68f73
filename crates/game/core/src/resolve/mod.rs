//! Attack resolution: legality gates, then modifiers, per attack kind.
//!
//! Each attack kind owns an ordered gate list, an evaluation function and an
//! optional list of usage marks it leaves behind on commit. [`resolve`] looks
//! the kind up in a single table and runs the same pipeline for all of them:
//!
//! 1. build an [`AttackContext`] (missing references are a [`ResolveError`]);
//! 2. run gates in order, stopping at the first failure with `Impossible`;
//! 3. evaluate the kind's base value and modifiers.
//!
//! Resolution never writes anywhere; calling it twice yields identical results.
pub mod brush_off;
pub mod club;
mod context;
mod error;
mod gate;
pub mod guided;
pub mod kick;
pub mod punch;
pub mod push;
pub mod searchlight;
mod shared;
pub mod thrash;
pub mod weapon;

pub use context::{AttackContext, Target};
pub use error::ResolveError;
pub use gate::{Gate, Rejection, first_failure};
pub use searchlight::illuminated_by;

use strum::EnumCount;
use tracing::debug;

use crate::action::{AttackDeclaration, AttackKind};
use crate::env::Env;
use crate::state::{RoundUsageFlags, UsageMark};
use crate::tohit::ToHitResult;

type Evaluate = fn(&AttackContext<'_>) -> ToHitResult;
type Marks = fn(&AttackContext<'_>) -> Vec<UsageMark>;

/// Table row for one attack kind.
struct Resolver {
    kind: AttackKind,
    gates: &'static [Gate],
    evaluate: Evaluate,
    marks: Marks,
}

fn no_marks(_ctx: &AttackContext<'_>) -> Vec<UsageMark> {
    Vec::new()
}

/// Indexed by `AttackKind as usize`.
static RESOLVERS: [Resolver; AttackKind::COUNT] = [
    Resolver {
        kind: AttackKind::Punch,
        gates: punch::GATES,
        evaluate: punch::evaluate,
        marks: no_marks,
    },
    Resolver {
        kind: AttackKind::Kick,
        gates: kick::GATES,
        evaluate: kick::evaluate,
        marks: no_marks,
    },
    Resolver {
        kind: AttackKind::Club,
        gates: club::GATES,
        evaluate: club::evaluate,
        marks: no_marks,
    },
    Resolver {
        kind: AttackKind::Push,
        gates: push::GATES,
        evaluate: push::evaluate,
        marks: no_marks,
    },
    Resolver {
        kind: AttackKind::BrushOff,
        gates: brush_off::GATES,
        evaluate: brush_off::evaluate,
        marks: no_marks,
    },
    Resolver {
        kind: AttackKind::Thrash,
        gates: thrash::GATES,
        evaluate: thrash::evaluate,
        marks: no_marks,
    },
    Resolver {
        kind: AttackKind::Searchlight,
        gates: searchlight::GATES,
        evaluate: searchlight::evaluate,
        marks: searchlight::marks,
    },
    Resolver {
        kind: AttackKind::WeaponFire,
        gates: weapon::GATES,
        evaluate: weapon::evaluate,
        marks: weapon::marks,
    },
    Resolver {
        kind: AttackKind::GuidedFire,
        gates: guided::GATES,
        evaluate: guided::evaluate,
        marks: weapon::marks,
    },
];

fn resolver(kind: AttackKind) -> &'static Resolver {
    &RESOLVERS[kind as usize]
}

/// Ordered legality gates of an attack kind.
pub fn gates(kind: AttackKind) -> &'static [Gate] {
    resolver(kind).gates
}

fn first_rejection(ctx: &AttackContext<'_>) -> Option<Rejection> {
    let kind = ctx.declaration.kind();
    first_failure(resolver(kind).gates, ctx).map(|gate| {
        debug!(
            kind = %kind,
            attacker = %ctx.attacker.id(),
            gate = gate.name,
            reason = gate.reason,
            "declaration rejected"
        );
        Rejection {
            gate: gate.name,
            reason: gate.reason,
        }
    })
}

/// Full to-hit computation for a declaration.
///
/// # Errors
///
/// Returns [`ResolveError`] when the declaration references a unit, hex or
/// piece of equipment that does not exist. Rules outcomes, including
/// impossible attacks, are always `Ok`.
pub fn resolve(
    env: Env<'_>,
    declaration: &AttackDeclaration,
    flags: &RoundUsageFlags,
) -> Result<ToHitResult, ResolveError> {
    let ctx = AttackContext::build(env, declaration, flags)?;
    if let Some(rejection) = first_rejection(&ctx) {
        return Ok(ToHitResult::impossible(rejection.reason));
    }
    Ok((resolver(ctx.declaration.kind()).evaluate)(&ctx))
}

/// Runs only the legality gates.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn check_legality(
    env: Env<'_>,
    declaration: &AttackDeclaration,
    flags: &RoundUsageFlags,
) -> Result<Option<Rejection>, ResolveError> {
    let ctx = AttackContext::build(env, declaration, flags)?;
    Ok(first_rejection(&ctx))
}

/// Legality shortcut for graying out options in an input layer.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn is_legal(
    env: Env<'_>,
    declaration: &AttackDeclaration,
    flags: &RoundUsageFlags,
) -> Result<bool, ResolveError> {
    check_legality(env, declaration, flags).map(|rejection| rejection.is_none())
}

/// Usage marks a legal declaration leaves behind once committed.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn usage_marks(
    env: Env<'_>,
    declaration: &AttackDeclaration,
    flags: &RoundUsageFlags,
) -> Result<Vec<UsageMark>, ResolveError> {
    let ctx = AttackContext::build(env, declaration, flags)?;
    Ok((resolver(ctx.declaration.kind()).marks)(&ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn resolver_table_is_indexed_by_kind() {
        for kind in AttackKind::iter() {
            assert_eq!(resolver(kind).kind, kind);
        }
    }

    #[test]
    fn every_kind_has_gates_with_unique_names() {
        for kind in AttackKind::iter() {
            let gates = gates(kind);
            assert!(!gates.is_empty(), "{kind} has no gates");
            for (i, gate) in gates.iter().enumerate() {
                assert!(
                    gates[i + 1..].iter().all(|other| other.name != gate.name),
                    "{kind} repeats gate {}",
                    gate.name
                );
            }
        }
    }
}
