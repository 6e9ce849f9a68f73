//! Legality gates: named predicates evaluated in a fixed order.
use super::context::AttackContext;

/// A named predicate that ends resolution with `reason` when it fails.
#[derive(Clone, Copy)]
pub struct Gate {
    pub name: &'static str,
    pub reason: &'static str,
    fails: fn(&AttackContext<'_>) -> bool,
}

impl Gate {
    pub const fn new(
        name: &'static str,
        reason: &'static str,
        fails: fn(&AttackContext<'_>) -> bool,
    ) -> Self {
        Self {
            name,
            reason,
            fails,
        }
    }

    pub fn fails(&self, ctx: &AttackContext<'_>) -> bool {
        (self.fails)(ctx)
    }
}

impl std::fmt::Debug for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate")
            .field("name", &self.name)
            .field("reason", &self.reason)
            .finish()
    }
}

/// The gate that stopped a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub gate: &'static str,
    pub reason: &'static str,
}

/// First failing gate in declaration order.
pub fn first_failure(gates: &'static [Gate], ctx: &AttackContext<'_>) -> Option<&'static Gate> {
    gates.iter().find(|gate| gate.fails(ctx))
}
