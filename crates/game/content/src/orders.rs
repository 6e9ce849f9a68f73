//! Per-unit attack orders.
use tohit_core::{AttackDeclaration, EntityId};

/// Declarations one unit makes in a round, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitOrders {
    pub unit: EntityId,
    pub declarations: Vec<AttackDeclaration>,
}

impl UnitOrders {
    pub fn new(unit: EntityId) -> Self {
        Self {
            unit,
            declarations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
