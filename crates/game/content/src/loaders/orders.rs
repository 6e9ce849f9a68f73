//! Attack orders loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tohit_core::{AttackAction, AttackDeclaration, EntityId, TargetRef};

use crate::loaders::{LoadResult, read_file};
use crate::orders::UnitOrders;

/// Orders of one unit in RON files; the attacker is implied by `unit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UnitOrdersRon {
    unit: EntityId,
    attacks: Vec<AttackOrderRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AttackOrderRon {
    target: TargetRef,
    action: AttackAction,
}

/// Loader for round orders from RON files.
///
/// ```ron
/// [
///     (unit: 1, attacks: [
///         (target: Entity(2), action: Punch(arm: Right)),
///         (target: Entity(2), action: WeaponFire(weapon: 10)),
///     ]),
/// ]
/// ```
pub struct OrdersLoader;

impl OrdersLoader {
    /// Load every unit's orders, keeping file order.
    pub fn load(path: &Path) -> LoadResult<Vec<UnitOrders>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<Vec<UnitOrders>> {
        let data: Vec<UnitOrdersRon> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse orders RON: {}", e))?;

        let mut orders: Vec<UnitOrders> = Vec::with_capacity(data.len());
        for entry in data {
            if orders.iter().any(|existing| existing.unit == entry.unit) {
                anyhow::bail!("Unit {} has more than one orders block", entry.unit);
            }
            let declarations = entry
                .attacks
                .into_iter()
                .map(|attack| AttackDeclaration::new(entry.unit, attack.target, attack.action))
                .collect();
            orders.push(UnitOrders {
                unit: entry.unit,
                declarations,
            });
        }

        Ok(orders)
    }
}
