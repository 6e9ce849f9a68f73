//! Drives one round of declarations through the action queue.
use serde::Serialize;
use tohit_content::UnitOrders;
use tohit_core::{
    ActionQueue, AttackDeclaration, BattlefieldSnapshot, EntityId, QueueError, Report,
    RoundUsageFlags, ToHitResult, expected_damage,
};
use tracing::{info, warn};

/// A declaration the queue refused at ADD time.
#[derive(Clone, Debug, Serialize)]
pub struct Refusal {
    pub declaration: AttackDeclaration,
    pub reason: String,
}

/// A committed declaration with its final target number.
#[derive(Clone, Debug, Serialize)]
pub struct Resolution {
    pub declaration: AttackDeclaration,
    pub result: ToHitResult,
    /// Damage on a hit, for attacks whose damage the attacker determines.
    pub damage: Option<u32>,
}

#[derive(Clone, Debug, Serialize)]
pub struct UnitRound {
    pub unit: EntityId,
    pub refused: Vec<Refusal>,
    pub resolved: Vec<Resolution>,
    pub dropped: Vec<Refusal>,
    pub reports: Vec<Report>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RoundLog {
    pub units: Vec<UnitRound>,
    /// Units lit by searchlights by the end of the round.
    pub illuminated: Vec<EntityId>,
}

/// Selects each unit in order, queues its declarations and commits them.
///
/// Usage flags carry over between units, so a searchlight lit by one unit
/// counts for every unit after it.
pub fn run_round(
    battlefield: &BattlefieldSnapshot,
    orders: &[UnitOrders],
) -> anyhow::Result<RoundLog> {
    let env = battlefield.env();
    let mut flags = RoundUsageFlags::new();
    let mut queue = ActionQueue::new();
    let mut log = RoundLog::default();

    for unit_orders in orders {
        let unit = unit_orders.unit;
        queue.select(unit);

        let mut refused = Vec::new();
        for &declaration in &unit_orders.declarations {
            match queue.add(env, &flags, declaration) {
                Ok(_) => {}
                Err(QueueError::NoEntitySelected) => {
                    return Err(QueueError::NoEntitySelected.into());
                }
                Err(err) => {
                    warn!(%unit, kind = %declaration.kind(), %err, "declaration refused");
                    refused.push(Refusal {
                        declaration,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let mut reports: Vec<Report> = Vec::new();
        let outcome = queue.commit(env, &mut flags, &mut reports)?;

        let resolved = outcome
            .resolved
            .into_iter()
            .map(|(declaration, result)| {
                let damage = expected_damage(env, &declaration)?;
                Ok(Resolution {
                    declaration,
                    result,
                    damage,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        let dropped = outcome
            .dropped
            .into_iter()
            .map(|(declaration, reason)| Refusal {
                declaration,
                reason,
            })
            .collect();

        info!(
            %unit,
            resolved = resolved.len(),
            refused = refused.len(),
            "orders committed"
        );
        log.units.push(UnitRound {
            unit,
            refused,
            resolved,
            dropped,
            reports,
        });
    }

    log.illuminated = flags.illuminated().collect();
    Ok(log)
}
