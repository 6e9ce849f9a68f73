use super::entity::{Displacement, EntityView};
use crate::geometry::Coords;
use crate::state::EntityId;

/// Lookup of every unit on the battlefield.
pub trait RosterView {
    fn entity(&self, id: EntityId) -> Option<&dyn EntityView>;

    /// All units, in a stable order.
    fn units(&self) -> Vec<&dyn EntityView>;

    fn entities_at(&self, coords: Coords) -> Vec<&dyn EntityView> {
        self.units()
            .into_iter()
            .filter(|unit| unit.position() == coords)
            .collect()
    }

    /// A displacement attack someone else declared against `target`.
    fn displacement_against(&self, target: EntityId) -> Option<(EntityId, Displacement)> {
        self.units().into_iter().find_map(|unit| {
            unit.displacement()
                .filter(|d| d.target == target)
                .map(|d| (unit.id(), d))
        })
    }
}
