//! "Used this round" bookkeeping.
//!
//! [`RoundUsageFlags`] is the single mutable resource owned by the core. Resolvers
//! only read it; the action queue writes it during commit and nowhere else.
use std::collections::BTreeSet;

use super::{EntityId, EquipmentId};
use crate::env::Location;

/// A single change to [`RoundUsageFlags`] produced by a committed declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UsageMark {
    /// The unit pointed its searchlight this round.
    SearchlightUsed(EntityId),
    /// The unit is lit by someone's searchlight for the rest of the round.
    Illuminated(EntityId),
    /// A mounted weapon fired; its location counts as having fired too.
    WeaponFired {
        entity: EntityId,
        weapon: EquipmentId,
        location: Location,
    },
}

/// Per-round usage ledger.
///
/// Ordered sets keep iteration (and therefore reports and JSON output)
/// reproducible across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundUsageFlags {
    searchlight_used: BTreeSet<EntityId>,
    illuminated: BTreeSet<EntityId>,
    weapons_fired: BTreeSet<(EntityId, EquipmentId)>,
    locations_fired: BTreeSet<(EntityId, Location)>,
}

impl RoundUsageFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn searchlight_used(&self, entity: EntityId) -> bool {
        self.searchlight_used.contains(&entity)
    }

    /// Read by the host for night-combat modifiers; resolvers only record illumination.
    pub fn is_illuminated(&self, entity: EntityId) -> bool {
        self.illuminated.contains(&entity)
    }

    pub fn weapon_fired(&self, entity: EntityId, weapon: EquipmentId) -> bool {
        self.weapons_fired.contains(&(entity, weapon))
    }

    pub fn fired_from(&self, entity: EntityId, location: Location) -> bool {
        self.locations_fired.contains(&(entity, location))
    }

    pub fn illuminated(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.illuminated.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.searchlight_used.is_empty()
            && self.illuminated.is_empty()
            && self.weapons_fired.is_empty()
            && self.locations_fired.is_empty()
    }

    /// Records a mark. Applying the same mark twice is a no-op.
    pub fn apply(&mut self, mark: &UsageMark) {
        match *mark {
            UsageMark::SearchlightUsed(entity) => {
                self.searchlight_used.insert(entity);
            }
            UsageMark::Illuminated(entity) => {
                self.illuminated.insert(entity);
            }
            UsageMark::WeaponFired {
                entity,
                weapon,
                location,
            } => {
                self.weapons_fired.insert((entity, weapon));
                self.locations_fired.insert((entity, location));
            }
        }
    }

    /// Returns a copy with `marks` applied, leaving `self` untouched.
    ///
    /// Used to validate queued declarations against the marks of the
    /// declarations queued before them.
    pub fn overlay<'m>(&self, marks: impl IntoIterator<Item = &'m UsageMark>) -> Self {
        let mut flags = self.clone();
        for mark in marks {
            flags.apply(mark);
        }
        flags
    }

    /// Clears everything at the end of a round.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_mark_flags_weapon_and_location() {
        let mut flags = RoundUsageFlags::new();
        flags.apply(&UsageMark::WeaponFired {
            entity: EntityId(1),
            weapon: EquipmentId(3),
            location: Location::RightArm,
        });

        assert!(flags.weapon_fired(EntityId(1), EquipmentId(3)));
        assert!(flags.fired_from(EntityId(1), Location::RightArm));
        assert!(!flags.fired_from(EntityId(1), Location::LeftArm));
        assert!(!flags.weapon_fired(EntityId(2), EquipmentId(3)));
    }

    #[test]
    fn overlay_leaves_original_untouched() {
        let flags = RoundUsageFlags::new();
        let marks = [UsageMark::SearchlightUsed(EntityId(4))];

        let overlaid = flags.overlay(&marks);

        assert!(overlaid.searchlight_used(EntityId(4)));
        assert!(flags.is_empty());
    }

    #[test]
    fn reset_clears_all_marks() {
        let mut flags = RoundUsageFlags::new();
        flags.apply(&UsageMark::Illuminated(EntityId(2)));
        flags.reset();
        assert!(flags.is_empty());
    }
}
