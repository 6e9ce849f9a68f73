//! Traits describing the read-only world a resolver consults.
//!
//! Units, the board and ruleset toggles are owned by external collaborators.
//! The [`Env`] aggregate bundles the three views so resolvers can read
//! everything they need without coupling to concrete implementations.
mod board;
mod entity;
mod equipment;
mod options;
mod roster;
mod snapshot;

pub use board::{BoardView, Building, HexTerrain};
pub use entity::{
    Actuator, Displacement, DisplacementKind, EntityView, Location, LocationStatus, MoveMode,
    Movement, Posture, Side, UnitClass,
};
pub use equipment::{AmmoBin, EquipmentKind, Mounted, Munition, RangeBand, WeaponProfile, modes};
pub use options::{GameOptionsView, keys};
pub use roster::RosterView;
pub use snapshot::{
    BattlefieldSnapshot, BoardSnapshot, OptionsSnapshot, PlacedHex, RosterSnapshot, UnitSnapshot,
};

/// Aggregates the read-only views required by the resolvers.
///
/// Views are borrowed for the duration of a call; the core never mutates them.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    roster: &'a dyn RosterView,
    board: &'a dyn BoardView,
    options: &'a dyn GameOptionsView,
}

impl<'a> Env<'a> {
    pub fn new(
        roster: &'a dyn RosterView,
        board: &'a dyn BoardView,
        options: &'a dyn GameOptionsView,
    ) -> Self {
        Self {
            roster,
            board,
            options,
        }
    }

    pub fn roster(&self) -> &'a dyn RosterView {
        self.roster
    }

    pub fn board(&self) -> &'a dyn BoardView {
        self.board
    }

    pub fn options(&self) -> &'a dyn GameOptionsView {
        self.options
    }

    pub fn entity(&self, id: crate::state::EntityId) -> Option<&'a dyn EntityView> {
        self.roster.entity(id)
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}
