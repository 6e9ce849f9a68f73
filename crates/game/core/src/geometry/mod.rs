//! Pure geometry helpers: hex coordinates, arcs, elevation and table selection.
//!
//! Nothing in this module reads or writes state beyond its arguments.
mod arc;
mod coords;
mod elevation;
mod situation;
mod tables;

pub use arc::{Arc, Bearing, is_in_arc};
pub use coords::{Coords, Cube, Facing, intervening};
pub use elevation::{derive_elevation, has_partial_cover, is_underwater, unit_top};
pub use situation::{
    attacker_movement_modifiers, prone_target_modifiers, target_movement_modifiers,
    target_terrain_modifiers,
};
pub use tables::{HitTable, SideTable, select_hit_table, select_side_table};
