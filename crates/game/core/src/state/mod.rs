//! Identifiers and the per-round usage ledger.
//!
//! Everything else a resolver reads lives behind the views in [`crate::env`];
//! this module holds the only state the core itself owns.
mod common;
mod usage;

pub use common::{BuildingId, EntityId, EquipmentId, PlayerId, PodId, TeamId};
pub use usage::{RoundUsageFlags, UsageMark};
