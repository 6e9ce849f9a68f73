//! Data-driven battlefield content and loaders.
//!
//! This crate turns data files into the owned snapshot views of `tohit-core`:
//! - Scenarios: board terrain, buildings and units (RON)
//! - Orders: each unit's attack declarations for the round (RON)
//! - Ruleset options: optional rule toggles (TOML)
//!
//! Content only feeds the resolvers; nothing here applies rules.

pub mod orders;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use orders::UnitOrders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, OptionsLoader, OrdersLoader, ScenarioLoader};
