//! The append-only modifier stack.
//!
//! Modifiers are applied in a fixed stage order:
//! damage state → equipment → movement and terrain → hit table → side table
//! → ruleset toggles → evasion and targeting.
//!
//! Every resolver walks the stages in that order. The stack records which
//! stage each modifier came from and refuses (in debug builds) to step
//! backwards, so the breakdown a player sees always reads in rulebook order.
use tracing::trace;

use super::result::{ToHitResult, ToHitValue};
use crate::geometry::{HitTable, SideTable};

/// Stage of the fixed modifier order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ModifierStage {
    DamageState,
    Equipment,
    MovementAndTerrain,
    HitTable,
    SideTable,
    RulesetToggles,
    EvasionAndTargeting,
}

/// One named contribution to a target value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub delta: i32,
    pub label: String,
    pub stage: ModifierStage,
}

/// An ordered group of modifiers computed together, appended as a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModifierBundle {
    stage: ModifierStage,
    entries: Vec<(i32, String)>,
}

impl ModifierBundle {
    pub fn new(stage: ModifierStage) -> Self {
        Self {
            stage,
            entries: Vec::new(),
        }
    }

    /// Adds an entry; zero deltas are not recorded.
    pub fn push(&mut self, delta: i32, label: impl Into<String>) {
        if delta != 0 {
            self.entries.push((delta, label.into()));
        }
    }

    pub fn stage(&self) -> ModifierStage {
        self.stage
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> i32 {
        self.entries.iter().map(|(delta, _)| delta).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (i32, &str)> {
        self.entries
            .iter()
            .map(|(delta, label)| (*delta, label.as_str()))
    }
}

/// Forward-only audit log of modifiers with a running total.
#[derive(Clone, Debug)]
pub struct ModifierStack {
    base: i32,
    base_label: String,
    stage: ModifierStage,
    modifiers: Vec<Modifier>,
    total: i32,
    hit_table: HitTable,
    side_table: SideTable,
}

impl ModifierStack {
    pub fn new(base: i32, base_label: impl Into<String>) -> Self {
        Self {
            base,
            base_label: base_label.into(),
            stage: ModifierStage::DamageState,
            modifiers: Vec::new(),
            total: base,
            hit_table: HitTable::Normal,
            side_table: SideTable::Front,
        }
    }

    /// Moves to `stage`. Stages may be skipped but never revisited.
    pub fn enter(&mut self, stage: ModifierStage) {
        debug_assert!(
            stage >= self.stage,
            "modifier stage {stage} entered after {}",
            self.stage
        );
        self.stage = stage;
    }

    pub fn stage(&self) -> ModifierStage {
        self.stage
    }

    /// Appends a modifier to the current stage.
    pub fn add(&mut self, delta: i32, label: impl Into<String>) {
        self.modifiers.push(Modifier {
            delta,
            label: label.into(),
            stage: self.stage,
        });
        self.total += delta;
    }

    /// Appends every entry of `bundle`, preserving its order.
    pub fn append(&mut self, bundle: ModifierBundle) {
        self.enter(bundle.stage);
        trace!(
            stage = %bundle.stage,
            count = bundle.entries.len(),
            total = bundle.total(),
            "appending modifier bundle"
        );
        for (delta, label) in bundle.entries {
            self.add(delta, label);
        }
    }

    pub fn select_hit_table(&mut self, table: HitTable) {
        self.enter(ModifierStage::HitTable);
        self.hit_table = table;
    }

    pub fn select_side_table(&mut self, table: SideTable) {
        self.enter(ModifierStage::SideTable);
        self.side_table = table;
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn finalize(self) -> ToHitValue {
        ToHitValue {
            value: self.total,
            base: self.base,
            base_label: self.base_label,
            modifiers: self.modifiers,
            hit_table: self.hit_table,
            side_table: self.side_table,
        }
    }

    pub fn finish(self) -> ToHitResult {
        ToHitResult::Value(self.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_total_tracks_every_addition() {
        let mut stack = ModifierStack::new(4, "base");
        stack.add(2, "upper arm actuator destroyed");
        stack.enter(ModifierStage::Equipment);
        stack.add(-1, "exoskeleton assist");

        assert_eq!(stack.total(), 5);
        let value = stack.finalize();
        assert_eq!(value.value, 5);
        assert_eq!(value.modifiers.len(), 2);
        assert_eq!(value.modifiers[1].stage, ModifierStage::Equipment);
    }

    #[test]
    fn bundles_keep_their_internal_order_and_skip_zeroes() {
        let mut bundle = ModifierBundle::new(ModifierStage::MovementAndTerrain);
        bundle.push(1, "attacker walked");
        bundle.push(0, "target moved 0 hexes");
        bundle.push(2, "heavy woods");

        let mut stack = ModifierStack::new(5, "base");
        stack.append(bundle);

        let labels: Vec<_> = stack.modifiers().iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["attacker walked", "heavy woods"]);
        assert_eq!(stack.total(), 8);
        assert_eq!(stack.stage(), ModifierStage::MovementAndTerrain);
    }

    #[test]
    fn table_selection_is_carried_into_the_result() {
        let mut stack = ModifierStack::new(3, "base");
        stack.select_hit_table(HitTable::Kick);
        stack.select_side_table(SideTable::Rear);

        let value = stack.finalize();
        assert_eq!(value.hit_table, HitTable::Kick);
        assert_eq!(value.side_table, SideTable::Rear);
    }

    #[test]
    #[should_panic(expected = "entered after")]
    #[cfg(debug_assertions)]
    fn stepping_back_a_stage_panics_in_debug_builds() {
        let mut stack = ModifierStack::new(3, "base");
        stack.enter(ModifierStage::RulesetToggles);
        stack.enter(ModifierStage::DamageState);
    }
}
