/// Option keys the resolvers read.
pub mod keys {
    /// Allows direct attacks against friendly units.
    pub const FRIENDLY_FIRE: &str = "friendly_fire";
    /// Light and medium attackers get an easier physical attack roll.
    pub const WEIGHT_CLASS_ATTACK_BONUS: &str = "weight_class_attack_bonus";
    /// Industrial TSM penalizes physical attacks; on unless set to false.
    pub const INDUSTRIAL_TSM_PENALTY: &str = "industrial_tsm_penalty";
    /// Overrides the searchlight reach in hexes.
    pub const SEARCHLIGHT_RANGE: &str = "searchlight_range";
}

/// Ruleset toggles addressed by string key.
pub trait GameOptionsView {
    fn boolean(&self, key: &str) -> Option<bool>;
    fn integer(&self, key: &str) -> Option<i32>;

    /// Unknown keys read as disabled.
    fn is_enabled(&self, key: &str) -> bool {
        self.boolean(key).unwrap_or(false)
    }
}
