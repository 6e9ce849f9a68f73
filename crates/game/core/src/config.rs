/// Rulebook constants shared by the resolvers.
///
/// Values fixed by the printed rules. Ruleset toggles live in
/// [`GameOptionsView`](crate::env::GameOptionsView).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesConfig;

impl RulesConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of declarations one unit may queue in a single round.
    pub const MAX_PENDING_ACTIONS: usize = 32;

    // ===== physical attacks =====
    /// Heat at which triple-strength myomer activates and doubles melee damage.
    pub const TSM_HEAT_THRESHOLD: i32 = 9;
    /// Flat penalty for industrial triple-strength myomer.
    pub const INDUSTRIAL_TSM_PENALTY: i32 = 2;

    // ===== weight classes (tons, inclusive upper bounds) =====
    pub const LIGHT_MAX_TONS: u32 = 35;
    pub const MEDIUM_MAX_TONS: u32 = 55;
    pub const HEAVY_MAX_TONS: u32 = 75;

    // ===== searchlights =====
    /// Searchlight reach in hexes when the ruleset does not override it.
    pub const DEFAULT_SEARCHLIGHT_RANGE: u32 = 30;

    // ===== guided munitions =====
    /// Fixed target number of a homing shot against a designated target.
    pub const HOMING_TARGET_NUMBER: i32 = 4;
}

/// Weight class bands used by the weight-class attack bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WeightClass {
    Light,
    Medium,
    Heavy,
    Assault,
}

impl WeightClass {
    pub fn from_tons(tons: u32) -> Self {
        if tons <= RulesConfig::LIGHT_MAX_TONS {
            Self::Light
        } else if tons <= RulesConfig::MEDIUM_MAX_TONS {
            Self::Medium
        } else if tons <= RulesConfig::HEAVY_MAX_TONS {
            Self::Heavy
        } else {
            Self::Assault
        }
    }
}
