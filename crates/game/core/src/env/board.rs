use crate::geometry::{Coords, intervening};
use crate::state::BuildingId;

/// Terrain of a single hex.
///
/// `level` is the hex floor; for water it is the surface and the bottom lies
/// `water_depth` levels below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HexTerrain {
    pub level: i32,
    /// 0 none, 1 light, 2 heavy, 3 ultra-heavy.
    pub woods: u8,
    pub water_depth: u8,
    /// 0 none, 1 light, 2 heavy.
    pub smoke: u8,
}

impl HexTerrain {
    pub const OPEN: Self = Self {
        level: 0,
        woods: 0,
        water_depth: 0,
        smoke: 0,
    };

    /// Height of the terrain features standing in the hex.
    pub const fn obstacle_height(&self) -> i32 {
        if self.woods > 0 { 2 } else { 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    /// Levels above the hex floor.
    pub height: i32,
    pub hexes: Vec<Coords>,
}

/// Read-only queries about the map.
pub trait BoardView {
    fn contains(&self, coords: Coords) -> bool;
    fn hex(&self, coords: Coords) -> Option<&HexTerrain>;
    fn building_at(&self, coords: Coords) -> Option<&Building>;

    /// Floor level of a hex; off-board hexes read as level 0.
    fn level(&self, coords: Coords) -> i32 {
        self.hex(coords).map_or(0, |hex| hex.level)
    }

    /// Top of whatever stands in the hex: woods or a building.
    fn obstacle_top(&self, coords: Coords) -> i32 {
        let building = self.building_at(coords).map_or(0, |b| b.height);
        let terrain = self.hex(coords).map_or(0, HexTerrain::obstacle_height);
        self.level(coords) + building.max(terrain)
    }

    /// Line of sight between two absolute levels.
    ///
    /// Blocked when any hex strictly between the endpoints has an obstacle
    /// rising above both of them.
    fn has_line_of_sight(&self, from: Coords, from_level: i32, to: Coords, to_level: i32) -> bool {
        let ceiling = from_level.max(to_level);
        intervening(from, to)
            .into_iter()
            .filter(|&hex| hex != from && hex != to)
            .all(|hex| self.obstacle_top(hex) <= ceiling)
    }
}
