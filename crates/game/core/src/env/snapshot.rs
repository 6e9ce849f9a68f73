//! Owned, serializable implementations of the views.
//!
//! Scenario files deserialize straight into these types, and tests build them
//! by hand.
use std::collections::{BTreeMap, BTreeSet};

use super::board::{BoardView, Building, HexTerrain};
use super::entity::{
    Actuator, Displacement, EntityView, Location, LocationStatus, Movement, Posture, UnitClass,
};
use super::equipment::Mounted;
use super::options::GameOptionsView;
use super::roster::RosterView;
use super::Env;
use crate::geometry::{Coords, Facing};
use crate::state::{EntityId, PlayerId, PodId, TeamId};

/// Full state of one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitSnapshot {
    pub id: EntityId,
    pub name: String,
    pub owner: PlayerId,
    pub team: Option<TeamId>,
    pub class: UnitClass,
    pub weight: u32,
    pub posture: Posture,
    pub position: Coords,
    pub elevation: i32,
    /// Overrides the class-derived height.
    pub height: Option<i32>,
    pub facing: Option<Facing>,
    pub secondary_facing: Option<Facing>,
    pub movement: Movement,
    pub piloting: i32,
    pub gunnery: i32,
    pub heat: i32,
    pub sensor_hits: u8,
    /// Locations not listed are intact.
    pub locations: BTreeMap<Location, LocationStatus>,
    pub destroyed_actuators: BTreeSet<(Location, Actuator)>,
    pub submerged: BTreeSet<Location>,
    pub fired_from: BTreeSet<Location>,
    pub equipment: Vec<Mounted>,
    pub grapple_partner: Option<EntityId>,
    pub swarm_target: Option<EntityId>,
    pub swarm_attacker: Option<EntityId>,
    pub transport: Option<EntityId>,
    pub displacement: Option<Displacement>,
    pub tagged: bool,
    pub pods: Vec<PodId>,
}

impl UnitSnapshot {
    /// A stationary unit with regular-grade skills, facing north.
    pub fn new(id: EntityId, class: UnitClass) -> Self {
        Self {
            id,
            name: format!("{class} {id}"),
            class,
            weight: 50,
            facing: (!class.is_infantry()).then_some(Facing::N),
            piloting: 5,
            gunnery: 4,
            ..Self::default()
        }
    }

    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = owner;
        self
    }

    pub fn at(mut self, position: Coords) -> Self {
        self.position = position;
        self
    }

    pub fn facing_to(mut self, facing: Facing) -> Self {
        self.facing = Some(facing);
        self
    }

    pub fn with_equipment(mut self, mounted: Mounted) -> Self {
        self.equipment.push(mounted);
        self
    }

    pub fn destroy_location(&mut self, location: Location) {
        self.locations.insert(location, LocationStatus::Destroyed);
    }

    pub fn destroy_actuator(&mut self, location: Location, actuator: Actuator) {
        self.destroyed_actuators.insert((location, actuator));
    }
}

impl EntityView for UnitSnapshot {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn owner(&self) -> PlayerId {
        self.owner
    }

    fn team(&self) -> Option<TeamId> {
        self.team
    }

    fn class(&self) -> UnitClass {
        self.class
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn posture(&self) -> Posture {
        self.posture
    }

    fn position(&self) -> Coords {
        self.position
    }

    fn elevation(&self) -> i32 {
        self.elevation
    }

    fn facing(&self) -> Option<Facing> {
        self.facing
    }

    fn movement(&self) -> Movement {
        self.movement
    }

    fn height(&self) -> i32 {
        self.height
            .unwrap_or_else(|| i32::from(self.class.is_mek() && !self.is_prone()))
    }

    fn secondary_facing(&self) -> Option<Facing> {
        self.secondary_facing.or(self.facing)
    }

    fn piloting(&self) -> i32 {
        self.piloting
    }

    fn gunnery(&self) -> i32 {
        self.gunnery
    }

    fn heat(&self) -> i32 {
        self.heat
    }

    fn sensor_hits(&self) -> u8 {
        self.sensor_hits
    }

    fn location_status(&self, location: Location) -> LocationStatus {
        self.locations.get(&location).copied().unwrap_or_default()
    }

    fn location_submerged(&self, location: Location) -> bool {
        self.submerged.contains(&location)
    }

    fn has_working_actuator(&self, location: Location, actuator: Actuator) -> bool {
        self.location_status(location) != LocationStatus::Destroyed
            && !self.destroyed_actuators.contains(&(location, actuator))
    }

    fn weapon_fired_from(&self, location: Location) -> bool {
        self.fired_from.contains(&location)
    }

    fn equipment(&self) -> &[Mounted] {
        &self.equipment
    }

    fn grapple_partner(&self) -> Option<EntityId> {
        self.grapple_partner
    }

    fn swarm_target(&self) -> Option<EntityId> {
        self.swarm_target
    }

    fn swarm_attacker(&self) -> Option<EntityId> {
        self.swarm_attacker
    }

    fn transport(&self) -> Option<EntityId> {
        self.transport
    }

    fn displacement(&self) -> Option<Displacement> {
        self.displacement
    }

    fn is_tagged(&self) -> bool {
        self.tagged
    }

    fn attached_pods(&self) -> &[PodId] {
        &self.pods
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RosterSnapshot {
    pub units: Vec<UnitSnapshot>,
}

impl RosterSnapshot {
    pub fn new(units: Vec<UnitSnapshot>) -> Self {
        Self { units }
    }

    pub fn unit_mut(&mut self, id: EntityId) -> Option<&mut UnitSnapshot> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }
}

impl RosterView for RosterSnapshot {
    fn entity(&self, id: EntityId) -> Option<&dyn EntityView> {
        self.units
            .iter()
            .find(|unit| unit.id == id)
            .map(|unit| unit as &dyn EntityView)
    }

    fn units(&self) -> Vec<&dyn EntityView> {
        self.units
            .iter()
            .map(|unit| unit as &dyn EntityView)
            .collect()
    }
}

/// Terrain of one non-default hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedHex {
    pub at: Coords,
    pub terrain: HexTerrain,
}

/// Rectangular board; hexes not listed are open ground at level 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hexes: Vec<PlacedHex>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buildings: Vec<Building>,
}

impl BoardSnapshot {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replaces the terrain of a hex.
    pub fn set_hex(&mut self, at: Coords, terrain: HexTerrain) {
        self.hexes.retain(|placed| placed.at != at);
        self.hexes.push(PlacedHex { at, terrain });
    }
}

impl BoardView for BoardSnapshot {
    fn contains(&self, coords: Coords) -> bool {
        (0..self.width).contains(&coords.x) && (0..self.height).contains(&coords.y)
    }

    fn hex(&self, coords: Coords) -> Option<&HexTerrain> {
        if !self.contains(coords) {
            return None;
        }
        Some(
            self.hexes
                .iter()
                .find(|placed| placed.at == coords)
                .map_or(&HexTerrain::OPEN, |placed| &placed.terrain),
        )
    }

    fn building_at(&self, coords: Coords) -> Option<&Building> {
        self.buildings.iter().find(|b| b.hexes.contains(&coords))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptionsSnapshot {
    pub booleans: BTreeMap<String, bool>,
    pub integers: BTreeMap<String, i32>,
}

impl OptionsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bool(mut self, key: &str, value: bool) -> Self {
        self.booleans.insert(key.to_owned(), value);
        self
    }

    pub fn with_int(mut self, key: &str, value: i32) -> Self {
        self.integers.insert(key.to_owned(), value);
        self
    }
}

impl GameOptionsView for OptionsSnapshot {
    fn boolean(&self, key: &str) -> Option<bool> {
        self.booleans.get(key).copied()
    }

    fn integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
}

/// Everything a resolution call reads, in one owned value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlefieldSnapshot {
    pub board: BoardSnapshot,
    pub roster: RosterSnapshot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: OptionsSnapshot,
}

impl BattlefieldSnapshot {
    pub fn env(&self) -> Env<'_> {
        Env::new(&self.roster, &self.board, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::DisplacementKind;

    #[test]
    fn unlisted_hexes_are_open_ground() {
        let mut board = BoardSnapshot::new(4, 4);
        board.set_hex(
            Coords::new(1, 1),
            HexTerrain {
                level: 2,
                ..HexTerrain::OPEN
            },
        );

        assert_eq!(board.level(Coords::new(1, 1)), 2);
        assert_eq!(board.hex(Coords::new(2, 2)), Some(&HexTerrain::OPEN));
        assert!(board.hex(Coords::new(4, 0)).is_none());
    }

    #[test]
    fn line_of_sight_is_blocked_by_tall_intervening_obstacles() {
        let mut board = BoardSnapshot::new(8, 8);
        board.set_hex(
            Coords::new(0, 2),
            HexTerrain {
                level: 3,
                ..HexTerrain::OPEN
            },
        );

        assert!(!board.has_line_of_sight(Coords::new(0, 0), 1, Coords::new(0, 4), 1));
        assert!(board.has_line_of_sight(Coords::new(0, 0), 3, Coords::new(0, 4), 1));
        assert!(board.has_line_of_sight(Coords::new(0, 0), 1, Coords::new(0, 2), 1));
    }

    #[test]
    fn destroyed_location_disables_its_actuators() {
        let mut unit = UnitSnapshot::new(EntityId(1), UnitClass::BipedMek);
        assert!(unit.has_working_actuator(Location::LeftArm, Actuator::Hand));

        unit.destroy_location(Location::LeftArm);

        assert!(unit.is_location_bad(Location::LeftArm));
        assert!(!unit.has_working_actuator(Location::LeftArm, Actuator::Shoulder));
    }

    #[test]
    fn friendly_by_owner_or_team() {
        let a = UnitSnapshot::new(EntityId(1), UnitClass::BipedMek).with_owner(PlayerId(1));
        let mut b = UnitSnapshot::new(EntityId(2), UnitClass::BipedMek).with_owner(PlayerId(2));
        assert!(!a.is_friendly_to(&b));

        let mut a = a;
        a.team = Some(TeamId(7));
        b.team = Some(TeamId(7));
        assert!(a.is_friendly_to(&b));
    }

    #[test]
    fn displacement_against_finds_the_declaring_unit() {
        let mut pusher = UnitSnapshot::new(EntityId(1), UnitClass::BipedMek);
        pusher.displacement = Some(Displacement {
            kind: DisplacementKind::Push,
            target: EntityId(2),
        });
        let roster = RosterSnapshot::new(vec![
            pusher,
            UnitSnapshot::new(EntityId(2), UnitClass::BipedMek),
        ]);

        let found = roster.displacement_against(EntityId(2));
        assert_eq!(found.map(|(by, _)| by), Some(EntityId(1)));
        assert!(roster.displacement_against(EntityId(1)).is_none());
    }
}
