//! Scenario loader.
//!
//! A scenario is one battlefield at the moment attacks are declared: the
//! board, every unit on it and, optionally, the ruleset options in force.

use std::collections::BTreeSet;
use std::path::Path;

use tohit_core::{BattlefieldSnapshot, BoardView};

use crate::loaders::{LoadResult, read_file};

/// Loader for battlefield scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load and validate a scenario from a RON file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, duplicate unit ids, units or
    /// buildings placed off the board, and ammunition links to missing bins.
    pub fn load(path: &Path) -> LoadResult<BattlefieldSnapshot> {
        let content = read_file(path)?;
        let battlefield = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            units = battlefield.roster.units.len(),
            "scenario loaded"
        );
        Ok(battlefield)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<BattlefieldSnapshot> {
        let battlefield: BattlefieldSnapshot = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        validate(&battlefield)?;
        Ok(battlefield)
    }
}

fn validate(battlefield: &BattlefieldSnapshot) -> LoadResult<()> {
    let board = &battlefield.board;
    if board.width <= 0 || board.height <= 0 {
        anyhow::bail!("Board must not be empty: {}x{}", board.width, board.height);
    }

    let mut seen = BTreeSet::new();
    for unit in &battlefield.roster.units {
        if !seen.insert(unit.id) {
            anyhow::bail!("Duplicate unit id {}", unit.id);
        }
        if !board.contains(unit.position) {
            anyhow::bail!("Unit {} is off the board at {}", unit.id, unit.position);
        }

        let mut mounted = BTreeSet::new();
        for equipment in &unit.equipment {
            if !mounted.insert(equipment.id) {
                anyhow::bail!("Unit {} mounts equipment {} twice", unit.id, equipment.id);
            }
        }
        for equipment in &unit.equipment {
            let Some(ammo) = equipment.linked_ammo else {
                continue;
            };
            let feeds = unit
                .equipment
                .iter()
                .any(|bin| bin.id == ammo && bin.ammo_bin().is_some());
            if !feeds {
                anyhow::bail!(
                    "Unit {} links {} to missing ammunition {}",
                    unit.id,
                    equipment.name,
                    ammo
                );
            }
        }
    }

    for building in &board.buildings {
        if let Some(hex) = building.hexes.iter().find(|&&hex| !board.contains(hex)) {
            anyhow::bail!("Building {} extends off the board at {}", building.name, hex);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tohit_core::env::{Location, MoveMode, Posture};
    use tohit_core::{Coords, EntityId, EntityView, GameOptionsView};

    use super::*;

    const DUEL: &str = r#"(
        board: (
            width: 8,
            height: 8,
            hexes: [(at: (x: 3, y: 2), terrain: (level: 1, woods: 2))],
        ),
        roster: [
            (
                id: 1,
                class: BipedMek,
                owner: 1,
                weight: 65,
                piloting: 5,
                gunnery: 4,
                position: (x: 3, y: 4),
                facing: Some(N),
                movement: (mode: Walked, hexes: 3),
                equipment: [
                    (
                        id: 10,
                        name: "Medium Laser",
                        kind: Weapon((short: 3, medium: 6, long: 9)),
                        location: RightArm,
                    ),
                ],
            ),
            (
                id: 2,
                class: BipedMek,
                owner: 2,
                weight: 50,
                piloting: 5,
                gunnery: 4,
                position: (x: 3, y: 3),
                facing: Some(S),
                posture: "EVADING",
            ),
        ],
        options: (booleans: {"friendly_fire": false}),
    )"#;

    #[test]
    fn loads_a_duel() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("duel.ron");
        fs::write(&path, DUEL).unwrap();

        let battlefield = ScenarioLoader::load(&path).unwrap();
        let env = battlefield.env();

        let attacker = env.entity(EntityId(1)).unwrap();
        assert_eq!(attacker.weight(), 65);
        assert_eq!(attacker.movement().mode, MoveMode::Walked);
        assert_eq!(attacker.equipment()[0].location, Location::RightArm);
        assert_eq!(attacker.height(), 1);

        let target = env.entity(EntityId(2)).unwrap();
        assert_eq!(target.posture(), Posture::EVADING);

        assert_eq!(env.board().hex(Coords::new(3, 2)).unwrap().woods, 2);
        assert_eq!(env.options().boolean("friendly_fire"), Some(false));
    }

    #[test]
    fn rejects_duplicate_units() {
        let content = r#"(
            board: (width: 4, height: 4),
            roster: [
                (id: 1, position: (x: 0, y: 0)),
                (id: 1, position: (x: 1, y: 1)),
            ],
        )"#;
        let err = ScenarioLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("Duplicate unit id"));
    }

    #[test]
    fn rejects_units_off_the_board() {
        let content = r#"(
            board: (width: 4, height: 4),
            roster: [(id: 1, position: (x: 4, y: 0))],
        )"#;
        let err = ScenarioLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("off the board"));
    }

    #[test]
    fn rejects_dangling_ammunition_links() {
        let content = r#"(
            board: (width: 4, height: 4),
            roster: [(
                id: 1,
                position: (x: 0, y: 0),
                equipment: [(
                    id: 5,
                    name: "LRM 10",
                    kind: Weapon((min_range: 6, short: 7, medium: 14, long: 21, uses_ammo: true)),
                    location: LeftTorso,
                    linked_ammo: Some(6),
                )],
            )],
        )"#;
        let err = ScenarioLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("missing ammunition"));
    }

    #[test]
    fn malformed_input_names_the_format() {
        let err = ScenarioLoader::parse("(board: ").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse scenario RON"));
    }
}
