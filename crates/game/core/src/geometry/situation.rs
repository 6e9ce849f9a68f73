//! Movement and terrain modifier bundles shared by every attack kind.
use crate::env::{BoardView, EntityView, MoveMode, Posture};
use crate::tohit::{ModifierBundle, ModifierStage};

/// Modifier for the attacker's own movement this turn.
pub fn attacker_movement_modifiers(attacker: &dyn EntityView) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::MovementAndTerrain);
    match attacker.movement().mode {
        MoveMode::Stationary => {}
        MoveMode::Walked => bundle.push(1, "attacker walked"),
        MoveMode::Ran => bundle.push(2, "attacker ran"),
        MoveMode::Jumped => bundle.push(3, "attacker jumped"),
    }
    bundle
}

/// Target movement modifier from the number of hexes it left behind.
pub const fn target_movement_delta(hexes: u32) -> i32 {
    match hexes {
        0..=2 => 0,
        3..=4 => 1,
        5..=6 => 2,
        7..=9 => 3,
        10..=17 => 4,
        18..=24 => 5,
        _ => 6,
    }
}

/// Modifiers for how hard the target is to track.
///
/// Immobile targets get the flat immobile bonus in place of any movement.
pub fn target_movement_modifiers(target: &dyn EntityView) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::MovementAndTerrain);
    if target.posture().contains(Posture::IMMOBILE) {
        bundle.push(-4, "target immobile");
        return bundle;
    }
    let movement = target.movement();
    bundle.push(
        target_movement_delta(movement.hexes),
        format!("target moved {} hexes", movement.hexes),
    );
    if movement.mode == MoveMode::Jumped {
        bundle.push(1, "target jumped");
    }
    bundle
}

/// Prone targets are easier up close and harder at range.
pub fn prone_target_modifiers(target: &dyn EntityView, adjacent: bool) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::MovementAndTerrain);
    if target.is_prone() {
        if adjacent {
            bundle.push(-2, "target prone and adjacent");
        } else {
            bundle.push(1, "target prone");
        }
    }
    bundle
}

/// Woods and smoke in the target's hex.
pub fn target_terrain_modifiers(board: &dyn BoardView, target: &dyn EntityView) -> ModifierBundle {
    let mut bundle = ModifierBundle::new(ModifierStage::MovementAndTerrain);
    let Some(hex) = board.hex(target.position()) else {
        return bundle;
    };
    match hex.woods {
        0 => {}
        1 => bundle.push(1, "target in light woods"),
        2 => bundle.push(2, "target in heavy woods"),
        _ => bundle.push(3, "target in ultra-heavy woods"),
    }
    match hex.smoke {
        0 => {}
        1 => bundle.push(1, "target in light smoke"),
        _ => bundle.push(2, "target in heavy smoke"),
    }
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BoardSnapshot, HexTerrain, Movement, UnitClass, UnitSnapshot};
    use crate::geometry::Coords;
    use crate::state::EntityId;

    #[test]
    fn target_movement_table_brackets() {
        let expected = [
            (0, 0),
            (2, 0),
            (3, 1),
            (4, 1),
            (5, 2),
            (6, 2),
            (7, 3),
            (9, 3),
            (10, 4),
            (17, 4),
            (18, 5),
            (24, 5),
            (25, 6),
        ];
        for (hexes, delta) in expected {
            assert_eq!(target_movement_delta(hexes), delta, "{hexes} hexes");
        }
    }

    #[test]
    fn jumping_target_adds_one() {
        let mut target = UnitSnapshot::new(EntityId(2), UnitClass::BipedMek);
        target.movement = Movement::new(MoveMode::Jumped, 4);
        let bundle = target_movement_modifiers(&target);
        assert_eq!(bundle.total(), 2);
        let labels: Vec<_> = bundle.entries().map(|(_, label)| label.to_owned()).collect();
        assert_eq!(labels, ["target moved 4 hexes", "target jumped"]);
    }

    #[test]
    fn immobile_target_ignores_movement() {
        let mut target = UnitSnapshot::new(EntityId(2), UnitClass::Tank);
        target.posture = Posture::IMMOBILE;
        target.movement = Movement::new(MoveMode::Ran, 8);
        assert_eq!(target_movement_modifiers(&target).total(), -4);
    }

    #[test]
    fn stationary_units_contribute_nothing() {
        let unit = UnitSnapshot::new(EntityId(1), UnitClass::BipedMek);
        assert!(attacker_movement_modifiers(&unit).is_empty());
        assert!(target_movement_modifiers(&unit).is_empty());
        assert!(prone_target_modifiers(&unit, true).is_empty());
    }

    #[test]
    fn woods_and_smoke_stack() {
        let mut board = BoardSnapshot::new(4, 4);
        board.set_hex(
            Coords::new(2, 2),
            HexTerrain {
                woods: 2,
                smoke: 1,
                ..HexTerrain::OPEN
            },
        );
        let target = UnitSnapshot::new(EntityId(2), UnitClass::BipedMek).at(Coords::new(2, 2));
        assert_eq!(target_terrain_modifiers(&board, &target).total(), 3);
    }
}
