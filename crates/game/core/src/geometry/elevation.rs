use crate::env::{BoardView, EntityView, Posture};

/// Absolute level of a unit: its hex floor plus its own elevation offset.
pub fn derive_elevation(board: &dyn BoardView, unit: &dyn EntityView) -> i32 {
    board.level(unit.position()) + unit.elevation()
}

/// Absolute level of the top of a unit.
pub fn unit_top(board: &dyn BoardView, unit: &dyn EntityView) -> i32 {
    derive_elevation(board, unit) + unit.height()
}

/// True when the whole unit is below the water surface of its hex.
pub fn is_underwater(board: &dyn BoardView, unit: &dyn EntityView) -> bool {
    board
        .hex(unit.position())
        .is_some_and(|hex| hex.water_depth > 0)
        && unit.elevation() + unit.height() < 0
}

/// Hull-down units and meks standing waist-deep in water are partly hidden.
pub fn has_partial_cover(board: &dyn BoardView, unit: &dyn EntityView) -> bool {
    if unit.posture().contains(Posture::HULL_DOWN) {
        return true;
    }
    let waist_deep = board
        .hex(unit.position())
        .is_some_and(|hex| hex.water_depth == 1);
    waist_deep && unit.class().is_mek() && !unit.is_prone() && unit.elevation() == -1
}
