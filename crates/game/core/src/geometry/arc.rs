//! Bearings and firing arcs.
//!
//! Bearings are exact: they are derived from integer cube vectors, never from
//! trigonometry, so arc boundaries are reproducible on every platform.
use super::coords::{Coords, Cube, Facing};

/// Direction from one hex to another in 15 degree steps, clockwise from north.
///
/// Even steps lie exactly on one of the twelve 30 degree rays through hex
/// sides and hex corners. Odd steps stand for the whole open interval between
/// two neighbouring rays; for example `Bearing(1)` is anything strictly
/// between 0 and 30 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bearing(u8);

impl Bearing {
    pub const STEPS: u8 = 24;

    /// Bearing of `to` as seen from `from`, or `None` for the same hex.
    pub fn between(from: Coords, to: Coords) -> Option<Bearing> {
        let mut v: Cube = to.to_cube() - from.to_cube();
        if v.is_zero() {
            return None;
        }

        // Each counter-clockwise turn subtracts 60 degrees (4 steps).
        for turn in 0..6u8 {
            if v.q == 0 && v.r < 0 {
                return Some(Bearing(4 * turn));
            }
            if v.q > 0 && v.s > 0 {
                let within = match v.q.cmp(&v.s) {
                    std::cmp::Ordering::Less => 1,
                    std::cmp::Ordering::Equal => 2,
                    std::cmp::Ordering::Greater => 3,
                };
                return Some(Bearing(4 * turn + within));
            }
            v = v.rotated_ccw();
        }
        None
    }

    pub const fn steps(self) -> u8 {
        self.0
    }

    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 15
    }

    /// Steps clockwise from `facing` to this bearing.
    pub const fn relative_to(self, facing: Facing) -> u8 {
        (self.0 + Self::STEPS - 4 * facing.index()) % Self::STEPS
    }
}

/// Angular zone relative to a unit's facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arc {
    /// 300 through 60 degrees inclusive.
    Forward,
    /// 240 through 60 degrees inclusive.
    LeftArm,
    /// 300 through 120 degrees inclusive.
    RightArm,
    /// Strictly between 120 and 240 degrees.
    Rear,
    /// 240 up to (not including) 300 degrees.
    LeftSide,
    /// Above 60 up to 120 degrees.
    RightSide,
    Full,
}

impl Arc {
    /// Tests a bearing already made relative to the unit's facing.
    pub const fn contains(self, relative: u8) -> bool {
        match self {
            Arc::Forward => relative >= 20 || relative <= 4,
            Arc::LeftArm => relative >= 16 || relative <= 4,
            Arc::RightArm => relative >= 20 || relative <= 8,
            Arc::Rear => relative > 8 && relative < 16,
            Arc::LeftSide => relative >= 16 && relative < 20,
            Arc::RightSide => relative > 4 && relative <= 8,
            Arc::Full => true,
        }
    }
}

/// True when `target` lies inside `arc` of a unit at `origin` facing `facing`.
///
/// A target in the origin hex is inside every arc.
pub fn is_in_arc(origin: Coords, facing: Facing, target: Coords, arc: Arc) -> bool {
    match Bearing::between(origin, target) {
        Some(bearing) => arc.contains(bearing.relative_to(facing)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn bearing(from: Coords, to: Coords) -> u8 {
        Bearing::between(from, to).map(Bearing::steps).unwrap_or(u8::MAX)
    }

    #[test]
    fn neighbours_lie_on_hexside_rays() {
        let origin = Coords::new(3, 3);
        for facing in Facing::iter() {
            assert_eq!(
                bearing(origin, origin.translated(facing)),
                facing.index() * 4,
                "{facing}"
            );
        }
    }

    #[test]
    fn corner_directions_are_odd_multiples_of_thirty() {
        let origin = Coords::new(0, 0);
        // Due east crosses the corner between the NE and SE neighbours.
        assert_eq!(bearing(origin, Coords::new(2, 0)), 6);
        // North-north-east runs through the corner between N and NE.
        let nne = Coords::from_cube(Cube::new(1, -2));
        assert_eq!(bearing(origin, nne), 2);
    }

    #[test]
    fn off_ray_targets_use_odd_steps() {
        let origin = Coords::new(0, 0);
        let slightly_east_of_north = Coords::from_cube(Cube::new(1, -3));
        assert_eq!(bearing(origin, slightly_east_of_north), 1);
        let slightly_north_of_ne = Coords::from_cube(Cube::new(2, -3));
        assert_eq!(bearing(origin, slightly_north_of_ne), 3);
    }

    #[test]
    fn same_hex_has_no_bearing_and_is_in_every_arc() {
        let c = Coords::new(2, 2);
        assert!(Bearing::between(c, c).is_none());
        for arc in Arc::iter() {
            assert!(is_in_arc(c, Facing::S, c, arc));
        }
    }

    #[test]
    fn forward_arc_is_sixty_degrees_either_side() {
        let origin = Coords::new(5, 5);
        let ahead = origin.translated(Facing::N);
        let right = origin.translated(Facing::NE);
        let rear_right = origin.translated(Facing::SE);
        assert!(is_in_arc(origin, Facing::N, ahead, Arc::Forward));
        assert!(is_in_arc(origin, Facing::N, right, Arc::Forward));
        assert!(!is_in_arc(origin, Facing::N, rear_right, Arc::Forward));
        assert!(is_in_arc(origin, Facing::N, rear_right, Arc::RightArm));
        assert!(!is_in_arc(origin, Facing::N, rear_right, Arc::LeftArm));
        assert!(is_in_arc(origin, Facing::N, rear_right, Arc::RightSide));
    }

    #[test]
    fn rear_arc_is_open_at_its_boundaries() {
        let origin = Coords::new(5, 5);
        assert!(is_in_arc(origin, Facing::N, origin.translated(Facing::S), Arc::Rear));
        assert!(!is_in_arc(origin, Facing::N, origin.translated(Facing::SE), Arc::Rear));
        assert!(!is_in_arc(origin, Facing::N, origin.translated(Facing::SW), Arc::Rear));
    }

    #[test]
    fn arcs_rotate_with_facing() {
        let origin = Coords::new(5, 5);
        let south = origin.translated(Facing::S);
        assert!(is_in_arc(origin, Facing::S, south, Arc::Forward));
        assert!(!is_in_arc(origin, Facing::N, south, Arc::Forward));
    }
}
