use std::fmt;

/// Hex board coordinates in offset form.
///
/// Columns run along `x`; odd columns sit half a hex lower than even ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn to_cube(self) -> Cube {
        let q = self.x;
        let r = self.y - (self.x - (self.x & 1)) / 2;
        Cube::new(q, r)
    }

    pub const fn from_cube(cube: Cube) -> Self {
        let x = cube.q;
        let y = cube.r + (cube.q - (cube.q & 1)) / 2;
        Self { x, y }
    }

    /// Number of hex steps between two coordinates.
    pub fn distance(self, other: Coords) -> u32 {
        self.to_cube().distance(other.to_cube())
    }

    /// The adjacent hex in direction `facing`.
    pub fn translated(self, facing: Facing) -> Coords {
        Self::from_cube(self.to_cube() + facing.unit())
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cube coordinates with the `q + r + s == 0` constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Cube {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn distance(self, other: Cube) -> u32 {
        let d = self - other;
        d.q.unsigned_abs().max(d.r.unsigned_abs()).max(d.s.unsigned_abs())
    }

    /// Rotates the vector 60 degrees counter-clockwise about the origin.
    pub const fn rotated_ccw(self) -> Cube {
        Cube {
            q: -self.s,
            r: -self.q,
            s: -self.r,
        }
    }

    pub const fn is_zero(self) -> bool {
        self.q == 0 && self.r == 0
    }
}

impl std::ops::Add for Cube {
    type Output = Cube;
    fn add(self, rhs: Cube) -> Cube {
        Cube::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl std::ops::Sub for Cube {
    type Output = Cube;
    fn sub(self, rhs: Cube) -> Cube {
        Cube::new(self.q - rhs.q, self.r - rhs.r)
    }
}

/// One of the six hexside directions, clockwise from north.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    #[default]
    N,
    NE,
    SE,
    S,
    SW,
    NW,
}

impl Facing {
    const ALL: [Facing; 6] = [
        Facing::N,
        Facing::NE,
        Facing::SE,
        Facing::S,
        Facing::SW,
        Facing::NW,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Rotates clockwise by `steps` hexsides (negative turns counter-clockwise).
    pub fn rotated(self, steps: i32) -> Self {
        let index = (i32::from(self.index()) + steps).rem_euclid(6);
        Self::ALL[index as usize]
    }

    pub fn opposite(self) -> Self {
        self.rotated(3)
    }

    /// Cube vector of one step in this direction.
    pub const fn unit(self) -> Cube {
        match self {
            Facing::N => Cube::new(0, -1),
            Facing::NE => Cube::new(1, -1),
            Facing::SE => Cube::new(1, 0),
            Facing::S => Cube::new(0, 1),
            Facing::SW => Cube::new(-1, 1),
            Facing::NW => Cube::new(-1, 0),
        }
    }
}

/// Hexes crossed by the straight line between `from` and `to`, in order.
///
/// Both endpoints are included. When the line runs exactly along a hexside
/// both hexes sharing that side are listed, nearer-to-`from` first.
pub fn intervening(from: Coords, to: Coords) -> Vec<Coords> {
    let a = from.to_cube();
    let b = to.to_cube();
    let steps = a.distance(b);
    if steps == 0 {
        return vec![from];
    }

    // Opposite nudges resolve points sitting on a hexside to either neighbour.
    const NUDGE: [f64; 3] = [1e-6, 2e-6, -3e-6];

    let mut hexes = Vec::with_capacity(steps as usize * 2 + 1);
    for step in 0..=steps {
        let t = f64::from(step) / f64::from(steps);
        for sign in [1.0, -1.0] {
            let q = lerp(a.q, b.q, t) + NUDGE[0] * sign;
            let r = lerp(a.r, b.r, t) + NUDGE[1] * sign;
            let s = lerp(a.s, b.s, t) + NUDGE[2] * sign;
            let hex = Coords::from_cube(cube_round(q, r, s));
            if !hexes.contains(&hex) {
                hexes.push(hex);
            }
        }
    }
    hexes
}

fn lerp(a: i32, b: i32, t: f64) -> f64 {
    f64::from(a) + f64::from(b - a) * t
}

fn cube_round(q: f64, r: f64, s: f64) -> Cube {
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let dq = (rq - q).abs();
    let dr = (rr - r).abs();
    let ds = (rs - s).abs();

    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }
    Cube::new(rq as i32, rr as i32)
}
