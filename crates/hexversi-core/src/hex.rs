//! Hex coordinate system using cube coordinates (q, r, s).
//!
//! Every cell of the board is addressed by three integers that always sum to
//! zero. Storing all three (instead of deriving `s`) keeps the direction
//! arithmetic symmetric and lets the tie-break order talk about `s` directly.

use crate::game::GameError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// The six unit directions, in the order used for every scan of the board.
///
/// Capture counting, flipping and neighbor enumeration all walk this array, so
/// its order determines iteration order everywhere else.
pub const DIRECTIONS: [CubeCoord; 6] = [
    CubeCoord::unit(1, -1, 0),
    CubeCoord::unit(1, 0, -1),
    CubeCoord::unit(0, 1, -1),
    CubeCoord::unit(-1, 1, 0),
    CubeCoord::unit(-1, 0, 1),
    CubeCoord::unit(0, -1, 1),
];

/// Cube coordinate for a hex grid.
///
/// - `q` increases going east
/// - `r` increases going southeast
/// - `s` increases going northeast
///
/// Invariant: `q + r + s == 0`. The fields are private so the only way to get
/// a value is through a constructor that upholds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCube")]
pub struct CubeCoord {
    q: i32,
    r: i32,
    s: i32,
}

#[derive(Deserialize)]
struct RawCube {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<RawCube> for CubeCoord {
    type Error = GameError;

    fn try_from(raw: RawCube) -> Result<Self, Self::Error> {
        CubeCoord::new(raw.q, raw.r, raw.s)
    }
}

impl CubeCoord {
    /// The center of the board
    pub const ORIGIN: CubeCoord = CubeCoord { q: 0, r: 0, s: 0 };

    const fn unit(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    /// Create a coordinate, rejecting triples that do not sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, GameError> {
        if q + r + s != 0 {
            return Err(GameError::InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Create a coordinate from its axial pair, deriving `s = -q - r`.
    pub const fn axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        self.s
    }

    /// The six neighboring cells, in [`DIRECTIONS`] order
    pub fn neighbors(&self) -> [CubeCoord; 6] {
        DIRECTIONS.map(|direction| *self + direction)
    }

    /// Whether `other` is one of the six neighbors of this cell
    pub fn is_adjacent_to(&self, other: &CubeCoord) -> bool {
        self.neighbors().contains(other)
    }

    /// Distance to another cell (in hex steps)
    pub fn distance_to(&self, other: &CubeCoord) -> u32 {
        (*self - *other).ring()
    }

    /// Which ring around the origin this cell lies on (0 for the origin).
    pub fn ring(&self) -> u32 {
        self.q.unsigned_abs().max(self.r.unsigned_abs()).max(self.s.unsigned_abs())
    }

    /// Total order used to break ties between equally good moves.
    ///
    /// Cells further "up and left" sort first: larger `s` wins, and among cells
    /// with the same `s` the smaller `r` wins.
    pub fn upper_left_cmp(&self, other: &CubeCoord) -> Ordering {
        other.s.cmp(&self.s).then(self.r.cmp(&other.r))
    }
}

impl Add for CubeCoord {
    type Output = CubeCoord;

    fn add(self, other: CubeCoord) -> CubeCoord {
        let sum = CubeCoord {
            q: self.q + other.q,
            r: self.r + other.r,
            s: self.s + other.s,
        };
        debug_assert_eq!(sum.q + sum.r + sum.s, 0);
        sum
    }
}

impl Sub for CubeCoord {
    type Output = CubeCoord;

    fn sub(self, other: CubeCoord) -> CubeCoord {
        let difference = CubeCoord {
            q: self.q - other.q,
            r: self.r - other.r,
            s: self.s - other.s,
        };
        debug_assert_eq!(difference.q + difference.r + difference.s, 0);
        difference
    }
}

impl fmt::Display for CubeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}
