//! Planar coordinate type.
//!
//! Coordinates are the abstract map units of the caller's node table (the
//! `x`/`y` columns), not geographic degrees, so plain Euclidean distance is
//! the right metric.  It is also exactly the straight-line heuristic the
//! A* queries in `tp-network` need.

/// A planar coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
