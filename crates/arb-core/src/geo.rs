//! Minimal 2-D geometry for spatial queries and command targets.
//!
//! The framework does no pathfinding; positions exist only so tactics can
//! reason about proximity (recruit radii, threat distance, centroids) and so
//! commands can carry a destination.  Euclidean distance in world units is
//! all that is needed.

use std::fmt;

/// A point in the host world's 2-D coordinate space.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other` in world units.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Arithmetic mean of a point set.  Returns `None` for an empty slice.
    pub fn centroid(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f32;
        let (sx, sy) = points
            .iter()
            .fold((0.0_f32, 0.0_f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        Some(Point::new(sx / n, sy / n))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1},{:.1})", self.x, self.y)
    }
}
