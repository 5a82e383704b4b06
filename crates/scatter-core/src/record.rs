//! The benchmark record: a triangle with six `f32` vertex coordinates.

use std::fmt;

use crate::stream::CoordinateStream;

/// A triangle stored as three `(x, y)` vertices.
///
/// Every layout scenario scans the same logical sequence of triangles and
/// sums their areas. The record is immutable once built; [`area`](Self::area)
/// is recomputed on every call so each scan touches the full payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Triangle {
    /// Draw a triangle from `stream` in field order `x0, y0, x1, y1, x2, y2`.
    pub fn generate(stream: &mut CoordinateStream) -> Self {
        // Struct literal fields evaluate in source order.
        Self {
            x0: stream.next_coordinate(),
            y0: stream.next_coordinate(),
            x1: stream.next_coordinate(),
            y1: stream.next_coordinate(),
            x2: stream.next_coordinate(),
            y2: stream.next_coordinate(),
        }
    }

    /// Build a triangle from explicit vertices.
    pub fn from_vertices(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Self {
        Self {
            x0: a.0,
            y0: a.1,
            x1: b.0,
            y1: b.1,
            x2: c.0,
            y2: c.1,
        }
    }

    /// The three vertices in construction order.
    pub fn vertices(&self) -> [(f32, f32); 3] {
        [(self.x0, self.y0), (self.x1, self.y1), (self.x2, self.y2)]
    }

    /// Unsigned area by the shoelace formula.
    ///
    /// Collinear vertices yield an area at or near zero.
    #[inline]
    pub fn area(&self) -> f32 {
        0.5 * (self.x0 * (self.y1 - self.y2)
            + self.x1 * (self.y2 - self.y0)
            + self.x2 * (self.y0 - self.y1))
            .abs()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {}) - ({}, {})",
            self.x0, self.y0, self.x1, self.y1, self.x2, self.y2
        )
    }
}
