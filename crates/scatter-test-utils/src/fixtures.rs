//! Reference triangles with known areas.

use scatter_core::Triangle;

/// `(0,0), (1,0), (0,1)`: area 0.5.
pub fn unit_right_triangle() -> Triangle {
    Triangle::from_vertices((0.0, 0.0), (1.0, 0.0), (0.0, 1.0))
}

/// `(-1,-1), (1,-1), (-1,1)`: area 2.0, the largest a triangle inside the
/// coordinate range can have.
pub fn square_spanning_triangle() -> Triangle {
    Triangle::from_vertices((-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0))
}

/// Three points on `y = x`: area 0.
pub fn collinear_triangle() -> Triangle {
    Triangle::from_vertices((-0.5, -0.5), (0.0, 0.0), (0.75, 0.75))
}
