//! Planar geometry primitives.
//!
//! Everything here works on ordered point sequences interpreted as closed
//! loops: the last vertex connects back to the first.
//!
//! # Functions
//!
//! - [`is_convex`]: same-sign turn test over every cyclic vertex triple
//! - [`area`]: shoelace area (absolute value)
//! - [`perimeter`]: sum of Euclidean edge lengths around the loop
//! - [`isoperimetric_quotient`]: `perimeter² / (4π·area)` with an area floor

use std::f64::consts::PI;

/// Cross products with magnitude below this are treated as straight segments.
pub const COLLINEAR_EPSILON: f64 = 1e-5;

/// Areas below this are raised to it before dividing.
pub const AREA_FLOOR: f64 = 1e-5;

/// An immutable 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Z component of `(b - a) × (c - b)`.
fn turn(a: Point, b: Point, c: Point) -> f64 {
    let (dxa, dya) = (b.x - a.x, b.y - a.y);
    let (dxb, dyb) = (c.x - b.x, c.y - b.y);
    dxa * dyb - dya * dxb
}

/// Returns `true` if every non-degenerate turn around the loop has the same
/// rotational direction.
///
/// Turns whose cross product lies strictly within ±[`COLLINEAR_EPSILON`]
/// are ignored, so collinear and repeated vertices never fail the test on
/// their own. Three collinear points therefore pass. Fewer than three
/// points never pass.
///
/// The result does not depend on which vertex is listed first.
/// Self-intersecting loops whose turns all agree (a pentagram, for
/// example) also pass; only the turn direction is checked.
///
/// # Complexity
/// O(n)
pub fn is_convex(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut counter_clockwise: Option<bool> = None;
    for i in 0..n {
        let cross = turn(polygon[i], polygon[(i + 1) % n], polygon[(i + 2) % n]);
        if cross.abs() < COLLINEAR_EPSILON {
            continue;
        }
        let ccw = cross > 0.0;
        match counter_clockwise {
            None => counter_clockwise = Some(ccw),
            Some(dir) if dir != ccw => return false,
            Some(_) => {}
        }
    }
    true
}

/// Shoelace area of the closed loop (always non-negative).
pub fn area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let p = polygon[i];
            let q = polygon[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    0.5 * twice.abs()
}

/// Sum of edge lengths around the closed loop, including the closing edge.
pub fn perimeter(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    (0..n)
        .map(|i| polygon[i].distance(&polygon[(i + 1) % n]))
        .sum()
}

/// Isoperimetric quotient `perimeter² / (4π·area)`.
///
/// Approaches 1 for near-circular shapes and grows without bound as the
/// shape thins out. The area is floored at [`AREA_FLOOR`], so degenerate
/// loops get a large but finite score.
pub fn isoperimetric_quotient(polygon: &[Point]) -> f64 {
    let a = area(polygon).max(AREA_FLOOR);
    let p = perimeter(polygon);
    p * p / (4.0 * PI * a)
}
