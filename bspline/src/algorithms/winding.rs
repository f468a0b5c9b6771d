//! Winding number and side tests.
//!
//! The inside test treats the sample cache as a polygon closed by the chord
//! from the last sample back to the first. Curves meant to bound a region
//! should end where they start so that chord has zero length.

use crate::model::{Parameter, Vec2};
use crate::{OpenCubicBSpline, Result};

/// Which side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    On,
    Right,
}

/// Cross product `(p1 - p0) x (p2 - p0)`.
/// - Positive = `p2` left of the line `p0 -> p1`
/// - Zero = on the line
/// - Negative = right of it
#[inline]
pub fn is_left(p0: Vec2, p1: Vec2, p2: Vec2) -> f64 {
    (p1 - p0).cross(p2 - p0)
}

pub fn side_of(p0: Vec2, p1: Vec2, p2: Vec2) -> Side {
    let c = is_left(p0, p1, p2);
    if c > 0.0 {
        Side::Left
    } else if c < 0.0 {
        Side::Right
    } else {
        Side::On
    }
}

/// Winding number of `point` relative to the closed `polygon`.
///
/// Signed crossings of the upward ray: positive for counter-clockwise
/// winding, zero outside. Polygons with fewer than 3 vertices wind zero.
pub fn winding_number(point: Vec2, polygon: &[Vec2]) -> i32 {
    if polygon.len() < 3 {
        return 0;
    }

    let mut winding = 0i32;
    let n = polygon.len();

    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];

        if p1.y <= point.y {
            // Upward crossing with point strictly left of the edge
            if p2.y > point.y && is_left(p1, p2, point) > 0.0 {
                winding += 1;
            }
        } else if p2.y <= point.y && is_left(p1, p2, point) < 0.0 {
            // Downward crossing with point strictly right of the edge
            winding -= 1;
        }
    }

    winding
}

impl OpenCubicBSpline {
    /// Non-zero winding test against the sampled curve.
    pub fn check_inside(&self, point: Vec2) -> Result<bool> {
        let samples = self.require_samples()?;
        Ok(winding_number(point, samples) != 0)
    }

    /// Whether `p1` and `p2` lie strictly on the same side of the curve's
    /// tangent line at `foot_of_p1`. A point on that line is on no side.
    pub fn check_same_side(&self, p1: Vec2, p2: Vec2, foot_of_p1: Parameter) -> Result<bool> {
        let frame = self.frame(foot_of_p1)?;
        let s1 = (p1 - frame.position).dot(frame.normal);
        let s2 = (p2 - frame.position).dot(frame.normal);
        Ok(s1 * s2 > 0.0)
    }
}
