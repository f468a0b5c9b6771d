use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::geometry::limits;
use crate::geometry::tolerance::DEFAULT_SAMPLE_INTERVAL;
use crate::{CurveError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, o: Vec2) -> f64 {
        self.x * o.x + self.y * o.y
    }

    /// z component of the 3D cross product.
    #[inline]
    pub fn cross(self, o: Vec2) -> f64 {
        self.x * o.y - self.y * o.x
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance_sq(self, o: Vec2) -> f64 {
        (self - o).length_sq()
    }

    #[inline]
    pub fn distance(self, o: Vec2) -> f64 {
        self.distance_sq(o).sqrt()
    }

    /// Counter-clockwise quarter turn.
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2 { x: -self.y, y: self.x }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x + o.x, y: self.y + o.y }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, o: Vec2) {
        self.x += o.x;
        self.y += o.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x - o.x, y: self.y - o.y }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f64) -> Vec2 {
        Vec2 { x: self.x * s, y: self.y * s }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2 { x, y }
    }
}

/// A point on the curve as (segment index, local offset in [0, 1]).
///
/// `(s, 1.0)` and `(s + 1, 0.0)` name the same physical point; neither is
/// preferred.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub segment: usize,
    pub t: f64,
}

impl Parameter {
    #[inline]
    pub const fn new(segment: usize, t: f64) -> Self {
        Self { segment, t }
    }
}

impl From<(usize, f64)> for Parameter {
    fn from((segment, t): (usize, f64)) -> Self {
        Parameter { segment, t }
    }
}

/// Tunables of a curve. The sampling interval is the step in local
/// parameter between two consecutive entries of the sample cache.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub interval: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfig { interval: DEFAULT_SAMPLE_INTERVAL }
    }
}

impl CurveConfig {
    /// Checks the interval and returns the number of samples each segment
    /// contributes to the cache.
    pub fn validate(&self) -> Result<usize> {
        let iv = self.interval;
        if !limits::in_interval_bounds(iv) {
            return Err(CurveError::InvalidInterval(iv));
        }
        Ok(samples_per_segment(iv))
    }
}

/// Sample count per segment for an interval already within bounds.
pub(crate) fn samples_per_segment(interval: f64) -> usize {
    // 1/0.01 may land a hair above 100.0
    ((1.0 / interval) - 1e-9).ceil().max(1.0) as usize
}
