//! Position, derivatives and the differential-geometry frame of the curve.
//!
//! Derivatives are per unit of local parameter: each segment spans one
//! parameter unit no matter how long it is in space.

use crate::geometry::basis;
use crate::geometry::tolerance::{norm2, safe_div, EPS_CURVATURE};
use crate::model::{Parameter, Vec2};
use crate::{OpenCubicBSpline, Result};

/// Everything the fitting terms need at one foot point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub position: Vec2,
    pub first_derivative: Vec2,
    pub second_derivative: Vec2,
    /// Unit tangent, zero at a cusp.
    pub tangent: Vec2,
    /// Tangent turned a quarter counter-clockwise, zero at a cusp.
    pub normal: Vec2,
    /// Signed; positive when the curve turns left.
    pub curvature: f64,
}

impl Frame {
    pub fn curvature_center(&self) -> Vec2 {
        if self.curvature.abs() <= EPS_CURVATURE {
            return self.position;
        }
        self.position + self.normal * (1.0 / self.curvature)
    }

    /// Radius of the osculating circle, `INFINITY` on straight pieces.
    pub fn radius(&self) -> f64 {
        if self.curvature.abs() <= EPS_CURVATURE {
            f64::INFINITY
        } else {
            1.0 / self.curvature.abs()
        }
    }
}

#[inline]
pub(crate) fn blend(local: &[Vec2; 4], w: &[f64; 4]) -> Vec2 {
    let mut out = Vec2::ZERO;
    for i in 0..4 {
        out += local[i] * w[i];
    }
    out
}

pub(crate) fn curvature_of(d1: Vec2, d2: Vec2) -> f64 {
    let speed_sq = d1.length_sq();
    let den = speed_sq * speed_sq.sqrt();
    safe_div(d1.cross(d2), den, 0.0)
}

impl OpenCubicBSpline {
    pub fn position(&self, p: Parameter) -> Result<Vec2> {
        let local = self.local_controls(p)?;
        Ok(blend(&local, &basis::weights(p.t)))
    }

    pub fn first_derivative(&self, p: Parameter) -> Result<Vec2> {
        let local = self.local_controls(p)?;
        Ok(blend(&local, &basis::first_derivative(p.t)))
    }

    pub fn second_derivative(&self, p: Parameter) -> Result<Vec2> {
        let local = self.local_controls(p)?;
        Ok(blend(&local, &basis::second_derivative(p.t)))
    }

    /// Unit tangent; the zero vector where the first derivative vanishes.
    pub fn tangent(&self, p: Parameter) -> Result<Vec2> {
        Ok(norm2(self.first_derivative(p)?).0)
    }

    /// Left normal, consistent with [`is_left`](crate::is_left) being positive.
    pub fn normal(&self, p: Parameter) -> Result<Vec2> {
        Ok(self.tangent(p)?.perp())
    }

    /// `(x'y'' - y'x'') / (x'^2 + y'^2)^(3/2)`, zero when the speed vanishes.
    pub fn curvature(&self, p: Parameter) -> Result<f64> {
        let local = self.local_controls(p)?;
        let d1 = blend(&local, &basis::first_derivative(p.t));
        let d2 = blend(&local, &basis::second_derivative(p.t));
        Ok(curvature_of(d1, d2))
    }

    /// Center of the osculating circle; the curve point itself where the
    /// curvature is zero.
    pub fn curvature_center(&self, p: Parameter) -> Result<Vec2> {
        Ok(self.frame(p)?.curvature_center())
    }

    pub fn basis_coefficients(&self, p: Parameter) -> Result<[f64; 4]> {
        self.check_parameter(p)?;
        Ok(basis::weights(p.t))
    }

    pub fn frame(&self, p: Parameter) -> Result<Frame> {
        let local = self.local_controls(p)?;
        let position = blend(&local, &basis::weights(p.t));
        let d1 = blend(&local, &basis::first_derivative(p.t));
        let d2 = blend(&local, &basis::second_derivative(p.t));
        let tangent = norm2(d1).0;
        Ok(Frame {
            position,
            first_derivative: d1,
            second_derivative: d2,
            tangent,
            normal: tangent.perp(),
            curvature: curvature_of(d1, d2),
        })
    }
}
