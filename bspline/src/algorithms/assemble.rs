//! Least-squares building blocks for fitting the curve to a point cloud.
//!
//! Unknowns of the global system are the control coordinates laid out in
//! two blocks, `[x_0 .. x_{n-1}, y_0 .. y_{n-1}]`. A per-point
//! [`LocalContribution`] covers only the four controls of one segment, in
//! the layout `[x_s .. x_{s+3}, y_s .. y_{s+3}]`, and is scattered into the
//! global system by the caller (or by [`FitSystem`]).
//!
//! Each data term is a weighted sum of squared projections
//! `w (vᵀ(P(c) - X))²` with `P(c)` linear in the controls, so a term adds
//! `w r rᵀ` to the normal matrix and `w r (vᵀX)` to the right-hand side,
//! where `r` is the basis row lifted along direction `v`.

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

use crate::algorithms::eval::Frame;
use crate::geometry::basis;
use crate::model::{Parameter, Vec2};
use crate::{CurveError, OpenCubicBSpline, Result};

pub type Block = SMatrix<f64, 8, 8>;
pub type BlockVector = SVector<f64, 8>;

/// Normal-equation block of one data point over one segment's controls.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalContribution {
    pub segment: usize,
    pub matrix: Block,
    pub vector: BlockVector,
}

impl LocalContribution {
    pub fn zero(segment: usize) -> Self {
        LocalContribution { segment, matrix: Block::zeros(), vector: BlockVector::zeros() }
    }

    fn add_direction(&mut self, b: &[f64; 4], v: Vec2, target: Vec2, weight: f64) {
        let mut r = BlockVector::zeros();
        for i in 0..4 {
            r[i] = b[i] * v.x;
            r[i + 4] = b[i] * v.y;
        }
        self.matrix += (r * r.transpose()) * weight;
        self.vector += r * (weight * v.dot(target));
    }

    /// Global unknown index of local slot `slot` (0..8) for a curve with
    /// `control_count` controls.
    #[inline]
    pub fn global_index(&self, slot: usize, control_count: usize) -> usize {
        if slot < 4 {
            self.segment + slot
        } else {
            control_count + self.segment + slot - 4
        }
    }

    /// Add this block into a `2n x 2n` matrix and `2n` right-hand side.
    pub fn scatter_into(&self, matrix: &mut DMatrix<f64>, rhs: &mut DVector<f64>) -> Result<()> {
        let dim = rhs.len();
        if dim % 2 != 0 {
            return Err(CurveError::DimensionMismatch { expected: dim + 1, got: dim });
        }
        if matrix.nrows() != dim || matrix.ncols() != dim {
            return Err(CurveError::DimensionMismatch { expected: dim, got: matrix.nrows().max(matrix.ncols()) });
        }
        let n = dim / 2;
        if self.segment + 4 > n {
            return Err(CurveError::SegmentOutOfRange {
                segment: self.segment,
                segment_count: n.saturating_sub(3),
            });
        }
        for i in 0..8 {
            let gi = self.global_index(i, n);
            rhs[gi] += self.vector[i];
            for j in 0..8 {
                matrix[(gi, self.global_index(j, n))] += self.matrix[(i, j)];
            }
        }
        Ok(())
    }
}

/// Sum of per-segment Gram blocks; `n x n` for `n` controls.
fn energy_matrix(control_count: usize, gram: &[[f64; 4]; 4]) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(control_count, control_count);
    for s in 0..control_count.saturating_sub(3) {
        for i in 0..4 {
            for j in 0..4 {
                m[(s + i, s + j)] += gram[i][j];
            }
        }
    }
    m
}

// Weight of the tangential term of the squared-distance error. `d` is
// positive on the side of the curvature center.
fn tangent_weight(d: f64, radius: f64) -> f64 {
    if d < 0.0 && radius.is_finite() {
        d / (d - radius)
    } else {
        0.0
    }
}

impl OpenCubicBSpline {
    /// `∫ |P''(t)|² dt` over the whole curve as a quadratic form in one
    /// coordinate of the controls.
    pub fn second_derivative_energy_matrix(&self) -> DMatrix<f64> {
        energy_matrix(self.control_count(), &basis::SECOND_DERIVATIVE_GRAM)
    }

    /// `∫ |P'(t)|² dt` over the whole curve, per coordinate.
    pub fn first_derivative_energy_matrix(&self) -> DMatrix<f64> {
        energy_matrix(self.control_count(), &basis::FIRST_DERIVATIVE_GRAM)
    }

    /// Squared-distance term for `point` with foot point `foot`.
    ///
    /// With `d` the distance to the foot point, signed positive when `point`
    /// lies on the curvature-center side, and `ρ` the curvature radius:
    /// `d/(d-ρ) ((P-X)·T)² + ((P-X)·N)²` for `d < 0`, the normal term
    /// alone otherwise. At a cusp there is no frame and the term degrades to
    /// the point distance.
    pub fn signed_distance_contribution(&self, point: Vec2, foot: Parameter) -> Result<LocalContribution> {
        let frame = self.frame(foot)?;
        let b = basis::weights(foot.t);
        let mut out = LocalContribution::zero(foot.segment);
        if frame.normal == Vec2::ZERO {
            add_point_terms(&mut out, &b, point);
            return Ok(out);
        }
        let a = tangent_weight(signed_distance(&frame, point), frame.radius());
        if a > 0.0 {
            out.add_direction(&b, frame.tangent, point, a);
        }
        out.add_direction(&b, frame.normal, point, 1.0);
        Ok(out)
    }

    /// Normal-only term `((P-X)·N)²`, the squared tangent-line distance.
    pub fn tangent_distance_contribution(&self, point: Vec2, foot: Parameter) -> Result<LocalContribution> {
        let frame = self.frame(foot)?;
        let b = basis::weights(foot.t);
        let mut out = LocalContribution::zero(foot.segment);
        if frame.normal == Vec2::ZERO {
            add_point_terms(&mut out, &b, point);
        } else {
            out.add_direction(&b, frame.normal, point, 1.0);
        }
        Ok(out)
    }

    /// Point-distance term `|P - X|²`; needs no frame.
    pub fn point_distance_contribution(&self, point: Vec2, foot: Parameter) -> Result<LocalContribution> {
        let b = self.basis_coefficients(foot)?;
        let mut out = LocalContribution::zero(foot.segment);
        add_point_terms(&mut out, &b, point);
        Ok(out)
    }
}

fn add_point_terms(out: &mut LocalContribution, b: &[f64; 4], point: Vec2) {
    out.add_direction(b, Vec2::new(1.0, 0.0), point, 1.0);
    out.add_direction(b, Vec2::new(0.0, 1.0), point, 1.0);
}

fn signed_distance(frame: &Frame, point: Vec2) -> f64 {
    let offset = point - frame.position;
    let d = offset.length();
    if offset.dot(frame.normal) * frame.curvature > 0.0 {
        d
    } else {
        -d
    }
}

/// Accumulator for the global normal equations. Solving is left to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct FitSystem {
    control_count: usize,
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl FitSystem {
    pub fn new(control_count: usize) -> Self {
        let dim = 2 * control_count;
        FitSystem { control_count, matrix: DMatrix::zeros(dim, dim), rhs: DVector::zeros(dim) }
    }

    pub fn for_curve(curve: &OpenCubicBSpline) -> Self {
        Self::new(curve.control_count())
    }

    pub fn add_contribution(&mut self, c: &LocalContribution) -> Result<()> {
        c.scatter_into(&mut self.matrix, &mut self.rhs)
    }

    /// Add `weight * energy` to both coordinate blocks.
    pub fn add_energy(&mut self, energy: &DMatrix<f64>, weight: f64) -> Result<()> {
        let n = self.control_count;
        if energy.nrows() != n || energy.ncols() != n {
            return Err(CurveError::DimensionMismatch { expected: n, got: energy.nrows().max(energy.ncols()) });
        }
        for i in 0..n {
            for j in 0..n {
                let e = weight * energy[(i, j)];
                self.matrix[(i, j)] += e;
                self.matrix[(n + i, n + j)] += e;
            }
        }
        Ok(())
    }

    pub fn control_count(&self) -> usize {
        self.control_count
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    pub fn into_parts(self) -> (DMatrix<f64>, DVector<f64>) {
        (self.matrix, self.rhs)
    }
}

/// Controls in the blocked `[x.., y..]` layout of the global system.
pub fn flatten_controls(controls: &[Vec2]) -> DVector<f64> {
    let n = controls.len();
    DVector::from_fn(2 * n, |i, _| if i < n { controls[i].x } else { controls[i - n].y })
}

/// Inverse of [`flatten_controls`], e.g. for a solved system.
pub fn controls_from_solution(x: &DVector<f64>) -> Result<Vec<Vec2>> {
    if x.len() % 2 != 0 {
        return Err(CurveError::DimensionMismatch { expected: x.len() + 1, got: x.len() });
    }
    let n = x.len() / 2;
    Ok((0..n).map(|i| Vec2::new(x[i], x[n + i])).collect())
}
