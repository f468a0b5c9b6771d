//! Foot-point search over the sample cache.
//!
//! Discrete nearest-sample search: the returned parameter is exact only up
//! to the sampling interval. Scans run index-ascending and keep the first
//! minimum, so results are deterministic for a given cache.

use crate::model::{Parameter, Vec2};
use crate::{CurveError, OpenCubicBSpline, Result};

/// Result of projecting a batch of points onto the curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FootPrints {
    /// Mean of `distances`; 0 for an empty batch.
    pub mean_residual: f64,
    /// One parameter per query point, in query order.
    pub parameters: Vec<Parameter>,
    /// Distance from each query point to its foot sample.
    pub distances: Vec<f64>,
}

/// Index and squared distance of the first sample closest to `q`.
pub(crate) fn nearest_sample(samples: &[Vec2], q: Vec2) -> (usize, f64) {
    let mut best_i = 0usize;
    let mut best_d2 = f64::INFINITY;
    for (i, s) in samples.iter().enumerate() {
        let d2 = s.distance_sq(q);
        if d2 < best_d2 {
            best_d2 = d2;
            best_i = i;
        }
    }
    (best_i, best_d2)
}

impl OpenCubicBSpline {
    pub fn find_foot_prints(&self, points: &[Vec2]) -> Result<FootPrints> {
        let samples = self.require_samples()?;
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFiniteQuery { index });
        }
        let mut parameters = Vec::with_capacity(points.len());
        let mut distances = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for &q in points {
            let (idx, d2) = nearest_sample(samples, q);
            let d = d2.sqrt();
            parameters.push(self.parameter_at(idx)?);
            distances.push(d);
            total += d;
        }
        let mean_residual = if points.is_empty() { 0.0 } else { total / points.len() as f64 };
        log::debug!("foot prints: {} queries, mean residual {:.6}", points.len(), mean_residual);
        Ok(FootPrints { mean_residual, parameters, distances })
    }

    /// Single-point form of [`find_foot_prints`](Self::find_foot_prints).
    pub fn find_foot_print(&self, point: Vec2) -> Result<(Parameter, f64)> {
        let samples = self.require_samples()?;
        if !point.is_finite() {
            return Err(CurveError::NonFiniteQuery { index: 0 });
        }
        let (idx, d2) = nearest_sample(samples, point);
        Ok((self.parameter_at(idx)?, d2.sqrt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_sample_prefers_first_tie() {
        let samples = [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)];
        let (i, d2) = nearest_sample(&samples, Vec2::new(0.0, 0.0));
        assert_eq!(i, 0);
        assert_eq!(d2, 1.0);
    }

    #[test]
    fn empty_cache_is_a_precondition_failure() {
        let c = OpenCubicBSpline::new(0.01).unwrap();
        assert!(matches!(
            c.find_foot_prints(&[Vec2::new(0.0, 0.0)]),
            Err(CurveError::EmptySampleCache)
        ));
        assert!(matches!(c.find_foot_print(Vec2::ZERO), Err(CurveError::EmptySampleCache)));
    }

    #[test]
    fn empty_batch_yields_zero_residual() {
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(3.0, 0.0),
        ];
        let c = OpenCubicBSpline::from_controls(pts, 0.01).unwrap();
        let fp = c.find_foot_prints(&[]).unwrap();
        assert_eq!(fp, FootPrints::default());
    }

    #[test]
    fn non_finite_query_is_rejected() {
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(3.0, 0.0),
        ];
        let c = OpenCubicBSpline::from_controls(pts, 0.01).unwrap();
        let q = [Vec2::new(1.0, 1.0), Vec2::new(f64::NAN, 0.0)];
        assert!(matches!(c.find_foot_prints(&q), Err(CurveError::NonFiniteQuery { index: 1 })));
    }
}
