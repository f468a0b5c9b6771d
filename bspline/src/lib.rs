pub mod error;
pub mod model;
pub mod geometry {
    pub mod basis;
    pub mod limits;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod assemble;
    pub mod eval;
    pub mod projection;
    pub mod winding;
}
mod json;

pub use algorithms::assemble::{Block, BlockVector, FitSystem, LocalContribution};
pub use algorithms::eval::Frame;
pub use algorithms::projection::FootPrints;
pub use algorithms::winding::{is_left, side_of, winding_number, Side};
pub use error::{CurveError, Result};
pub use model::{CurveConfig, Parameter, Vec2};
pub use nalgebra;

use geometry::limits;

/// Open uniform cubic B-spline over an owned control polygon.
///
/// The control polygon and the sample cache derived from it change only in
/// [`install_controls`](Self::install_controls), which takes `&mut self`;
/// every query takes `&self`. Share one curve between threads behind a
/// `RwLock` so installs wait for in-flight readers.
#[derive(Clone, Debug)]
pub struct OpenCubicBSpline {
    pub(crate) interval: f64,
    pub(crate) per_segment: usize,
    pub(crate) controls: Vec<Vec2>,
    pub(crate) samples: Vec<Vec2>, // positions in ascending parameter order
}

impl Default for OpenCubicBSpline {
    /// Empty curve at the default sampling interval.
    fn default() -> Self {
        let interval = CurveConfig::default().interval;
        OpenCubicBSpline {
            interval,
            per_segment: model::samples_per_segment(interval),
            controls: Vec::new(),
            samples: Vec::new(),
        }
    }
}

impl OpenCubicBSpline {
    /// Empty curve; queries fail until controls are installed.
    pub fn new(interval: f64) -> Result<Self> {
        Self::from_config(&CurveConfig { interval })
    }

    pub fn from_config(config: &CurveConfig) -> Result<Self> {
        let per_segment = config.validate()?;
        Ok(OpenCubicBSpline {
            interval: config.interval,
            per_segment,
            controls: Vec::new(),
            samples: Vec::new(),
        })
    }

    pub fn from_controls(controls: Vec<Vec2>, interval: f64) -> Result<Self> {
        let mut curve = Self::new(interval)?;
        curve.install_controls(controls)?;
        Ok(curve)
    }

    /// Replace the control polygon and rebuild the sample cache.
    ///
    /// Validation runs before anything is touched, so a rejected call leaves
    /// the previous controls and samples in place.
    pub fn install_controls(&mut self, controls: Vec<Vec2>) -> Result<()> {
        if let Err(e) = self.check_controls(&controls) {
            log::warn!("control install rejected: {}", e);
            return Err(e);
        }
        self.controls = controls;
        self.samples = self.sample_curve();
        log::debug!(
            "installed {} controls ({} segments), {} samples at interval {}",
            self.controls.len(),
            self.segment_count(),
            self.samples.len(),
            self.interval
        );
        Ok(())
    }

    fn check_controls(&self, controls: &[Vec2]) -> Result<()> {
        let n = controls.len();
        if n < limits::MIN_CONTROLS {
            return Err(CurveError::TooFewControls { got: n });
        }
        if n > limits::MAX_CONTROLS {
            return Err(CurveError::TooManyControls { got: n, max: limits::MAX_CONTROLS });
        }
        for (index, p) in controls.iter().enumerate() {
            if !p.is_finite() {
                return Err(CurveError::NonFiniteControl { index });
            }
            if !limits::in_coord_bounds(p.x) || !limits::in_coord_bounds(p.y) {
                return Err(CurveError::CoordinateOutOfBounds { index });
            }
        }
        let samples = (n - 3).saturating_mul(self.per_segment).saturating_add(1);
        if samples > limits::MAX_SAMPLES {
            return Err(CurveError::SampleBudgetExceeded { samples, max: limits::MAX_SAMPLES });
        }
        Ok(())
    }

    // per_segment samples per segment at t = k / per_segment, plus the end point
    fn sample_curve(&self) -> Vec<Vec2> {
        let segments = self.segment_count();
        let per = self.per_segment as f64;
        let mut out = Vec::with_capacity(segments * self.per_segment + 1);
        for s in 0..segments {
            let local = self.local_controls_unchecked(s);
            for k in 0..self.per_segment {
                let w = geometry::basis::weights(k as f64 / per);
                out.push(algorithms::eval::blend(&local, &w));
            }
        }
        if segments > 0 {
            let local = self.local_controls_unchecked(segments - 1);
            out.push(algorithms::eval::blend(&local, &geometry::basis::weights(1.0)));
        }
        out
    }

    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    pub fn segment_count(&self) -> usize {
        self.controls.len().saturating_sub(3)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn samples_per_segment(&self) -> usize {
        self.per_segment
    }

    pub fn controls(&self) -> &[Vec2] {
        &self.controls
    }

    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// Global control index of local control `local` (0..=3) of `segment`.
    pub fn local_to_global_index(&self, segment: usize, local: usize) -> Result<usize> {
        self.check_segment(segment)?;
        if local > 3 {
            return Err(CurveError::LocalIndexOutOfRange(local));
        }
        Ok(segment + local)
    }

    /// Parameter of the sample cache entry at `index`.
    pub fn parameter_at(&self, index: usize) -> Result<Parameter> {
        let len = self.samples.len();
        if index >= len {
            return Err(CurveError::SampleOutOfRange { index, len });
        }
        let segment = (index / self.per_segment).min(self.segment_count() - 1);
        let t = (index - segment * self.per_segment) as f64 / self.per_segment as f64;
        Ok(Parameter { segment, t })
    }

    pub fn check_parameter(&self, p: Parameter) -> Result<()> {
        self.check_segment(p.segment)?;
        if !(p.t >= 0.0 && p.t <= 1.0) {
            return Err(CurveError::ParameterOutOfRange(p.t));
        }
        Ok(())
    }

    fn check_segment(&self, segment: usize) -> Result<()> {
        let segment_count = self.segment_count();
        if segment >= segment_count {
            return Err(CurveError::SegmentOutOfRange { segment, segment_count });
        }
        Ok(())
    }

    pub(crate) fn local_controls(&self, p: Parameter) -> Result<[Vec2; 4]> {
        self.check_parameter(p)?;
        Ok(self.local_controls_unchecked(p.segment))
    }

    fn local_controls_unchecked(&self, segment: usize) -> [Vec2; 4] {
        let c = &self.controls[segment..segment + 4];
        [c[0], c[1], c[2], c[3]]
    }

    pub(crate) fn require_samples(&self) -> Result<&[Vec2]> {
        if self.samples.is_empty() {
            return Err(CurveError::EmptySampleCache);
        }
        Ok(&self.samples)
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<Self> {
        json::from_json_impl(v)
    }
}
