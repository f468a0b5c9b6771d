// Centralized tolerances and helpers for robust evaluation

use crate::model::Vec2;

pub const EPS_LEN: f64 = 1e-12;           // zero-length vector threshold
pub const EPS_DENOM: f64 = 1e-18;         // denominator guard for curvature/ratios
pub const EPS_CURVATURE: f64 = 1e-12;     // below this the radius is treated as infinite

// Parameter step of the sample cache when nothing else is configured
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 1e-3;

/// Unit vector and original length; `(ZERO, 0.0)` for vectors shorter than `EPS_LEN`.
#[inline]
pub fn norm2(v: Vec2) -> (Vec2, f64) {
    let len = v.length();
    if len > EPS_LEN { (v * (1.0 / len), len) } else { (Vec2::ZERO, 0.0) }
}

#[inline]
pub fn safe_div(num: f64, den: f64, fallback: f64) -> f64 {
    if den.abs() <= EPS_DENOM { fallback } else { num / den }
}
