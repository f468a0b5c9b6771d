// Centralized ingestion limits to harden against untrusted input (JSON/JS)

// Control polygon caps
pub const MIN_CONTROLS: usize = 4;
pub const MAX_CONTROLS: usize = 100_000;

// Sample cache cap (segments * samples per segment + 1)
pub const MAX_SAMPLES: usize = 20_000_000;

// Sampling interval bounds (local parameter units)
pub const MIN_INTERVAL: f64 = 1e-6;
pub const MAX_INTERVAL: f64 = 1.0;

// Numeric bounds
pub const COORD_MIN: f64 = -1.0e12;
pub const COORD_MAX: f64 = 1.0e12;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn in_interval_bounds(iv: f64) -> bool { iv.is_finite() && iv >= MIN_INTERVAL && iv <= MAX_INTERVAL }
