//! Uniform cubic B-spline basis on one segment.
//!
//! A segment `s` blends controls `P[s..s+4]` with the weights below, the
//! local parameter running over `[0, 1]`. Derivatives are taken with
//! respect to that local parameter, so one segment has unit length in
//! parameter space.

/// `[b0, b1, b2, b3](t)`. Non-negative on `[0, 1]` and sums to one.
#[inline]
pub fn weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    [
        mt * mt * mt / 6.0,
        (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0,
        (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0,
        t3 / 6.0,
    ]
}

/// `d/dt` of [`weights`]. Sums to zero.
#[inline]
pub fn first_derivative(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let mt = 1.0 - t;
    [
        -0.5 * mt * mt,
        0.5 * (3.0 * t2 - 4.0 * t),
        0.5 * (-3.0 * t2 + 2.0 * t + 1.0),
        0.5 * t2,
    ]
}

/// `d²/dt²` of [`weights`]. Sums to zero.
#[inline]
pub fn second_derivative(t: f64) -> [f64; 4] {
    [1.0 - t, 3.0 * t - 2.0, 1.0 - 3.0 * t, t]
}

/// `∫₀¹ b''ᵢ(t) b''ⱼ(t) dt`.
pub const SECOND_DERIVATIVE_GRAM: [[f64; 4]; 4] = [
    [1.0 / 3.0, -1.0 / 2.0, 0.0, 1.0 / 6.0],
    [-1.0 / 2.0, 1.0, -1.0 / 2.0, 0.0],
    [0.0, -1.0 / 2.0, 1.0, -1.0 / 2.0],
    [1.0 / 6.0, 0.0, -1.0 / 2.0, 1.0 / 3.0],
];

/// `∫₀¹ b'ᵢ(t) b'ⱼ(t) dt`.
pub const FIRST_DERIVATIVE_GRAM: [[f64; 4]; 4] = [
    [6.0 / 120.0, 7.0 / 120.0, -12.0 / 120.0, -1.0 / 120.0],
    [7.0 / 120.0, 34.0 / 120.0, -29.0 / 120.0, -12.0 / 120.0],
    [-12.0 / 120.0, -29.0 / 120.0, 34.0 / 120.0, 7.0 / 120.0],
    [-1.0 / 120.0, -12.0 / 120.0, 7.0 / 120.0, 6.0 / 120.0],
];
