use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Curve { pub(crate) inner: bspline::OpenCubicBSpline }

impl Curve {
    pub fn rs_new() -> Curve { Curve { inner: bspline::OpenCubicBSpline::default() } }
}
