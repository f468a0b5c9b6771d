use crate::Curve;
use crate::interop::{arr_f64, arr_u32, flatten_points, new_obj, points_from_flat, row_major, set_kv, vector_values};
use bspline::{CurveError, FootPrints, LocalContribution, OpenCubicBSpline, Parameter, Vec2};
use js_sys::Float64Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn point_value(p: Vec2) -> JsValue { arr_f64(&[p.x, p.y]).into() }

fn contribution_value(c: &LocalContribution) -> JsValue {
    let o = new_obj();
    set_kv(&o, "segment", &JsValue::from_f64(c.segment as f64));
    // transpose of column-major storage reads row by row
    let m: Vec<f64> = c.matrix.transpose().iter().copied().collect();
    set_kv(&o, "matrix", &arr_f64(&m).into());
    let v: Vec<f64> = c.vector.iter().copied().collect();
    set_kv(&o, "vector", &arr_f64(&v).into());
    o.into()
}

fn foot_prints_value(fp: &FootPrints) -> JsValue {
    let segs: Vec<u32> = fp.parameters.iter().map(|p| p.segment as u32).collect();
    let ts: Vec<f64> = fp.parameters.iter().map(|p| p.t).collect();
    let o = new_obj();
    set_kv(&o, "meanResidual", &JsValue::from_f64(fp.mean_residual));
    set_kv(&o, "segments", &arr_u32(&segs).into());
    set_kv(&o, "ts", &arr_f64(&ts).into());
    set_kv(&o, "distances", &arr_f64(&fp.distances).into());
    o.into()
}

fn result_value<T>(r: Result<T, CurveError>, f: impl FnOnce(T) -> JsValue) -> JsValue {
    match r {
        Ok(v) => error::ok(f(v)),
        Err(e) => error::from_curve(&e),
    }
}

#[wasm_bindgen]
impl Curve {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Curve {
        crate::Curve::rs_new()
    }

    pub fn interval(&self) -> f64 { self.inner.interval() }
    pub fn control_count(&self) -> u32 { self.inner.control_count() as u32 }
    pub fn segment_count(&self) -> u32 { self.inner.segment_count() as u32 }
    pub fn sample_count(&self) -> u32 { self.inner.samples().len() as u32 }

    // Control polygon
    pub fn install_controls(&mut self, xy: &Float64Array) -> bool {
        match points_from_flat(&xy.to_vec()) {
            Some(pts) => self.inner.install_controls(pts).is_ok(),
            None => false,
        }
    }
    pub fn install_controls_res(&mut self, xy: &Float64Array) -> JsValue {
        let flat = xy.to_vec();
        let Some(pts) = points_from_flat(&flat) else { return error::bad_length("xy", flat.len()); };
        result_value(self.inner.install_controls(pts), |_| JsValue::from_f64(self.inner.samples().len() as f64))
    }
    /// Rebuilds the sample cache at a new interval, keeping the controls.
    pub fn set_interval_res(&mut self, interval: f64) -> JsValue {
        if !interval.is_finite() { return error::non_finite("interval"); }
        let rebuilt = if self.inner.control_count() == 0 {
            OpenCubicBSpline::new(interval)
        } else {
            OpenCubicBSpline::from_controls(self.inner.controls().to_vec(), interval)
        };
        match rebuilt {
            Ok(c) => {
                self.inner = c;
                error::ok(JsValue::from_f64(self.inner.samples().len() as f64))
            }
            Err(e) => error::from_curve(&e),
        }
    }
    pub fn controls(&self) -> Float64Array { arr_f64(&flatten_points(self.inner.controls())) }
    pub fn samples(&self) -> Float64Array { arr_f64(&flatten_points(self.inner.samples())) }

    // Evaluation
    pub fn position(&self, segment: u32, t: f64) -> Option<Float64Array> {
        let p = self.inner.position(Parameter::new(segment as usize, t)).ok()?;
        Some(arr_f64(&[p.x, p.y]))
    }
    pub fn tangent(&self, segment: u32, t: f64) -> Option<Float64Array> {
        let p = self.inner.tangent(Parameter::new(segment as usize, t)).ok()?;
        Some(arr_f64(&[p.x, p.y]))
    }
    pub fn normal(&self, segment: u32, t: f64) -> Option<Float64Array> {
        let p = self.inner.normal(Parameter::new(segment as usize, t)).ok()?;
        Some(arr_f64(&[p.x, p.y]))
    }
    pub fn curvature(&self, segment: u32, t: f64) -> Option<f64> {
        self.inner.curvature(Parameter::new(segment as usize, t)).ok()
    }
    pub fn basis_coefficients(&self, segment: u32, t: f64) -> Option<Float64Array> {
        let b = self.inner.basis_coefficients(Parameter::new(segment as usize, t)).ok()?;
        Some(arr_f64(&b))
    }
    pub fn frame_res(&self, segment: u32, t: f64) -> JsValue {
        if !t.is_finite() { return error::non_finite("t"); }
        result_value(self.inner.frame(Parameter::new(segment as usize, t)), |f| {
            let o = new_obj();
            set_kv(&o, "position", &point_value(f.position));
            set_kv(&o, "firstDerivative", &point_value(f.first_derivative));
            set_kv(&o, "secondDerivative", &point_value(f.second_derivative));
            set_kv(&o, "tangent", &point_value(f.tangent));
            set_kv(&o, "normal", &point_value(f.normal));
            set_kv(&o, "curvature", &JsValue::from_f64(f.curvature));
            o.into()
        })
    }

    // Projection
    pub fn find_foot_prints(&self, xy: &Float64Array) -> JsValue {
        points_from_flat(&xy.to_vec())
            .and_then(|pts| self.inner.find_foot_prints(&pts).ok())
            .map_or(JsValue::NULL, |fp| foot_prints_value(&fp))
    }
    pub fn find_foot_prints_res(&self, xy: &Float64Array) -> JsValue {
        let flat = xy.to_vec();
        let Some(pts) = points_from_flat(&flat) else { return error::bad_length("xy", flat.len()); };
        result_value(self.inner.find_foot_prints(&pts), |fp| foot_prints_value(&fp))
    }

    // Classification
    pub fn check_inside(&self, x: f64, y: f64) -> bool {
        self.inner.check_inside(Vec2::new(x, y)).unwrap_or(false)
    }
    pub fn check_inside_res(&self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() { return error::non_finite("x"); }
        if !y.is_finite() { return error::non_finite("y"); }
        result_value(self.inner.check_inside(Vec2::new(x, y)), JsValue::from_bool)
    }
    pub fn check_same_side(&self, x1: f64, y1: f64, x2: f64, y2: f64, segment: u32, t: f64) -> Option<bool> {
        self.inner
            .check_same_side(Vec2::new(x1, y1), Vec2::new(x2, y2), Parameter::new(segment as usize, t))
            .ok()
    }

    // Assembly
    pub fn second_derivative_energy_matrix(&self) -> Float64Array {
        arr_f64(&row_major(&self.inner.second_derivative_energy_matrix()))
    }
    pub fn first_derivative_energy_matrix(&self) -> Float64Array {
        arr_f64(&row_major(&self.inner.first_derivative_energy_matrix()))
    }
    pub fn signed_distance_contribution_res(&self, x: f64, y: f64, segment: u32, t: f64) -> JsValue {
        let p = Parameter::new(segment as usize, t);
        result_value(self.inner.signed_distance_contribution(Vec2::new(x, y), p), |c| contribution_value(&c))
    }
    pub fn tangent_distance_contribution_res(&self, x: f64, y: f64, segment: u32, t: f64) -> JsValue {
        let p = Parameter::new(segment as usize, t);
        result_value(self.inner.tangent_distance_contribution(Vec2::new(x, y), p), |c| contribution_value(&c))
    }
    pub fn point_distance_contribution_res(&self, x: f64, y: f64, segment: u32, t: f64) -> JsValue {
        let p = Parameter::new(segment as usize, t);
        result_value(self.inner.point_distance_contribution(Vec2::new(x, y), p), |c| contribution_value(&c))
    }
    /// Control coordinates as one column, `[x0.., y0..]`, for seeding a solver.
    pub fn flattened_controls(&self) -> Float64Array {
        arr_f64(&vector_values(&bspline::algorithms::assemble::flatten_controls(self.inner.controls())))
    }

    // Persistence
    pub fn to_json(&self) -> JsValue {
        let ser = serde_wasm_bindgen::Serializer::json_compatible();
        self.inner.to_json_value().serialize(&ser).unwrap_or(JsValue::NULL)
    }
    pub fn to_json_string(&self) -> String {
        self.inner.to_json_value().to_string()
    }
    pub fn from_json_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(doc) => self.replace_from_document(doc),
            Err(e) => error::err("invalid_json", e.to_string(), None),
        }
    }
    pub fn from_json_string_res(&mut self, s: &str) -> JsValue {
        match serde_json::from_str::<serde_json::Value>(s) {
            Ok(doc) => self.replace_from_document(doc),
            Err(e) => error::from_curve(&CurveError::from(e)),
        }
    }
}

impl Curve {
    // Only a fully validated document replaces the current curve
    fn replace_from_document(&mut self, doc: serde_json::Value) -> JsValue {
        match OpenCubicBSpline::from_json_value(doc) {
            Ok(c) => {
                self.inner = c;
                error::ok(JsValue::from_f64(self.inner.control_count() as f64))
            }
            Err(e) => error::from_curve(&e),
        }
    }
}

impl Default for Curve {
    fn default() -> Self { Curve::rs_new() }
}
