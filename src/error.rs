use wasm_bindgen::prelude::*;
use js_sys::{Object, Reflect};
use bspline::CurveError;

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Stable envelope code for a core error.
pub fn error_code(e: &CurveError) -> &'static str {
    match e {
        CurveError::TooFewControls { .. } => "too_few_controls",
        CurveError::TooManyControls { .. } | CurveError::SampleBudgetExceeded { .. } => "caps_exceeded",
        CurveError::NonFiniteControl { .. } | CurveError::NonFiniteQuery { .. } => "non_finite",
        CurveError::CoordinateOutOfBounds { .. } => "out_of_bounds",
        CurveError::InvalidInterval(_) => "invalid_interval",
        CurveError::SegmentOutOfRange { .. }
        | CurveError::LocalIndexOutOfRange(_)
        | CurveError::ParameterOutOfRange(_)
        | CurveError::SampleOutOfRange { .. } => "out_of_range",
        CurveError::EmptySampleCache => "empty_cache",
        CurveError::DimensionMismatch { .. } => "bad_length",
        CurveError::UnsupportedVersion(_) | CurveError::Json(_) => "invalid_json",
    }
}

pub fn from_curve(e: &CurveError) -> JsValue {
    let data = match e {
        CurveError::NonFiniteControl { index }
        | CurveError::NonFiniteQuery { index }
        | CurveError::CoordinateOutOfBounds { index } => {
            let d = new_obj();
            set_kv(&d, "index", &JsValue::from_f64(*index as f64));
            Some(d.into())
        }
        CurveError::SegmentOutOfRange { segment, segment_count } => {
            let d = new_obj();
            set_kv(&d, "segment", &JsValue::from_f64(*segment as f64));
            set_kv(&d, "segmentCount", &JsValue::from_f64(*segment_count as f64));
            Some(d.into())
        }
        CurveError::ParameterOutOfRange(t) => {
            let d = new_obj();
            set_kv(&d, "param", &JsValue::from_str("t"));
            set_kv(&d, "min", &JsValue::from_f64(0.0));
            set_kv(&d, "max", &JsValue::from_f64(1.0));
            set_kv(&d, "got", &JsValue::from_f64(*t));
            Some(d.into())
        }
        _ => None,
    };
    err(error_code(e), e.to_string(), data)
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn bad_length(param: &str, got: usize) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("bad_length", format!("'{}' must hold x,y pairs", param), Some(d.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_group_related_failures() {
        assert_eq!(error_code(&CurveError::TooFewControls { got: 2 }), "too_few_controls");
        assert_eq!(error_code(&CurveError::TooManyControls { got: 9, max: 8 }), "caps_exceeded");
        assert_eq!(error_code(&CurveError::SampleBudgetExceeded { samples: 9, max: 8 }), "caps_exceeded");
        assert_eq!(error_code(&CurveError::NonFiniteControl { index: 1 }), "non_finite");
        assert_eq!(error_code(&CurveError::NonFiniteQuery { index: 0 }), "non_finite");
        assert_eq!(error_code(&CurveError::CoordinateOutOfBounds { index: 0 }), "out_of_bounds");
        assert_eq!(error_code(&CurveError::InvalidInterval(0.0)), "invalid_interval");
        assert_eq!(error_code(&CurveError::ParameterOutOfRange(1.5)), "out_of_range");
        assert_eq!(error_code(&CurveError::SegmentOutOfRange { segment: 3, segment_count: 1 }), "out_of_range");
        assert_eq!(error_code(&CurveError::LocalIndexOutOfRange(4)), "out_of_range");
        assert_eq!(error_code(&CurveError::EmptySampleCache), "empty_cache");
        assert_eq!(error_code(&CurveError::DimensionMismatch { expected: 8, got: 7 }), "bad_length");
        assert_eq!(error_code(&CurveError::UnsupportedVersion(2)), "invalid_json");
    }
}
