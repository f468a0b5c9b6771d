use crate::model::{CurveConfig, Vec2};
use crate::{CurveError, OpenCubicBSpline, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DOC_VERSION: u32 = 1;

pub fn to_json_impl(c: &OpenCubicBSpline) -> Value {
    #[derive(Serialize)]
    struct CurveSer<'a> {
        version: u32,
        interval: f64,
        controls: &'a [Vec2],
    }
    let doc = CurveSer { version: DOC_VERSION, interval: c.interval, controls: &c.controls };
    // Controls are validated finite on install, so serialization cannot fail
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn from_json_impl(v: Value) -> Result<OpenCubicBSpline> {
    #[derive(Deserialize)]
    struct CurveDe {
        version: Option<u32>,
        interval: Option<f64>,
        controls: Vec<Vec2>,
    }
    let doc: CurveDe = serde_json::from_value(v)?;
    if let Some(ver) = doc.version {
        if ver != DOC_VERSION {
            return Err(CurveError::UnsupportedVersion(ver));
        }
    }
    let config = CurveConfig { interval: doc.interval.unwrap_or(CurveConfig::default().interval) };
    let mut curve = OpenCubicBSpline::from_config(&config)?;
    curve.install_controls(doc.controls)?;
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_round_trip() {
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(4.5, -1.0),
        ];
        let c = OpenCubicBSpline::from_controls(pts, 0.05).unwrap();
        let v = c.to_json_value();
        assert_eq!(v["version"], 1);
        assert_eq!(v["controls"][1], json!({"x": 1.0, "y": 2.0}));
        let back = OpenCubicBSpline::from_json_value(v).unwrap();
        assert_eq!(back.controls(), c.controls());
        assert_eq!(back.interval(), 0.05);
        assert_eq!(back.samples(), c.samples());
    }

    #[test]
    fn missing_interval_uses_default() {
        let v = json!({
            "controls": [{"x":0.0,"y":0.0},{"x":1.0,"y":0.0},{"x":2.0,"y":1.0},{"x":3.0,"y":1.0}]
        });
        let c = OpenCubicBSpline::from_json_value(v).unwrap();
        assert_eq!(c.interval(), CurveConfig::default().interval);
        assert_eq!(c.segment_count(), 1);
    }

    #[test]
    fn bad_documents_are_rejected() {
        let v = json!({"version": 2, "controls": []});
        assert!(matches!(OpenCubicBSpline::from_json_value(v), Err(CurveError::UnsupportedVersion(2))));
        let v = json!({"version": 1, "controls": "nope"});
        assert!(matches!(OpenCubicBSpline::from_json_value(v), Err(CurveError::Json(_))));
        let v = json!({"controls": [{"x":0.0,"y":0.0}]});
        assert!(matches!(
            OpenCubicBSpline::from_json_value(v),
            Err(CurveError::TooFewControls { got: 1 })
        ));
        let v = json!({"interval": 0.0, "controls": []});
        assert!(matches!(OpenCubicBSpline::from_json_value(v), Err(CurveError::InvalidInterval(_))));
    }
}
