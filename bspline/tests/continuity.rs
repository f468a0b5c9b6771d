use bspline::{OpenCubicBSpline, Parameter, Vec2};
use proptest::prelude::*;

fn controls_strategy() -> impl Strategy<Value = Vec<Vec2>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 4..12)
        .prop_map(|v| v.into_iter().map(Vec2::from).collect())
}

proptest! {
    #[test]
    fn segment_boundaries_are_c0(controls in controls_strategy()) {
        let c = OpenCubicBSpline::from_controls(controls, 0.1).unwrap();
        for s in 0..c.segment_count() - 1 {
            let a = c.position(Parameter::new(s, 1.0)).unwrap();
            let b = c.position(Parameter::new(s + 1, 0.0)).unwrap();
            prop_assert!(a.distance(b) < 1e-9, "seg {}: {:?} vs {:?}", s, a, b);
        }
    }

    #[test]
    fn segment_boundaries_are_c1(controls in controls_strategy()) {
        let c = OpenCubicBSpline::from_controls(controls, 0.1).unwrap();
        for s in 0..c.segment_count() - 1 {
            let a = c.first_derivative(Parameter::new(s, 1.0)).unwrap();
            let b = c.first_derivative(Parameter::new(s + 1, 0.0)).unwrap();
            prop_assert!(a.distance(b) < 1e-9);
            if a.length() > 1e-6 {
                let ta = c.tangent(Parameter::new(s, 1.0)).unwrap();
                let tb = c.tangent(Parameter::new(s + 1, 0.0)).unwrap();
                prop_assert!(ta.distance(tb) < 1e-9);
            }
        }
    }

    #[test]
    fn basis_is_partition_of_unity(controls in controls_strategy(), t in 0.0f64..=1.0) {
        let c = OpenCubicBSpline::from_controls(controls, 0.1).unwrap();
        let w = c.basis_coefficients(Parameter::new(0, t)).unwrap();
        prop_assert!((w.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        prop_assert!(w.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn position_is_blend_of_local_controls(controls in controls_strategy(), t in 0.0f64..=1.0) {
        let c = OpenCubicBSpline::from_controls(controls.clone(), 0.1).unwrap();
        let s = c.segment_count() - 1;
        let p = Parameter::new(s, t);
        let w = c.basis_coefficients(p).unwrap();
        let mut expect = Vec2::ZERO;
        for (k, wk) in w.iter().enumerate() {
            expect += controls[c.local_to_global_index(s, k).unwrap()] * *wk;
        }
        prop_assert!(c.position(p).unwrap().distance(expect) < 1e-9);
    }

    #[test]
    fn normal_is_left_unit_perpendicular(controls in controls_strategy(), t in 0.0f64..=1.0) {
        let c = OpenCubicBSpline::from_controls(controls, 0.1).unwrap();
        let p = Parameter::new(0, t);
        let tan = c.tangent(p).unwrap();
        let n = c.normal(p).unwrap();
        prop_assert!(tan.dot(n).abs() < 1e-12);
        if tan.length() > 0.0 {
            prop_assert!((n.length() - 1.0).abs() < 1e-12);
            prop_assert!(tan.cross(n) > 0.0);
        }
    }
}

#[test]
fn collinear_controls_are_straight() {
    let controls: Vec<Vec2> = (0..7).map(|i| Vec2::new(i as f64 * 2.0, 0.0)).collect();
    let c = OpenCubicBSpline::from_controls(controls, 0.05).unwrap();
    for s in 0..c.segment_count() {
        for k in 0..=20 {
            assert_eq!(c.curvature(Parameter::new(s, k as f64 / 20.0)).unwrap(), 0.0);
        }
    }
}

#[test]
fn bent_controls_are_not_straight() {
    let controls = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(3.0, 3.0),
    ];
    let c = OpenCubicBSpline::from_controls(controls, 0.05).unwrap();
    for k in 0..=10 {
        assert!(c.curvature(Parameter::new(0, k as f64 / 10.0)).unwrap() > 0.0);
    }
}
