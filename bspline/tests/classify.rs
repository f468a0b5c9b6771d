use bspline::{OpenCubicBSpline, Vec2};

// Open spline whose last three controls repeat the first three, so it
// closes on itself like a periodic curve
fn closed_hexagon(radius: f64) -> OpenCubicBSpline {
    let hex: Vec<Vec2> = (0..6)
        .map(|k| {
            let a = k as f64 * std::f64::consts::PI / 3.0;
            Vec2::new(radius * a.cos(), radius * a.sin())
        })
        .collect();
    let mut controls = hex.clone();
    controls.extend_from_slice(&hex[..3]);
    OpenCubicBSpline::from_controls(controls, 0.01).unwrap()
}

#[test]
fn closed_curve_starts_where_it_ends() {
    let c = closed_hexagon(5.0);
    let s = c.samples();
    assert!(s[0].distance(s[s.len() - 1]) < 1e-12);
}

#[test]
fn centroid_is_inside_far_point_is_not() {
    let c = closed_hexagon(5.0);
    let n = c.control_count() as f64;
    let mut centroid = Vec2::ZERO;
    for p in c.controls() {
        centroid += *p * (1.0 / n);
    }
    assert!(c.check_inside(centroid).unwrap());
    assert!(c.check_inside(Vec2::new(0.0, 0.0)).unwrap());
    assert!(c.check_inside(Vec2::new(3.0, 1.0)).unwrap());
    assert!(!c.check_inside(Vec2::new(100.0, 100.0)).unwrap());
    assert!(!c.check_inside(Vec2::new(-20.0, 0.0)).unwrap());
}

#[test]
fn inside_test_signs_residuals() {
    let c = closed_hexagon(5.0);
    let inner = Vec2::new(2.0, 0.5);
    let outer = Vec2::new(8.0, 2.0);
    let fp = c.find_foot_prints(&[inner, outer]).unwrap();
    assert!(c.check_inside(inner).unwrap());
    assert!(!c.check_inside(outer).unwrap());

    // Counter-clockwise loop: the left normal points inward
    let foot_in = fp.parameters[0];
    let frame = c.frame(foot_in).unwrap();
    assert!((inner - frame.position).dot(frame.normal) > 0.0);
    assert!(frame.curvature > 0.0);

    let near_inner = inner + Vec2::new(0.1, 0.0);
    assert!(c.check_same_side(inner, near_inner, foot_in).unwrap());
    let mirrored = frame.position - (inner - frame.position);
    assert!(!c.check_same_side(inner, mirrored, foot_in).unwrap());
}

#[test]
fn classify_before_install_fails() {
    let c = OpenCubicBSpline::new(0.01).unwrap();
    assert!(c.check_inside(Vec2::ZERO).is_err());
}
