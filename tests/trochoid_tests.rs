mod support;

use nalgebra::Point2;
use trochogen::{
    errors::ParameterError,
    trochoid::{CurveMode, FULL_TURN_DEGREES, Trochoid},
};

#[test]
fn hypo_center_starts_at_radius_difference() {
    let curve = Trochoid::new(150, 40, 40, 0, CurveMode::Hypo).unwrap();
    let c0 = curve.center(0);
    // distance to the origin is exactly R − r at θ = 0
    assert!(support::approx_eq(
        (c0.coords).norm(),
        110.0,
        1e-9
    ));
    assert!(support::point_approx_eq(c0, Point2::new(110.0, 0.0), 1e-9));
}

#[test]
fn hypo_point_starts_on_radius_line() {
    // R=150, r=40, ρ=40, φ=0: the traced point begins at (R − r + ρ, 0)
    let curve = Trochoid::new(150, 40, 40, 0, CurveMode::Hypo).unwrap();
    assert!(support::point_approx_eq(
        curve.point(0),
        Point2::new(150.0, 0.0),
        1e-9
    ));
}

#[test]
fn epi_point_starts_between_the_centres() {
    // ρ = r puts the point exactly on the tangency point of the two circles,
    // which is where an epicycloid cusp must sit.
    let curve = Trochoid::new(200, 50, 50, 0, CurveMode::Epi).unwrap();
    assert!(support::point_approx_eq(
        curve.point(0),
        Point2::new(200.0, 0.0),
        1e-9
    ));
}

#[test]
fn phase_rotates_the_start_point() {
    // φ = 90°: offset swings to (0, −ρ)
    let curve = Trochoid::new(150, 40, 40, 90, CurveMode::Hypo).unwrap();
    assert!(support::point_approx_eq(
        curve.point(0),
        Point2::new(110.0, -40.0),
        1e-9
    ));
}

#[test]
fn locus_closes_at_the_sweep_bound() {
    for &(fixed, rolling, offset, mode) in &[
        (150u32, 40u32, 40u32, CurveMode::Hypo),
        (200, 50, 50, CurveMode::Epi),
        (150, 70, 35, CurveMode::Hypo),
        (90, 7, 20, CurveMode::Epi),
    ] {
        let curve = Trochoid::new(fixed, rolling, offset, 0, mode).unwrap();
        // sweep_degrees includes the closing degree, so the last swept angle
        // lands back on the θ = 0 position
        let closing = curve.sweep_degrees() - 1;
        assert!(
            support::point_approx_eq(curve.point(closing), curve.point(0), 1e-6),
            "curve R={fixed} r={rolling} did not close"
        );
        assert!(
            support::point_approx_eq(curve.center(closing), curve.center(0), 1e-6),
            "rolling centre R={fixed} r={rolling} did not return"
        );
    }
}

#[test]
fn sweep_bound_for_default_parameters() {
    let curve = Trochoid::new(150, 40, 40, 0, CurveMode::Hypo).unwrap();
    assert_eq!(curve.sweep_degrees(), 1441);
    assert_eq!(FULL_TURN_DEGREES, 360);
}

#[test]
fn trace_is_the_full_prefix() {
    let curve = Trochoid::new(150, 40, 40, 0, CurveMode::Hypo).unwrap();
    let trace = curve.trace(25);
    assert_eq!(trace.centers.len(), 26);
    assert_eq!(trace.points.len(), 26);
    for (theta, point) in trace.points.iter().enumerate() {
        assert!(support::point_approx_eq(
            *point,
            curve.point(theta as u32),
            1e-12
        ));
    }
}

#[test]
fn evaluation_is_deterministic() {
    let a = Trochoid::new(150, 40, 40, 15, CurveMode::Epi).unwrap();
    let b = Trochoid::new(150, 40, 40, 15, CurveMode::Epi).unwrap();
    assert_eq!(a.trace(720), b.trace(720));
}

#[test]
fn zero_rolling_radius_is_rejected() {
    assert_eq!(
        Trochoid::new(150, 0, 40, 0, CurveMode::Hypo),
        Err(ParameterError::ZeroRadius("rolling"))
    );
    assert_eq!(
        Trochoid::new(150, 0, 40, 0, CurveMode::Epi),
        Err(ParameterError::ZeroRadius("rolling"))
    );
}

#[test]
fn zero_fixed_radius_is_rejected() {
    assert_eq!(
        Trochoid::new(0, 40, 40, 0, CurveMode::Epi),
        Err(ParameterError::ZeroRadius("fixed"))
    );
}

#[test]
fn zero_offset_is_rejected() {
    assert_eq!(
        Trochoid::new(150, 40, 0, 0, CurveMode::Hypo),
        Err(ParameterError::ZeroOffset)
    );
}

#[test]
fn rolling_circle_must_fit_inside_in_hypo_mode() {
    assert_eq!(
        Trochoid::new(40, 40, 10, 0, CurveMode::Hypo),
        Err(ParameterError::RollingTooLarge {
            fixed: 40,
            rolling: 40
        })
    );
    assert_eq!(
        Trochoid::new(40, 150, 10, 0, CurveMode::Hypo),
        Err(ParameterError::RollingTooLarge {
            fixed: 40,
            rolling: 150
        })
    );
    // outside the fixed circle any positive pair is fine
    assert!(Trochoid::new(40, 150, 10, 0, CurveMode::Epi).is_ok());
}

#[test]
fn angles_convert_only_at_the_trig_sites() {
    // a quarter turn of the driving angle puts the rolling centre on the
    // positive y axis
    let curve = Trochoid::new(100, 25, 25, 0, CurveMode::Hypo).unwrap();
    let c = curve.center(90);
    assert!(support::approx_eq(c.x, 0.0, 1e-9));
    assert!(support::approx_eq(c.y, 75.0, 1e-9));
}
