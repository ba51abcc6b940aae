//! Snapshot tests for curve sampling and error messages using insta.

use cruise_accel_curves::{Curve, CurveError, Kernel};

const BP: [f32; 7] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 40.0];
const ECO: [f32; 7] = [2.0, 1.5, 1.0, 0.8, 0.6, 0.4, 0.2];
const SPORT_PLUS: [f32; 7] = [4.0, 3.5, 3.0, 2.5, 2.0, 1.5, 1.0];

fn sample_for_snapshot(curve: &Curve<'_>, kernel: Kernel) -> Vec<f32> {
    (0..=16)
        .map(|i| curve.evaluate(i as f32 * 2.5, kernel))
        .map(|v| (v * 1000.0).round() / 1000.0)
        .collect()
}

#[test]
fn snapshot_eco_smooth_akima() -> Result<(), CurveError> {
    let curve = Curve::new(&BP, &ECO)?;
    let samples = sample_for_snapshot(&curve, Kernel::SmoothAkima);
    insta::assert_snapshot!(
        format!("{:?}", samples),
        @"[2.0, 1.75, 1.5, 1.25, 1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.393, 0.358, 0.3, 0.242, 0.207, 0.2]"
    );
    Ok(())
}

#[test]
fn snapshot_sport_plus_smooth_akima() -> Result<(), CurveError> {
    let curve = Curve::new(&BP, &SPORT_PLUS)?;
    let samples = sample_for_snapshot(&curve, Kernel::SmoothAkima);
    insta::assert_snapshot!(
        format!("{:?}", samples),
        @"[4.0, 3.75, 3.5, 3.25, 3.0, 2.75, 2.5, 2.25, 2.0, 1.75, 1.5, 1.482, 1.395, 1.25, 1.105, 1.018, 1.0]"
    );
    Ok(())
}

#[test]
fn snapshot_error_too_few_points() {
    let err = Curve::new(&[1.0], &[1.0]).err();
    insta::assert_snapshot!(
        format!("{:?}", err.map(|e| e.to_string())),
        @r#"Some("Curve needs at least 2 points, got 1")"#
    );
}

#[test]
fn snapshot_error_length_mismatch() {
    let err = CurveError::LengthMismatch {
        breakpoints: 3,
        values: 2,
    };
    insta::assert_snapshot!(err.to_string(), @"Curve has 3 breakpoints but 2 values");
}

#[test]
fn snapshot_error_non_finite() {
    let err = CurveError::NonFinite {
        sequence: "value",
        index: 1,
        value: f32::NAN,
    };
    insta::assert_snapshot!(err.to_string(), @"Curve value entry 1 is not finite: NaN");
}

#[test]
fn snapshot_error_not_increasing() {
    let err = CurveError::NotStrictlyIncreasing {
        index: 2,
        previous: 5.0,
        value: 5.0,
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"Curve breakpoint 2 (5) does not exceed the previous breakpoint (5)"
    );
}
