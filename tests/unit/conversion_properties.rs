//! Property tests for the millimeter/step conversions.

use proptest::prelude::*;
use stepper_axes::stepper::convert::{mm_to_steps, steps_to_mm};

proptest! {
    /// Truncation never rounds a distance up, in either direction.
    #[test]
    fn mm_to_steps_never_rounds_away_from_zero(
        mm in -1000.0f32..1000.0,
        spm in prop::sample::select(vec![80.0f32, 88.0, 100.0, 400.0, 96.0]),
    ) {
        let steps = mm_to_steps(mm, spm);
        let scaled = (mm * 1000.0) as f64 * spm as f64 / 1000.0;
        prop_assert!((steps as f64).abs() <= scaled.abs());
    }

    /// Converting back recovers the distance to within one step.
    #[test]
    fn roundtrip_within_one_step(mm in -1000.0f32..1000.0) {
        let spm = 100.0f32;
        let back = steps_to_mm(mm_to_steps(mm, spm), spm);
        prop_assert!((back - mm).abs() <= 1.0 / spm + 1e-4);
    }

    /// Whole step counts lose at most one step on the way back.
    #[test]
    fn whole_steps_roundtrip(steps in -50_000i32..50_000) {
        let spm = 100.0f32;
        let back = mm_to_steps(steps_to_mm(steps, spm), spm);
        prop_assert!(back.abs() <= steps.abs());
        prop_assert!(back.abs() >= steps.abs() - 1);
    }

    /// Truncation is symmetric around zero.
    #[test]
    fn mm_to_steps_is_odd(mm in 0.0f32..1000.0) {
        prop_assert_eq!(mm_to_steps(-mm, 88.0), -mm_to_steps(mm, 88.0));
    }
}
