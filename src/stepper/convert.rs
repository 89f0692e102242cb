//! Conversion between millimeters and step counts.
//!
//! These are the canonical conversions used by planning and homing code. They are not exact
//! inverses of each other.

/// Convert a step count to millimeters, as accurate as `f32` allows.
#[inline]
pub fn steps_to_mm(steps: i32, steps_per_mm: f32) -> f32 {
    steps as f32 / steps_per_mm
}

/// Convert millimeters to a step count, accurate to 1/1000 mm.
///
/// The distance is scaled to thousandths of a millimeter and truncated, multiplied by the
/// integer part of `steps_per_mm`, then divided back down with integer division. Both the
/// scaling and the final division truncate toward zero, so with `steps_per_mm = 100.0`,
/// `1.2345` mm yields `123` steps. Results outside the `i32` range saturate.
#[inline]
pub fn mm_to_steps(mm: f32, steps_per_mm: f32) -> i32 {
    let milli_mm = (mm * 1000.0) as i64;
    let steps = milli_mm.saturating_mul(steps_per_mm as i64) / 1000;
    steps.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_steps_truncates_twice() {
        assert_eq!(mm_to_steps(1.2345, 100.0), 123);
        assert_eq!(mm_to_steps(1.2399, 100.0), 123);
        assert_eq!(mm_to_steps(0.0099, 100.0), 0);
    }

    #[test]
    fn test_mm_to_steps_uses_integer_steps_per_mm() {
        // 88.9 is used as 88
        assert_eq!(mm_to_steps(100.0, 88.9), 8800);
    }

    #[test]
    fn test_mm_to_steps_negative_truncates_toward_zero() {
        assert_eq!(mm_to_steps(-1.2345, 100.0), -123);
    }

    #[test]
    fn test_mm_to_steps_saturates_far_outside_travel() {
        assert_eq!(mm_to_steps(1e17, 400.0), i32::MAX);
        assert_eq!(mm_to_steps(-1e17, 400.0), i32::MIN);
    }

    #[test]
    fn test_steps_to_mm() {
        assert!((steps_to_mm(60000, 400.0) - 150.0).abs() < 1e-4);
        assert!((steps_to_mm(-8800, 88.0) + 100.0).abs() < 1e-4);
    }
}
