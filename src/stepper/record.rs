//! Per-axis configuration record.

use crate::config::units::{Millimeters, MillimetersPerSec, Steps};
use crate::config::{AxisCalibration, AxisPolarity, TravelLimits};

use super::convert;

/// Derived configuration of one axis.
///
/// Rebuilt from storage on every hard reset and left untouched by soft resets. All fields are
/// zero until the first hard reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// Steps per millimeter.
    pub steps_per_mm: f32,
    /// Maximum feedrate.
    pub max_feedrate: MillimetersPerSec,
    /// Minimum microseconds between steps at maximum feedrate.
    pub min_step_interval: u32,
    /// Legal step range.
    pub limits: TravelLimits,
    /// Reverse the direction line.
    pub invert_axis: bool,
    /// Endstop reads asserted when low.
    pub invert_endstop: bool,
    /// Set by homing code once the axis has been homed.
    pub has_homed: bool,
    /// Set by positioning code once the axis position is known.
    pub has_defined_position: bool,
}

impl AxisConfig {
    /// Build a fresh record from calibration, limits and polarity.
    pub fn new(calibration: &AxisCalibration, limits: TravelLimits, polarity: AxisPolarity) -> Self {
        Self {
            steps_per_mm: calibration.steps_per_mm,
            max_feedrate: calibration.max_feedrate,
            min_step_interval: calibration.min_step_interval,
            limits,
            invert_axis: polarity.invert_axis,
            invert_endstop: polarity.invert_endstop,
            has_homed: false,
            has_defined_position: false,
        }
    }

    /// Convert a step count on this axis to millimeters.
    #[inline]
    pub fn steps_to_mm(&self, steps: Steps) -> Millimeters {
        Millimeters(convert::steps_to_mm(steps.0, self.steps_per_mm))
    }

    /// Convert millimeters on this axis to a step count, truncating at 1/1000 mm.
    #[inline]
    pub fn mm_to_steps(&self, mm: Millimeters) -> Steps {
        Steps(convert::mm_to_steps(mm.0, self.steps_per_mm))
    }
}
