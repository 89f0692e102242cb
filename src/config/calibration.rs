//! Calibration loading from persisted storage.

use crate::storage::{offsets, CalibrationStore};

use super::axis::{Axis, AXIS_COUNT};
use super::board::{AxisBoardConfig, BoardConfig};
use super::units::MillimetersPerSec;

/// Step interval used when the maximum feedrate degenerates to zero steps per second.
pub const FALLBACK_MIN_STEP_INTERVAL_US: u32 = 500;

/// Direction and endstop polarity of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisPolarity {
    /// Reverse the direction line.
    pub invert_axis: bool,
    /// Endstop reads asserted when low. Forced on when the board has no endstops.
    pub invert_endstop: bool,
}

/// Inversion bitmasks decoded into per-axis flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InversionFlags {
    /// Whether endstop switches are physically present.
    pub endstops_present: bool,
    polarity: [AxisPolarity; AXIS_COUNT],
}

impl InversionFlags {
    /// Decode the persisted axis and endstop inversion bitmasks.
    ///
    /// An absent endstop is a pulled-up line that always reads high, so every axis is treated
    /// as inverted unless [`offsets::ENDSTOPS_PRESENT_BIT`] is set.
    pub fn decode(axes_invert: u8, endstops_invert: u8) -> Self {
        let endstops_present = endstops_invert & offsets::ENDSTOPS_PRESENT_BIT != 0;
        let mut polarity = [AxisPolarity::default(); AXIS_COUNT];
        for axis in Axis::ALL {
            polarity[axis.index()] = AxisPolarity {
                invert_axis: axes_invert & axis.mask() != 0,
                invert_endstop: !endstops_present || endstops_invert & axis.mask() != 0,
            };
        }
        Self {
            endstops_present,
            polarity,
        }
    }

    /// Read and decode both bitmasks from storage. Unset masks read as zero.
    pub fn load<S: CalibrationStore>(store: &S) -> Self {
        let axes_invert = store.read_u8(offsets::AXIS_INVERSION, 0);
        let endstops_invert = store.read_u8(offsets::ENDSTOP_INVERSION, 0);
        Self::decode(axes_invert, endstops_invert)
    }

    /// Polarity of one axis.
    #[inline]
    pub fn polarity(&self, axis: Axis) -> AxisPolarity {
        self.polarity[axis.index()]
    }
}

/// Calibration values of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalibration {
    /// Steps per millimeter.
    pub steps_per_mm: f32,
    /// Maximum feedrate.
    pub max_feedrate: MillimetersPerSec,
    /// Minimum microseconds between steps at maximum feedrate.
    pub min_step_interval: u32,
    /// Axis length in millimeters.
    pub length_mm: u32,
    /// Home position offset in steps.
    pub home_position_steps: i32,
}

impl AxisCalibration {
    /// Read one axis from storage, falling back to the board defaults.
    pub fn load<S: CalibrationStore>(store: &S, axis: Axis, defaults: &AxisBoardConfig) -> Self {
        let steps_per_mm = store.read_u32(
            offsets::for_axis(offsets::AXIS_STEPS_PER_MM, axis),
            defaults.steps_per_mm_scaled(),
        ) as f32
            / offsets::STEPS_PER_MM_SCALE;

        let max_feedrate = MillimetersPerSec::from_per_minute(store.read_u32(
            offsets::for_axis(offsets::AXIS_MAX_FEEDRATES, axis),
            defaults.max_feedrate_mm_per_min,
        ) as f32);

        let length_mm = store.read_u32(
            offsets::for_axis(offsets::AXIS_LENGTHS, axis),
            defaults.length_mm,
        );

        let home_position_steps =
            store.read_u32(offsets::for_axis(offsets::AXIS_HOME_POSITIONS_STEPS, axis), 0) as i32;

        let min_step_interval = min_step_interval(steps_per_mm, max_feedrate);
        if min_step_interval == FALLBACK_MIN_STEP_INTERVAL_US {
            warn!("axis {}: degenerate max feedrate, using fallback step interval", axis);
        }

        Self {
            steps_per_mm,
            max_feedrate,
            min_step_interval,
            length_mm,
            home_position_steps,
        }
    }
}

/// Minimum microseconds per step: `1_000_000 / (steps_per_mm * max_feedrate)`.
///
/// Falls back to [`FALLBACK_MIN_STEP_INTERVAL_US`] when the step rate truncates to zero.
pub fn min_step_interval(steps_per_mm: f32, max_feedrate: MillimetersPerSec) -> u32 {
    let steps_per_sec = (steps_per_mm * max_feedrate.value()) as u32;
    if steps_per_sec == 0 {
        FALLBACK_MIN_STEP_INTERVAL_US
    } else {
        1_000_000 / steps_per_sec
    }
}

/// Everything read from storage on a hard reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Calibration {
    /// Decoded polarity flags.
    pub inversion: InversionFlags,
    /// Emergency stop enabled (only read on boards that support it).
    pub pstop_enabled: bool,
    axes: [AxisCalibration; AXIS_COUNT],
}

impl Calibration {
    /// Load the full calibration set for a board.
    pub fn load<S: CalibrationStore>(store: &S, board: &BoardConfig) -> Self {
        let inversion = InversionFlags::load(store);
        let pstop_enabled =
            board.pstop.is_some() && store.read_u8(offsets::PSTOP_ENABLE, 0) == 1;

        let mut axes = [AxisCalibration::default(); AXIS_COUNT];
        for (axis, defaults) in board.axes.iter() {
            axes[axis.index()] = AxisCalibration::load(store, axis, defaults);
        }

        debug!(
            "calibration loaded: endstops_present={} pstop={}",
            inversion.endstops_present, pstop_enabled
        );

        Self {
            inversion,
            pstop_enabled,
            axes,
        }
    }

    /// Calibration of one axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisCalibration {
        &self.axes[axis.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::EepromImage;

    #[test]
    fn test_endstops_absent_forces_inversion() {
        let flags = InversionFlags::decode(0, 0b0000_0010);
        assert!(!flags.endstops_present);
        for axis in Axis::ALL {
            assert!(flags.polarity(axis).invert_endstop);
        }
    }

    #[test]
    fn test_endstops_present_uses_bits() {
        let flags = InversionFlags::decode(0b0000_0101, 0b1000_0010);
        assert!(flags.endstops_present);
        assert!(!flags.polarity(Axis::X).invert_endstop);
        assert!(flags.polarity(Axis::Y).invert_endstop);
        assert!(!flags.polarity(Axis::Z).invert_endstop);

        assert!(flags.polarity(Axis::X).invert_axis);
        assert!(!flags.polarity(Axis::Y).invert_axis);
        assert!(flags.polarity(Axis::Z).invert_axis);
    }

    #[test]
    fn test_min_step_interval() {
        // 100 steps/mm at 50 mm/s = 5000 steps/s -> 200us
        assert_eq!(min_step_interval(100.0, MillimetersPerSec(50.0)), 200);
        assert_eq!(min_step_interval(100.0, MillimetersPerSec(0.0)), FALLBACK_MIN_STEP_INTERVAL_US);
        assert_eq!(min_step_interval(0.5, MillimetersPerSec(1.0)), FALLBACK_MIN_STEP_INTERVAL_US);
    }

    #[test]
    fn test_load_uses_defaults_when_erased() {
        let board = BoardConfig::replicator();
        let image: EepromImage = EepromImage::new();
        let cal = AxisCalibration::load(&image, Axis::Z, &board.axes.z);

        assert!((cal.steps_per_mm - 400.0).abs() < 1e-3);
        assert!((cal.max_feedrate.value() - 19.5).abs() < 1e-3);
        assert_eq!(cal.length_mm, 155);
        assert_eq!(cal.home_position_steps, 0);
    }

    #[test]
    fn test_load_prefers_stored_values() {
        let board = BoardConfig::replicator();
        let mut image: EepromImage = EepromImage::new();
        image
            .write_u32(offsets::for_axis(offsets::AXIS_STEPS_PER_MM, Axis::X), 100_000_000)
            .unwrap();
        image
            .write_u32(offsets::for_axis(offsets::AXIS_MAX_FEEDRATES, Axis::X), 6000)
            .unwrap();
        image
            .write_u32(offsets::for_axis(offsets::AXIS_LENGTHS, Axis::X), 200)
            .unwrap();

        let cal = AxisCalibration::load(&image, Axis::X, &board.axes.x);
        assert!((cal.steps_per_mm - 100.0).abs() < 1e-4);
        assert!((cal.max_feedrate.value() - 100.0).abs() < 1e-4);
        assert_eq!(cal.length_mm, 200);
        // 100 steps/mm * 100 mm/s = 10000 steps/s
        assert_eq!(cal.min_step_interval, 100);
    }

    #[test]
    fn test_pstop_flag_requires_board_support() {
        let mut image: EepromImage = EepromImage::new();
        image.write_u8(offsets::PSTOP_ENABLE, 1).unwrap();

        let plain = Calibration::load(&image, &BoardConfig::replicator());
        assert!(!plain.pstop_enabled);

        let board = BoardConfig::replicator().with_pstop(crate::port::Signal::pin(3));
        let with_pstop = Calibration::load(&image, &board);
        assert!(with_pstop.pstop_enabled);
    }
}
