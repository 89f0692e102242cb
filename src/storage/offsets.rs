//! Calibration storage layout.
//!
//! Per-axis tables hold one little-endian `u32` per axis, in axis index order.

use crate::config::{Axis, AXIS_COUNT};

/// Axis direction inversion bitmask (`u8`, bit per axis).
pub const AXIS_INVERSION: u16 = 0x0002;

/// Endstop inversion bitmask (`u8`, bit per axis).
pub const ENDSTOP_INVERSION: u16 = 0x0004;

/// Bit in [`ENDSTOP_INVERSION`] declaring that endstops are physically present.
pub const ENDSTOPS_PRESENT_BIT: u8 = 1 << 7;

/// Home positions in steps (`u32` per axis, read as signed).
pub const AXIS_HOME_POSITIONS_STEPS: u16 = 0x000E;

/// Steps per mm scaled by [`STEPS_PER_MM_SCALE`] (`u32` per axis).
pub const AXIS_STEPS_PER_MM: u16 = 0x01A0;

/// Maximum feedrates in mm/min (`u32` per axis).
pub const AXIS_MAX_FEEDRATES: u16 = AXIS_STEPS_PER_MM + TABLE_LEN;

/// Axis lengths in mm (`u32` per axis).
pub const AXIS_LENGTHS: u16 = AXIS_MAX_FEEDRATES + TABLE_LEN;

/// Emergency stop enable flag (`u8`, `1` = enabled).
pub const PSTOP_ENABLE: u16 = AXIS_LENGTHS + TABLE_LEN;

/// First byte past the calibration layout.
pub const END: u16 = PSTOP_ENABLE + 1;

/// Fixed-point scale of persisted steps-per-mm values.
pub const STEPS_PER_MM_SCALE: f32 = 1_000_000.0;

const TABLE_LEN: u16 = (AXIS_COUNT * 4) as u16;

/// Offset of `axis`' entry in the per-axis table starting at `base`.
#[inline]
pub const fn for_axis(base: u16, axis: Axis) -> u16 {
    base + (axis.index() as u16) * 4
}
