//! Shared motion state.

use core::sync::atomic::{AtomicBool, AtomicI16, AtomicI32, AtomicU8, Ordering};

use crate::config::{Axis, AXIS_COUNT, EXTRUDER_COUNT};

use super::dda::AxisDda;

/// Motion state shared between the step generator and planning/homing code.
///
/// Built to live in a `static` and be handed out by reference:
///
/// ```rust,ignore
/// static MOTION: MotionContext = MotionContext::new();
/// ```
///
/// Access rules:
/// - every field is a single atomic word; reads never tear
/// - nothing here locks; the step interrupt is the only high-frequency writer of positions and
///   descriptors, and slower code that updates several fields together masks that interrupt
///   (axis initialization does so with `critical_section::with`)
/// - absolute positions survive a soft reset and are zeroed only by a hard reset
#[derive(Debug)]
pub struct MotionContext {
    dda_position: [AtomicI32; AXIS_COUNT],
    axis_homing: [AtomicBool; AXIS_COUNT],
    dda: [AxisDda; AXIS_COUNT],
    e_steps: [AtomicI16; EXTRUDER_COUNT],
    axes_enabled: AtomicU8,
    axes_hardware_enabled: AtomicU8,
}

impl MotionContext {
    /// Zeroed motion state.
    pub const fn new() -> Self {
        Self {
            dda_position: [const { AtomicI32::new(0) }; AXIS_COUNT],
            axis_homing: [const { AtomicBool::new(false) }; AXIS_COUNT],
            dda: [const { AxisDda::new() }; AXIS_COUNT],
            e_steps: [const { AtomicI16::new(0) }; EXTRUDER_COUNT],
            axes_enabled: AtomicU8::new(0),
            axes_hardware_enabled: AtomicU8::new(0),
        }
    }

    /// Absolute position of an axis in steps.
    #[inline]
    pub fn position(&self, axis: Axis) -> i32 {
        self.dda_position[axis.index()].load(Ordering::Acquire)
    }

    /// Overwrite the absolute position of an axis.
    #[inline]
    pub fn set_position(&self, axis: Axis, steps: i32) {
        self.dda_position[axis.index()].store(steps, Ordering::Release);
    }

    /// Atomic cell holding an axis' absolute position, for the step generator.
    #[inline]
    pub fn position_cell(&self, axis: Axis) -> &AtomicI32 {
        &self.dda_position[axis.index()]
    }

    /// Whether a homing move is in progress on an axis.
    #[inline]
    pub fn is_homing(&self, axis: Axis) -> bool {
        self.axis_homing[axis.index()].load(Ordering::Acquire)
    }

    /// Mark a homing move as started or finished.
    #[inline]
    pub fn set_homing(&self, axis: Axis, homing: bool) {
        self.axis_homing[axis.index()].store(homing, Ordering::Release);
    }

    /// Motion descriptor of an axis.
    #[inline]
    pub fn dda(&self, axis: Axis) -> &AxisDda {
        &self.dda[axis.index()]
    }

    /// Step counter of an extruder.
    ///
    /// # Panics
    ///
    /// Panics if `extruder >= EXTRUDER_COUNT`.
    #[inline]
    pub fn e_steps(&self, extruder: usize) -> i16 {
        self.e_steps[extruder].load(Ordering::Acquire)
    }

    /// Add to an extruder step counter, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `extruder >= EXTRUDER_COUNT`.
    #[inline]
    pub fn add_e_steps(&self, extruder: usize, delta: i16) -> i16 {
        self.e_steps[extruder].fetch_add(delta, Ordering::AcqRel)
    }

    /// Planner enablement bitmask, bit per axis index.
    #[inline]
    pub fn axes_enabled(&self) -> u8 {
        self.axes_enabled.load(Ordering::Acquire)
    }

    /// Set or clear an axis in the planner enablement bitmask.
    pub fn set_axis_enabled(&self, axis: Axis, enabled: bool) {
        set_bit(&self.axes_enabled, axis, enabled);
    }

    /// Hardware enablement bitmask, bit per axis index.
    #[inline]
    pub fn axes_hardware_enabled(&self) -> u8 {
        self.axes_hardware_enabled.load(Ordering::Acquire)
    }

    /// Set or clear an axis in the hardware enablement bitmask.
    pub fn set_axis_hardware_enabled(&self, axis: Axis, enabled: bool) {
        set_bit(&self.axes_hardware_enabled, axis, enabled);
    }

    /// Clear homing and the motion descriptor of an axis.
    pub(crate) fn reset_motion(&self, axis: Axis) {
        self.axis_homing[axis.index()].store(false, Ordering::Relaxed);
        self.dda[axis.index()].reset(axis);
    }

    /// Zero every extruder step counter.
    pub(crate) fn clear_e_steps(&self) {
        for counter in &self.e_steps {
            counter.store(0, Ordering::Release);
        }
    }

    /// Clear both enablement bitmasks.
    pub(crate) fn clear_enabled(&self) {
        self.axes_enabled.store(0, Ordering::Release);
        self.axes_hardware_enabled.store(0, Ordering::Release);
    }
}

impl Default for MotionContext {
    fn default() -> Self {
        Self::new()
    }
}

fn set_bit(mask: &AtomicU8, axis: Axis, enabled: bool) {
    if enabled {
        mask.fetch_or(axis.mask(), Ordering::AcqRel);
    } else {
        mask.fetch_and(!axis.mask(), Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MOTION: MotionContext = MotionContext::new();

    #[test]
    fn test_usable_as_static() {
        MOTION.set_position(Axis::Y, 12);
        assert_eq!(MOTION.position(Axis::Y), 12);
    }

    #[test]
    fn test_enable_bits() {
        let motion = MotionContext::new();
        motion.set_axis_enabled(Axis::X, true);
        motion.set_axis_enabled(Axis::Z, true);
        assert_eq!(motion.axes_enabled(), 0b0000_0101);

        motion.set_axis_enabled(Axis::X, false);
        assert_eq!(motion.axes_enabled(), 0b0000_0100);

        motion.set_axis_hardware_enabled(Axis::B, true);
        assert_eq!(motion.axes_hardware_enabled(), 0b0001_0000);

        motion.clear_enabled();
        assert_eq!(motion.axes_enabled(), 0);
        assert_eq!(motion.axes_hardware_enabled(), 0);
    }

    #[test]
    fn test_e_steps() {
        let motion = MotionContext::new();
        assert_eq!(motion.add_e_steps(1, 5), 0);
        assert_eq!(motion.add_e_steps(1, -2), 5);
        assert_eq!(motion.e_steps(1), 3);

        motion.clear_e_steps();
        assert_eq!(motion.e_steps(1), 0);
    }

    #[test]
    fn test_reset_motion_keeps_position() {
        let motion = MotionContext::new();
        motion.set_position(Axis::Z, 1234);
        motion.set_homing(Axis::Z, true);
        motion.dda(Axis::Z).steps.store(50, Ordering::Relaxed);

        motion.reset_motion(Axis::Z);
        assert!(!motion.is_homing(Axis::Z));
        assert_eq!(motion.dda(Axis::Z).snapshot().steps, 0);
        assert_eq!(motion.position(Axis::Z), 1234);
    }
}
