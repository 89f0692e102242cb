//! Per-axis motion descriptor consumed by the step generator.

use core::sync::atomic::{AtomicBool, AtomicI32, AtomicI8, Ordering};

use crate::config::Axis;

/// Motion descriptor of one axis (the DDA the step generator walks).
///
/// Every field is a single word so the step interrupt never observes a torn value.
/// Writers that must update several fields together do so with the interrupt masked.
#[derive(Debug)]
pub struct AxisDda {
    /// Axis is driven as an extruder.
    pub e_axis: AtomicBool,
    /// Bresenham accumulator.
    pub counter: AtomicI32,
    /// Step sign, `1` or `-1`.
    pub direction: AtomicI8,
    /// Level last written to the direction line.
    pub stepper_dir: AtomicBool,
    /// Axis is the master (longest) axis of the current move.
    pub master: AtomicBool,
    /// Step count of the master axis of the current move.
    pub master_steps: AtomicI32,
    /// Steps already issued in the current move.
    pub steps_completed: AtomicI32,
    /// Steps to issue in the current move.
    pub steps: AtomicI32,
}

/// Plain copy of an [`AxisDda`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DdaSnapshot {
    /// Axis is driven as an extruder.
    pub e_axis: bool,
    /// Bresenham accumulator.
    pub counter: i32,
    /// Step sign.
    pub direction: i8,
    /// Level last written to the direction line.
    pub stepper_dir: bool,
    /// Master axis flag.
    pub master: bool,
    /// Master axis step count.
    pub master_steps: i32,
    /// Steps already issued.
    pub steps_completed: i32,
    /// Steps to issue.
    pub steps: i32,
}

impl AxisDda {
    /// A cleared descriptor.
    pub const fn new() -> Self {
        Self {
            e_axis: AtomicBool::new(false),
            counter: AtomicI32::new(0),
            direction: AtomicI8::new(1),
            stepper_dir: AtomicBool::new(false),
            master: AtomicBool::new(false),
            master_steps: AtomicI32::new(0),
            steps_completed: AtomicI32::new(0),
            steps: AtomicI32::new(0),
        }
    }

    /// Return the descriptor to its idle state for `axis`.
    pub(crate) fn reset(&self, axis: Axis) {
        self.e_axis.store(axis.is_extruder(), Ordering::Relaxed);
        self.counter.store(0, Ordering::Relaxed);
        self.direction.store(1, Ordering::Relaxed);
        self.stepper_dir.store(false, Ordering::Relaxed);
        self.master.store(false, Ordering::Relaxed);
        self.master_steps.store(0, Ordering::Relaxed);
        self.steps_completed.store(0, Ordering::Relaxed);
        self.steps.store(0, Ordering::Release);
    }

    /// Copy the current field values.
    pub fn snapshot(&self) -> DdaSnapshot {
        DdaSnapshot {
            e_axis: self.e_axis.load(Ordering::Relaxed),
            counter: self.counter.load(Ordering::Relaxed),
            direction: self.direction.load(Ordering::Relaxed),
            stepper_dir: self.stepper_dir.load(Ordering::Relaxed),
            master: self.master.load(Ordering::Relaxed),
            master_steps: self.master_steps.load(Ordering::Relaxed),
            steps_completed: self.steps_completed.load(Ordering::Relaxed),
            steps: self.steps.load(Ordering::Acquire),
        }
    }
}

impl Default for AxisDda {
    fn default() -> Self {
        Self::new()
    }
}
