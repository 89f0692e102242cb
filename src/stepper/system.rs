//! Axis set facade: initialization, configuration records and conversions.

use crate::config::{Axis, BoardConfig, Calibration, TravelLimits, AXIS_COUNT};
use crate::motion::MotionContext;
use crate::port::{AxisPorts, PortBindingTable, PortIo, Signal};
use crate::storage::CalibrationStore;

use super::convert;
use super::record::AxisConfig;

/// The stepper axes of one machine.
///
/// Owns the board description, the port I/O capability and the per-axis configuration
/// records. Shared motion state lives in a [`MotionContext`] passed in by reference.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_axes::{Axis, BoardConfig, MotionContext, StepperAxes};
///
/// static MOTION: MotionContext = MotionContext::new();
///
/// let mut axes = StepperAxes::new(BoardConfig::replicator(), ports);
/// axes.initialize(true, &eeprom, &MOTION);
///
/// let steps = axes.mm_to_steps(12.5, Axis::X);
/// ```
pub struct StepperAxes<P>
where
    P: PortIo,
{
    /// Board variant, defaults and bindings.
    board: BoardConfig,
    /// Port bindings derived from the board.
    ports: PortBindingTable,
    /// Port I/O capability.
    io: P,
    /// Derived per-axis records.
    axes: [AxisConfig; AXIS_COUNT],
    /// Emergency stop enabled at the last hard reset.
    pstop_enabled: bool,
}

impl<P> StepperAxes<P>
where
    P: PortIo,
{
    /// Create the axis set. Records stay zeroed until the first hard reset.
    pub fn new(board: BoardConfig, io: P) -> Self {
        let ports = board.port_table();
        Self {
            board,
            ports,
            io,
            axes: [AxisConfig::default(); AXIS_COUNT],
            pstop_enabled: false,
        }
    }

    /// Initialize every axis.
    ///
    /// A hard reset reloads calibration from `store`, rebuilds the configuration records,
    /// configures the signal lines, zeroes absolute positions and clears homed flags and both
    /// enablement bitmasks. Any reset, hard or soft, clears homing flags, motion descriptors
    /// and extruder step counters. A soft reset leaves calibration, limits, positions and
    /// hardware untouched.
    pub fn initialize<S>(&mut self, hard_reset: bool, store: &S, motion: &MotionContext)
    where
        S: CalibrationStore,
    {
        info!("initializing axes (hard_reset={})", hard_reset);

        if hard_reset {
            let calibration = Calibration::load(store, &self.board);
            self.pstop_enabled = calibration.pstop_enabled;
            for axis in Axis::ALL {
                self.configure_axis(axis, &calibration);
            }
        }

        for axis in Axis::ALL {
            critical_section::with(|_| {
                if hard_reset {
                    motion.set_position(axis, 0);
                }
                motion.reset_motion(axis);
            });
        }

        if hard_reset {
            motion.clear_enabled();
            if let (true, Some(pstop)) = (self.pstop_enabled, self.board.pstop) {
                // Input with the pull-up off
                self.io.set_direction(pstop.signal, false);
                self.io.write(pstop.signal, false);
            }
        }

        motion.clear_e_steps();
    }

    fn configure_axis(&mut self, axis: Axis, calibration: &Calibration) {
        let cal = calibration.axis(axis);
        let limits = TravelLimits::derive(
            axis,
            cal.length_mm,
            cal.steps_per_mm,
            cal.home_position_steps,
            self.board.z_home,
        );
        let record = AxisConfig::new(cal, limits, calibration.inversion.polarity(axis));
        self.axes[axis.index()] = record;

        debug!(
            "axis {}: {} steps/mm, limits [{}, {}], min interval {}us",
            axis, record.steps_per_mm, limits.min_steps, limits.max_steps, record.min_step_interval
        );

        let ports = self.effective_ports(axis);
        let io = &mut self.io;

        io.set_direction(ports.dir, true);
        io.set_direction(ports.step, true);

        // Enable is active low: park it high before it becomes an output
        io.write(ports.enable, true);
        io.set_direction(ports.enable, true);

        // Pull-ups keep inverted endstops from triggering
        for endstop in [ports.max, ports.min] {
            if !io.is_null(endstop) {
                io.set_direction(endstop, false);
                io.write(endstop, record.invert_endstop);
            }
        }
    }

    /// Bindings actually driven for an axis. With the emergency stop enabled the X minimum
    /// line belongs to the stop input.
    pub fn effective_ports(&self, axis: Axis) -> AxisPorts {
        let mut ports = *self.ports.get(axis);
        if axis == Axis::X && self.pstop_enabled {
            ports.min = Signal::NULL;
        }
        ports
    }

    /// Drive an axis' enable line and record it in the hardware enablement bitmask.
    pub fn set_axis_enabled(&mut self, axis: Axis, enabled: bool, motion: &MotionContext) {
        let enable = self.ports.get(axis).enable;
        critical_section::with(|_| {
            self.io.write(enable, !enabled);
            motion.set_axis_hardware_enabled(axis, enabled);
        });
    }

    /// Steps per millimeter of an axis.
    #[inline]
    pub fn steps_per_mm(&self, axis: Axis) -> f32 {
        self.axes[axis.index()].steps_per_mm
    }

    /// Convert a step count on an axis to millimeters.
    #[inline]
    pub fn steps_to_mm(&self, steps: i32, axis: Axis) -> f32 {
        convert::steps_to_mm(steps, self.steps_per_mm(axis))
    }

    /// Convert millimeters on an axis to a step count, truncating at 1/1000 mm.
    #[inline]
    pub fn mm_to_steps(&self, mm: f32, axis: Axis) -> i32 {
        convert::mm_to_steps(mm, self.steps_per_mm(axis))
    }

    /// Configuration record of an axis.
    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        &self.axes[axis.index()]
    }

    /// Travel limits of an axis.
    #[inline]
    pub fn limits(&self, axis: Axis) -> TravelLimits {
        self.axes[axis.index()].limits
    }

    /// Record whether an axis has been homed.
    pub fn mark_homed(&mut self, axis: Axis, homed: bool) {
        self.axes[axis.index()].has_homed = homed;
    }

    /// Record whether an axis position is defined.
    pub fn mark_position_defined(&mut self, axis: Axis, defined: bool) {
        self.axes[axis.index()].has_defined_position = defined;
    }

    /// Whether the emergency stop was enabled at the last hard reset.
    #[inline]
    pub fn pstop_enabled(&self) -> bool {
        self.pstop_enabled
    }

    /// Board description.
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Port binding table.
    pub fn port_table(&self) -> &PortBindingTable {
        &self.ports
    }

    /// Port I/O capability.
    pub fn io(&self) -> &P {
        &self.io
    }

    /// Release the port I/O capability.
    pub fn release(self) -> P {
        self.io
    }
}
