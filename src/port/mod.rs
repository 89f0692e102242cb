//! Port bindings and port I/O.
//!
//! Each axis is bound to step, direction and enable outputs plus optional minimum and maximum
//! endstop inputs. Initialization only ever touches hardware through [`PortIo`].

mod hal;

use core::fmt;

use serde::Deserialize;

use crate::config::{Axis, AXIS_COUNT};

pub use hal::HalPorts;

/// Identifier of a physical signal line, or the null signal for a line that is not wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Signal(Option<u8>);

impl Signal {
    /// A line that is not wired.
    pub const NULL: Signal = Signal(None);

    /// A wired line.
    #[inline]
    pub const fn pin(id: u8) -> Self {
        Self(Some(id))
    }

    /// Whether this is the null signal.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0.is_none()
    }

    /// Raw identifier, if wired.
    #[inline]
    pub const fn id(self) -> Option<u8> {
        self.0
    }
}

/// The role of a signal line within an axis binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Step pulse output.
    Step,
    /// Direction output.
    Dir,
    /// Driver enable output (active low).
    Enable,
    /// Minimum endstop input.
    Min,
    /// Maximum endstop input.
    Max,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Line::Step => "step",
            Line::Dir => "dir",
            Line::Enable => "enable",
            Line::Min => "min endstop",
            Line::Max => "max endstop",
        })
    }
}

/// Signal lines bound to one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisPorts {
    /// Step pulse output.
    pub step: Signal,
    /// Direction output.
    pub dir: Signal,
    /// Driver enable output (active low).
    pub enable: Signal,
    /// Minimum endstop input.
    #[serde(default)]
    pub min: Signal,
    /// Maximum endstop input.
    #[serde(default)]
    pub max: Signal,
}

impl AxisPorts {
    /// Bind the three outputs with no endstops.
    pub const fn outputs(step: u8, dir: u8, enable: u8) -> Self {
        Self {
            step: Signal::pin(step),
            dir: Signal::pin(dir),
            enable: Signal::pin(enable),
            min: Signal::NULL,
            max: Signal::NULL,
        }
    }

    /// Add endstop inputs.
    pub const fn with_endstops(mut self, min: Signal, max: Signal) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Signal bound to a line.
    pub const fn line(&self, line: Line) -> Signal {
        match line {
            Line::Step => self.step,
            Line::Dir => self.dir,
            Line::Enable => self.enable,
            Line::Min => self.min,
            Line::Max => self.max,
        }
    }

    /// Iterate over `(line, signal)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (Line, Signal)> + '_ {
        [Line::Step, Line::Dir, Line::Enable, Line::Min, Line::Max]
            .into_iter()
            .map(move |line| (line, self.line(line)))
    }
}

/// Board-time mapping from axis to its signal lines. Never mutated once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortBindingTable {
    ports: [AxisPorts; AXIS_COUNT],
}

impl PortBindingTable {
    /// Build a table from per-axis bindings in axis index order.
    pub const fn new(ports: [AxisPorts; AXIS_COUNT]) -> Self {
        Self { ports }
    }

    /// Bindings of one axis.
    #[inline]
    pub fn get(&self, axis: Axis) -> &AxisPorts {
        &self.ports[axis.index()]
    }

    /// Iterate over `(axis, ports)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &AxisPorts)> {
        Axis::ALL.into_iter().zip(self.ports.iter())
    }
}

/// Port I/O capability implemented per target platform.
///
/// Hardware configuration calls have no failure contract; implementations that can fail must
/// absorb the failure.
pub trait PortIo {
    /// Configure a signal as output (`true`) or input (`false`).
    fn set_direction(&mut self, signal: Signal, output: bool);

    /// Drive a signal. For inputs, `true` enables the pull-up.
    fn write(&mut self, signal: Signal, high: bool);

    /// Whether a signal is not wired.
    fn is_null(&self, signal: Signal) -> bool {
        signal.is_null()
    }
}

impl<T: PortIo + ?Sized> PortIo for &mut T {
    fn set_direction(&mut self, signal: Signal, output: bool) {
        (**self).set_direction(signal, output);
    }

    fn write(&mut self, signal: Signal, high: bool) {
        (**self).write(signal, high);
    }

    fn is_null(&self, signal: Signal) -> bool {
        (**self).is_null(signal)
    }
}
