//! Board description: variant flags, compiled calibration defaults and port bindings.

use heapless::String;
use serde::Deserialize;

use crate::port::{AxisPorts, PortBindingTable, Signal};

use super::axis::{Axis, AXIS_COUNT};
use super::units::MillimetersPerSec;

/// Which physical end of the Z axis the machine homes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum ZHome {
    /// Home at the minimum; travel is `length - home_position` steps.
    #[default]
    Min,
    /// Home at the maximum; travel is `home_position` steps.
    Max,
}

/// Emergency stop input support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PstopConfig {
    /// Stop input. Shares its line with the X minimum endstop.
    pub signal: Signal,
}

/// Per-axis compiled defaults and port bindings.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisBoardConfig {
    /// Default steps per mm, used when storage holds no value.
    pub steps_per_mm: f64,

    /// Default maximum feedrate in mm/min.
    pub max_feedrate_mm_per_min: u32,

    /// Default axis length in mm.
    pub length_mm: u32,

    /// Signal lines of this axis.
    pub ports: AxisPorts,
}

impl AxisBoardConfig {
    /// Default steps per mm in the persisted fixed-point form (×10^6).
    pub fn steps_per_mm_scaled(&self) -> u32 {
        libm::round(self.steps_per_mm * 1_000_000.0) as u32
    }

    /// Default maximum feedrate per second.
    pub fn max_feedrate(&self) -> MillimetersPerSec {
        MillimetersPerSec::from_per_minute(self.max_feedrate_mm_per_min as f32)
    }
}

/// Per-axis entries of a board, keyed by axis letter.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisTable {
    /// X axis.
    pub x: AxisBoardConfig,
    /// Y axis.
    pub y: AxisBoardConfig,
    /// Z axis.
    pub z: AxisBoardConfig,
    /// A (first extruder) axis.
    pub a: AxisBoardConfig,
    /// B (second extruder) axis.
    pub b: AxisBoardConfig,
}

impl AxisTable {
    /// Entry for an axis.
    pub fn get(&self, axis: Axis) -> &AxisBoardConfig {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
            Axis::A => &self.a,
            Axis::B => &self.b,
        }
    }

    /// Iterate over `(axis, entry)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &AxisBoardConfig)> {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }
}

/// Root board configuration.
///
/// Hardware variants are plain values resolved once at startup so one build can serve
/// several boards.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Human-readable board name (max 32 chars).
    #[serde(default)]
    pub name: String<32>,

    /// Z homing end.
    #[serde(default)]
    pub z_home: ZHome,

    /// Emergency stop support, if the board has the input.
    #[serde(default)]
    pub pstop: Option<PstopConfig>,

    /// Per-axis defaults and bindings.
    pub axes: AxisTable,
}

impl BoardConfig {
    /// Replicator-class board with the stock calibration defaults.
    pub fn replicator() -> Self {
        fn axis(
            steps_per_mm: f64,
            max_feedrate_mm_per_min: u32,
            length_mm: u32,
            ports: AxisPorts,
        ) -> AxisBoardConfig {
            AxisBoardConfig {
                steps_per_mm,
                max_feedrate_mm_per_min,
                length_mm,
                ports,
            }
        }

        Self {
            name: String::try_from("Replicator").unwrap_or_default(),
            z_home: ZHome::Min,
            pstop: None,
            axes: AxisTable {
                x: axis(
                    88.573186,
                    18000,
                    285,
                    AxisPorts::outputs(0, 1, 2).with_endstops(Signal::pin(3), Signal::pin(4)),
                ),
                y: axis(
                    88.573186,
                    18000,
                    152,
                    AxisPorts::outputs(5, 6, 7).with_endstops(Signal::pin(8), Signal::pin(9)),
                ),
                z: axis(
                    400.0,
                    1170,
                    155,
                    AxisPorts::outputs(10, 11, 12).with_endstops(Signal::pin(13), Signal::pin(14)),
                ),
                a: axis(96.275202, 1600, 100_000, AxisPorts::outputs(15, 16, 17)),
                b: axis(96.275202, 1600, 100_000, AxisPorts::outputs(18, 19, 20)),
            },
        }
    }

    /// Same board with the emergency stop input enabled on `signal`.
    pub fn with_pstop(mut self, signal: Signal) -> Self {
        self.pstop = Some(PstopConfig { signal });
        self
    }

    /// Same board homing Z at the given end.
    pub fn with_z_home(mut self, z_home: ZHome) -> Self {
        self.z_home = z_home;
        self
    }

    /// Port binding table in axis index order.
    pub fn port_table(&self) -> PortBindingTable {
        let mut ports = [AxisPorts::default(); AXIS_COUNT];
        for (axis, entry) in self.axes.iter() {
            ports[axis.index()] = entry.ports;
        }
        PortBindingTable::new(ports)
    }
}
