//! Logical axis identifiers and their roles.

use core::fmt;

/// Number of stepper axes driven by the controller.
pub const AXIS_COUNT: usize = 5;

/// Number of extruder step counters.
pub const EXTRUDER_COUNT: usize = 2;

/// A logical stepper axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Axis {
    /// X gantry axis.
    X = 0,
    /// Y gantry axis.
    Y = 1,
    /// Z (build platform) axis.
    Z = 2,
    /// First extruder axis.
    A = 3,
    /// Second extruder axis.
    B = 4,
}

/// How an axis' travel range is laid out around its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisRole {
    /// Travel is centered on the origin (X, Y).
    Centered,
    /// Travel starts at the origin and extends one way (Z).
    Floor,
    /// Extruder drive, bounded by a symmetric clamp (A, B).
    Extruder,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X, Axis::Y, Axis::Z, Axis::A, Axis::B];

    /// Index of this axis into per-axis tables and bitmasks.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up an axis from a raw index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            3 => Some(Axis::A),
            4 => Some(Axis::B),
            _ => None,
        }
    }

    /// Bit for this axis in inversion and enablement bitmasks.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// Role that governs how travel limits are derived.
    pub const fn role(self) -> AxisRole {
        match self {
            Axis::X | Axis::Y => AxisRole::Centered,
            Axis::Z => AxisRole::Floor,
            Axis::A | Axis::B => AxisRole::Extruder,
        }
    }

    /// Whether the step generator treats this axis as an extruder.
    #[inline]
    pub const fn is_extruder(self) -> bool {
        matches!(self.role(), AxisRole::Extruder)
    }

    /// Single-letter name.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::A => "A",
            Axis::B => "B",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
