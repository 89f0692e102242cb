//! Unit types for physical quantities.
//!
//! Provides type-safe representations of linear distance, feedrate and motor
//! steps to prevent unit confusion at compile time.

use core::ops::{Add, Mul, Neg, Sub};

use serde::Deserialize;

use crate::stepper::convert;

/// Linear distance in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Millimeters(pub f32);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Add for Millimeters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Millimeters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Linear velocity in millimeters per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct MillimetersPerSec(pub f32);

impl MillimetersPerSec {
    /// Create a new MillimetersPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Create from a per-minute rate.
    #[inline]
    pub fn from_per_minute(mm_per_min: f32) -> Self {
        Self(mm_per_min / 60.0)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Mul<f32> for MillimetersPerSec {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Axis position in steps, the width shared with the step generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i32);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Get absolute value as u32.
    #[inline]
    pub fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Convert to millimeters using a steps-per-mm ratio.
    #[inline]
    pub fn to_mm(self, steps_per_mm: f32) -> Millimeters {
        Millimeters(convert::steps_to_mm(self.0, steps_per_mm))
    }

    /// Create from millimeters using a steps-per-mm ratio.
    ///
    /// Truncates at 1/1000 mm and again at the final division, see [`convert::mm_to_steps`].
    #[inline]
    pub fn from_mm(mm: Millimeters, steps_per_mm: f32) -> Self {
        Self(convert::mm_to_steps(mm.0, steps_per_mm))
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Millimeters.
    fn mm(self) -> Millimeters;
    /// Convert to MillimetersPerSec.
    fn mm_per_sec(self) -> MillimetersPerSec;
}

impl UnitExt for f32 {
    #[inline]
    fn mm(self) -> Millimeters {
        Millimeters(self)
    }

    #[inline]
    fn mm_per_sec(self) -> MillimetersPerSec {
        MillimetersPerSec(self)
    }
}
