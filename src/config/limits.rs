//! Axis travel limits in steps.

use super::axis::{Axis, AxisRole};
use super::board::ZHome;

/// Legal step range of an axis, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelLimits {
    /// Minimum position in steps.
    pub min_steps: i32,
    /// Maximum position in steps.
    pub max_steps: i32,
}

impl TravelLimits {
    /// Derive limits from the calibrated axis length.
    ///
    /// The length in steps is `round(length_mm * steps_per_mm)`, then laid out by role:
    /// - centered (X, Y): half the length either side of the origin
    /// - floor (Z): `0` up to `length - home_position_steps`, or up to `home_position_steps`
    ///   when homing at the maximum end
    /// - extruder (A, B): the full length either side of the origin
    pub fn derive(
        axis: Axis,
        length_mm: u32,
        steps_per_mm: f32,
        home_position_steps: i32,
        z_home: ZHome,
    ) -> Self {
        let length = libm::roundf(length_mm as f32 * steps_per_mm) as i32;

        match axis.role() {
            AxisRole::Centered => {
                let max_steps = length / 2;
                Self {
                    min_steps: -max_steps,
                    max_steps,
                }
            }
            AxisRole::Floor => {
                let max_steps = match z_home {
                    ZHome::Min => length.wrapping_sub(home_position_steps),
                    ZHome::Max => home_position_steps,
                };
                Self {
                    min_steps: 0,
                    max_steps,
                }
            }
            AxisRole::Extruder => Self {
                min_steps: -length,
                max_steps: length,
            },
        }
    }

    /// Check if a position is within limits.
    pub fn contains(&self, steps: i32) -> bool {
        steps >= self.min_steps && steps <= self.max_steps
    }

    /// Clamp a target position to the nearest limit.
    pub fn clamp(&self, steps: i32) -> i32 {
        if steps < self.min_steps {
            self.min_steps
        } else if steps > self.max_steps {
            self.max_steps
        } else {
            steps
        }
    }
}
