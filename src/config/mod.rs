//! Configuration module for stepper-axes.
//!
//! Provides the axis set, board descriptions, calibration loading and travel-limit
//! derivation. Board descriptions can be built in code or loaded from TOML files (with
//! `std` feature).

mod axis;
mod board;
pub mod calibration;
mod limits;
#[cfg(feature = "std")]
mod loader;
pub mod units;
mod validation;

pub use axis::{Axis, AxisRole, AXIS_COUNT, EXTRUDER_COUNT};
pub use board::{AxisBoardConfig, AxisTable, BoardConfig, PstopConfig, ZHome};
pub use calibration::{AxisCalibration, AxisPolarity, Calibration, InversionFlags};
pub use limits::TravelLimits;
pub use validation::validate_board_config;

#[cfg(feature = "std")]
pub use loader::{load_board_config, parse_board_config};

// Re-export unit types at config level
pub use units::{Millimeters, MillimetersPerSec, Steps};
