//! # stepper-axes
//!
//! Axis configuration for multi-axis stepper-driven machines.
//!
//! ## Features
//!
//! - **Calibration from storage**: steps per mm, feedrates, lengths and polarity read from a
//!   persisted store, with compiled board defaults for anything unset
//! - **Travel limits**: legal step ranges derived per axis role (centered X/Y, floor-referenced Z,
//!   extruder A/B)
//! - **Canonical conversions**: millimeters to steps accurate to 1/1000 mm, steps to millimeters
//! - **Hard and soft resets**: soft resets keep calibration and absolute positions
//! - **Shared motion state**: atomic, `static`-friendly state for the step interrupt
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_axes::{Axis, BoardConfig, EepromImage, MotionContext, StepperAxes};
//!
//! static MOTION: MotionContext = MotionContext::new();
//!
//! let eeprom: EepromImage = read_eeprom();
//! let mut axes = StepperAxes::new(BoardConfig::replicator(), ports);
//! axes.initialize(true, &eeprom, &MOTION);
//!
//! let steps = axes.mm_to_steps(10.0, Axis::X);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML board descriptions
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod port;
pub mod stepper;
pub mod storage;

// Re-exports for ergonomic API
pub use config::{validate_board_config, Axis, BoardConfig, TravelLimits, ZHome};
#[cfg(feature = "std")]
pub use config::{load_board_config, parse_board_config};
pub use error::{Error, Result};
pub use motion::MotionContext;
pub use port::{PortIo, Signal};
pub use stepper::{AxisConfig, StepperAxes};
pub use storage::{CalibrationStore, EepromImage};
