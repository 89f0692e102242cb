//! Stepper module for stepper-axes.
//!
//! Provides the per-axis configuration records, axis initialization and the canonical
//! millimeter/step conversions.

pub mod convert;
mod record;
mod system;

pub use record::AxisConfig;
pub use system::StepperAxes;
