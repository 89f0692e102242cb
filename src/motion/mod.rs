//! Motion module for stepper-axes.
//!
//! Provides the motion state shared with the external step generator.

mod context;
mod dda;

pub use context::MotionContext;
pub use dda::{AxisDda, DdaSnapshot};
