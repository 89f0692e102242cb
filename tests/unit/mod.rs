//! Unit test harness for stepper-axes.
//!
//! This module organizes unit tests for each component of the library.

mod board_parsing;
mod conversion_properties;
