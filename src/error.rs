//! Error types for stepper-axes.
//!
//! Axis initialization itself never fails: missing or erased calibration falls back to
//! compiled defaults. Errors only surface at the edges, when a board description is loaded
//! or validated and when calibration values are written into a storage image.

use core::fmt;

use crate::config::Axis;
use crate::port::Line;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-axes operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Board configuration parsing or validation error
    Config(ConfigError),
    /// Calibration storage error
    Storage(StorageError),
}

/// Board configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Default steps per mm must be finite, > 0 and representable once scaled by 10^6
    InvalidStepsPerMm {
        /// Offending axis
        axis: Axis,
        /// Configured value
        value: f64,
    },
    /// Default max feedrate must be > 0
    InvalidMaxFeedrate {
        /// Offending axis
        axis: Axis,
        /// Configured value in mm/min
        value: u32,
    },
    /// Default axis length must be > 0
    InvalidAxisLength {
        /// Offending axis
        axis: Axis,
        /// Configured value in mm
        value: u32,
    },
    /// A driven signal line is not wired
    MissingSignal {
        /// Offending axis
        axis: Axis,
        /// Which line is missing
        line: Line,
    },
    /// The same signal is bound to more than one line
    DuplicateSignal(u8),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Calibration storage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Access falls outside the storage image
    OutOfRange {
        /// Byte offset of the access
        offset: u16,
        /// Access width in bytes
        width: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepsPerMm { axis, value } => {
                write!(f, "Invalid steps per mm on axis {}: {}. Must be > 0 and < 4294.96", axis, value)
            }
            ConfigError::InvalidMaxFeedrate { axis, value } => {
                write!(f, "Invalid max feedrate on axis {}: {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidAxisLength { axis, value } => {
                write!(f, "Invalid axis length on axis {}: {}. Must be > 0", axis, value)
            }
            ConfigError::MissingSignal { axis, line } => {
                write!(f, "Axis {} has no {} signal", axis, line)
            }
            ConfigError::DuplicateSignal(id) => write!(f, "Signal {} is bound more than once", id),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::OutOfRange { offset, width } => {
                write!(f, "{}-byte access at offset {:#06x} is out of range", width, offset)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}
