//! Persisted calibration source.
//!
//! Calibration lives in a small byte-addressed store (EEPROM on most boards). Values are read
//! by offset with a declared width and a caller-supplied default; a value that was never
//! written reads back as the default. Read failures are masked the same way.

mod eeprom;
pub mod offsets;

pub use eeprom::EepromImage;

/// Read access to persisted calibration values.
pub trait CalibrationStore {
    /// Read an 8-bit value, or `default` when it is unset.
    fn read_u8(&self, offset: u16, default: u8) -> u8;

    /// Read a 32-bit value, or `default` when it is unset.
    fn read_u32(&self, offset: u16, default: u32) -> u32;
}

impl<T: CalibrationStore + ?Sized> CalibrationStore for &T {
    fn read_u8(&self, offset: u16, default: u8) -> u8 {
        (**self).read_u8(offset, default)
    }

    fn read_u32(&self, offset: u16, default: u32) -> u32 {
        (**self).read_u32(offset, default)
    }
}
