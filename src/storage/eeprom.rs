//! In-memory calibration image.

use crate::error::StorageError;

use super::{offsets, CalibrationStore};

/// Value of an erased storage cell.
const ERASED: u8 = 0xFF;

/// A byte image of calibration storage.
///
/// Cells start erased (`0xFF`). An 8-bit read of an erased cell, or a 32-bit read whose four
/// cells are all erased, returns the caller default. Words are little-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EepromImage<const N: usize = { offsets::END as usize }> {
    bytes: [u8; N],
}

impl<const N: usize> Default for EepromImage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EepromImage<N> {
    /// Create a fully erased image.
    pub const fn new() -> Self {
        Self { bytes: [ERASED; N] }
    }

    /// Wrap an existing image, e.g. one read back from a device.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Raw image contents.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Erase every cell.
    pub fn erase(&mut self) {
        self.bytes = [ERASED; N];
    }

    /// Write an 8-bit value.
    pub fn write_u8(&mut self, offset: u16, value: u8) -> Result<(), StorageError> {
        let cell = self
            .bytes
            .get_mut(offset as usize)
            .ok_or(StorageError::OutOfRange { offset, width: 1 })?;
        *cell = value;
        Ok(())
    }

    /// Write a 32-bit value.
    pub fn write_u32(&mut self, offset: u16, value: u32) -> Result<(), StorageError> {
        let start = offset as usize;
        let cells = self
            .bytes
            .get_mut(start..start + 4)
            .ok_or(StorageError::OutOfRange { offset, width: 4 })?;
        cells.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Write a signed 32-bit value.
    pub fn write_i32(&mut self, offset: u16, value: i32) -> Result<(), StorageError> {
        self.write_u32(offset, value as u32)
    }
}

impl<const N: usize> CalibrationStore for EepromImage<N> {
    fn read_u8(&self, offset: u16, default: u8) -> u8 {
        match self.bytes.get(offset as usize) {
            Some(&value) if value != ERASED => value,
            _ => default,
        }
    }

    fn read_u32(&self, offset: u16, default: u32) -> u32 {
        let start = offset as usize;
        match self.bytes.get(start..start + 4) {
            Some(cells) if cells.iter().any(|&b| b != ERASED) => {
                u32::from_le_bytes([cells[0], cells[1], cells[2], cells[3]])
            }
            _ => default,
        }
    }
}
