//! [`PortIo`] over embedded-hal 1.0 output pins.

use embedded_hal::digital::OutputPin;

use super::{PortIo, Signal};

/// Port I/O backed by a bank of embedded-hal output pins.
///
/// Signal `n` drives `pins[n]`. embedded-hal pins carry their direction in their type, so
/// [`PortIo::set_direction`] configures nothing. Endstop inputs (whose bias is chosen when the
/// HAL pin is constructed) must be numbered past the end of the bank; debug builds assert this
/// when a signal is set as input. Writes to signals without a backing pin are ignored.
pub struct HalPorts<'a, PIN>
where
    PIN: OutputPin,
{
    pins: &'a mut [PIN],
}

impl<'a, PIN> HalPorts<'a, PIN>
where
    PIN: OutputPin,
{
    /// Wrap a pin bank.
    pub fn new(pins: &'a mut [PIN]) -> Self {
        Self { pins }
    }

    /// Number of backing pins.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Whether the bank has no pins.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

impl<PIN> PortIo for HalPorts<'_, PIN>
where
    PIN: OutputPin,
{
    fn set_direction(&mut self, signal: Signal, output: bool) {
        trace!("set_direction {} output={}", signal, output);
        // Inputs must live past the end of the bank or their pull-up writes hit an output
        debug_assert!(
            output || signal.id().map_or(true, |id| id as usize >= self.pins.len()),
            "input {:?} is backed by an output pin",
            signal
        );
    }

    fn write(&mut self, signal: Signal, high: bool) {
        let Some(pin) = signal.id().and_then(|id| self.pins.get_mut(id as usize)) else {
            return;
        };
        let result = if high { pin.set_high() } else { pin.set_low() };
        if result.is_err() {
            warn!("pin write failed on {}", signal);
        }
    }
}
