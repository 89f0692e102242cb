//! Board configuration validation.

use heapless::FnvIndexSet;

use crate::error::{ConfigError, Error, Result};
use crate::port::{Line, Signal};

use super::axis::Axis;
use super::board::{AxisBoardConfig, BoardConfig};

/// Largest steps per mm whose ×10^6 fixed-point form fits the persisted `u32`.
const MAX_STEPS_PER_MM: f64 = u32::MAX as f64 / 1_000_000.0;

/// Validate a board configuration.
///
/// Checks:
/// - Default steps per mm, feedrate and length are positive
/// - Step, direction and enable lines are wired on every axis
/// - No signal is bound to more than one line
pub fn validate_board_config(config: &BoardConfig) -> Result<()> {
    for (axis, entry) in config.axes.iter() {
        validate_axis(axis, entry)?;
    }

    validate_signals(config)
}

fn validate_axis(axis: Axis, entry: &AxisBoardConfig) -> Result<()> {
    let steps_per_mm = entry.steps_per_mm;
    if !steps_per_mm.is_finite() || steps_per_mm <= 0.0 || steps_per_mm > MAX_STEPS_PER_MM {
        return Err(Error::Config(ConfigError::InvalidStepsPerMm {
            axis,
            value: steps_per_mm,
        }));
    }

    if entry.max_feedrate_mm_per_min == 0 {
        return Err(Error::Config(ConfigError::InvalidMaxFeedrate {
            axis,
            value: entry.max_feedrate_mm_per_min,
        }));
    }

    if entry.length_mm == 0 {
        return Err(Error::Config(ConfigError::InvalidAxisLength {
            axis,
            value: entry.length_mm,
        }));
    }

    for line in [Line::Step, Line::Dir, Line::Enable] {
        if entry.ports.line(line).is_null() {
            return Err(Error::Config(ConfigError::MissingSignal { axis, line }));
        }
    }

    Ok(())
}

fn validate_signals(config: &BoardConfig) -> Result<()> {
    let mut seen: FnvIndexSet<u8, 32> = FnvIndexSet::new();

    for (axis, entry) in config.axes.iter() {
        for (line, signal) in entry.ports.lines() {
            // The stop input shares the X minimum endstop line
            if axis == Axis::X && line == Line::Min && is_pstop(config, signal) {
                continue;
            }
            claim(&mut seen, signal)?;
        }
    }

    if let Some(pstop) = config.pstop {
        claim(&mut seen, pstop.signal)?;
    }

    Ok(())
}

fn is_pstop(config: &BoardConfig, signal: Signal) -> bool {
    config.pstop.map(|p| p.signal == signal).unwrap_or(false)
}

fn claim(seen: &mut FnvIndexSet<u8, 32>, signal: Signal) -> Result<()> {
    let Some(id) = signal.id() else {
        return Ok(());
    };
    match seen.insert(id) {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::Config(ConfigError::DuplicateSignal(id))),
        // More than 32 distinct lines: the rest go unchecked
        Err(_) => Ok(()),
    }
}
