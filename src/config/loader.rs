//! Board configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::BoardConfig;

/// Load a board configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_axes::config::load_board_config;
///
/// let board = load_board_config("replicator.toml")?;
/// ```
pub fn load_board_config<P: AsRef<Path>>(path: P) -> Result<BoardConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_board_config(&content)
}

/// Parse a board configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_board_config(content: &str) -> Result<BoardConfig> {
    let config: BoardConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_board_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Axis, ZHome};
    use crate::port::Signal;

    const BOARD: &str = r#"
name = "Bench"
z_home = "max"

[axes.x]
steps_per_mm = 88.0
max_feedrate_mm_per_min = 18000
length_mm = 200
ports = { step = 0, dir = 1, enable = 2, min = 3 }

[axes.y]
steps_per_mm = 88.0
max_feedrate_mm_per_min = 18000
length_mm = 200
ports = { step = 4, dir = 5, enable = 6, max = 7 }

[axes.z]
steps_per_mm = 400.0
max_feedrate_mm_per_min = 1170
length_mm = 150
ports = { step = 8, dir = 9, enable = 10 }

[axes.a]
steps_per_mm = 96.0
max_feedrate_mm_per_min = 1600
length_mm = 100000
ports = { step = 11, dir = 12, enable = 13 }

[axes.b]
steps_per_mm = 96.0
max_feedrate_mm_per_min = 1600
length_mm = 100000
ports = { step = 14, dir = 15, enable = 16 }
"#;

    #[test]
    fn test_parse_board() {
        let board = parse_board_config(BOARD).unwrap();
        assert_eq!(board.name.as_str(), "Bench");
        assert_eq!(board.z_home, ZHome::Max);
        assert!(board.pstop.is_none());

        let x = board.axes.get(Axis::X);
        assert_eq!(x.ports.min, Signal::pin(3));
        assert!(x.ports.max.is_null());
        assert_eq!(board.axes.get(Axis::Z).steps_per_mm_scaled(), 400_000_000);
    }

    #[test]
    fn test_parse_rejects_invalid_board() {
        let bad = BOARD.replace("length_mm = 150", "length_mm = 0");
        assert!(matches!(
            parse_board_config(&bad),
            Err(Error::Config(ConfigError::InvalidAxisLength { axis: Axis::Z, .. }))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_board_config("axes = 3");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_board_config("/nonexistent/board.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
