//! Unit tests for board description parsing and validation.

use stepper_axes::config::{parse_board_config, validate_board_config, Axis, BoardConfig, ZHome};
use stepper_axes::error::{ConfigError, Error};
use stepper_axes::port::{Line, Signal};

const BOARD: &str = r#"
name = "Replicator"

[pstop]
signal = 3

[axes.x]
steps_per_mm = 88.573186
max_feedrate_mm_per_min = 18000
length_mm = 285
ports = { step = 0, dir = 1, enable = 2, min = 3, max = 4 }

[axes.y]
steps_per_mm = 88.573186
max_feedrate_mm_per_min = 18000
length_mm = 152
ports = { step = 5, dir = 6, enable = 7, min = 8, max = 9 }

[axes.z]
steps_per_mm = 400.0
max_feedrate_mm_per_min = 1170
length_mm = 155
ports = { step = 10, dir = 11, enable = 12, min = 13, max = 14 }

[axes.a]
steps_per_mm = 96.275202
max_feedrate_mm_per_min = 1600
length_mm = 100000
ports = { step = 15, dir = 16, enable = 17 }

[axes.b]
steps_per_mm = 96.275202
max_feedrate_mm_per_min = 1600
length_mm = 100000
ports = { step = 18, dir = 19, enable = 20 }
"#;

/// A full board with an emergency stop parses and defaults to min homing.
#[test]
fn test_board_with_pstop_parses() {
    let board = parse_board_config(BOARD).expect("Failed to parse board");

    assert_eq!(board.name.as_str(), "Replicator");
    assert_eq!(board.z_home, ZHome::Min);
    assert_eq!(board.pstop.map(|p| p.signal), Some(Signal::pin(3)));
    assert_eq!(board.axes.get(Axis::X).steps_per_mm_scaled(), 88_573_186);
    assert!(board.axes.get(Axis::A).ports.min.is_null());
}

/// The parsed board matches the compiled Replicator description.
#[test]
fn test_board_matches_compiled_defaults() {
    let parsed = parse_board_config(BOARD).expect("Failed to parse board");
    let compiled = BoardConfig::replicator().with_pstop(Signal::pin(3));

    for axis in Axis::ALL {
        let (p, c) = (parsed.axes.get(axis), compiled.axes.get(axis));
        assert_eq!(p.steps_per_mm_scaled(), c.steps_per_mm_scaled(), "axis {axis}");
        assert_eq!(p.max_feedrate_mm_per_min, c.max_feedrate_mm_per_min, "axis {axis}");
        assert_eq!(p.length_mm, c.length_mm, "axis {axis}");
        assert_eq!(p.ports, c.ports, "axis {axis}");
    }
}

#[test]
fn test_z_home_max() {
    let toml_str = format!("z_home = \"max\"\n{BOARD}");
    let board = parse_board_config(&toml_str).expect("Failed to parse board");
    assert_eq!(board.z_home, ZHome::Max);
}

#[test]
fn test_unknown_z_home_is_parse_error() {
    let toml_str = format!("z_home = \"middle\"\n{BOARD}");
    assert!(matches!(
        parse_board_config(&toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

#[test]
fn test_zero_steps_per_mm_rejected() {
    let toml_str = BOARD.replace("steps_per_mm = 400.0", "steps_per_mm = 0.0");
    assert!(matches!(
        parse_board_config(&toml_str),
        Err(Error::Config(ConfigError::InvalidStepsPerMm { axis: Axis::Z, .. }))
    ));
}

#[test]
fn test_zero_feedrate_rejected() {
    let toml_str = BOARD.replace("max_feedrate_mm_per_min = 1170", "max_feedrate_mm_per_min = 0");
    assert!(matches!(
        parse_board_config(&toml_str),
        Err(Error::Config(ConfigError::InvalidMaxFeedrate { axis: Axis::Z, value: 0 }))
    ));
}

#[test]
fn test_duplicate_signal_rejected() {
    let toml_str = BOARD.replace("enable = 20", "enable = 12");
    assert!(matches!(
        parse_board_config(&toml_str),
        Err(Error::Config(ConfigError::DuplicateSignal(12)))
    ));
}

/// The stop input may share the X minimum line but nothing else.
#[test]
fn test_pstop_signal_sharing() {
    let shared = BoardConfig::replicator().with_pstop(Signal::pin(3));
    assert!(validate_board_config(&shared).is_ok());

    let clash = BoardConfig::replicator().with_pstop(Signal::pin(8));
    assert!(matches!(
        validate_board_config(&clash),
        Err(Error::Config(ConfigError::DuplicateSignal(8)))
    ));
}

#[test]
fn test_missing_step_line_rejected() {
    let mut board = BoardConfig::replicator();
    board.axes.y.ports.step = Signal::NULL;

    assert!(matches!(
        validate_board_config(&board),
        Err(Error::Config(ConfigError::MissingSignal { axis: Axis::Y, line: Line::Step }))
    ));
}
