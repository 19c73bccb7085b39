//! Serial Command Tests
//!
//! Tests for the chunk parser, the mode-aware interpreter and the
//! reply formatter.

use tonegate_firmware::command::{
    parse_chunk, Command, CommandAction, CommandConsole, CommandReply, EditMode,
};
use tonegate_firmware::types::{ClockDivider, FrequencyStep, GateChannel};

// ============================================================================
// Chunk parser
// ============================================================================

#[test]
fn test_parse_sentinel() {
    assert_eq!(parse_chunk(b"!"), Command::ToggleMode);
}

#[test]
fn test_parse_sentinel_only_checked_in_first_byte() {
    // Trailing bytes after the sentinel are ignored
    assert_eq!(parse_chunk(b"!1234"), Command::ToggleMode);
    // A sentinel later in the chunk does not toggle
    assert_eq!(parse_chunk(b"12!4"), Command::Invalid);
}

#[test]
fn test_parse_decimal_value() {
    assert_eq!(parse_chunk(b"1000"), Command::Value(1000));
    assert_eq!(parse_chunk(b"0"), Command::Value(0));
}

#[test]
fn test_parse_range_limits() {
    assert_eq!(parse_chunk(b"65536"), Command::Value(65536));
    assert_eq!(parse_chunk(b"65537"), Command::Invalid);
    assert_eq!(parse_chunk(b"-1"), Command::Invalid);
    assert_eq!(parse_chunk(b"99999999999"), Command::Invalid);
}

#[test]
fn test_parse_trims_line_endings() {
    assert_eq!(parse_chunk(b"42\r\n"), Command::Value(42));
    assert_eq!(parse_chunk(b" 7 "), Command::Value(7));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse_chunk(b"abc"), Command::Invalid);
    assert_eq!(parse_chunk(b"12a"), Command::Invalid);
    assert_eq!(parse_chunk(b""), Command::Invalid);
    assert_eq!(parse_chunk(&[0xFF, 0xFE]), Command::Invalid);
}

// ============================================================================
// Edit mode
// ============================================================================

#[test]
fn test_mode_default_is_frequency() {
    assert_eq!(EditMode::default(), EditMode::Frequency);
}

#[test]
fn test_mode_toggle_round_trips() {
    let mode = EditMode::Frequency;
    assert_eq!(mode.toggle(), EditMode::Interval);
    assert_eq!(mode.toggle().toggle(), mode);
}

// ============================================================================
// Interpreter
// ============================================================================

#[test]
fn test_console_starts_in_frequency_mode() {
    let console = CommandConsole::new();
    assert_eq!(console.mode(), EditMode::Frequency);
}

#[test]
fn test_interpret_value_in_frequency_mode() {
    let mut console = CommandConsole::new();
    let action = console.interpret(b"500");
    match action {
        CommandAction::SetFrequencyStep(step) => assert_eq!(step.as_raw(), 500),
        _ => panic!("Expected SetFrequencyStep action"),
    }
}

#[test]
fn test_interpret_value_in_interval_mode() {
    let mut console = CommandConsole::new();
    assert_eq!(
        console.interpret(b"!"),
        CommandAction::ModeChanged(EditMode::Interval)
    );
    assert_eq!(
        console.interpret(b"1000"),
        CommandAction::SetGateInterval {
            channel: GateChannel::B,
            interval_ms: 1000,
        }
    );
}

#[test]
fn test_sentinel_toggles_exactly_once_per_chunk() {
    let mut console = CommandConsole::new();
    console.interpret(b"!");
    assert_eq!(console.mode(), EditMode::Interval);
    console.interpret(b"!");
    assert_eq!(console.mode(), EditMode::Frequency);
}

#[test]
fn test_rejected_input_leaves_mode_unchanged() {
    let mut console = CommandConsole::new();
    assert_eq!(console.interpret(b"nonsense"), CommandAction::Rejected);
    assert_eq!(console.mode(), EditMode::Frequency);

    console.interpret(b"!");
    assert_eq!(console.interpret(b"70000"), CommandAction::Rejected);
    assert_eq!(console.mode(), EditMode::Interval);
}

#[test]
fn test_boundary_values_accepted_in_frequency_mode() {
    let mut console = CommandConsole::new();
    assert!(matches!(
        console.interpret(b"0"),
        CommandAction::SetFrequencyStep(_)
    ));
    assert!(matches!(
        console.interpret(b"65536"),
        CommandAction::SetFrequencyStep(_)
    ));
}

// ============================================================================
// Reply formatter
// ============================================================================

#[test]
fn test_reply_mode_announcements() {
    let mut reply = CommandReply::new();
    reply.mode(EditMode::Frequency);
    assert_eq!(reply.as_str(), "Frequency change\r\n");
    reply.mode(EditMode::Interval);
    assert_eq!(reply.as_str(), "Time interval change\r\n");
}

#[test]
fn test_reply_frequency_uses_wave_clock_formula() {
    let mut reply = CommandReply::new();
    let step = FrequencyStep::from_raw(65536).unwrap();
    let div = ClockDivider::from_raw(0).unwrap();
    reply.frequency(step, div);
    // Full step at an undivided 8.5 MHz wave clock
    assert_eq!(reply.as_str(), "New frequency: 8500000.00 Hz\r\n");
}

#[test]
fn test_reply_frequency_zero_step() {
    let mut reply = CommandReply::new();
    let step = FrequencyStep::from_raw(0).unwrap();
    let div = ClockDivider::from_raw(0).unwrap();
    reply.frequency(step, div);
    assert_eq!(reply.as_str(), "New frequency: 0.00 Hz\r\n");
}

#[test]
fn test_reply_interval() {
    let mut reply = CommandReply::new();
    reply.interval(1000);
    assert_eq!(reply.as_str(), "New interval: 1000 ms\r\n");
}

#[test]
fn test_reply_invalid() {
    let mut reply = CommandReply::new();
    reply.invalid();
    assert_eq!(reply.as_str(), "Input number is invalid.\r\n");
}

#[test]
fn test_reply_clear() {
    let mut reply = CommandReply::new();
    reply.invalid();
    assert!(!reply.as_str().is_empty());
    reply.clear();
    assert!(reply.as_str().is_empty());
    assert_eq!(reply.as_bytes(), b"");
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_interval_edit_round_trip() {
    // "!" then "1000": re-initialize gate channel B to 1000 ms
    let mut console = CommandConsole::new();
    let mut reply = CommandReply::new();

    match console.interpret(b"!") {
        CommandAction::ModeChanged(mode) => reply.mode(mode),
        other => panic!("Expected mode change, got {other:?}"),
    }
    assert_eq!(reply.as_str(), "Time interval change\r\n");

    match console.interpret(b"1000") {
        CommandAction::SetGateInterval {
            channel,
            interval_ms,
        } => {
            assert_eq!(channel, GateChannel::B);
            assert_eq!(interval_ms, 1000);
            reply.interval(interval_ms);
        }
        other => panic!("Expected gate interval, got {other:?}"),
    }
    assert_eq!(reply.as_str(), "New interval: 1000 ms\r\n");
}
