//! Shared Parameter Block Tests
//!
//! Tests for the atomic parameter block and its snapshot.

use tonegate_firmware::config::{DEFAULT_FREQUENCY_STEP, DEFAULT_OFFSET};
use tonegate_firmware::params::ToneParams;
use tonegate_firmware::types::{ClockDivider, FrequencyStep, InvertMode, ScaleMode};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_new_carries_configured_defaults() {
    let params = ToneParams::new();
    assert_eq!(params.frequency_step().as_raw(), DEFAULT_FREQUENCY_STEP);
    assert_eq!(params.clock_divider().as_raw(), 0);
    assert_eq!(params.scale(), ScaleMode::Half);
    assert_eq!(params.offset(), DEFAULT_OFFSET);
    assert_eq!(params.invert(), InvertMode::Msb);
}

#[test]
fn test_default_trait_matches_new() {
    let a = ToneParams::new();
    let b = ToneParams::default();
    assert_eq!(a.snapshot(), b.snapshot());
}

// ============================================================================
// Field round trips
// ============================================================================

#[test]
fn test_frequency_step_round_trip() {
    let params = ToneParams::new();
    let step = FrequencyStep::from_raw(1234).unwrap();
    params.set_frequency_step(step);
    assert_eq!(params.frequency_step(), step);
}

#[test]
fn test_clock_divider_round_trip() {
    let params = ToneParams::new();
    let div = ClockDivider::from_raw(5).unwrap();
    params.set_clock_divider(div);
    assert_eq!(params.clock_divider(), div);
}

#[test]
fn test_shaping_round_trips() {
    let params = ToneParams::new();
    params.set_scale(ScaleMode::Eighth);
    params.set_offset(42);
    params.set_invert(InvertMode::AllButMsb);
    assert_eq!(params.scale(), ScaleMode::Eighth);
    assert_eq!(params.offset(), 42);
    assert_eq!(params.invert(), InvertMode::AllButMsb);
}

#[test]
fn test_writes_do_not_disturb_other_fields() {
    let params = ToneParams::new();
    let before = params.snapshot();
    params.set_frequency_step(FrequencyStep::MAX);

    let after = params.snapshot();
    assert_eq!(after.frequency_step, FrequencyStep::MAX);
    assert_eq!(after.clock_divider, before.clock_divider);
    assert_eq!(after.scale, before.scale);
    assert_eq!(after.offset, before.offset);
    assert_eq!(after.invert, before.invert);
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn test_snapshot_is_a_detached_copy() {
    let params = ToneParams::new();
    let snapshot = params.snapshot();
    params.set_offset(200);
    params.set_scale(ScaleMode::Full);

    // The copy keeps the values from capture time
    assert_eq!(snapshot.offset, DEFAULT_OFFSET);
    assert_eq!(snapshot.scale, ScaleMode::Half);
}

#[test]
fn test_snapshot_reflects_all_fields() {
    let params = ToneParams::new();
    params.set_frequency_step(FrequencyStep::from_raw(999).unwrap());
    params.set_clock_divider(ClockDivider::from_raw(3).unwrap());
    params.set_scale(ScaleMode::Quarter);
    params.set_offset(7);
    params.set_invert(InvertMode::All);

    let snapshot = params.snapshot();
    assert_eq!(snapshot.frequency_step.as_raw(), 999);
    assert_eq!(snapshot.clock_divider.as_raw(), 3);
    assert_eq!(snapshot.scale, ScaleMode::Quarter);
    assert_eq!(snapshot.offset, 7);
    assert_eq!(snapshot.invert, InvertMode::All);
}
