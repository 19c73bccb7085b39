//! Shared tunable waveform parameters
//!
//! One statically allocated parameter block shared by the console and the
//! refresh task. There is no lock: every field has exactly one writer (the
//! console owns `frequency_step`; the remaining fields are set at startup)
//! and readers tolerate transient staleness, so all accesses are relaxed
//! atomics. The refresh task re-applies the whole set periodically, so a
//! torn read of *different* fields lasts at most one refresh cycle.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use crate::config::{
    DEFAULT_CLOCK_DIVIDER, DEFAULT_FREQUENCY_STEP, DEFAULT_INVERT, DEFAULT_OFFSET, DEFAULT_SCALE,
};
use crate::types::{ClockDivider, FrequencyStep, InvertMode, ScaleMode};

/// Shared parameter block for the waveform unit
pub struct ToneParams {
    /// Frequency step; written by the command task
    frequency_step: AtomicU32,
    /// Wave clock divider field
    clock_divider: AtomicU8,
    /// Scale selector code
    scale: AtomicU8,
    /// DC offset added to the output code
    offset: AtomicU8,
    /// Invert pattern code
    invert: AtomicU8,
}

impl ToneParams {
    /// Create a parameter block with the configured defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frequency_step: AtomicU32::new(DEFAULT_FREQUENCY_STEP),
            clock_divider: AtomicU8::new(DEFAULT_CLOCK_DIVIDER),
            scale: AtomicU8::new(DEFAULT_SCALE.code()),
            offset: AtomicU8::new(DEFAULT_OFFSET),
            invert: AtomicU8::new(DEFAULT_INVERT.code()),
        }
    }

    /// Current frequency step
    #[must_use]
    pub fn frequency_step(&self) -> FrequencyStep {
        FrequencyStep::from_raw(self.frequency_step.load(Ordering::Relaxed))
            .unwrap_or(FrequencyStep::MAX)
    }

    /// Store a new frequency step (command task only)
    pub fn set_frequency_step(&self, step: FrequencyStep) {
        self.frequency_step.store(step.as_raw(), Ordering::Relaxed);
    }

    /// Current clock divider
    #[must_use]
    pub fn clock_divider(&self) -> ClockDivider {
        ClockDivider::from_raw(self.clock_divider.load(Ordering::Relaxed))
            .unwrap_or(ClockDivider::MAX)
    }

    /// Store a new clock divider
    pub fn set_clock_divider(&self, divider: ClockDivider) {
        self.clock_divider.store(divider.as_raw(), Ordering::Relaxed);
    }

    /// Current scale selector
    #[must_use]
    pub fn scale(&self) -> ScaleMode {
        ScaleMode::from_code(self.scale.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Store a new scale selector
    pub fn set_scale(&self, scale: ScaleMode) {
        self.scale.store(scale.code(), Ordering::Relaxed);
    }

    /// Current DC offset
    #[must_use]
    pub fn offset(&self) -> u8 {
        self.offset.load(Ordering::Relaxed)
    }

    /// Store a new DC offset
    pub fn set_offset(&self, offset: u8) {
        self.offset.store(offset, Ordering::Relaxed);
    }

    /// Current invert pattern
    #[must_use]
    pub fn invert(&self) -> InvertMode {
        InvertMode::from_code(self.invert.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Store a new invert pattern
    pub fn set_invert(&self, invert: InvertMode) {
        self.invert.store(invert.code(), Ordering::Relaxed);
    }

    /// Point-in-time copy of the whole set, taken field by field
    #[must_use]
    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            frequency_step: self.frequency_step(),
            clock_divider: self.clock_divider(),
            scale: self.scale(),
            offset: self.offset(),
            invert: self.invert(),
        }
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy of the parameter set handed to the refresh task
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSnapshot {
    /// Frequency step
    pub frequency_step: FrequencyStep,
    /// Wave clock divider
    pub clock_divider: ClockDivider,
    /// Scale selector
    pub scale: ScaleMode,
    /// DC offset
    pub offset: u8,
    /// Invert pattern
    pub invert: InvertMode,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ParamSnapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Params({}, {}, scale {}, offset {}, {})",
            self.frequency_step,
            self.clock_divider,
            self.scale,
            self.offset,
            self.invert
        );
    }
}
