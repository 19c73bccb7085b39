//! Cosine waveform synthesis
//!
//! Software rendition of a DAC cosine generator: a 32-bit phase
//! accumulator stepped at the DAC sample rate, shaped by the same scale,
//! offset and bit-invert controls the register-based generator exposed.
//! The module is portable and host-testable; only the `cos` source
//! differs between targets.

use core::f32::consts::PI;

#[cfg(feature = "embedded")]
use micromath::F32Ext;

use crate::config::{DAC_SAMPLE_RATE, DEFAULT_OFFSET};
use crate::types::{ClockDivider, FrequencyStep, InvertMode, ScaleMode};

/// Full phase turn of the 32-bit accumulator
const PHASE_SPAN: f32 = 4_294_967_296.0;

/// Cosine generator with scale, offset and invert shaping
///
/// Produces 8-bit offset-binary DAC codes. Shaping order matches the
/// hardware path: amplitude scale on the wave, then the DC offset added
/// to the code, then the invert mask applied to the code bits.
#[derive(Clone, Copy, Debug)]
pub struct CosineSynth {
    /// Phase accumulator
    phase: u32,
    /// Phase increment per DAC sample
    phase_inc: u32,
    /// Amplitude scale
    scale: ScaleMode,
    /// DC offset added to the output code (wrapping)
    offset: u8,
    /// Bit-invert pattern applied last
    invert: InvertMode,
}

impl CosineSynth {
    /// Create a silent generator (zero frequency, no shaping)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: 0,
            phase_inc: 0,
            scale: ScaleMode::Full,
            offset: DEFAULT_OFFSET,
            invert: InvertMode::None,
        }
    }

    /// Program the generator frequency from the divider and step
    ///
    /// Mirrors the hardware formula `clk / (1 + divider) * step / 65536`;
    /// the result is re-expressed as a per-sample phase increment at the
    /// DAC sample rate.
    pub fn set_frequency(&mut self, divider: ClockDivider, step: FrequencyStep) {
        let freq_hz = step.frequency_hz(divider);
        self.phase_inc = (freq_hz / DAC_SAMPLE_RATE as f32 * PHASE_SPAN) as u32;
    }

    /// Set the amplitude scale
    pub fn set_scale(&mut self, scale: ScaleMode) {
        self.scale = scale;
    }

    /// Set the DC offset added to the output code
    pub fn set_offset(&mut self, offset: u8) {
        self.offset = offset;
    }

    /// Set the bit-invert pattern
    pub fn set_invert(&mut self, invert: InvertMode) {
        self.invert = invert;
    }

    /// Current amplitude scale
    #[must_use]
    pub const fn scale(&self) -> ScaleMode {
        self.scale
    }

    /// Current DC offset
    #[must_use]
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Current invert pattern
    #[must_use]
    pub const fn invert(&self) -> InvertMode {
        self.invert
    }

    /// Next 8-bit DAC code
    pub fn next_sample(&mut self) -> u8 {
        let radians = (self.phase as f32 / PHASE_SPAN) * 2.0 * PI;
        self.phase = self.phase.wrapping_add(self.phase_inc);

        let wave = radians.cos() * self.scale.amplitude();
        let code = ((wave + 1.0) * 127.5) as u8;
        code.wrapping_add(self.offset) ^ self.invert.mask()
    }

    /// Reset the phase accumulator
    pub fn reset(&mut self) {
        self.phase = 0;
    }
}

impl Default for CosineSynth {
    fn default() -> Self {
        Self::new()
    }
}
