//! DAC Output Driver
//!
//! Drives the waveform through the STM32G474 DAC peripheral and hosts
//! the complete waveform output unit the tasks share.

use embassy_stm32::dac::{DacChannel, Value};

use crate::params::ParamSnapshot;
use crate::synth::CosineSynth;
use crate::types::{ClockDivider, FrequencyStep, InvertMode, ScaleMode};

/// Mid-scale output code (0V around the bias point)
const MIDSCALE: u8 = 0x80;

/// Gated DAC output channel
///
/// The gate acts at this seam: while disabled, sample writes are
/// discarded and the converter is switched off.
pub struct ToneDac<'d, T: embassy_stm32::dac::Instance> {
    channel: DacChannel<'d, T, 1>,
    enabled: bool,
}

impl<'d, T: embassy_stm32::dac::Instance> ToneDac<'d, T> {
    /// Wrap a configured DAC channel; starts disabled
    #[must_use]
    pub fn new(channel: DacChannel<'d, T, 1>) -> Self {
        Self {
            channel,
            enabled: false,
        }
    }

    /// Enable the converter output
    pub fn enable(&mut self) {
        self.channel.enable();
        self.enabled = true;
    }

    /// Disable the converter output, parking the code at mid-scale
    pub fn disable(&mut self) {
        self.channel.set(Value::Bit8(MIDSCALE));
        self.channel.disable();
        self.enabled = false;
    }

    /// Whether the output is currently enabled
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write one 8-bit code; discarded while the output is disabled
    pub fn write(&mut self, code: u8) {
        if self.enabled {
            self.channel.set(Value::Bit8(code));
        }
    }
}

/// Waveform output unit: cosine synthesis plus the DAC channel
///
/// Mirrors the register surface of an on-chip cosine generator:
/// enable-wave, enable/disable-output, and the frequency / scale /
/// offset / invert parameter set.
pub struct ToneGenerator<'d, T: embassy_stm32::dac::Instance> {
    synth: CosineSynth,
    dac: ToneDac<'d, T>,
    wave_enabled: bool,
}

impl<'d, T: embassy_stm32::dac::Instance> ToneGenerator<'d, T> {
    /// Create the unit with the wave generator stopped
    #[must_use]
    pub fn new(dac: ToneDac<'d, T>) -> Self {
        Self {
            synth: CosineSynth::new(),
            dac,
            wave_enabled: false,
        }
    }

    /// Start the cosine generator
    pub fn enable_wave(&mut self) {
        self.wave_enabled = true;
    }

    /// Open the output gate
    pub fn enable_output(&mut self) {
        self.dac.enable();
    }

    /// Close the output gate
    pub fn disable_output(&mut self) {
        self.dac.disable();
    }

    /// Whether the output gate is open
    #[must_use]
    pub const fn output_enabled(&self) -> bool {
        self.dac.is_enabled()
    }

    /// Program the generator frequency
    pub fn set_frequency(&mut self, divider: ClockDivider, step: FrequencyStep) {
        self.synth.set_frequency(divider, step);
    }

    /// Set the amplitude scale
    pub fn set_scale(&mut self, scale: ScaleMode) {
        self.synth.set_scale(scale);
    }

    /// Set the DC offset
    pub fn set_offset(&mut self, offset: u8) {
        self.synth.set_offset(offset);
    }

    /// Set the bit-invert pattern
    pub fn set_invert(&mut self, invert: InvertMode) {
        self.synth.set_invert(invert);
    }

    /// Apply a full parameter snapshot
    pub fn apply(&mut self, params: &ParamSnapshot) {
        self.set_frequency(params.clock_divider, params.frequency_step);
        self.set_scale(params.scale);
        self.set_offset(params.offset);
        self.set_invert(params.invert);
    }

    /// Render one sample slot
    pub fn tick(&mut self) {
        if self.wave_enabled {
            let code = self.synth.next_sample();
            self.dac.write(code);
        }
    }
}
