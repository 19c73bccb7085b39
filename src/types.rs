//! Shared types used across the tone generator firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use crate::config::{FREQUENCY_STEP_MAX, WAVE_CLOCK_APPROX_HZ};

/// Frequency step of the cosine generator with validation
///
/// The accumulator advances by this amount out of 65536 on every wave
/// clock, so the generated frequency scales linearly with the step.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrequencyStep(u32);

impl FrequencyStep {
    /// Largest accepted step
    pub const MAX: Self = Self(FREQUENCY_STEP_MAX);

    /// Create a new step, returns None if out of range
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw <= FREQUENCY_STEP_MAX {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Get the raw step value
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// Generated frequency in Hz for a given clock divider
    ///
    /// `WAVE_CLOCK_APPROX_HZ / (1 + divider) * step / 65536`, with the
    /// divider applied in integer arithmetic the way the clock tree
    /// divides the reference.
    #[must_use]
    pub fn frequency_hz(self, divider: ClockDivider) -> f32 {
        let divided = WAVE_CLOCK_APPROX_HZ / (1 + u32::from(divider.as_raw()));
        divided as f32 * (self.0 as f32 / 65536.0)
    }
}

impl fmt::Debug for FrequencyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrequencyStep({})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for FrequencyStep {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "step {}", self.0);
    }
}

/// Divider applied to the wave reference clock
///
/// Three-bit field; division is by `divider + 1`, so 0 leaves the
/// reference clock untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockDivider(u8);

impl ClockDivider {
    /// Largest encodable divider
    pub const MAX: Self = Self(0b111);

    /// Create a new divider, returns None if the value does not fit in
    /// three bits
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if raw <= 0b111 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Get the raw divider field
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self.0
    }
}

impl Default for ClockDivider {
    fn default() -> Self {
        Self(0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ClockDivider {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "div {}", self.0);
    }
}

/// Output amplitude scale selector (two-bit field)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Full scale output
    #[default]
    Full,
    /// Scale to 1/2
    Half,
    /// Scale to 1/4
    Quarter,
    /// Scale to 1/8
    Eighth,
}

impl ScaleMode {
    /// Get the two-bit register code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Full => 0b00,
            Self::Half => 0b01,
            Self::Quarter => 0b10,
            Self::Eighth => 0b11,
        }
    }

    /// Decode a two-bit register code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0b00 => Some(Self::Full),
            0b01 => Some(Self::Half),
            0b10 => Some(Self::Quarter),
            0b11 => Some(Self::Eighth),
            _ => None,
        }
    }

    /// Amplitude factor applied to the synthesized wave
    #[must_use]
    pub const fn amplitude(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Half => 0.5,
            Self::Quarter => 0.25,
            Self::Eighth => 0.125,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ScaleMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Full => defmt::write!(f, "1/1"),
            Self::Half => defmt::write!(f, "1/2"),
            Self::Quarter => defmt::write!(f, "1/4"),
            Self::Eighth => defmt::write!(f, "1/8"),
        }
    }
}

/// Output bit-invert pattern (two-bit field)
///
/// MSB-only inversion converts the generator's offset-binary cosine code
/// into a sine-shaped output, which is why it is the usual setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InvertMode {
    /// Do not invert any bits
    #[default]
    None,
    /// Invert all bits
    All,
    /// Invert the MSB only
    Msb,
    /// Invert all bits except the MSB
    AllButMsb,
}

impl InvertMode {
    /// Get the two-bit register code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0b00,
            Self::All => 0b01,
            Self::Msb => 0b10,
            Self::AllButMsb => 0b11,
        }
    }

    /// Decode a two-bit register code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0b00 => Some(Self::None),
            0b01 => Some(Self::All),
            0b10 => Some(Self::Msb),
            0b11 => Some(Self::AllButMsb),
            _ => None,
        }
    }

    /// XOR mask applied to the 8-bit output code
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Self::None => 0x00,
            Self::All => 0xFF,
            Self::Msb => 0x80,
            Self::AllButMsb => 0x7F,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for InvertMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::None => defmt::write!(f, "inv-none"),
            Self::All => defmt::write!(f, "inv-all"),
            Self::Msb => defmt::write!(f, "inv-msb"),
            Self::AllButMsb => defmt::write!(f, "inv-all-but-msb"),
        }
    }
}

/// Gate timer channel
///
/// Channel A holds the off-duration, channel B the on-duration. Each
/// channel's expiry re-arms the other, never itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateChannel {
    /// Off-duration channel; its expiry enables the output
    A,
    /// On-duration channel; its expiry disables the output
    B,
}

impl GateChannel {
    /// The opposite channel
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Stable index for per-channel storage
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GateChannel {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::A => defmt::write!(f, "A"),
            Self::B => defmt::write!(f, "B"),
        }
    }
}
