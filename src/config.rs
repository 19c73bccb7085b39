//! System configuration and hardware constants
//!
//! Compile-time constants for the tone generator hardware: clocks, gate
//! intervals, console parameters and pin assignments are centralized here.

use crate::types::{InvertMode, ScaleMode};

/// System clock frequency (STM32G474 @ 170MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 170_000_000;

/// Reference clock the cosine generator frequency is derived from.
///
/// The generated frequency is `WAVE_CLOCK_APPROX_HZ / (1 + divider) *
/// step / 65536`. The value is an approximation of the free-running RC
/// oscillator that clocked the original generator hardware; the reported
/// frequency inherits the same tolerance.
pub const WAVE_CLOCK_APPROX_HZ: u32 = 8_500_000;

/// DAC sample rate for waveform rendering
pub const DAC_SAMPLE_RATE: u32 = 48_000;

/// Largest accepted frequency step (16-bit accumulator span)
pub const FREQUENCY_STEP_MAX: u32 = 65_536;

/// Gate channel A reload interval: how long the output stays disabled
pub const GATE_OFF_INTERVAL_MS: u32 = 3_000;

/// Gate channel B reload interval: how long the output stays enabled
pub const GATE_ON_INTERVAL_MS: u32 = 100;

/// Gate event queue depth. One event per alarm with immediate
/// consumption; two slots never fill under normal operation.
pub const GATE_QUEUE_DEPTH: usize = 2;

/// Depth of the interval-update queue from the console to the gate pacer
pub const GATE_COMMAND_DEPTH: usize = 4;

/// Parameter refresh period in milliseconds
pub const PARAM_REFRESH_MS: u64 = 2_000;

/// Serial console poll period in milliseconds
pub const COMMAND_POLL_MS: u64 = 3_000;

/// Serial console baud rate (8N1)
pub const UART_BAUD: u32 = 115_200;

/// Serial receive/transmit buffer size in bytes
pub const SERIAL_BUF_SIZE: usize = 128;

/// Console reply buffer size in bytes
pub const REPLY_BUF_SIZE: usize = 64;

/// Byte that toggles the console between frequency and interval editing
pub const MODE_SENTINEL: u8 = b'!';

/// Default clock divider (0 = undivided wave clock)
pub const DEFAULT_CLOCK_DIVIDER: u8 = 0;

/// Default frequency step (roughly 1 kHz with an undivided wave clock)
pub const DEFAULT_FREQUENCY_STEP: u32 = 8;

/// Default output scale (half amplitude)
pub const DEFAULT_SCALE: ScaleMode = ScaleMode::Half;

/// Default DC offset added to the output code
pub const DEFAULT_OFFSET: u8 = 0;

/// Default invert pattern (MSB inversion turns the raw cosine code into
/// a sine-shaped output)
pub const DEFAULT_INVERT: InvertMode = InvertMode::Msb;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// DAC1 channel 1 analog output
    pub const DAC_OUT: &str = "PA4";

    /// USART2 TX (console)
    pub const UART_TX: &str = "PA2";

    /// USART2 RX (console)
    pub const UART_RX: &str = "PA3";
}
