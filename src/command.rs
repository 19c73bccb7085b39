//! Serial command handling
//!
//! The console alternates between two edit targets: the generator's
//! frequency step and gate channel B's reload interval. A sentinel byte
//! toggles between them; anything else is parsed as a decimal integer.
//! Each poll consumes whatever bytes are buffered as one command chunk.
//! There is no framing, so a number split across two polls is two bad
//! commands rather than one good one.

use core::fmt::Write as _;

use heapless::String;

use crate::config::{FREQUENCY_STEP_MAX, MODE_SENTINEL, REPLY_BUF_SIZE};
use crate::types::{ClockDivider, FrequencyStep, GateChannel};

/// Which parameter the next numeric command edits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Numbers set the generator frequency step
    #[default]
    Frequency,
    /// Numbers set gate channel B's reload interval
    Interval,
}

impl EditMode {
    /// The other edit mode
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Frequency => Self::Interval,
            Self::Interval => Self::Frequency,
        }
    }

    /// Human-readable mode announcement
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frequency => "Frequency change",
            Self::Interval => "Time interval change",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for EditMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Frequency => defmt::write!(f, "frequency-edit"),
            Self::Interval => defmt::write!(f, "interval-edit"),
        }
    }
}

/// Raw command parsed out of one buffered chunk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Sentinel byte: flip the edit mode
    ToggleMode,
    /// In-range decimal integer
    Value(u32),
    /// Anything else; rejected without touching state
    Invalid,
}

/// Parse one chunk of buffered serial input
///
/// The sentinel is only recognized in the first byte. Surrounding ASCII
/// whitespace and NULs are ignored around a number; the accepted range
/// is `[0, 65536]`.
#[must_use]
pub fn parse_chunk(chunk: &[u8]) -> Command {
    match chunk.first() {
        None => Command::Invalid,
        Some(&byte) if byte == MODE_SENTINEL => Command::ToggleMode,
        Some(_) => parse_value(chunk),
    }
}

fn parse_value(chunk: &[u8]) -> Command {
    let Ok(text) = core::str::from_utf8(chunk) else {
        return Command::Invalid;
    };
    let text = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\0');
    match text.parse::<i64>() {
        Ok(value) if value >= 0 && value <= i64::from(FREQUENCY_STEP_MAX) => {
            Command::Value(value as u32)
        }
        _ => Command::Invalid,
    }
}

/// Action produced by interpreting a command against the current mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandAction {
    /// Edit mode flipped; carries the new mode
    ModeChanged(EditMode),
    /// Store a new frequency step
    SetFrequencyStep(FrequencyStep),
    /// Re-initialize a gate channel with a new reload interval
    SetGateInterval {
        /// Channel to reprogram
        channel: GateChannel,
        /// New reload interval in milliseconds
        interval_ms: u32,
    },
    /// Input rejected; nothing changed
    Rejected,
}

/// Console state: owns the edit mode across polls
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandConsole {
    mode: EditMode,
}

impl CommandConsole {
    /// Create a console in frequency-edit mode
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: EditMode::Frequency,
        }
    }

    /// Current edit mode
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Interpret one buffered chunk and update the edit mode
    pub fn interpret(&mut self, chunk: &[u8]) -> CommandAction {
        match parse_chunk(chunk) {
            Command::ToggleMode => {
                self.mode = self.mode.toggle();
                CommandAction::ModeChanged(self.mode)
            }
            Command::Value(value) => match self.mode {
                EditMode::Frequency => FrequencyStep::from_raw(value)
                    .map_or(CommandAction::Rejected, CommandAction::SetFrequencyStep),
                EditMode::Interval => CommandAction::SetGateInterval {
                    channel: GateChannel::B,
                    interval_ms: value,
                },
            },
            Command::Invalid => CommandAction::Rejected,
        }
    }
}

/// Reply formatter for the serial transmit side
pub struct CommandReply {
    buffer: String<REPLY_BUF_SIZE>,
}

impl CommandReply {
    /// Create a new reply formatter
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Announce the new edit mode
    pub fn mode(&mut self, mode: EditMode) {
        self.buffer.clear();
        let _ = write!(self.buffer, "{}\r\n", mode.label());
    }

    /// Report the frequency resulting from a new step
    pub fn frequency(&mut self, step: FrequencyStep, divider: ClockDivider) {
        self.buffer.clear();
        let _ = write!(
            self.buffer,
            "New frequency: {:.2} Hz\r\n",
            step.frequency_hz(divider)
        );
    }

    /// Report a new gate interval
    pub fn interval(&mut self, interval_ms: u32) {
        self.buffer.clear();
        let _ = write!(self.buffer, "New interval: {interval_ms} ms\r\n");
    }

    /// Report rejected input
    pub fn invalid(&mut self) {
        self.buffer.clear();
        let _ = self.buffer.push_str("Input number is invalid.\r\n");
    }

    /// Get the reply string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the reply bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for CommandReply {
    fn default() -> Self {
        Self::new()
    }
}
