//! Periodic output gate
//!
//! Two countdown channels gate the DAC output: channel A times how long
//! the output stays off, channel B how long it stays on. The channels
//! alternate: each expiry re-arms the *other* channel, never itself.
//! That is modeled here as a two-state machine {Armed-A, Armed-B} with
//! the re-arm as the transition action. The embedded pacer task drives
//! the machine from the timer alarm and relays each event through a
//! bounded queue.

use crate::config::{GATE_OFF_INTERVAL_MS, GATE_ON_INTERVAL_MS};
use crate::types::GateChannel;

/// Event produced when a gate channel's countdown expires
///
/// Consumed exactly once by the output toggling task, then discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateEvent {
    /// The channel whose countdown expired
    pub channel: GateChannel,
}

impl GateEvent {
    /// Whether this event opens the gate (channel A ends the off period)
    #[must_use]
    pub const fn opens_gate(self) -> bool {
        matches!(self.channel, GateChannel::A)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GateEvent {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "GateEvent({})", self.channel);
    }
}

/// Interval update sent from the command layer to the gate pacer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateCommand {
    /// Channel to reprogram
    pub channel: GateChannel,
    /// New reload interval in milliseconds
    pub interval_ms: u32,
}

#[cfg(feature = "embedded")]
impl defmt::Format for GateCommand {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "GateCommand({}, {} ms)", self.channel, self.interval_ms);
    }
}

/// Alternating gate timer pair
///
/// The armed channel's countdown duration is snapshotted at arm time, so
/// reprogramming a reload interval never disturbs a countdown that is
/// already running; the new value applies the next time the channel is
/// armed.
#[derive(Clone, Copy, Debug)]
pub struct GateTimers {
    /// Programmed reload intervals, indexed by channel
    interval_ms: [u32; 2],
    /// Channel currently counting down
    armed: GateChannel,
    /// Countdown duration snapshotted when the channel was armed
    armed_interval_ms: u32,
}

impl GateTimers {
    /// Program both channels and arm channel B first
    ///
    /// The output starts enabled, so the short on-interval expires before
    /// the long off-interval, matching the first toggle a pair of
    /// hardware timers started together would produce.
    #[must_use]
    pub const fn new(off_ms: u32, on_ms: u32) -> Self {
        Self {
            interval_ms: [off_ms, on_ms],
            armed: GateChannel::B,
            armed_interval_ms: on_ms,
        }
    }

    /// Gate timers with the configured default intervals
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self::new(GATE_OFF_INTERVAL_MS, GATE_ON_INTERVAL_MS)
    }

    /// Channel currently counting down
    #[must_use]
    pub const fn armed(&self) -> GateChannel {
        self.armed
    }

    /// Countdown duration of the armed channel in milliseconds
    #[must_use]
    pub const fn armed_interval_ms(&self) -> u32 {
        self.armed_interval_ms
    }

    /// Programmed reload interval of a channel in milliseconds
    #[must_use]
    pub const fn interval_ms(&self, channel: GateChannel) -> u32 {
        self.interval_ms[channel.index()]
    }

    /// Reprogram a channel's reload interval
    ///
    /// Takes effect the next time that channel is armed; a running
    /// countdown keeps its snapshot.
    pub fn set_interval(&mut self, channel: GateChannel, interval_ms: u32) {
        self.interval_ms[channel.index()] = interval_ms;
    }

    /// Apply an interval update from the command layer
    pub fn apply(&mut self, command: GateCommand) {
        self.set_interval(command.channel, command.interval_ms);
    }

    /// Alarm on the armed channel
    ///
    /// Emits the fired channel's event and arms the other channel with a
    /// snapshot of its currently programmed interval.
    pub fn fire(&mut self) -> GateEvent {
        let fired = self.armed;
        let next = fired.other();
        self.armed = next;
        self.armed_interval_ms = self.interval_ms[next.index()];
        GateEvent { channel: fired }
    }
}

impl Default for GateTimers {
    fn default() -> Self {
        Self::with_defaults()
    }
}
