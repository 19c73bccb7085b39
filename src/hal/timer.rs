//! Timer Abstractions
//!
//! Timing services for waveform sample rate generation.

use embassy_time::{Duration, Timer};

/// Fixed-rate sample clock for the waveform render loop
#[derive(Clone, Copy, Debug)]
pub struct SampleClock {
    /// Period between samples
    period: Duration,
}

impl SampleClock {
    /// Create a sample clock from a rate in Hz
    #[must_use]
    pub const fn from_rate(sample_rate: u32) -> Self {
        Self {
            period: Duration::from_micros((1_000_000 / sample_rate) as u64),
        }
    }

    /// Get the sample period
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next sample slot
    pub async fn tick(&self) {
        Timer::after(self.period).await;
    }
}

impl defmt::Format for SampleClock {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SampleClock({}us)", self.period.as_micros());
    }
}
