//! Async task set
//!
//! One task per component: the gate pacer drives the alternating timer
//! pair, a consumer toggles the DAC output on its events, the refresh
//! task periodically re-applies the tunable parameters, the render task
//! feeds the DAC at the sample rate, and the console task polls the
//! serial line. The pacer/consumer pair communicates only through a
//! bounded event queue; the console reaches the pacer through a second
//! queue so interval changes land between countdowns.

use defmt::{debug, info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};

use crate::command::{CommandAction, CommandConsole, CommandReply};
use crate::config::{
    COMMAND_POLL_MS, DAC_SAMPLE_RATE, GATE_COMMAND_DEPTH, GATE_QUEUE_DEPTH, PARAM_REFRESH_MS,
    SERIAL_BUF_SIZE,
};
use crate::gate::{GateCommand, GateEvent, GateTimers};
use crate::hal::dac::ToneGenerator;
use crate::hal::serial::SerialConsole;
use crate::hal::timer::SampleClock;
use crate::params::ToneParams;
use crate::types::GateChannel;

/// Shared tunable parameters (single writer per field)
pub static PARAMS: ToneParams = ToneParams::new();

/// Gate expiry events: pacer to consumer
pub static GATE_EVENTS: Channel<CriticalSectionRawMutex, GateEvent, GATE_QUEUE_DEPTH> =
    Channel::new();

/// Interval updates: console to pacer
pub static GATE_COMMANDS: Channel<CriticalSectionRawMutex, GateCommand, GATE_COMMAND_DEPTH> =
    Channel::new();

/// Shared waveform unit handle
///
/// Three tasks touch the unit (render, refresh, gate consumer); each
/// holds the lock only for a register-write-sized critical section.
pub type SharedTone =
    Mutex<CriticalSectionRawMutex, ToneGenerator<'static, embassy_stm32::peripherals::DAC1>>;

/// Drives the alternating gate timer pair
///
/// Sleeping on the armed snapshot plays the hardware countdown role; the
/// time-driver alarm interrupt wakes the task on expiry. Events are
/// posted with a non-blocking send, and pending interval updates are
/// drained just before each re-arm, so a reprogrammed interval never
/// preempts a running countdown.
#[embassy_executor::task]
pub async fn gate_pacer_task() {
    let mut timers = GateTimers::with_defaults();
    info!(
        "gate running: off {} ms / on {} ms",
        timers.interval_ms(GateChannel::A),
        timers.interval_ms(GateChannel::B)
    );

    loop {
        Timer::after(Duration::from_millis(u64::from(timers.armed_interval_ms()))).await;

        while let Ok(update) = GATE_COMMANDS.try_receive() {
            info!("gate reload update: {}", update);
            timers.apply(update);
        }

        let event = timers.fire();
        if GATE_EVENTS.try_send(event).is_err() {
            // One alarm per arm with immediate consumption; a full queue
            // loses a toggle.
            warn!("gate event queue full, dropped {}", event);
        }
    }
}

/// Toggles the DAC output on gate events
#[embassy_executor::task]
pub async fn gate_output_task(tone: &'static SharedTone) {
    loop {
        let event = GATE_EVENTS.receive().await;
        let mut tone = tone.lock().await;
        match event.channel {
            GateChannel::A => {
                tone.enable_output();
                info!("DAC output enabled ({})", event);
            }
            GateChannel::B => {
                tone.disable_output();
                info!("DAC output disabled ({})", event);
            }
        }
    }
}

/// Re-applies the full tunable parameter set every refresh period
///
/// Unconditional idempotent refresh instead of dirty-flag tracking.
#[embassy_executor::task]
pub async fn param_refresh_task(tone: &'static SharedTone) {
    loop {
        let snapshot = PARAMS.snapshot();
        tone.lock().await.apply(&snapshot);
        debug!("params refreshed: {}", snapshot);
        Timer::after(Duration::from_millis(PARAM_REFRESH_MS)).await;
    }
}

/// Renders the cosine wave into the DAC at the sample rate
#[embassy_executor::task]
pub async fn wave_render_task(tone: &'static SharedTone) {
    let clock = SampleClock::from_rate(DAC_SAMPLE_RATE);
    loop {
        clock.tick().await;
        tone.lock().await.tick();
    }
}

/// Polls the serial console and applies tuning commands
#[embassy_executor::task]
pub async fn command_task(mut console: SerialConsole<'static>) {
    let mut state = CommandConsole::new();
    let mut reply = CommandReply::new();
    let mut buf = [0u8; SERIAL_BUF_SIZE];

    loop {
        Timer::after(Duration::from_millis(COMMAND_POLL_MS)).await;

        let len = console.read_chunk(&mut buf).await;
        if len == 0 {
            continue;
        }

        match state.interpret(&buf[..len]) {
            CommandAction::ModeChanged(mode) => {
                info!("edit mode: {}", mode);
                reply.mode(mode);
            }
            CommandAction::SetFrequencyStep(step) => {
                PARAMS.set_frequency_step(step);
                info!("frequency {} stored", step);
                reply.frequency(step, PARAMS.clock_divider());
            }
            CommandAction::SetGateInterval {
                channel,
                interval_ms,
            } => {
                let command = GateCommand {
                    channel,
                    interval_ms,
                };
                if GATE_COMMANDS.try_send(command).is_err() {
                    warn!("gate command queue full, dropped {}", command);
                }
                reply.interval(interval_ms);
            }
            CommandAction::Rejected => {
                info!("rejected console input ({} bytes)", len);
                reply.invalid();
            }
        }

        console.write_reply(reply.as_bytes()).await;
    }
}
