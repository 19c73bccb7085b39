//! Gated Tone Generator Firmware Library
//!
//! This library provides the core functionality for an STM32G474-based
//! tone generator. The DAC renders a cosine wave whose frequency, scale,
//! offset and bit-invert pattern are tunable at runtime over a serial
//! console, while a pair of alternating gate timers periodically enables
//! and disables the output.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Gate Pacer  │  Parameter Refresh  │  Serial Console         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    SYNTHESIS LAYER                           │
//! │  Cosine DDS  │  Scale / Offset / Invert shaping              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  DAC  │  Buffered UART  │  Sample Clock  │  GPIO             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Type-driven design**: Custom types enforce invariants at compile time
//! - **No unsafe in application code**: All unsafe isolated in HAL/FFI layers
//! - **Portable core**: Gate, command and synthesis logic are host-testable
//! - **Message passing**: The gate alarm path talks to its consumer only
//!   through a bounded event queue

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Provides safe abstractions over STM32G474 peripherals.
#[cfg(feature = "embedded")]
pub mod hal;

/// Cosine Waveform Synthesis
///
/// Software rendition of a DAC cosine generator with scale, offset
/// and invert shaping.
pub mod synth;

/// Periodic Output Gate
///
/// Alternating gate timer pair expressed as a two-state machine,
/// plus the event it hands to the output toggling task.
pub mod gate;

/// Serial Command Handling
///
/// Two-mode tuning console: parser, interpreter and reply formatter.
pub mod command;

/// Shared Tunable Parameters
///
/// Lock-free parameter block with single-writer-per-field discipline.
pub mod params;

/// Async Task Set
///
/// Embassy tasks wiring the gate, waveform unit, parameters and
/// console together.
#[cfg(feature = "embedded")]
pub mod tasks;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
