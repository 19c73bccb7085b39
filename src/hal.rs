//! Hardware Abstraction Layer
//!
//! Provides safe abstractions over STM32G474 peripherals.
//! This module isolates hardware-specific code behind thin wrappers
//! the task layer drives.

pub mod dac;
pub mod serial;
pub mod timer;
