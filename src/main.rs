//! Gated Tone Generator Main Application
//!
//! Entry point for the STM32G474-based tone generator firmware.
//! Initializes the DAC and console hardware and spawns the task set.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::dac::DacChannel;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::usart::{self, BufferedUart};
use embassy_stm32::{bind_interrupts, peripherals};
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tonegate_firmware::hal::dac::{ToneDac, ToneGenerator};
use tonegate_firmware::hal::serial::SerialConsole;
use tonegate_firmware::prelude::*;
use tonegate_firmware::tasks::{self, SharedTone};

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    USART2 => usart::BufferedInterruptHandler<peripherals::USART2>;
});

static TONE: StaticCell<SharedTone> = StaticCell::new();
static UART_TX_BUF: StaticCell<[u8; SERIAL_BUF_SIZE]> = StaticCell::new();
static UART_RX_BUF: StaticCell<[u8; SERIAL_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tone generator firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Status LED (PA5 on Nucleo boards)
    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    // DAC1 channel 1 output on PA4
    let dac = DacChannel::new(p.DAC1, p.DMA1_CH3, p.PA4);
    let mut generator = ToneGenerator::new(ToneDac::new(dac));

    // The generator runs from boot with the gate open; the gate timers
    // take over from the first expiry.
    generator.apply(&tasks::PARAMS.snapshot());
    generator.enable_wave();
    generator.enable_output();
    let tone: &'static SharedTone = TONE.init(Mutex::new(generator));

    // USART2 console on PA2 (TX) / PA3 (RX), 115200 8N1
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = UART_BAUD;
    let uart = BufferedUart::new(
        p.USART2,
        Irqs,
        p.PA3,
        p.PA2,
        UART_TX_BUF.init([0; SERIAL_BUF_SIZE]),
        UART_RX_BUF.init([0; SERIAL_BUF_SIZE]),
        uart_config,
    )
    .unwrap();

    info!("Console ready at {} baud", UART_BAUD);

    // Spawn the task set
    spawner.spawn(tasks::wave_render_task(tone)).unwrap();
    spawner.spawn(tasks::gate_pacer_task()).unwrap();
    spawner.spawn(tasks::gate_output_task(tone)).unwrap();
    spawner.spawn(tasks::param_refresh_task(tone)).unwrap();
    spawner
        .spawn(tasks::command_task(SerialConsole::new(uart)))
        .unwrap();
    spawner.spawn(heartbeat_task(led)).unwrap();

    info!("Tasks spawned, entering main loop");

    // Main loop - additional coordination can happen here
    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!("Main loop tick");
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}
