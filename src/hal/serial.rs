//! Serial Console
//!
//! Buffered UART the command task polls. A read hands back whatever
//! bytes the interrupt-driven ring buffer currently holds; when the line
//! is idle the poll returns immediately with nothing.

use embassy_stm32::usart::BufferedUart;
use embedded_io::ReadReady as _;
use embedded_io_async::{Read as _, Write as _};

/// Console wrapper over a buffered UART
pub struct SerialConsole<'d> {
    uart: BufferedUart<'d>,
}

impl<'d> SerialConsole<'d> {
    /// Wrap a configured buffered UART
    #[must_use]
    pub fn new(uart: BufferedUart<'d>) -> Self {
        Self { uart }
    }

    /// Read whatever bytes are currently buffered
    ///
    /// Returns the number of bytes placed in `buf`; zero when the
    /// receive buffer is empty. Reading consumes the buffered bytes, so
    /// each poll starts from a clean buffer.
    pub async fn read_chunk(&mut self, buf: &mut [u8]) -> usize {
        match self.uart.read_ready() {
            Ok(true) => self.uart.read(buf).await.unwrap_or(0),
            _ => 0,
        }
    }

    /// Write a reply; best-effort, console errors are not surfaced
    pub async fn write_reply(&mut self, bytes: &[u8]) {
        let _ = self.uart.write_all(bytes).await;
    }
}
