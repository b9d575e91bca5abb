//! Byte level access to the module.
use embedded_io::{Read, ReadReady, Write};
use heapless::Vec;

use crate::digest::{digest, Scan};

/// Serial link to the module, as seen by the protocol engine.
pub trait Transport {
    /// Classify the next line of received data and, once a complete one is
    /// available, move it into `buf`. The returned length never exceeds
    /// `buf.len()`.
    fn get_line(&mut self, buf: &mut [u8]) -> Scan;

    /// Throw away everything received so far
    fn purge(&mut self);

    /// Send raw bytes, returning how many were written
    fn send(&mut self, data: &[u8]) -> usize;
}

const READ_CHUNK: usize = 64;

/// [`Transport`] over any `embedded-io` serial port.
///
/// Received bytes are kept in an ingress buffer of `N` bytes until a complete
/// line is recognized.
pub struct SerialTransport<S, const N: usize = 512> {
    serial: S,
    ingress: Vec<u8, N>,
    /// The last line taken out ended with a line feed
    after_line: bool,
}

impl<S, const N: usize> SerialTransport<S, N>
where
    S: Read + ReadReady + Write,
{
    pub fn new(serial: S) -> Self {
        Self {
            serial,
            ingress: Vec::new(),
            after_line: false,
        }
    }

    pub fn release(self) -> S {
        self.serial
    }

    /// Pull whatever the port has ready into the ingress buffer
    fn fill(&mut self) {
        let mut chunk = [0u8; READ_CHUNK];
        while self.ingress.len() < N {
            match self.serial.read_ready() {
                Ok(true) => {}
                Ok(false) => break,
                Err(_) => {
                    error!("Serial read_ready failed");
                    break;
                }
            }
            let space = (N - self.ingress.len()).min(READ_CHUNK);
            match self.serial.read(&mut chunk[..space]) {
                Ok(0) => break,
                Ok(n) => {
                    // Cannot fail, `space` bounds the read
                    self.ingress.extend_from_slice(&chunk[..n]).ok();
                }
                Err(_) => {
                    error!("Serial read failed");
                    break;
                }
            }
        }
    }

    /// Drop the first `n` bytes of the ingress buffer
    fn consume(&mut self, n: usize) {
        let len = self.ingress.len();
        self.ingress.copy_within(n..len, 0);
        self.ingress.truncate(len - n);
    }
}

impl<S, const N: usize> Transport for SerialTransport<S, N>
where
    S: Read + ReadReady + Write,
{
    fn get_line(&mut self, buf: &mut [u8]) -> Scan {
        self.fill();
        match digest(&self.ingress, buf.len().min(N), self.after_line) {
            Scan::Found(ty, len) => {
                buf[..len].copy_from_slice(&self.ingress[..len]);
                self.after_line = buf[..len].ends_with(b"\n");
                self.consume(len);
                Scan::Found(ty, len)
            }
            other => other,
        }
    }

    fn purge(&mut self) {
        self.ingress.clear();
        self.fill();
        self.ingress.clear();
        self.after_line = false;
    }

    fn send(&mut self, data: &[u8]) -> usize {
        match self.serial.write_all(data).and_then(|_| self.serial.flush()) {
            Ok(()) => data.len(),
            Err(_) => {
                error!("Serial write failed");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::LineType;
    use crate::test_helpers::MockSerial;

    #[test]
    fn lines_are_taken_one_at_a_time() {
        let serial = MockSerial::new();
        serial.feed(b"\r\n+CSQ: 5,99\r\n\r\nOK\r\n");
        let mut transport: SerialTransport<_, 64> = SerialTransport::new(serial);
        let mut buf = [0u8; 32];

        assert_eq!(transport.get_line(&mut buf), Scan::Found(LineType::Plus, 14));
        assert_eq!(&buf[..14], b"\r\n+CSQ: 5,99\r\n");
        assert_eq!(transport.get_line(&mut buf), Scan::Found(LineType::Ok, 6));
        assert_eq!(transport.get_line(&mut buf), Scan::NotFound);
    }

    #[test]
    fn partial_line_waits_for_more() {
        let serial = MockSerial::new();
        serial.feed(b"\r\nO");
        let mut transport: SerialTransport<_, 64> = SerialTransport::new(serial.clone());
        let mut buf = [0u8; 32];

        assert_eq!(transport.get_line(&mut buf), Scan::Wait);
        serial.feed(b"K\r\n");
        assert_eq!(transport.get_line(&mut buf), Scan::Found(LineType::Ok, 6));
    }

    #[test]
    fn overlong_text_is_flushed() {
        let serial = MockSerial::new();
        serial.feed(&[b'x'; 40]);
        let mut transport: SerialTransport<_, 64> = SerialTransport::new(serial);
        let mut buf = [0u8; 16];

        assert_eq!(transport.get_line(&mut buf), Scan::Found(LineType::Text, 16));
        assert_eq!(transport.get_line(&mut buf), Scan::Found(LineType::Text, 16));
        assert_eq!(transport.get_line(&mut buf), Scan::NotFound);
    }

    #[test]
    fn body_after_header_is_text() {
        let serial = MockSerial::new();
        serial.feed(b"\r\n+CMGR: \"REC READ\",\"+41791234567\"\r\n@Bob see you\r\n\r\nOK\r\n");
        let mut transport: SerialTransport<_, 128> = SerialTransport::new(serial);
        let mut buf = [0u8; 64];

        assert!(matches!(transport.get_line(&mut buf), Scan::Found(LineType::Plus, _)));
        assert_eq!(transport.get_line(&mut buf), Scan::Found(LineType::Text, 14));
        assert_eq!(&buf[..14], b"@Bob see you\r\n");
        assert_eq!(transport.get_line(&mut buf), Scan::Found(LineType::Ok, 6));
    }

    #[test]
    fn purge_drops_pending_input() {
        let serial = MockSerial::new();
        serial.feed(b"\r\nRING\r\n\r\nOK");
        let mut transport: SerialTransport<_, 64> = SerialTransport::new(serial);
        let mut buf = [0u8; 32];

        transport.purge();
        assert_eq!(transport.get_line(&mut buf), Scan::NotFound);
    }
}
