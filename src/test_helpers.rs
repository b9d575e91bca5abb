//! Scripted serial port and logger setup shared by the unit tests.
extern crate std;

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;
use std::vec::Vec;

use embedded_io::{ErrorType, Read, ReadReady, Write};

static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn init_logger() {
    INIT.call_once(|| {
        #[cfg(feature = "log")]
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
            .is_test(true)
            .init();
    });
}

#[derive(Default)]
struct Inner {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
    /// Everything written so far, for assertions on the traffic
    sent: Vec<u8>,
    script: VecDeque<(Vec<u8>, Vec<u8>)>,
}

/// Serial port double. Bytes written by the engine are matched against a
/// script of expected commands, each of which releases a canned answer into
/// the receive queue.
#[derive(Clone, Default)]
pub struct MockSerial {
    inner: Rc<RefCell<Inner>>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `data` readable right away
    pub fn feed(&self, data: &[u8]) {
        self.inner.borrow_mut().rx.extend(data.iter().copied());
    }

    /// Expect `cmd` to be written next, and answer it with `response`
    pub fn expect(&self, cmd: &[u8], response: &[u8]) -> &Self {
        self.inner
            .borrow_mut()
            .script
            .push_back((cmd.to_vec(), response.to_vec()));
        self
    }

    /// Every byte written so far
    pub fn sent(&self) -> Vec<u8> {
        self.inner.borrow().sent.clone()
    }

    /// Script entries not consumed yet
    pub fn remaining(&self) -> usize {
        self.inner.borrow().script.len()
    }
}

impl ErrorType for MockSerial {
    type Error = core::convert::Infallible;
}

impl Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut inner = self.inner.borrow_mut();
        let n = buf.len().min(inner.rx.len());
        for (dst, src) in buf.iter_mut().zip(inner.rx.drain(..n)) {
            *dst = src;
        }
        Ok(n)
    }
}

impl ReadReady for MockSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.inner.borrow().rx.is_empty())
    }
}

impl Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        inner.sent.extend_from_slice(buf);
        inner.tx.extend_from_slice(buf);

        while let Some((cmd, _)) = inner.script.front() {
            let n = cmd.len().min(inner.tx.len());
            assert_eq!(
                String::from_utf8_lossy(&inner.tx[..n]),
                String::from_utf8_lossy(&cmd[..n]),
                "unexpected write"
            );
            if inner.tx.len() < cmd.len() {
                break;
            }
            let len = cmd.len();
            inner.tx.drain(..len);
            if let Some((_, response)) = inner.script.pop_front() {
                inner.rx.extend(response);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A command as it goes out on the wire
pub fn written<C: atat::AtatCmd>(cmd: &C) -> std::string::String {
    let mut buf = [0; 512];
    let len = cmd.write(&mut buf);
    String::from_utf8_lossy(&buf[..len]).into_owned()
}
