//! Socket table bridging application handles to module side socket ids.
mod set;

use core::fmt;

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

pub use self::set::{SocketSet, MAX_SOCKETS};

/// A handle, identifying a socket in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketHandle(pub u8);

impl fmt::Display for SocketHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    Tcp,
    Udp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    #[default]
    Free,
    /// Allocated, but not connected to a peer
    Created,
    Connected,
}

/// Inclusive range of table indices usable on the current module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketRange {
    first: u8,
    last: u8,
}

impl SocketRange {
    /// Indices beyond the table are clamped to it
    pub const fn new(first: u8, last: u8) -> Self {
        let last = if last as usize >= MAX_SOCKETS {
            (MAX_SOCKETS - 1) as u8
        } else {
            last
        };
        Self { first, last }
    }

    pub fn contains(&self, handle: SocketHandle) -> bool {
        (self.first..=self.last).contains(&handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = SocketHandle> {
        (self.first..=self.last).map(SocketHandle)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }
}

/// Socket control block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocketCtrl {
    pub(crate) state: State,
    pub(crate) protocol: Option<Protocol>,
    /// Socket id on the module, while it has one open
    pub(crate) modem_id: Option<u8>,
    /// Bytes the module reported as available to read
    pub(crate) pending: usize,
    /// Read timeout, `None` blocks until data arrives
    pub(crate) timeout: Option<Duration>,
}

impl SocketCtrl {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
