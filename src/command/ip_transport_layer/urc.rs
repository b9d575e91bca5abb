//! Unsolicited responses for Internet protocol transport layer Commands
use crate::command::Line;

/// +UUSORD: <socket>,<length>, or +UUSORF: <socket>,<length> for UDP sockets
///
/// The length is the total amount of unread data, not an increment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketDataAvailable {
    pub socket: u8,
    pub length: usize,
}

impl SocketDataAvailable {
    pub fn parse(line: &Line) -> Option<Self> {
        let mut args = line
            .response("+UUSORD")
            .or_else(|| line.response("+UUSORF"))?;
        Some(Self {
            socket: args.num()?,
            length: args.num()?,
        })
    }
}

/// +UUSOCL: <socket>, the remote end closed the socket
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SocketClosed {
    pub socket: u8,
}

impl SocketClosed {
    pub fn parse(line: &Line) -> Option<Self> {
        let mut args = line.response("+UUSOCL")?;
        Some(Self {
            socket: args.num()?,
        })
    }
}
