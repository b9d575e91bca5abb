//! Argument and parameter types used by Internet protocol transport layer Commands and Responses
use atat::atat_derive::AtatEnum;

use crate::socket::Protocol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SocketProtocol {
    TCP = 6,
    UDP = 17,
}

impl From<Protocol> for SocketProtocol {
    fn from(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Tcp => Self::TCP,
            Protocol::Udp => Self::UDP,
        }
    }
}
