//! ### 25 - Internet protocol transport layer Commands
//!
//! Socket ids taken by these commands are the module side ids returned by
//! `+USOCR`, not the handles of the socket table.
pub mod responses;
pub mod types;
pub mod urc;

use atat::atat_derive::AtatCmd;
use no_std_net::Ipv4Addr;
use types::SocketProtocol;

use super::NoResponse;

/// 25.3 Create Socket +USOCR
///
/// Creates a socket and associates it with the specified protocol (TCP or UDP), returns a number identifying the
/// socket. Such command corresponds to the BSD socket routine:
/// • SARA-U2 / LISA-U2 / SARA-G350 - Up to 7 sockets can be created.
///
/// It is possible to specify the local port to bind within the socket in order to send data from a specific port.
#[derive(Clone, AtatCmd)]
#[at_cmd("+USOCR", NoResponse, timeout_ms = 10000)]
pub struct CreateSocket {
    #[at_arg(position = 0)]
    pub protocol: SocketProtocol,
    #[at_arg(position = 1)]
    pub local_port: Option<u16>,
}

/// 25.7 Close Socket +USOCL
///
/// Closes the specified socket, like the BSD close routine. In case of remote socket closure the user is notified
/// via the URC.
#[derive(Clone, AtatCmd)]
#[at_cmd("+USOCL", NoResponse, timeout_ms = 120000)]
pub struct CloseSocket {
    #[at_arg(position = 0)]
    pub socket: u8,
}

/// 25.9 Connect Socket +USOCO
///
/// Establishes a peer-to-peer connection of the socket to the specified remote host on the given remote port, like
/// the BSD connect routine. If the socket is a TCP socket, the command will actually perform the TCP negotiation
/// (3-way handshake) to open a connection. If the socket is a UDP socket, this function will just declare the remote
/// host address and port for later use with other socket operations.
#[derive(Clone, AtatCmd)]
#[at_cmd("+USOCO", NoResponse, timeout_ms = 120000)]
pub struct ConnectSocket {
    #[at_arg(position = 0)]
    pub socket: u8,
    #[at_arg(position = 1, len = 17)]
    pub remote_addr: Ipv4Addr,
    #[at_arg(position = 2)]
    pub remote_port: u16,
}

/// 25.10 Write socket data +USOWR
///
/// Binary extended syntax: the module answers with the `@` prompt, after
/// which exactly `length` bytes of data are expected.
#[derive(Clone, AtatCmd)]
#[at_cmd("+USOWR", NoResponse, timeout_ms = 10000)]
pub struct PrepareWriteSocketDataBinary {
    #[at_arg(position = 0)]
    pub socket: u8,
    #[at_arg(position = 1)]
    pub length: usize,
}

/// 25.11 SendTo command (UDP only) +USOST
///
/// Binary extended syntax, answered with the `@` prompt like `+USOWR`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+USOST", NoResponse, timeout_ms = 10000)]
pub struct PrepareUDPSendToDataBinary {
    #[at_arg(position = 0)]
    pub socket: u8,
    #[at_arg(position = 1, len = 17)]
    pub remote_addr: Ipv4Addr,
    #[at_arg(position = 2)]
    pub remote_port: u16,
    #[at_arg(position = 3)]
    pub length: usize,
}

/// 25.12 Read Socket Data +USORD
///
/// Reads the specified amount of data from the specified socket, like the BSD read routine. This command can
/// be used to know the total amount of unread data.
#[derive(Clone, AtatCmd)]
#[at_cmd("+USORD", NoResponse, timeout_ms = 10000)]
pub struct ReadSocketData {
    #[at_arg(position = 0)]
    pub socket: u8,
    #[at_arg(position = 1)]
    pub length: usize,
}

/// 25.13 Receive From command (UDP only) +USORF
///
/// Reads the specified amount of data from the specified UDP socket, like the BSD recvfrom routine. The URC
/// +UUSORF: <socket>,<length> (or also +UUSORD: <socket>,<length>) notifies that new data is available for
/// reading.
#[derive(Clone, AtatCmd)]
#[at_cmd("+USORF", NoResponse, timeout_ms = 10000)]
pub struct ReadUDPSocketData {
    #[at_arg(position = 0)]
    pub socket: u8,
    #[at_arg(position = 1)]
    pub length: usize,
}
