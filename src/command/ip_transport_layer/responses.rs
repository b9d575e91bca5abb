//! Extractors for Internet protocol transport layer Commands
use core::str::FromStr;

use no_std_net::{Ipv4Addr, SocketAddrV4};

use crate::command::{Line, Resp};

/// 25.3 Create Socket +USOCR
pub fn socket_created(line: &Line, id: &mut Option<u8>) -> Resp {
    if let Some(socket) = line.response("+USOCR").and_then(|mut args| args.num::<u8>()) {
        *id = Some(socket);
    }
    Resp::Wait
}

/// 25.10 Write socket data +USOWR, 25.11 SendTo command +USOST
///
/// `+USOWR: <socket>,<length>` reports how much the module accepted.
pub fn data_written(line: &Line, socket: u8, written: &mut Option<usize>) -> Resp {
    let args = line
        .response("+USOWR")
        .or_else(|| line.response("+USOST"));
    if let Some(mut args) = args {
        if args.num::<u8>() == Some(socket) {
            if let Some(len) = args.num::<usize>() {
                *written = Some(len);
            }
        }
    }
    Resp::Wait
}

/// 25.12 Read Socket Data +USORD
///
/// `+USORD: <socket>,<length>,"<data>"`. The payload is copied into `buf`,
/// whatever does not fit is dropped. Returns the number of bytes copied
/// through `read`.
pub fn socket_data(line: &Line, socket: u8, buf: &mut [u8], read: &mut Option<usize>) -> Resp {
    if let Some(mut args) = line.response("+USORD") {
        if args.num::<u8>() != Some(socket) {
            return Resp::Wait;
        }
        let Some(len) = args.num::<usize>() else {
            return Resp::Wait;
        };
        if len == 0 {
            *read = Some(0);
        } else if let Some(data) = args.payload(len) {
            *read = Some(copy_payload(buf, data));
        }
    }
    Resp::Wait
}

/// 25.13 Receive From command (UDP only) +USORF
///
/// `+USORF: <socket>,<remote_ip_addr>,<remote_port>,<length>,"<data>"`
pub fn udp_socket_data(
    line: &Line,
    socket: u8,
    buf: &mut [u8],
    read: &mut Option<(usize, SocketAddrV4)>,
) -> Resp {
    if let Some(mut args) = line.response("+USORF") {
        if args.num::<u8>() != Some(socket) {
            return Resp::Wait;
        }
        let Some(ip) = args.string().and_then(|s| Ipv4Addr::from_str(s).ok()) else {
            return Resp::Wait;
        };
        let (Some(port), Some(len)) = (args.num::<u16>(), args.num::<usize>()) else {
            return Resp::Wait;
        };
        if let Some(data) = args.payload(len) {
            *read = Some((copy_payload(buf, data), SocketAddrV4::new(ip, port)));
        }
    }
    Resp::Wait
}

fn copy_payload(buf: &mut [u8], data: &[u8]) -> usize {
    let n = data.len().min(buf.len());
    buf[..n].copy_from_slice(&data[..n]);
    n
}
