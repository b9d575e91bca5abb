//! Extractors for DNS Commands
use core::str::FromStr;

use no_std_net::Ipv4Addr;

use crate::command::{Line, Resp};

/// 24.1 Resolve name / IP number through DNS +UDNSRN
pub fn resolved_ip(line: &Line, ip: &mut Ipv4Addr) -> Resp {
    if let Some(addr) = line
        .response("+UDNSRN")
        .and_then(|mut args| args.string())
        .and_then(|s| Ipv4Addr::from_str(s).ok())
    {
        *ip = addr;
    }
    Resp::Wait
}
