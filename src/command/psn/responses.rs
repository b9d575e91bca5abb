//! Extractors for Packet Switched Data Services Commands
use core::str::FromStr;

use no_std_net::Ipv4Addr;

use super::types::PROFILE_ID;
use crate::command::{Line, Resp};
use crate::digest::LineType;

/// 18.9 Packet switched network-assigned data +UPSND, `<param_tag>` 0
///
/// `+UPSND: 0,0,"93.68.225.175"`
pub fn ip_address(line: &Line, ip: &mut Ipv4Addr) -> Resp {
    if let Some(mut args) = line.response("+UPSND") {
        if args.num::<u8>() == Some(PROFILE_ID) && args.num::<u8>() == Some(0) {
            if let Some(addr) = args.string().and_then(|s| Ipv4Addr::from_str(s).ok()) {
                *ip = addr;
            }
        }
    }
    Resp::Wait
}

/// 18.9 Packet switched network-assigned data +UPSND, `<param_tag>` 8
///
/// `+UPSND: 0,8,1` while the profile is active.
pub fn profile_active(line: &Line, active: &mut bool) -> Resp {
    if let Some(mut args) = line.response("+UPSND") {
        if args.num::<u8>() == Some(PROFILE_ID) && args.num::<u8>() == Some(8) {
            if let Some(state) = args.num::<u8>() {
                *active = state == 1;
            }
        }
    }
    Resp::Wait
}

/// Mobile IP address +CMIP
///
/// Answered either as a bare address line or as `+CMIP: <ip>`.
pub fn mobile_ip(line: &Line, ip: &mut Ipv4Addr) -> Resp {
    let text = match line.response("+CMIP") {
        Some(mut args) => args.string(),
        None if line.ty == LineType::Text => line.text(),
        None => None,
    };
    if let Some(addr) = text.and_then(|s| Ipv4Addr::from_str(s).ok()) {
        *ip = addr;
    }
    Resp::Wait
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsnd_address() {
        let mut ip = Ipv4Addr::UNSPECIFIED;
        ip_address(&Line::new(LineType::Plus, b"\r\n+UPSND: 0,8,1\r\n"), &mut ip);
        assert_eq!(ip, Ipv4Addr::UNSPECIFIED);
        ip_address(
            &Line::new(LineType::Plus, b"\r\n+UPSND: 0,0,\"93.68.225.175\"\r\n"),
            &mut ip,
        );
        assert_eq!(ip, Ipv4Addr::new(93, 68, 225, 175));
    }

    #[test]
    fn upsnd_activation_state() {
        let mut active = true;
        profile_active(&Line::new(LineType::Plus, b"\r\n+UPSND: 0,8,0\r\n"), &mut active);
        assert!(!active);
        profile_active(&Line::new(LineType::Plus, b"\r\n+UPSND: 0,8,1\r\n"), &mut active);
        assert!(active);
    }

    #[test]
    fn cmip_both_forms() {
        let mut ip = Ipv4Addr::UNSPECIFIED;
        mobile_ip(&Line::new(LineType::Text, b"\r\n10.1.2.3\r\n"), &mut ip);
        assert_eq!(ip, Ipv4Addr::new(10, 1, 2, 3));
        mobile_ip(&Line::new(LineType::Plus, b"\r\n+CMIP: 10.4.5.6\r\n"), &mut ip);
        assert_eq!(ip, Ipv4Addr::new(10, 4, 5, 6));
        mobile_ip(&Line::new(LineType::Text, b"\r\ngarbage\r\n"), &mut ip);
        assert_eq!(ip, Ipv4Addr::new(10, 4, 5, 6));
    }
}
