//! Extractors for Supplementary services Commands
use heapless::String;

use crate::command::{copy_str, Line, Resp};

/// 8.15 Unstructured supplementary service data +CUSD
///
/// `+CUSD: <m>[,<str>,<dcs>]`. Sets `received` once a reply string was seen.
pub fn ussd_reply<const N: usize>(line: &Line, reply: &mut String<N>, received: &mut bool) -> Resp {
    if let Some(mut args) = line.response("+CUSD") {
        args.skip();
        if let Some(s) = args.quoted() {
            copy_str(reply, s);
            *received = true;
        }
    }
    Resp::Wait
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::LineType;

    #[test]
    fn cusd() {
        let mut reply = String::<64>::new();
        let mut received = false;
        ussd_reply(&Line::new(LineType::Plus, b"\r\n+CUSD: 2\r\n"), &mut reply, &mut received);
        assert!(!received);
        ussd_reply(
            &Line::new(LineType::Plus, b"\r\n+CUSD: 0,\"Balance: 12.50, valid\",15\r\n"),
            &mut reply,
            &mut received,
        );
        assert!(received);
        assert_eq!(reply.as_str(), "Balance: 12.50, valid");
    }
}
