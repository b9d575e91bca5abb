//! Extractors for Short Messages Service Commands
use heapless::String;

use crate::command::{copy_str, Line, Resp};
use crate::digest::LineType;

/// 11.12 List message +CMGL
///
/// Collects the index of every `+CMGL: <index>,...` entry. Indices beyond the
/// capacity of `ix` are counted in `total` but not stored.
pub fn message_index(line: &Line, ix: &mut [u16], total: &mut usize) -> Resp {
    if let Some(index) = line.response("+CMGL").and_then(|mut args| args.num::<u16>()) {
        if let Some(slot) = ix.get_mut(*total) {
            *slot = index;
        }
        *total += 1;
    }
    Resp::Wait
}

/// 11.13 Read message +CMGR
///
/// `+CMGR: <stat>,<oa>,[<alpha>],<scts>` followed by the message text on its
/// own line.
pub struct MessageRead<'a, const N: usize> {
    pub originator: &'a mut String<N>,
    pub body: &'a mut [u8],
    pub len: Option<usize>,
    header: bool,
}

impl<'a, const N: usize> MessageRead<'a, N> {
    pub fn new(originator: &'a mut String<N>, body: &'a mut [u8]) -> Self {
        Self {
            originator,
            body,
            len: None,
            header: false,
        }
    }

    pub fn extract(&mut self, line: &Line) -> Resp {
        if let Some(mut args) = line.response("+CMGR") {
            args.skip();
            if let Some(oa) = args.quoted() {
                copy_str(self.originator, oa);
            }
            self.header = true;
        } else if self.header && self.len.is_none() && line.ty == LineType::Text {
            let text = line.trimmed();
            let n = text.len().min(self.body.len());
            self.body[..n].copy_from_slice(&text[..n]);
            self.len = Some(n);
        }
        Resp::Wait
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmgl_indices() {
        let mut ix = [0u16; 2];
        let mut total = 0;
        for raw in [
            &b"\r\n+CMGL: 1,\"REC READ\",\"+41791234567\",,\"16/02/12,09:15:30+04\"\r\n"[..],
            &b"\r\nhello\r\n"[..],
            &b"\r\n+CMGL: 4,\"REC UNREAD\",\"+41791234567\",,\"16/02/12,09:16:30+04\"\r\n"[..],
            &b"\r\n+CMGL: 7,\"REC UNREAD\",\"+41791234567\",,\"16/02/12,09:17:30+04\"\r\n"[..],
        ] {
            let ty = if raw.starts_with(b"\r\n+") {
                LineType::Plus
            } else {
                LineType::Text
            };
            message_index(&Line::new(ty, raw), &mut ix, &mut total);
        }
        assert_eq!(total, 3);
        assert_eq!(ix, [1, 4]);
    }

    #[test]
    fn cmgr_header_and_body() {
        let mut number = String::<32>::new();
        let mut body = [0u8; 32];
        let mut read = MessageRead::new(&mut number, &mut body);

        read.extract(&Line::new(LineType::Text, b"\r\nstray\r\n"));
        assert_eq!(read.len, None);

        read.extract(&Line::new(
            LineType::Plus,
            b"\r\n+CMGR: \"REC UNREAD\",\"+41791234567\",,\"16/02/12,09:15:30+04\"\r\n",
        ));
        read.extract(&Line::new(LineType::Text, b"Hello world\r\n"));
        read.extract(&Line::new(LineType::Text, b"second line\r\n"));
        let len = read.len.unwrap();
        assert_eq!(&body[..len], b"Hello world");
        assert_eq!(number.as_str(), "+41791234567");
    }
}
