//! Extractors for General Commands
use heapless::String;

use crate::command::{copy_str, Line, Resp};
use crate::digest::LineType;

/// Single line text answers (`ATI`, `+CGMI`, `+CGMM`, `+CGMR`, `+CGSN`,
/// `+CIMI`). The first non-empty text line wins.
pub fn text<const N: usize>(line: &Line, out: &mut String<N>) -> Resp {
    if line.ty == LineType::Text && out.is_empty() {
        if let Some(t) = line.text().filter(|t| !t.is_empty()) {
            copy_str(out, t);
        }
    }
    Resp::Wait
}

/// Like [`text`] but keeps only the leading run of hex digits, for identities
/// such as the IMEI, IMSI and the MEID of CDMA modules.
pub fn identity<const N: usize>(line: &Line, out: &mut String<N>) -> Resp {
    if line.ty == LineType::Text && out.is_empty() {
        if let Some(t) = line.text() {
            let end = t
                .bytes()
                .position(|b| !b.is_ascii_hexdigit())
                .unwrap_or(t.len());
            if end > 0 {
                copy_str(out, &t[..end]);
            }
        }
    }
    Resp::Wait
}

/// 4.12 Card identification +CCID
pub fn ccid<const N: usize>(line: &Line, out: &mut String<N>) -> Resp {
    if let Some(ccid) = line.response("+CCID").and_then(|mut a| a.string()) {
        copy_str(out, ccid);
    }
    Resp::Wait
}
