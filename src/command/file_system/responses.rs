//! Extractors for File system Commands
use crate::command::{Line, Resp};

/// 22.5 Partial read file +URDBLOCK
///
/// `+URDBLOCK: <filename>,<size>,"<data>"`. Blocks of other files are ignored.
pub fn file_block(line: &Line, filename: &str, buf: &mut [u8], read: &mut Option<usize>) -> Resp {
    if let Some(mut args) = line.response("+URDBLOCK") {
        if args.string() != Some(filename) {
            return Resp::Wait;
        }
        let Some(size) = args.num::<usize>() else {
            return Resp::Wait;
        };
        if let Some(data) = args.payload(size) {
            let n = data.len().min(buf.len());
            buf[..n].copy_from_slice(&data[..n]);
            *read = Some(n);
        }
    }
    Resp::Wait
}
