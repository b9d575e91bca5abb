//! Line classifier for the modem response stream.
//!
//! [`digest`] looks at the bytes currently buffered from the modem and finds
//! the first complete line or token in them. It never consumes anything on its
//! own; the caller removes `len` bytes once a line has been found.

/// Type of a classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineType {
    Ok,
    Error,
    Ring,
    Connect,
    NoCarrier,
    NoDialtone,
    Busy,
    NoAnswer,
    /// Data entry prompt (`>` or `@`)
    Prompt,
    /// Information response or unsolicited result code starting with `+`
    Plus,
    /// Anything else
    Text,
}

impl LineType {
    /// Whether this line ends a command exchange
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Ok
                | Self::Error
                | Self::Prompt
                | Self::NoCarrier
                | Self::NoDialtone
                | Self::Busy
                | Self::NoAnswer
        )
    }
}

/// Outcome of a single classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scan {
    /// Nothing that looks like a line is buffered
    NotFound,
    /// A line has started but is not terminated yet
    Wait,
    /// A line of the given type, `len` bytes long including delimiters
    Found(LineType, usize),
}

/// Result of matching a single pattern at a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Match {
    No,
    Partial,
    Len(usize),
}

/// Responses carrying a length-prefixed payload. The payload may contain CR/LF,
/// so these are matched before the generic line patterns.
const FORMATTED: &[&[u8]] = &[
    b"\r\n+USORD: %d,%d,\"%c\"\r\n",
    b"\r\n+USORF: %d,\"%d.%d.%d.%d\",%d,%d,\"%c\"\r\n",
    b"\r\n+URDBLOCK: %s,%d,\"%c\"\r\n",
];

struct Token {
    start: &'static [u8],
    end: Option<&'static [u8]>,
    ty: LineType,
}

const fn token(start: &'static [u8], end: Option<&'static [u8]>, ty: LineType) -> Token {
    Token { start, end, ty }
}

const TOKENS: &[Token] = &[
    token(b"\r\nOK\r\n", None, LineType::Ok),
    token(b"\r\nERROR\r\n", None, LineType::Error),
    token(b"\r\n+CME ERROR:", Some(b"\r\n"), LineType::Error),
    token(b"\r\n+CMS ERROR:", Some(b"\r\n"), LineType::Error),
    token(b"\r\nRING\r\n", None, LineType::Ring),
    token(b"\r\nCONNECT\r\n", None, LineType::Connect),
    token(b"\r\nNO CARRIER\r\n", None, LineType::NoCarrier),
    token(b"\r\nNO DIALTONE\r\n", None, LineType::NoDialtone),
    token(b"\r\nBUSY\r\n", None, LineType::Busy),
    token(b"\r\nNO ANSWER\r\n", None, LineType::NoAnswer),
    token(b"\r\n+", Some(b"\r\n"), LineType::Plus),
    token(b"\r\n@", None, LineType::Prompt),
    token(b"\r\n>", None, LineType::Prompt),
    token(b"\n>", None, LineType::Prompt),
];

/// Classify the first line in `buf`, looking at no more than `max_len` bytes.
///
/// `after_line` tells whether the bytes consumed right before `buf` ended with
/// a line feed. Only when they did not may a token at the start of `buf` come
/// without its leading CRLF. Otherwise a text line opening with `@`, `>` or
/// `+`, such as an SMS body, would pass for a prompt or a response.
///
/// Once `max_len` bytes are buffered without a recognizable line, the whole
/// window is returned as [`LineType::Text`] so a full buffer can always make
/// progress.
pub fn digest(buf: &[u8], max_len: usize, after_line: bool) -> Scan {
    let saturated = buf.len() >= max_len;
    let data = &buf[..buf.len().min(max_len)];

    for offset in 0..data.len() {
        let rest = &data[offset..];
        let bare = offset == 0 && !after_line;

        let found = match_formatted(rest, bare)
            .map(|r| r.map(|len| (LineType::Plus, len)))
            .or_else(|| match_token(rest, bare));

        match found {
            Some(Ok((ty, len))) if offset == 0 => return Scan::Found(ty, len),
            Some(Ok(_)) => return Scan::Found(LineType::Text, offset),
            Some(Err(())) if !saturated => return Scan::Wait,
            _ => {}
        }
    }

    if saturated && !data.is_empty() {
        Scan::Found(LineType::Text, data.len())
    } else {
        Scan::NotFound
    }
}

/// `Some(Ok(len))` on a match, `Some(Err(()))` when the data ends inside a
/// pattern, `None` when nothing matches.
fn resolve(results: impl Iterator<Item = Match>) -> Option<Result<usize, ()>> {
    let mut partial = false;
    for m in results {
        match m {
            Match::Len(len) => return Some(Ok(len)),
            Match::Partial => partial = true,
            Match::No => {}
        }
    }
    partial.then_some(Err(()))
}

fn match_formatted(data: &[u8], bare: bool) -> Option<Result<usize, ()>> {
    // Once a payload line has started, a CRLF inside its payload must not be
    // taken for the end of a generic `+` line.
    resolve(FORMATTED.iter().flat_map(|fmt| {
        let bare = bare.then(|| parse_formatted(data, &fmt[2..]));
        core::iter::once(parse_formatted(data, fmt)).chain(bare)
    }))
}

fn match_token(data: &[u8], bare: bool) -> Option<Result<(LineType, usize), ()>> {
    let mut partial = false;
    for t in TOKENS {
        let mut candidates = [Match::No; 2];
        candidates[0] = parse_match(data, t.start, t.end);
        if bare && t.start.starts_with(b"\r\n") {
            candidates[1] = parse_match(data, &t.start[2..], t.end);
        }
        for m in candidates {
            match m {
                Match::Len(len) => return Some(Ok((t.ty, len))),
                Match::Partial => partial = true,
                Match::No => {}
            }
        }
    }
    partial.then_some(Err(()))
}

/// Match `start` at the beginning of `data`, then consume up to and including
/// `end` if given.
pub(crate) fn parse_match(data: &[u8], start: &[u8], end: Option<&[u8]>) -> Match {
    for (i, &b) in start.iter().enumerate() {
        match data.get(i) {
            None => return Match::Partial,
            Some(&d) if d != b => return Match::No,
            _ => {}
        }
    }

    let Some(end) = end else {
        return Match::Len(start.len());
    };

    data[start.len()..]
        .windows(end.len())
        .position(|w| w == end)
        .map_or(Match::Partial, |pos| {
            Match::Len(start.len() + pos + end.len())
        })
}

/// Match `data` against a template where `%d` is a decimal number, `%s` a
/// double quoted string and `%c` exactly as many bytes as the most recent `%d`
/// said. Everything else is literal.
pub(crate) fn parse_formatted(data: &[u8], fmt: &[u8]) -> Match {
    let mut i = 0;
    let mut j = 0;
    let mut count = 0usize;

    while j < fmt.len() {
        if fmt[j] == b'%' && j + 1 < fmt.len() {
            match fmt[j + 1] {
                b'd' => {
                    let start = i;
                    count = 0;
                    while let Some(d) = data.get(i).filter(|d| d.is_ascii_digit()) {
                        count = count.saturating_mul(10).saturating_add((d - b'0') as usize);
                        i += 1;
                    }
                    if i == data.len() {
                        return Match::Partial;
                    }
                    if i == start {
                        return Match::No;
                    }
                }
                b'c' => {
                    if data.len() - i < count {
                        return Match::Partial;
                    }
                    i += count;
                }
                b's' => {
                    match data.get(i) {
                        None => return Match::Partial,
                        Some(b'"') => i += 1,
                        Some(_) => return Match::No,
                    }
                    loop {
                        match data.get(i) {
                            None => return Match::Partial,
                            Some(b'"') => break,
                            Some(b'\r' | b'\n') => return Match::No,
                            Some(_) => i += 1,
                        }
                    }
                    i += 1;
                }
                _ => return Match::No,
            }
            j += 2;
        } else {
            match data.get(i) {
                None => return Match::Partial,
                Some(&d) if d != fmt[j] => return Match::No,
                _ => {}
            }
            i += 1;
            j += 1;
        }
    }

    Match::Len(i)
}
