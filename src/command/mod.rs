//! AT Commands for u-blox cellular modules
//!
//! Following the u-blox AT Commands Manual for SARA-G/SARA-U/LISA-U/LISA-C and
//! LEON-G modules. Commands are serialized with the `atat` derive; the matching
//! response lines are picked apart by the extractors in each area's
//! `responses` module.

pub mod control;
pub mod device_lock;
pub mod dns;
pub mod file_system;
pub mod general;
pub mod ip_transport_layer;
pub mod mobile_control;
pub mod network_service;
pub mod psn;
pub mod sms;
pub mod supplementary_services;
pub mod system_features;

use core::str::FromStr;

use atat::atat_derive::AtatResp;

use crate::digest::LineType;

/// Responses are taken apart line by line by the extractors, so every
/// command declares this as its `atat` response type.
#[derive(Clone, AtatResp)]
pub struct NoResponse;

/// Unsolicited result codes the engine reacts to on its own, whatever
/// exchange is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Urc<'a> {
    /// +CREG, location fields are picked up by the registration extractor
    NetworkRegistration,
    /// +CGREG
    GPRSNetworkRegistration,
    DataConnectionDeactivated(psn::urc::DataConnectionDeactivated),
    SocketDataAvailable(ip_transport_layer::urc::SocketDataAvailable),
    SocketClosed(ip_transport_layer::urc::SocketClosed),
    NewMessageIndication(sms::urc::NewMessageIndication<'a>),
}

impl<'a> Urc<'a> {
    pub fn parse(line: &Line<'a>) -> Option<Self> {
        if line.ty != LineType::Plus {
            return None;
        }
        let name = line.trimmed();
        if name.starts_with(b"+CREG:") {
            Some(Self::NetworkRegistration)
        } else if name.starts_with(b"+CGREG:") {
            Some(Self::GPRSNetworkRegistration)
        } else if name.starts_with(b"+UUPSDD:") {
            psn::urc::DataConnectionDeactivated::parse(line).map(Self::DataConnectionDeactivated)
        } else if name.starts_with(b"+UUSORD:") || name.starts_with(b"+UUSORF:") {
            ip_transport_layer::urc::SocketDataAvailable::parse(line).map(Self::SocketDataAvailable)
        } else if name.starts_with(b"+UUSOCL:") {
            ip_transport_layer::urc::SocketClosed::parse(line).map(Self::SocketClosed)
        } else if name.starts_with(b"+CMTI:") {
            sms::urc::NewMessageIndication::parse(line).map(Self::NewMessageIndication)
        } else {
            None
        }
    }
}

/// Outcome of a command exchange, as reported by the response matcher or an
/// extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resp {
    /// Keep going. Returned by the matcher itself when the exchange timed out.
    Wait,
    Ok,
    Error,
    Prompt,
    NoCarrier,
    NoDialtone,
    Busy,
    NoAnswer,
}

impl Resp {
    pub(crate) fn from_line(ty: LineType) -> Self {
        match ty {
            LineType::Ok => Self::Ok,
            LineType::Error => Self::Error,
            LineType::Prompt => Self::Prompt,
            LineType::NoCarrier => Self::NoCarrier,
            LineType::NoDialtone => Self::NoDialtone,
            LineType::Busy => Self::Busy,
            LineType::NoAnswer => Self::NoAnswer,
            LineType::Ring | LineType::Connect | LineType::Plus | LineType::Text => Self::Wait,
        }
    }
}

/// A classified line as handed to extractors.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub ty: LineType,
    pub raw: &'a [u8],
}

impl<'a> Line<'a> {
    pub fn new(ty: LineType, raw: &'a [u8]) -> Self {
        Self { ty, raw }
    }

    /// Line content without surrounding CR/LF and blanks
    pub fn trimmed(&self) -> &'a [u8] {
        trim(self.raw)
    }

    /// The trimmed line as text, if it is valid UTF-8
    pub fn text(&self) -> Option<&'a str> {
        core::str::from_utf8(self.trimmed()).ok()
    }

    /// If this is an information response or URC named `name` (e.g. `"+CSQ"`),
    /// return its arguments.
    pub fn response(&self, name: &str) -> Option<Args<'a>> {
        if self.ty != LineType::Plus && self.ty != LineType::Error {
            return None;
        }
        let rest = self.trimmed().strip_prefix(name.as_bytes())?;
        let rest = rest.strip_prefix(b":")?;
        Some(Args::new(trim_start(rest)))
    }
}

/// Cursor over the comma separated arguments of a response line.
///
/// Quoted arguments may contain commas. Parse failures only ever return
/// `None`, so extractors can leave the affected field untouched.
#[derive(Debug, Clone)]
pub struct Args<'a> {
    rest: &'a [u8],
    done: bool,
}

impl<'a> Args<'a> {
    pub fn new(rest: &'a [u8]) -> Self {
        Self { rest, done: false }
    }

    /// Next raw argument, quotes included
    pub fn next_raw(&mut self) -> Option<&'a [u8]> {
        if self.done {
            return None;
        }
        let mut quoted = false;
        let mut end = self.rest.len();
        for (i, &b) in self.rest.iter().enumerate() {
            match b {
                b'"' => quoted = !quoted,
                b',' if !quoted => {
                    end = i;
                    break;
                }
                _ => {}
            }
        }
        let field = &self.rest[..end];
        if end < self.rest.len() {
            self.rest = &self.rest[end + 1..];
        } else {
            self.rest = &[];
            self.done = true;
        }
        Some(trim(field))
    }

    /// Skip one argument
    pub fn skip(&mut self) -> Option<()> {
        self.next_raw().map(|_| ())
    }

    /// Next argument parsed as a decimal number
    pub fn num<T: FromStr>(&mut self) -> Option<T> {
        let raw = self.next_raw()?;
        core::str::from_utf8(raw).ok()?.parse().ok()
    }

    /// Next argument as a string, surrounding quotes removed
    pub fn string(&mut self) -> Option<&'a str> {
        let raw = self.next_raw()?;
        core::str::from_utf8(unquote(raw)).ok()
    }

    /// Next argument as a quoted string; unquoted arguments are rejected
    pub fn quoted(&mut self) -> Option<&'a str> {
        let raw = self.next_raw()?;
        if raw.len() < 2 || !raw.starts_with(b"\"") || !raw.ends_with(b"\"") {
            return None;
        }
        core::str::from_utf8(unquote(raw)).ok()
    }

    /// Next argument as a quoted hexadecimal number, like the `"0A2B"` location
    /// area code of `+CREG`
    pub fn hex(&mut self) -> Option<u32> {
        let s = self.string()?;
        u32::from_str_radix(s, 16).ok()
    }

    /// Whether the next argument is quoted, without consuming it
    pub fn peek_quoted(&self) -> bool {
        !self.done && trim_start(self.rest).starts_with(b"\"")
    }

    /// Take `len` payload bytes enclosed in quotes. The payload may contain any
    /// byte, including quotes and commas, so this must be the last argument.
    pub fn payload(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.done {
            return None;
        }
        let rest = self.rest.strip_prefix(b"\"")?;
        let data = rest.get(..len)?;
        if rest.get(len) != Some(&b'"') {
            return None;
        }
        self.rest = &rest[len + 1..];
        self.done = true;
        Some(data)
    }

    /// Remaining unparsed arguments
    pub fn rest(&self) -> &'a [u8] {
        self.rest
    }
}

fn is_blank(b: &u8) -> bool {
    matches!(b, b'\r' | b'\n' | b' ')
}

pub(crate) fn trim_start(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|b| !is_blank(b)).unwrap_or(s.len());
    &s[start..]
}

pub(crate) fn trim(s: &[u8]) -> &[u8] {
    let s = trim_start(s);
    let end = s.iter().rposition(|b| !is_blank(b)).map_or(0, |i| i + 1);
    &s[..end]
}

pub(crate) fn unquote(s: &[u8]) -> &[u8] {
    match s {
        [b'"', inner @ .., b'"'] => inner,
        _ => s,
    }
}

/// Copy as much of `src` into a bounded string as fits
pub(crate) fn copy_str<const N: usize>(dst: &mut heapless::String<N>, src: &str) {
    dst.clear();
    for c in src.chars() {
        if dst.push(c).is_err() {
            break;
        }
    }
}
