//! Unsolicited responses for Short Messages Service Commands
use crate::command::Line;

/// +CMTI: <mem>,<index>, a new message was stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessageIndication<'a> {
    pub mem: &'a str,
    pub index: u16,
}

impl<'a> NewMessageIndication<'a> {
    pub fn parse(line: &Line<'a>) -> Option<Self> {
        let mut args = line.response("+CMTI")?;
        Some(Self {
            mem: args.string()?,
            index: args.num()?,
        })
    }
}
