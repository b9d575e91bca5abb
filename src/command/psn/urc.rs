//! Unsolicited responses for Packet Switched Data Services Commands
use crate::command::Line;

/// +UUPSDD: <profile_id>, the network deactivated the data connection of the
/// profile
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataConnectionDeactivated {
    pub profile_id: u8,
}

impl DataConnectionDeactivated {
    pub fn parse(line: &Line) -> Option<Self> {
        let mut args = line.response("+UUPSDD")?;
        Some(Self {
            profile_id: args.num()?,
        })
    }
}
