//! ### 11 - Short Messages Service
//!
//! Only text mode is used: messages are listed, read and sent as plain
//! strings.
pub mod responses;
pub mod types;
pub mod urc;

use atat::atat_derive::AtatCmd;
use types::{MessageFormat, NewMessageIndicationMode, NewMessageRouting};

use super::NoResponse;

/// Terminates the message text of `+CMGS`
pub const CTRL_Z: u8 = 0x1A;

/// 11.4 Message format +CMGF
///
/// Sets the input and output format of the short messages.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGF", NoResponse)]
pub struct SetMessageFormat {
    #[at_arg(position = 0)]
    pub mode: MessageFormat,
}

/// 11.8 New message indication +CNMI
///
/// Selects how newly received messages are indicated. With
/// [`NewMessageRouting::StoreAndNotify`] they are stored and announced with the
/// `+CMTI: <mem>,<index>` URC.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CNMI", NoResponse)]
pub struct SetNewMessageIndication {
    #[at_arg(position = 0)]
    pub mode: NewMessageIndicationMode,
    #[at_arg(position = 1)]
    pub mt: NewMessageRouting,
}

/// 11.12 List message +CMGL
///
/// Returns the messages with status `<stat>` from the preferred message storage,
/// e.g. `"REC UNREAD"` or `"ALL"`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGL", NoResponse, timeout_ms = 10000)]
pub struct ListMessages<'a> {
    #[at_arg(position = 0, len = 10)]
    pub stat: &'a str,
}

/// 11.13 Read message +CMGR
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGR", NoResponse, timeout_ms = 10000)]
pub struct ReadMessage {
    #[at_arg(position = 0)]
    pub index: u16,
}

/// 11.15 Delete message +CMGD
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGD", NoResponse, timeout_ms = 10000)]
pub struct DeleteMessage {
    #[at_arg(position = 0)]
    pub index: u16,
}

/// 11.16 Send message +CMGS
///
/// The module answers with the `>` prompt, after which the message text
/// terminated by [`CTRL_Z`] is sent.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGS", NoResponse, timeout_ms = 180000)]
pub struct SendMessage<'a> {
    #[at_arg(position = 0, len = 32)]
    pub number: &'a str,
}
