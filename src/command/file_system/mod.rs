//! ### 22 - File System
//!
//! Files live in the module's flash file system, addressed by a name of up to
//! 248 characters.
pub mod responses;

use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// 22.2 Download file +UDWNFILE
///
/// Stores `size` bytes into a file. The module answers with the `>` prompt
/// and then expects the raw data.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UDWNFILE", NoResponse, timeout_ms = 10000)]
pub struct PrepareDownloadFile<'a> {
    #[at_arg(position = 0, len = 248)]
    pub filename: &'a str,
    #[at_arg(position = 1)]
    pub size: usize,
}

/// 22.3 Delete file +UDELFILE
#[derive(Clone, AtatCmd)]
#[at_cmd("+UDELFILE", NoResponse, timeout_ms = 10000)]
pub struct DeleteFile<'a> {
    #[at_arg(position = 0, len = 248)]
    pub filename: &'a str,
}

/// 22.5 Partial read file +URDBLOCK
///
/// Reads `size` bytes starting at `offset`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+URDBLOCK", NoResponse, timeout_ms = 10000)]
pub struct ReadBlock<'a> {
    #[at_arg(position = 0, len = 248)]
    pub filename: &'a str,
    #[at_arg(position = 1)]
    pub offset: usize,
    #[at_arg(position = 2)]
    pub size: usize,
}
