//! ### 8 - Supplementary services
pub mod responses;

use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// 8.15 Unstructured supplementary service data +CUSD
///
/// Sends a USSD string, e.g. `*100#`. With `n` set to 1 the `+CUSD` result
/// code the network answers with is enabled; it arrives after the final `OK`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CUSD", NoResponse, timeout_ms = 10000)]
pub struct SendUssd<'a> {
    #[at_arg(position = 0)]
    pub n: u8,
    #[at_arg(position = 1, len = 182)]
    pub command: &'a str,
}
