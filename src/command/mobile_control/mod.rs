//! ### 5 - Mobile equipment control and status Commands
pub mod types;

use atat::atat_derive::AtatCmd;
use types::TerminationErrorMode;

use super::NoResponse;

/// 5.2 Module switch off +CPWROFF
///
/// Switches off the MT. During shut-down current settings are saved in
/// module's non-volatile memory. Using this command can result in the
/// following URCs being reported: "+UUSIMSTAT:0" and "+UUPSDD: <profile_id>".
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPWROFF", NoResponse, timeout_ms = 40000)]
pub struct ModuleSwitchOff;

/// 5.19 Report mobile termination error +CMEE
///
/// Configures the formatting of the result code +CME ERROR: <err> as an indication of an error relating to the
/// functionality of the MT. When enabled, MT related errors cause +CME ERROR: <err> final result code instead
/// of the regular ERROR final result code.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMEE", NoResponse)]
pub struct SetReportMobileTerminationError {
    #[at_arg(position = 0)]
    pub n: TerminationErrorMode,
}
