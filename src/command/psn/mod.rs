//! ### 18 - Packet Switched Data Services Commands
//!
//! The module's internal TCP/IP stack runs on top of a PSD profile. Profile
//! [`types::PROFILE_ID`] is configured with `+UPSD`, activated with `+UPSDA`
//! and queried with `+UPSND`.
pub mod responses;
pub mod types;
pub mod urc;

use atat::atat_derive::AtatCmd;
use types::{
    GPRSAttachedState, GPRSNetworkRegistrationUrcConfig, PacketSwitchedAction,
    PacketSwitchedNetworkDataParam, PacketSwitchedParam,
};

use super::NoResponse;

/// 18.7 Set Packet switched data configuration +UPSD
///
/// Sets or reads all the parameters in a specific packet switched data (PSD)
/// profile. The command is used to set up the PDP context parameters for an
/// internal context, i.e. a data connection using the internal IP stack and
/// related AT commands for sockets.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UPSD", NoResponse, timeout_ms = 10000)]
pub struct SetPacketSwitchedConfig {
    #[at_arg(position = 0)]
    pub profile_id: u8,
    #[at_arg(position = 1)]
    pub param: PacketSwitchedParam,
}

/// 18.8 Set Packet switched data action +UPSDA
///
/// Performs the requested action for the specified PSD profile. If the
/// activation or deactivation is aborted, the +UUPSDA URC is provided. The +UUPSDD
/// URC is raised when the data connection related to the provided PSD profile
/// is deactivated either explicitly by the network or due to radio conditions.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UPSDA", NoResponse, timeout_ms = 150000)]
pub struct SetPacketSwitchedAction {
    #[at_arg(position = 0)]
    pub profile_id: u8,
    #[at_arg(position = 1)]
    pub action: PacketSwitchedAction,
}

/// 18.9 Packet switched network-assigned data +UPSND
///
/// Returns the current (dynamic) network-assigned or network-negotiated value
/// of the specified parameter for the active PDP context associated with the
/// specified PSD profile.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UPSND", NoResponse, timeout_ms = 10000)]
pub struct GetPacketSwitchedNetworkData {
    #[at_arg(position = 0)]
    pub profile_id: u8,
    #[at_arg(position = 1)]
    pub param: PacketSwitchedNetworkDataParam,
}

/// 18.14 Set GPRS attach or detach +CGATT
///
/// Register (attach) the MT to, or deregister (detach) the MT from the GPRS
/// service. After this command the MT remains in AT command mode.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGATT", NoResponse, timeout_ms = 180000)]
pub struct SetGPRSAttached {
    #[at_arg(position = 0)]
    pub state: GPRSAttachedState,
}

/// 18.27 GPRS network registration status +CGREG
///
/// Configures the GPRS network registration information. Depending on the <n> parameter value a URC can be
/// issued:
/// - +CGREG: <stat> if <n>=1 and there is a change in the GPRS network registration status in GERAN/UTRAN
/// - +CGREG: <stat>[,<lac>,<ci>[,<AcT>,<rac>]] if <n>=2 and there is a change of the network cell in GERAN/UTRAN
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGREG", NoResponse)]
pub struct SetGPRSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: GPRSNetworkRegistrationUrcConfig,
}

/// 18.27 GPRS network registration status +CGREG
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGREG?", NoResponse, timeout_ms = 10000)]
pub struct GetGPRSNetworkRegistrationStatus;

/// Mobile IP address +CMIP
///
/// Read the IP address assigned to a CDMA module once its data session is up.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMIP?", NoResponse, timeout_ms = 10000)]
pub struct GetMobileIp;
