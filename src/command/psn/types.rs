//! Argument and parameter types used by Packet Switched Data Services Commands and Responses
use core::fmt::Write;

use atat::atat_derive::AtatEnum;
use heapless::String;
use no_std_net::Ipv4Addr;

use crate::config::Auth;

/// Internal PDP profile used for the data connection
pub const PROFILE_ID: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GPRSNetworkRegistrationUrcConfig {
    /// • 0 (default value): network registration URC disabled
    UrcDisabled = 0,
    /// • 1: network registration URC enabled
    UrcEnabled = 1,
    /// • 2: network registration and location information URC enabled
    UrcVerbose = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GPRSAttachedState {
    Detached = 0,
    Attached = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuthenticationType {
    /// • 0 (factory-programmed value): none
    None = 0,
    /// • 1: PAP
    PAP = 1,
    /// • 2: CHAP
    CHAP = 2,
    /// • 3: automatic selection of authentication type (none/CHAP/PAP)
    Auto = 3,
}

impl From<Auth> for AuthenticationType {
    fn from(auth: Auth) -> Self {
        match auth {
            Auth::None => Self::None,
            Auth::Pap => Self::PAP,
            Auth::Chap => Self::CHAP,
            Auth::Detect => Self::Auto,
        }
    }
}

/// `<param_tag>` and value of `+UPSD`
#[derive(Debug, Clone, PartialEq, Eq, AtatEnum)]
pub enum PacketSwitchedParam {
    /// • 1: APN - <param_val> defines the APN text string, e.g. "apn.provider.com"; the maximum length is 99.
    #[at_arg(value = 1)]
    APN(String<99>),
    /// • 2: username - <param_val> is the user name text string for the authentication phase.
    #[at_arg(value = 2)]
    Username(String<64>),
    /// • 3: password - <param_val> is the password text string for the authentication phase.
    #[at_arg(value = 3)]
    Password(String<64>),
    /// • 6: authentication - the <param_val> parameter selects the authentication type
    #[at_arg(value = 6)]
    Authentication(AuthenticationType),
    /// • 7: IP address - <param_val> is the text string of the static IP address
    /// given by the ISP in dotted decimal notation form; "0.0.0.0" selects a
    /// dynamic IP address
    #[at_arg(value = 7)]
    IPAddress(String<15>),
}

impl PacketSwitchedParam {
    pub fn ip_address(ip: Ipv4Addr) -> Self {
        let mut s = String::new();
        // A dotted quad never exceeds 15 characters
        write!(s, "{}", ip).ok();
        Self::IPAddress(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketSwitchedAction {
    /// • 3: activate; it activates a PDP context with the specified profile,
    /// using the current parameters of the profile
    Activate = 3,
    /// • 4: deactivate; it deactivates the PDP context associated with the
    /// specified profile
    Deactivate = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketSwitchedNetworkDataParam {
    /// • 0: IP address: dynamic IP address assigned during PDP context activation
    IPAddress = 0,
    /// • 8: PSD profile status: if the profile is active the return value is 1, 0 otherwise
    PsdProfileStatus = 8,
}
