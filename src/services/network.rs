use core::str::FromStr;

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::{String, Vec};
use no_std_net::Ipv4Addr;

use crate::client::{Client, ModemState};
use crate::command::dns::{responses::resolved_ip, types::ResolutionType, ResolveNameIp};
use crate::command::network_service::responses::{
    operator, registration, signal_quality, subscriber_number,
};
use crate::command::network_service::{
    GetNetworkRegistrationStatus, GetOperatorSelection, GetSignalQuality, GetSubscriberNumber,
};
use crate::command::psn::responses::{ip_address, mobile_ip, profile_active};
use crate::command::psn::types::{
    GPRSAttachedState, PacketSwitchedAction, PacketSwitchedNetworkDataParam, PacketSwitchedParam,
    PROFILE_ID,
};
use crate::command::psn::{
    GetGPRSNetworkRegistrationStatus, GetMobileIp, GetPacketSwitchedNetworkData,
    SetGPRSAttached, SetPacketSwitchedAction, SetPacketSwitchedConfig,
};
use crate::config::{Apn, Auth};
use crate::error::{Error, GenericError};
use crate::module_timing;
use crate::modules::ModuleParams;
use crate::registration::{Domain, Status};
use crate::transport::Transport;

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    /// Poll the registration state every second until both domains are
    /// registered or `timeout` elapsed. A zero timeout checks exactly once.
    pub(crate) fn register_net(&mut self, timeout: Duration) -> Result<(), Error> {
        info!(self.debug; "Modem::register");
        let start = Instant::now();
        loop {
            if self.check_net_status()? {
                self.shared.state = ModemState::Registered;
                return Ok(());
            }
            if start.elapsed() >= timeout {
                break;
            }
            self.sleep(module_timing::registration_poll());
        }

        let net = &self.shared.net;
        if net.csd == Status::Denied || net.psd == Status::Denied {
            Err(Error::RegistrationDenied)
        } else {
            Err(Error::NotRegistered)
        }
    }

    /// Query the registration of both domains and, once registered, the
    /// operator, own number and signal quality. Returns whether the module
    /// is registered.
    pub(crate) fn check_net_status(&mut self) -> Result<bool, Error> {
        let cdma = self.shared.dev.module.is_cdma();

        self.exec(&GetNetworkRegistrationStatus, |l, s| {
            registration(l, Domain::Circuit, cdma, &mut s.net)
        })?;
        if !cdma {
            self.exec(&GetGPRSNetworkRegistrationStatus, |l, s| {
                registration(l, Domain::Packet, cdma, &mut s.net)
            })?;
        }

        let registered = self.shared.net.registered();
        if registered {
            if !cdma {
                self.exec(&GetOperatorSelection, |l, s| operator(l, &mut s.net))?;
            }
            // Not every SIM stores its own number
            self.exec(&GetSubscriberNumber, |l, s| subscriber_number(l, &mut s.net))
                .ok();
            self.exec(&GetSignalQuality, |l, s| signal_quality(l, &mut s.net))?;
        }
        Ok(registered)
    }

    /// Attach to the packet domain and bring up the data connection,
    /// returning the assigned address.
    ///
    /// With [`Auth::Detect`] the configured authentication order is tried
    /// until the context activates.
    pub(crate) fn join(&mut self, apn: &Apn, auth: Auth) -> Result<Ipv4Addr, Error> {
        info!(self.debug; "Modem::join");
        if let Some(ip) = self.shared.joined_ip() {
            return Ok(ip);
        }

        if self.shared.dev.module.is_cdma() {
            self.exec(&GetMobileIp, |l, s| mobile_ip(l, &mut s.ip))?;
        } else {
            self.activate_profile(apn, auth)?;
            self.exec(
                &GetPacketSwitchedNetworkData {
                    profile_id: PROFILE_ID,
                    param: PacketSwitchedNetworkDataParam::IPAddress,
                },
                |l, s| ip_address(l, &mut s.ip),
            )?;
        }

        let ip = self.shared.ip;
        if ip == Ipv4Addr::UNSPECIFIED {
            return Err(Error::NoAddress);
        }
        self.shared.state = ModemState::Joined;
        info!(self.debug; "Got IP address {}", IpDisplay(ip));
        Ok(ip)
    }

    fn activate_profile(&mut self, apn: &Apn, auth: Auth) -> Result<(), Error> {
        self.exec_simple(&SetGPRSAttached {
            state: GPRSAttachedState::Attached,
        })?;

        // A context left over from an earlier session must go first
        let mut active = false;
        self.exec(
            &GetPacketSwitchedNetworkData {
                profile_id: PROFILE_ID,
                param: PacketSwitchedNetworkDataParam::PsdProfileStatus,
            },
            |l, _| profile_active(l, &mut active),
        )?;
        if active {
            self.exec_simple(&SetPacketSwitchedAction {
                profile_id: PROFILE_ID,
                action: PacketSwitchedAction::Deactivate,
            })?;
        }

        let mut order: Vec<Auth, 3> = Vec::new();
        if auth == Auth::Detect {
            order = self.auth_order.clone();
        }
        if order.is_empty() {
            order.push(auth).ok();
        }

        let (name, username, password) = apn.parts();
        let overflow = |_| Error::Generic(GenericError::Overflow);
        let name = String::try_from(name).map_err(overflow)?;
        let username = String::try_from(username).map_err(overflow)?;
        let password = String::try_from(password).map_err(overflow)?;
        let mut result = Err(Error::Generic(GenericError::Unsupported));
        for auth in order {
            trace!(self.debug; "Activating profile with {:?} authentication", auth);
            for param in [
                PacketSwitchedParam::ip_address(Ipv4Addr::UNSPECIFIED),
                PacketSwitchedParam::APN(name.clone()),
                PacketSwitchedParam::Username(username.clone()),
                PacketSwitchedParam::Password(password.clone()),
                PacketSwitchedParam::Authentication(auth.into()),
            ] {
                self.exec_simple(&SetPacketSwitchedConfig {
                    profile_id: PROFILE_ID,
                    param,
                })?;
            }

            result = self.exec_simple(&SetPacketSwitchedAction {
                profile_id: PROFILE_ID,
                action: PacketSwitchedAction::Activate,
            });
            if result.is_ok() {
                break;
            }
        }
        result
    }

    /// Tear down the data connection
    pub(crate) fn disconnect(&mut self) -> Result<(), Error> {
        info!(self.debug; "Modem::disconnect");
        if self.shared.ip == Ipv4Addr::UNSPECIFIED {
            return Ok(());
        }
        if !self.shared.dev.module.is_cdma() {
            self.exec_simple(&SetPacketSwitchedAction {
                profile_id: PROFILE_ID,
                action: PacketSwitchedAction::Deactivate,
            })?;
        }
        self.shared.ip = Ipv4Addr::UNSPECIFIED;
        self.shared.state = ModemState::Disconnected;
        Ok(())
    }

    /// Resolve `host`, which may already be a dotted address
    pub(crate) fn gethostbyname(&mut self, host: &str) -> Result<Ipv4Addr, Error> {
        if let Ok(ip) = Ipv4Addr::from_str(host) {
            return Ok(ip);
        }
        let mut ip = Ipv4Addr::UNSPECIFIED;
        let cmd = ResolveNameIp {
            resolution_type: ResolutionType::DomainNameToIp,
            domain_string: host,
        };
        self.exec(&cmd, |l, _| resolved_ip(l, &mut ip))
        .map_err(|_| Error::Dns)?;
        if ip == Ipv4Addr::UNSPECIFIED {
            return Err(Error::Dns);
        }
        Ok(ip)
    }
}

/// `Ipv4Addr` for both logging backends
pub(crate) struct IpDisplay(pub Ipv4Addr);

impl core::fmt::Display for IpDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IpDisplay {
    fn format(&self, f: defmt::Formatter<'_>) {
        let [a, b, c, d] = self.0.octets();
        defmt::write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}
