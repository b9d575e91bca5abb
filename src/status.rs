//! Device and network status records, filled in piecemeal by the response
//! extractors. Empty strings and `None` mean "unknown".
use core::fmt;

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::modules::Module;
use crate::registration::{AccessTechnology, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sim {
    #[default]
    Unknown,
    Missing,
    Pin,
    Ready,
}

/// UART power saving, `+UPSV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerSaving {
    #[default]
    Disabled,
    Enabled,
    Active,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub module: Module,
    pub power_saving: PowerSaving,
    pub sim: Sim,
    pub ccid: String<20>,
    pub imsi: String<15>,
    pub imei: String<15>,
    pub meid: String<18>,
    pub manufacturer: String<16>,
    pub model: String<16>,
    pub version: String<16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    /// Circuit switched registration
    pub csd: Status,
    /// Packet switched registration
    pub psd: Status,
    pub act: AccessTechnology,
    /// Received signal strength in dBm, -113..=-51
    pub rssi: Option<i16>,
    /// Bit error rate indicator in tenths of a percent
    pub ber: Option<u8>,
    pub operator: String<16>,
    pub number: String<32>,
    /// Location area code
    pub lac: Option<u16>,
    pub ci: Option<u32>,
}

impl NetworkStatus {
    /// Both domains are registered, home or roaming
    pub fn registered(&self) -> bool {
        self.csd.registered() && self.psd.registered()
    }
}

fn field(f: &mut fmt::Formatter<'_>, name: &str, value: &str) -> fmt::Result {
    if value.is_empty() {
        return Ok(());
    }
    write!(f, "\r\n  {:<20}{}", name, value)
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Modem::devStatus")?;
        if self.module != Module::Unknown {
            field(f, "Device:", self.module.name())?;
        }
        let lpm = match self.power_saving {
            PowerSaving::Disabled => "Disabled",
            PowerSaving::Enabled => "Enabled",
            PowerSaving::Active => "Active",
        };
        field(f, "Power Save:", lpm)?;
        let sim = match self.sim {
            Sim::Unknown => "",
            Sim::Missing => "Missing",
            Sim::Pin => "Pin",
            Sim::Ready => "Ready",
        };
        field(f, "SIM:", sim)?;
        field(f, "CCID:", &self.ccid)?;
        field(f, "IMEI:", &self.imei)?;
        field(f, "IMSI:", &self.imsi)?;
        field(f, "MEID:", &self.meid)?;
        field(f, "Manufacturer:", &self.manufacturer)?;
        field(f, "Model:", &self.model)?;
        field(f, "Version:", &self.version)
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Modem::netStatus")?;
        if self.csd != Status::Unknown {
            field(f, "CSD Registration:", self.csd.name())?;
        }
        if self.psd != Status::Unknown {
            field(f, "PSD Registration:", self.psd.name())?;
        }
        if self.act != AccessTechnology::Unknown {
            field(f, "Access Technology:", self.act.name())?;
        }
        if let Some(rssi) = self.rssi {
            write!(f, "\r\n  {:<20}{} dBm", "Signal Strength:", rssi)?;
        }
        if let Some(ber) = self.ber {
            write!(f, "\r\n  {:<20}{}", "Bit Error Rate:", ber)?;
        }
        field(f, "Operator:", &self.operator)?;
        if let Some(lac) = self.lac {
            write!(f, "\r\n  {:<20}{:04X}", "Location Area Code:", lac)?;
        }
        if let Some(ci) = self.ci {
            write!(f, "\r\n  {:<20}{:08X}", "Cell ID:", ci)?;
        }
        field(f, "Phone Number:", &self.number)
    }
}
