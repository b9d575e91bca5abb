use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::socket::SocketRange;

pub trait ModuleParams: Copy {
    /// The time for which PWR_ON must be pulled down to effect power-on
    fn power_on_pull_time(&self) -> Duration {
        Duration::from_micros(50)
    }

    /// The time for which PWR_ON must be pulled down to effect power-off
    fn power_off_pull_time(&self) -> Duration {
        Duration::from_secs(1)
    }

    /// How long to wait before the module is ready after boot
    fn boot_wait(&self) -> Duration {
        Duration::from_secs(1)
    }

    /// How long the reset line has to be held for to reset the cellular module
    fn reset_hold(&self) -> Duration {
        Duration::from_millis(50)
    }

    /// Module side socket indices available to the application
    fn socket_range(&self) -> SocketRange {
        SocketRange::new(1, 7)
    }

    /// CDMA modules register and get their address differently
    fn is_cdma(&self) -> bool {
        false
    }

    /// Largest block written with a single socket write
    fn max_write_len(&self) -> usize {
        1024
    }

    /// Largest block read with a single socket read
    fn max_read_len(&self) -> usize {
        128
    }
}

/// Supported module families, as reported by `ATI`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Module {
    #[default]
    Unknown,
    SaraG350,
    LisaU200,
    LisaC200,
    SaraU260,
    SaraU270,
    LeonG200,
}

impl Module {
    /// Identify the module from the first line of `ATI`
    pub fn from_info(info: &str) -> Self {
        const IDS: &[(&str, Module)] = &[
            ("SARA-G35", Module::SaraG350),
            ("LISA-U2", Module::LisaU200),
            ("LISA-C2", Module::LisaC200),
            ("SARA-U260", Module::SaraU260),
            ("SARA-U270", Module::SaraU270),
            ("LEON-G2", Module::LeonG200),
        ];

        match IDS.iter().find(|(id, _)| info.contains(id)) {
            Some((_, module)) => *module,
            None => {
                warn!(
                    "Attempting to run {} using generic module parameters! This may or may not work.",
                    info
                );
                Self::Unknown
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::SaraG350 => "SARA-G350",
            Self::LisaU200 => "LISA-U200",
            Self::LisaC200 => "LISA-C200",
            Self::SaraU260 => "SARA-U260",
            Self::SaraU270 => "SARA-U270",
            Self::LeonG200 => "LEON-G200",
        }
    }
}

impl ModuleParams for Module {
    fn power_on_pull_time(&self) -> Duration {
        match self {
            Self::LisaU200 | Self::LisaC200 => Duration::from_millis(150),
            Self::LeonG200 => Duration::from_millis(5),
            _ => Duration::from_micros(50),
        }
    }

    fn boot_wait(&self) -> Duration {
        match self {
            Self::LisaU200 | Self::LisaC200 => Duration::from_secs(5),
            _ => Duration::from_secs(1),
        }
    }

    fn socket_range(&self) -> SocketRange {
        match self {
            Self::LisaC200 => SocketRange::new(18, 29),
            _ => SocketRange::new(1, 7),
        }
    }

    fn is_cdma(&self) -> bool {
        matches!(self, Self::LisaC200)
    }

    fn max_read_len(&self) -> usize {
        match self {
            Self::LisaC200 => 64,
            _ => 128,
        }
    }
}
