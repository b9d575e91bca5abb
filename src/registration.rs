use serde::{Deserialize, Serialize};

/// Registration state of the circuit switched or packet switched domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    #[default]
    Unknown,
    Denied,
    /// Not registered, searching or not
    None,
    Home,
    Roaming,
}

impl Status {
    pub fn registered(self) -> bool {
        matches!(self, Self::Home | Self::Roaming)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Denied => "Denied",
            Self::None => "None",
            Self::Home => "Home",
            Self::Roaming => "Roaming",
        }
    }
}

impl From<u8> for Status {
    /// `<stat>` of `+CREG` and `+CGREG`
    fn from(v: u8) -> Self {
        match v {
            0 | 2 => Self::None,
            1 => Self::Home,
            3 => Self::Denied,
            5 => Self::Roaming,
            _ => Self::Unknown,
        }
    }
}

/// Radio access technology in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessTechnology {
    #[default]
    Unknown,
    Gsm,
    Edge,
    Utran,
    Cdma,
}

impl AccessTechnology {
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Gsm => "GSM",
            Self::Edge => "Edge",
            Self::Utran => "3G",
            Self::Cdma => "CDMA",
        }
    }
}

impl From<u8> for AccessTechnology {
    /// `<AcTStatus>` of `+CREG`/`+CGREG` and `<AcT>` of `+COPS`
    fn from(v: u8) -> Self {
        match v {
            0 | 1 => Self::Gsm,
            3 => Self::Edge,
            2 | 4 | 5 | 6 => Self::Utran,
            _ => Self::Unknown,
        }
    }
}

/// Which registration a `+CREG`/`+CGREG` line reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Domain {
    /// Circuit switched, `+CREG`
    Circuit,
    /// Packet switched, `+CGREG`
    Packet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_mapping() {
        assert_eq!(Status::from(0), Status::None);
        assert_eq!(Status::from(2), Status::None);
        assert_eq!(Status::from(1), Status::Home);
        assert_eq!(Status::from(3), Status::Denied);
        assert_eq!(Status::from(4), Status::Unknown);
        assert_eq!(Status::from(5), Status::Roaming);
        assert!(Status::Roaming.registered());
        assert!(!Status::Denied.registered());
    }

    #[test]
    fn act_mapping() {
        assert_eq!(AccessTechnology::from(0), AccessTechnology::Gsm);
        assert_eq!(AccessTechnology::from(3), AccessTechnology::Edge);
        assert_eq!(AccessTechnology::from(6), AccessTechnology::Utran);
        assert_eq!(AccessTechnology::from(7), AccessTechnology::Unknown);
    }
}
