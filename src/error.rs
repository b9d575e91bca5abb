use crate::command::Resp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GenericError {
    Timeout,
    Unsupported,
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    // General device errors
    /// The device never answered the liveness check
    NotResponding,
    Uninitialized,
    PoweredDown,
    IoPin,
    /// Writing to the serial port failed
    Transport,

    /// The device terminated the exchange with something other than `OK`
    Rejected(Resp),
    /// The exchange finished but the expected response line never showed up
    InvalidResponse,

    // SIM errors
    SimMissing,
    SimPin,

    // Network errors
    NotRegistered,
    RegistrationDenied,
    NoAddress,
    Dns,

    // Socket errors
    NoFreeSocket,
    InvalidSocket,
    InvalidState,
    SocketClosed,

    // Generic shared errors, e.g. from `core::`
    Generic(GenericError),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::NotResponding => defmt::write!(f, "NotResponding"),
            Self::Uninitialized => defmt::write!(f, "Uninitialized"),
            Self::PoweredDown => defmt::write!(f, "PoweredDown"),
            Self::IoPin => defmt::write!(f, "IoPin"),
            Self::Transport => defmt::write!(f, "Transport"),
            Self::Rejected(r) => defmt::write!(f, "Rejected({:?})", r),
            Self::InvalidResponse => defmt::write!(f, "InvalidResponse"),
            Self::SimMissing => defmt::write!(f, "SimMissing"),
            Self::SimPin => defmt::write!(f, "SimPin"),
            Self::NotRegistered => defmt::write!(f, "NotRegistered"),
            Self::RegistrationDenied => defmt::write!(f, "RegistrationDenied"),
            Self::NoAddress => defmt::write!(f, "NoAddress"),
            Self::Dns => defmt::write!(f, "Dns"),
            Self::NoFreeSocket => defmt::write!(f, "NoFreeSocket"),
            Self::InvalidSocket => defmt::write!(f, "InvalidSocket"),
            Self::InvalidState => defmt::write!(f, "InvalidState"),
            Self::SocketClosed => defmt::write!(f, "SocketClosed"),
            Self::Generic(e) => defmt::write!(f, "Generic({:?})", e),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotResponding => f.write_str("device is not responding"),
            Self::Uninitialized => f.write_str("device is not initialized"),
            Self::PoweredDown => f.write_str("device is powered down"),
            Self::IoPin => f.write_str("failed to drive control pin"),
            Self::Transport => f.write_str("serial write failed"),
            Self::Rejected(r) => write!(f, "command rejected with {:?}", r),
            Self::InvalidResponse => f.write_str("unrecognized response"),
            Self::SimMissing => f.write_str("SIM not inserted"),
            Self::SimPin => f.write_str("SIM PIN required"),
            Self::NotRegistered => f.write_str("not registered"),
            Self::RegistrationDenied => f.write_str("registration denied"),
            Self::NoAddress => f.write_str("no IP address assigned"),
            Self::Dns => f.write_str("host lookup failed"),
            Self::NoFreeSocket => f.write_str("no free socket"),
            Self::InvalidSocket => f.write_str("invalid socket handle"),
            Self::InvalidState => f.write_str("socket in wrong state"),
            Self::SocketClosed => f.write_str("socket closed"),
            Self::Generic(e) => write!(f, "{:?}", e),
        }
    }
}

impl From<GenericError> for Error {
    fn from(e: GenericError) -> Self {
        Self::Generic(e)
    }
}

impl From<Resp> for Error {
    /// Maps a terminal response other than `Ok` into the matching error.
    fn from(r: Resp) -> Self {
        match r {
            Resp::Wait => Self::Generic(GenericError::Timeout),
            r => Self::Rejected(r),
        }
    }
}
