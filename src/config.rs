use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::socket::SocketRange;

pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Authentication used when activating the packet data context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Auth {
    #[default]
    None,
    Pap,
    Chap,
    /// Let the network pick, trying each scheme of [`Config::with_auth_order`]
    /// in turn
    Detect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Apn<'a> {
    #[default]
    None,
    Given {
        name: &'a str,
        username: Option<&'a str>,
        password: Option<&'a str>,
    },
}

impl<'a> Apn<'a> {
    pub fn new(name: &'a str) -> Self {
        Self::Given {
            name,
            username: None,
            password: None,
        }
    }

    pub(crate) fn parts(&self) -> (&'a str, &'a str, &'a str) {
        match self {
            Self::None => ("", "", ""),
            Self::Given {
                name,
                username,
                password,
            } => (name, username.unwrap_or(""), password.unwrap_or("")),
        }
    }
}

/// Verbosity of the engine's own log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebugLevel {
    Off = 0,
    #[default]
    Info = 1,
    Trace = 2,
    /// Every AT command and response line
    AtCmd = 3,
}

impl From<u8> for DebugLevel {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::Off,
            1 => Self::Info,
            2 => Self::Trace,
            _ => Self::AtCmd,
        }
    }
}

pub struct Config<RST = NoPin, PWR = NoPin> {
    pub(crate) rst_pin: Option<RST>,
    pub(crate) pwr_pin: Option<PWR>,
    pub(crate) auth_order: Vec<Auth, 3>,
    pub(crate) socket_range: Option<SocketRange>,
    pub(crate) debug: DebugLevel,
    pub(crate) pin: String<8>,
}

impl Default for Config<NoPin, NoPin> {
    fn default() -> Self {
        Self::new()
    }
}

impl Config<NoPin, NoPin> {
    pub fn new() -> Self {
        let mut auth_order = Vec::new();
        auth_order.extend_from_slice(&[Auth::None, Auth::Pap, Auth::Chap]).ok();
        Self {
            rst_pin: None,
            pwr_pin: None,
            auth_order,
            socket_range: None,
            debug: DebugLevel::Info,
            pin: String::new(),
        }
    }
}

impl<RST, PWR> Config<RST, PWR>
where
    RST: OutputPin,
    PWR: OutputPin,
{
    pub fn with_reset_pin<R: OutputPin>(self, rst_pin: R) -> Config<R, PWR> {
        Config {
            rst_pin: Some(rst_pin),
            pwr_pin: self.pwr_pin,
            auth_order: self.auth_order,
            socket_range: self.socket_range,
            debug: self.debug,
            pin: self.pin,
        }
    }

    pub fn with_power_pin<P: OutputPin>(self, pwr_pin: P) -> Config<RST, P> {
        Config {
            rst_pin: self.rst_pin,
            pwr_pin: Some(pwr_pin),
            auth_order: self.auth_order,
            socket_range: self.socket_range,
            debug: self.debug,
            pin: self.pin,
        }
    }

    /// SIM PIN used by `init` when the SIM asks for one. Longer PINs are
    /// truncated to 8 digits.
    pub fn with_pin(mut self, pin: &str) -> Self {
        crate::command::copy_str(&mut self.pin, pin);
        self
    }

    /// Order in which authentication schemes are tried when joining with
    /// [`Auth::Detect`]. `Detect` itself is ignored in the list.
    pub fn with_auth_order(mut self, order: &[Auth]) -> Self {
        self.auth_order.clear();
        for auth in order.iter().filter(|a| **a != Auth::Detect) {
            if self.auth_order.push(*auth).is_err() {
                break;
            }
        }
        self
    }

    /// Override the socket index range otherwise derived from the module type
    pub fn with_socket_range(self, socket_range: SocketRange) -> Self {
        Self {
            socket_range: Some(socket_range),
            ..self
        }
    }

    pub fn with_debug(self, debug: DebugLevel) -> Self {
        Self { debug, ..self }
    }
}
