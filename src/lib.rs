#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod client;
pub mod command;
pub mod config;
pub mod digest;
pub mod error;
mod modem;
mod module_timing;
pub mod modules;
mod power;
pub mod registration;
mod services;
pub mod socket;
pub mod status;
pub mod transport;
mod urc_handler;

#[cfg(test)]
mod test_helpers;

pub use client::ModemState;
pub use config::{Apn, Auth, Config, DebugLevel, NoPin};
pub use error::{Error, GenericError};
pub use modem::Modem;
pub use no_std_net::{Ipv4Addr, SocketAddrV4};
pub use socket::{Protocol, SocketHandle, SocketRange};
pub use status::{DeviceStatus, NetworkStatus};
pub use transport::{SerialTransport, Transport};
