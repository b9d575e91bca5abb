//! Command sequences behind the public [`crate::Modem`] operations, grouped by
//! area.
mod device;
mod file;
mod network;
mod sms;
mod socket;
mod ussd;
