//! Lifecycle timings that do not depend on the module family. Per family pin
//! pulse timings live in [`crate::modules::ModuleParams`].
use embassy_time::Duration;

/// Pause between polls of the transport while waiting for a response
pub const POLL_INTERVAL_MS: u32 = 10;

/// Settle time between receiving a data prompt and sending the data
pub fn prompt_delay() -> Duration {
    Duration::from_millis(50)
}

/// Spacing of the registration checks of `register_net`
pub fn registration_poll() -> Duration {
    Duration::from_secs(1)
}

/// How long the module gets to answer a single liveness check
pub fn alive_timeout() -> Duration {
    Duration::from_millis(1000)
}

/// `AT` attempts before giving up on the module
pub const ALIVE_ATTEMPTS: u8 = 10;

/// SIM state queries while the SIM is still busy after power-on
pub const PIN_ATTEMPTS: u8 = 5;

pub fn pin_retry() -> Duration {
    Duration::from_secs(1)
}

/// Default timeout of `register_net`
pub fn registration_timeout() -> Duration {
    Duration::from_secs(180)
}

/// Answer to a USSD request, counted from the `OK` of `+CUSD`
pub fn ussd_timeout() -> Duration {
    Duration::from_secs(20)
}
