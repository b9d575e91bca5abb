//! ### 9 - Device lock
pub mod responses;

use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// 9.1 Enter PIN +CPIN
///
/// Read whether a password is pending. `+CPIN: READY` means the SIM is
/// unlocked, `+CPIN: SIM PIN` that it waits for the PIN.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPIN?", NoResponse, timeout_ms = 10000)]
pub struct GetPinStatus;

/// 9.1 Enter PIN +CPIN
///
/// Enter PIN. If no PIN request is pending, the corresponding error code is returned. If a wrong PIN is given three
/// times, the PUK must be inserted in place of the PIN, followed by the <newpin> which replaces the old pin in
/// the SIM.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPIN", NoResponse, timeout_ms = 10000)]
pub struct SetPin<'a> {
    #[at_arg(position = 0, len = 8)]
    pub pin: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn pin_is_quoted() {
        assert_eq!(written(&SetPin { pin: "1234" }), "AT+CPIN=\"1234\"\r\n");
        assert_eq!(written(&GetPinStatus), "AT+CPIN?\r\n");
    }
}
