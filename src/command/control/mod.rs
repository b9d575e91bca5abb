//! ### 15 - V24 control and V25ter
//! These commands, unless specifically stated, do not implement set syntax using "=", read ("?"), or test ("=?").
pub mod types;

use atat::atat_derive::AtatCmd;
use types::Echo;

use super::NoResponse;

/// 15.11 Command echo E
///
/// Configures whether or not the MT echoes characters received from the DTE
/// when in command state.
#[derive(Clone, AtatCmd)]
#[at_cmd("E", NoResponse, value_sep = false)]
pub struct SetEcho {
    #[at_arg(position = 0)]
    pub enabled: Echo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn echo_off() {
        assert_eq!(written(&SetEcho { enabled: Echo::Off }), "ATE0\r\n");
    }
}
