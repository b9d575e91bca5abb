//! ### 7 - Network service
pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use types::NetworkRegistrationUrc;

use super::NoResponse;

/// 7.2 Signal quality +CSQ
///
/// Returns the received signal strength indication (RSSI) <rssi> and <qual>.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSQ", NoResponse, timeout_ms = 10000)]
pub struct GetSignalQuality;

/// 7.5 Operator selection +COPS
///
/// Read the current operator in long alphanumeric format.
#[derive(Clone, AtatCmd)]
#[at_cmd("+COPS?", NoResponse, timeout_ms = 180000)]
pub struct GetOperatorSelection;

/// 7.9 Network registration status +CREG
///
/// Configures the network registration information. Depending on the <n>
/// parameter value a URC can be issued:
/// - +CREG: <stat> if <n>=1 and there is a change in the MT's circuit switched mode network registration status
///   in GERAN/UTRAN/E-UTRAN
/// - +CREG: <stat>[,<lac>,<ci>[,<AcTStatus>]] if <n>=2 and there is a change of the network cell in
///   GERAN/UTRAN/E-UTRAN
#[derive(Clone, AtatCmd)]
#[at_cmd("+CREG", NoResponse)]
pub struct SetNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: NetworkRegistrationUrc,
}

/// 7.9 Network registration status +CREG
#[derive(Clone, AtatCmd)]
#[at_cmd("+CREG?", NoResponse, timeout_ms = 10000)]
pub struct GetNetworkRegistrationStatus;

/// 7.11 Subscriber number +CNUM
///
/// Returns the MSISDNs related to the subscriber.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CNUM", NoResponse, timeout_ms = 10000)]
pub struct GetSubscriberNumber;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn registration_urc_config() {
        let cmd = SetNetworkRegistrationStatus {
            n: NetworkRegistrationUrc::UrcVerbose,
        };
        assert_eq!(written(&cmd), "AT+CREG=2\r\n");
        assert_eq!(written(&GetNetworkRegistrationStatus), "AT+CREG?\r\n");
    }
}
