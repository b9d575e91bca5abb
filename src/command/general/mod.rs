//! ### 4 - General Commands
pub mod responses;

use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// Attention, the plain `AT` used to check whether the module is alive
#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse)]
pub struct AT;

/// 4.11 Identification information I
///
/// Returns some module information as the module type number and some details
/// about the firmware version. The first line is the type number, e.g.
/// `SARA-G350` or `LISA-U200-00S`.
#[derive(Clone, AtatCmd)]
#[at_cmd("I", NoResponse, value_sep = false, timeout_ms = 10000)]
pub struct IdentificationInformation;

/// 4.1 Manufacturer identification +CGMI
///
/// Text string identifying the manufacturer.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGMI", NoResponse, timeout_ms = 10000)]
pub struct GetManufacturerId;

/// 4.3 Model identification +CGMM
///
/// Text string identifying the model identification.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGMM", NoResponse, timeout_ms = 10000)]
pub struct GetModelId;

/// 4.5 Firmware version identification +CGMR
///
/// Returns the firmware version of the module.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGMR", NoResponse, timeout_ms = 10000)]
pub struct GetFirmwareVersion;

/// 4.7 IMEI identification +CGSN
///
/// Returns the product serial number, the International Mobile Equipment
/// Identity (IMEI) of the MT. On CDMA modules this is the MEID.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGSN", NoResponse, timeout_ms = 10000)]
pub struct GetIMEI;

/// 4.9 International mobile subscriber identification +CIMI
///
/// Request the IMSI (International Mobile Subscriber Identity).
#[derive(Clone, AtatCmd)]
#[at_cmd("+CIMI", NoResponse, timeout_ms = 10000)]
pub struct GetIMSI;

/// 4.12 Card identification +CCID
///
/// Returns the ICCID (Integrated Circuit Card ID) of the SIM-card. ICCID is a
/// serial number identifying the SIM.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CCID", NoResponse, timeout_ms = 10000)]
pub struct GetCCID;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn bare_commands() {
        assert_eq!(written(&AT), "AT\r\n");
        assert_eq!(written(&IdentificationInformation), "ATI\r\n");
        assert_eq!(written(&GetCCID), "AT+CCID\r\n");
    }
}
