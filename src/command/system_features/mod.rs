//! ### 19 - System features
pub mod types;

use atat::atat_derive::AtatCmd;
use types::PowerSavingMode;

use super::NoResponse;

/// 19.8 Power saving control (Power SaVing) +UPSV
///
/// Sets the UART power saving configuration, but it has a global effect on the module power saving configuration:
/// - If the power saving is enabled (+UPSV: 1), the UART interface is cyclically enabled and the module enters
///   idle mode automatically whenever possible
/// - If the power saving is disabled (+UPSV: 0), the UART interface is always enabled and the module does not
///   enter idle mode
#[derive(Clone, AtatCmd)]
#[at_cmd("+UPSV", NoResponse)]
pub struct SetPowerSavingControl {
    #[at_arg(position = 0)]
    pub mode: PowerSavingMode,
}
