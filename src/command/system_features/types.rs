use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerSavingMode {
    /// Disabled: (default and factory-programmed value)
    Disabled = 0,
    /// Enabled: the UART is re-enabled from time to time to allow the DTE to
    /// transmit, and the module switches from idle to active mode in a cyclic
    /// way
    Enabled = 1,
    /// Power saving is controlled by UART RTS line
    CtrlByRts = 2,
    /// Power saving is controlled by UART DTR line
    CtrlByDtr = 3,
}
