use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::client::{Client, ModemState};
use crate::command::mobile_control::ModuleSwitchOff;
use crate::error::Error;
use crate::modules::ModuleParams;
use crate::transport::Transport;

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    /// Pulse `PWR_ON` low to switch the module on and wait for it to boot.
    /// Without a power pin the module is assumed to be on already.
    pub(crate) fn power_up(&mut self) -> Result<(), Error> {
        let module = self.shared.dev.module;
        let Some(pin) = self.pwr_pin.as_mut() else {
            trace!(self.debug; "No power pin configured");
            return Ok(());
        };
        trace!(self.debug; "Attempting to power up device");
        pin.set_low().map_err(|_| Error::IoPin)?;
        self.sleep(module.power_on_pull_time());
        if let Some(pin) = self.pwr_pin.as_mut() {
            pin.set_high().map_err(|_| Error::IoPin)?;
        }
        self.sleep(module.boot_wait());
        Ok(())
    }

    /// Reset the module by driving its `RESET_N` pin low for
    /// `ModuleParams::reset_hold()`
    ///
    /// **NOTE** This function will reset NVM settings!
    pub(crate) fn hard_reset(&mut self) -> Result<(), Error> {
        let module = self.shared.dev.module;
        let Some(pin) = self.rst_pin.as_mut() else {
            warn!(self.debug; "No reset pin configured");
            return Ok(());
        };
        warn!(self.debug; "Hard resetting u-blox cellular module");
        pin.set_low().map_err(|_| Error::IoPin)?;
        self.sleep(module.reset_hold());
        if let Some(pin) = self.rst_pin.as_mut() {
            pin.set_high().map_err(|_| Error::IoPin)?;
        }
        self.sleep(module.boot_wait());
        Ok(())
    }

    /// Switch the module off with `AT+CPWROFF`. All sockets are forgotten.
    pub(crate) fn power_down(&mut self) -> Result<(), Error> {
        self.exec_simple(&ModuleSwitchOff)?;
        self.shared.reset_link();
        self.shared.state = ModemState::PoweredDown;
        info!(self.debug; "Powered down");
        Ok(())
    }
}
