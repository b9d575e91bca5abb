use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::client::{Client, ModemState};
use crate::command::control::{types::Echo, SetEcho};
use crate::command::device_lock::{responses::pin_status, GetPinStatus, SetPin};
use crate::command::general::responses::{ccid, identity, text};
use crate::command::general::{
    GetCCID, GetFirmwareVersion, GetIMEI, GetIMSI, GetManufacturerId, GetModelId,
    IdentificationInformation,
};
use crate::command::mobile_control::{types::TerminationErrorMode, SetReportMobileTerminationError};
use crate::command::network_service::{types::NetworkRegistrationUrc, SetNetworkRegistrationStatus};
use crate::command::psn::{types::GPRSNetworkRegistrationUrcConfig, SetGPRSNetworkRegistrationStatus};
use crate::command::sms::types::{MessageFormat, NewMessageIndicationMode, NewMessageRouting};
use crate::command::sms::{SetMessageFormat, SetNewMessageIndication};
use crate::command::system_features::{types::PowerSavingMode, SetPowerSavingControl};
use crate::error::Error;
use crate::module_timing::{self, ALIVE_ATTEMPTS, PIN_ATTEMPTS};
use crate::modules::{Module, ModuleParams};
use crate::status::{DeviceStatus, PowerSaving, Sim};
use crate::transport::Transport;

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    /// Bring the module into a known state and collect its identity.
    ///
    /// `pin` overrides the PIN of the configuration.
    pub(crate) fn init(&mut self, pin: Option<&str>) -> Result<(), Error> {
        info!(self.debug; "Modem::init");
        self.shared.dev = DeviceStatus::default();
        self.shared.reset_link();
        self.shared.state = ModemState::Uninitialized;

        self.power_up()?;
        self.purge();
        if self.is_alive(ALIVE_ATTEMPTS).is_err() {
            if self.rst_pin.is_none() {
                return Err(Error::NotResponding);
            }
            self.hard_reset()?;
            self.is_alive(ALIVE_ATTEMPTS)?;
        }

        self.exec_simple(&SetEcho { enabled: Echo::Off })?;
        self.exec_simple(&SetReportMobileTerminationError {
            n: TerminationErrorMode::Verbose,
        })?;

        self.identify()?;
        let cdma = self.shared.dev.module.is_cdma();

        if !cdma {
            self.unlock_sim(pin)?;
            self.exec(&GetCCID, |l, s| ccid(l, &mut s.dev.ccid))?;
        }
        // Product serial number, the IMEI on GSM/UMTS and the MEID on CDMA
        if cdma {
            self.exec(&GetIMEI, |l, s| identity(l, &mut s.dev.meid))?;
        } else {
            self.exec(&GetIMEI, |l, s| identity(l, &mut s.dev.imei))?;
            self.exec(&GetIMSI, |l, s| identity(l, &mut s.dev.imsi))?;
        }

        self.exec_simple(&SetPowerSavingControl {
            mode: PowerSavingMode::Disabled,
        })?;
        self.shared.dev.power_saving = PowerSaving::Disabled;

        self.exec_simple(&SetMessageFormat {
            mode: MessageFormat::Text,
        })?;
        self.exec_simple(&SetNewMessageIndication {
            mode: NewMessageIndicationMode::BufferInTa,
            mt: NewMessageRouting::StoreAndNotify,
        })?;

        self.exec_simple(&SetNetworkRegistrationStatus {
            n: NetworkRegistrationUrc::UrcVerbose,
        })?;
        if !cdma {
            self.exec_simple(&SetGPRSNetworkRegistrationStatus {
                n: GPRSNetworkRegistrationUrcConfig::UrcVerbose,
            })?;
        }

        self.shared.state = ModemState::Initialized;
        info!(self.debug; "Modem initialized");
        Ok(())
    }

    /// Resolve the module type, and with it the socket range, then read the
    /// product identification strings.
    fn identify(&mut self) -> Result<(), Error> {
        let mut info = String::<32>::new();
        self.exec(&IdentificationInformation, |l, _| text(l, &mut info))?;
        let module = Module::from_info(&info);
        self.shared.dev.module = module;
        self.shared
            .sockets
            .set_range(self.socket_range.unwrap_or_else(|| module.socket_range()));

        self.exec(&GetManufacturerId, |l, s| text(l, &mut s.dev.manufacturer))?;
        self.exec(&GetModelId, |l, s| text(l, &mut s.dev.model))?;
        self.exec(&GetFirmwareVersion, |l, s| text(l, &mut s.dev.version))?;
        Ok(())
    }

    /// Wait for the SIM to come up, entering the PIN when asked for one
    fn unlock_sim(&mut self, pin: Option<&str>) -> Result<(), Error> {
        let stored = self.pin.clone();
        let pin = pin.or((!stored.is_empty()).then_some(stored.as_str()));
        let mut pin_sent = false;

        for _ in 0..PIN_ATTEMPTS {
            // A missing SIM is reported as an error result, the extractor
            // still picks it up
            self.exec(&GetPinStatus, |l, s| pin_status(l, &mut s.dev.sim))
                .ok();

            match self.shared.dev.sim {
                Sim::Ready => return Ok(()),
                Sim::Pin if !pin_sent => {
                    let Some(pin) = pin else {
                        error!(self.debug; "SIM PIN required but none given");
                        return Err(Error::SimPin);
                    };
                    pin_sent = true;
                    self.exec_simple(&SetPin { pin })?;
                }
                _ => {}
            }
            self.sleep(module_timing::pin_retry());
        }

        match self.shared.dev.sim {
            Sim::Ready => Ok(()),
            Sim::Pin => Err(Error::SimPin),
            Sim::Missing | Sim::Unknown => Err(Error::SimMissing),
        }
    }

    /// Switch the module off
    pub(crate) fn power_off(&mut self) -> Result<(), Error> {
        info!(self.debug; "Modem::powerOff");
        self.power_down()
    }
}
