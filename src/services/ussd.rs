use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::client::Client;
use crate::command::supplementary_services::{responses::ussd_reply, SendUssd};
use crate::command::Resp;
use crate::error::{Error, GenericError};
use crate::module_timing;
use crate::transport::Transport;

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    /// Send a USSD request such as `*100#` and wait for the network's reply.
    ///
    /// Most networks answer after the `OK`, as a `+CUSD` URC.
    pub(crate) fn ussd_command<const N: usize>(
        &mut self,
        cmd: &str,
        reply: &mut String<N>,
    ) -> Result<(), Error> {
        let mut received = false;
        self.exec(&SendUssd { n: 1, command: cmd }, |l, _| {
            ussd_reply(l, reply, &mut received)
        })?;
        if received {
            return Ok(());
        }

        let resp = self.wait_final(
            |l, _| {
                ussd_reply(l, reply, &mut received);
                if received {
                    Resp::Ok
                } else {
                    Resp::Wait
                }
            },
            Some(module_timing::ussd_timeout()),
        );
        match resp {
            Resp::Ok => Ok(()),
            Resp::Wait => Err(Error::Generic(GenericError::Timeout)),
            resp => Err(self.failed(resp)),
        }
    }
}

#[cfg(test)]
mod tests {
    use embassy_time::Delay;

    use super::*;
    use crate::config::{Config, DebugLevel, NoPin};
    use crate::test_helpers::MockSerial;
    use crate::transport::SerialTransport;

    #[test]
    fn reply_after_ok() {
        crate::test_helpers::init_logger();
        let serial = MockSerial::new();
        serial.expect(
            b"AT+CUSD=1,\"*100#\"\r\n",
            b"\r\nOK\r\n\r\n+CUSD: 0,\"Balance: 12.50\",15\r\n",
        );
        let mut client: Client<SerialTransport<MockSerial>, Delay, NoPin, NoPin> = Client::new(
            SerialTransport::new(serial.clone()),
            Delay,
            Config::new().with_debug(DebugLevel::AtCmd),
        );

        let mut reply = String::<64>::new();
        assert_eq!(client.ussd_command("*100#", &mut reply), Ok(()));
        assert_eq!(reply.as_str(), "Balance: 12.50");
    }
}
