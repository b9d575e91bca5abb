use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::client::Client;
use crate::command::sms::responses::{message_index, MessageRead};
use crate::command::sms::{DeleteMessage, ListMessages, ReadMessage, SendMessage, CTRL_Z};
use crate::command::Resp;
use crate::error::Error;
use crate::transport::Transport;

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    /// Store the indices of the messages with status `stat` (e.g. `"ALL"` or
    /// `"REC UNREAD"`) in `ix`. Returns how many messages matched, which may
    /// exceed `ix.len()`.
    pub(crate) fn sms_list(&mut self, stat: &str, ix: &mut [u16]) -> Result<usize, Error> {
        let mut total = 0;
        self.exec(&ListMessages { stat }, |l, _| message_index(l, ix, &mut total))?;
        Ok(total)
    }

    /// Read the message at `index`, returning the length of the text copied
    /// into `body`.
    pub(crate) fn sms_read(
        &mut self,
        index: u16,
        originator: &mut String<32>,
        body: &mut [u8],
    ) -> Result<usize, Error> {
        let mut read = MessageRead::new(originator, body);
        self.exec(&ReadMessage { index }, |l, _| read.extract(l))?;
        read.len.ok_or(Error::InvalidResponse)
    }

    pub(crate) fn sms_delete(&mut self, index: u16) -> Result<(), Error> {
        self.exec_simple(&DeleteMessage { index })
    }

    /// Send `text` to `number` in text mode
    pub(crate) fn sms_send(&mut self, number: &str, text: &str) -> Result<(), Error> {
        let cmd = SendMessage { number };
        self.exec_prompt(&cmd, text.as_bytes())?;
        self.send_raw(&[CTRL_Z])?;
        self.finish(&cmd, |_, _| Resp::Wait)
    }
}

#[cfg(test)]
mod tests {
    use embassy_time::Delay;

    use super::*;
    use crate::config::{Config, DebugLevel, NoPin};
    use crate::test_helpers::MockSerial;
    use crate::transport::SerialTransport;

    fn client(serial: &MockSerial) -> Client<SerialTransport<MockSerial>, Delay, NoPin, NoPin> {
        crate::test_helpers::init_logger();
        Client::new(
            SerialTransport::new(serial.clone()),
            Delay,
            Config::new().with_debug(DebugLevel::AtCmd),
        )
    }

    #[test]
    fn list_read_delete() {
        let serial = MockSerial::new();
        serial
            .expect(
                b"AT+CMGL=\"ALL\"\r\n",
                b"\r\n+CMGL: 2,\"REC READ\",\"+41791234567\",,\"16/02/12,09:15:30+04\"\r\nhi\r\n\r\nOK\r\n",
            )
            .expect(
                b"AT+CMGR=2\r\n",
                b"\r\n+CMGR: \"REC READ\",\"+41791234567\",,\"16/02/12,09:15:30+04\"\r\nhi there\r\n\r\nOK\r\n",
            )
            .expect(b"AT+CMGD=2\r\n", b"\r\nOK\r\n");
        let mut client = client(&serial);

        let mut ix = [0u16; 4];
        assert_eq!(client.sms_list("ALL", &mut ix), Ok(1));
        assert_eq!(ix[0], 2);

        let mut from = String::<32>::new();
        let mut body = [0u8; 32];
        assert_eq!(client.sms_read(2, &mut from, &mut body), Ok(8));
        assert_eq!(from.as_str(), "+41791234567");
        assert_eq!(&body[..8], b"hi there");

        assert_eq!(client.sms_delete(2), Ok(()));
        assert_eq!(serial.remaining(), 0);
    }

    #[test]
    fn bodies_opening_like_responses() {
        let serial = MockSerial::new();
        let header = "\r\n+CMGR: \"REC READ\",\"+41791234567\",,\"16/02/12,09:15:30+04\"\r\n";
        let bodies = ["@Bob see you", "> quoted reply", "+41 call me back"];
        for (i, body) in bodies.iter().enumerate() {
            let cmd = std::format!("AT+CMGR={}\r\n", i + 1);
            let answer = std::format!("{}{}\r\n\r\nOK\r\n", header, body);
            serial.expect(cmd.as_bytes(), answer.as_bytes());
        }
        serial.expect(b"AT+CMGD=9\r\n", b"\r\n+CMS ERROR: 321\r\n");
        let mut client = client(&serial);

        for (i, body) in bodies.iter().enumerate() {
            let mut from = String::<32>::new();
            let mut buf = [0u8; 32];
            let n = client.sms_read(i as u16 + 1, &mut from, &mut buf).unwrap();
            assert_eq!(&buf[..n], body.as_bytes());
        }
        // Every exchange ended on its own final result code
        assert_eq!(client.sms_delete(9), Err(Error::Rejected(Resp::Error)));
        assert_eq!(serial.remaining(), 0);
    }

    #[test]
    fn send_terminates_with_ctrl_z() {
        let serial = MockSerial::new();
        serial
            .expect(b"AT+CMGS=\"+41791234567\"\r\n", b"\r\n> ")
            .expect(b"hello\x1a", b"\r\n+CMGS: 12\r\n\r\nOK\r\n");
        let mut client = client(&serial);
        assert_eq!(client.sms_send("+41791234567", "hello"), Ok(()));
        assert_eq!(serial.remaining(), 0);
    }
}
