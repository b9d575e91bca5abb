use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::client::Client;
use crate::command::file_system::{responses::file_block, DeleteFile, PrepareDownloadFile, ReadBlock};
use crate::command::Resp;
use crate::error::Error;
use crate::transport::Transport;

/// Bytes requested per `+URDBLOCK`, so a block fits a response line
const READ_BLOCK: usize = 128;

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    pub(crate) fn delete_file(&mut self, filename: &str) -> Result<(), Error> {
        self.exec_simple(&DeleteFile { filename })
    }

    /// Store `data` as `filename` in the module's file system, replacing
    /// nothing: an existing file has to be deleted first.
    pub(crate) fn write_file(&mut self, filename: &str, data: &[u8]) -> Result<usize, Error> {
        let cmd = PrepareDownloadFile {
            filename,
            size: data.len(),
        };
        self.exec_prompt(&cmd, data)?;
        self.finish(&cmd, |_, _| Resp::Wait)?;
        Ok(data.len())
    }

    /// Read `filename` into `buf`, block by block. Returns the number of bytes
    /// read, which is less than `buf.len()` once the end of the file was hit.
    pub(crate) fn read_file(&mut self, filename: &str, buf: &mut [u8]) -> Result<usize, Error> {
        let mut cnt = 0;
        while cnt < buf.len() {
            let size = (buf.len() - cnt).min(READ_BLOCK);
            let mut read = None;
            let res = self.exec(
                &ReadBlock {
                    filename,
                    offset: cnt,
                    size,
                },
                |l, _| file_block(l, filename, &mut buf[cnt..], &mut read),
            );
            match (res, read) {
                (Ok(()), Some(n)) => {
                    cnt += n;
                    if n < size {
                        break;
                    }
                }
                (Ok(()), None) if cnt == 0 => return Err(Error::InvalidResponse),
                (Ok(()), None) => break,
                // Reading past the end is rejected by some firmware
                (Err(_), _) if cnt > 0 => break,
                (Err(e), _) => return Err(e),
            }
        }
        Ok(cnt)
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
    fn write_then_read_back() {
        let serial = MockSerial::new();
        serial
            .expect(b"AT+UDWNFILE=\"cfg\",4\r\n", b"\r\n>")
            .expect(b"a=1\n", b"\r\nOK\r\n")
            .expect(
                b"AT+URDBLOCK=\"cfg\",0,10\r\n",
                b"\r\n+URDBLOCK: \"cfg\",4,\"a=1\n\"\r\n\r\nOK\r\n",
            );
        let mut client = client(&serial);
        assert_eq!(client.write_file("cfg", b"a=1\n"), Ok(4));

        let mut buf = [0u8; 10];
        assert_eq!(client.read_file("cfg", &mut buf), Ok(4));
        assert_eq!(&buf[..4], b"a=1\n");
    }

    #[test]
    fn read_error_after_data() {
        let serial = MockSerial::new();
        let block = [b'x'; READ_BLOCK];
        let mut answer = std::vec::Vec::new();
        answer.extend_from_slice(b"\r\n+URDBLOCK: \"log\",128,\"");
        answer.extend_from_slice(&block);
        answer.extend_from_slice(b"\"\r\n\r\nOK\r\n");
        serial
            .expect(b"AT+URDBLOCK=\"log\",0,128\r\n", &answer)
            .expect(b"AT+URDBLOCK=\"log\",128,72\r\n", b"\r\n+CME ERROR: 1612\r\n")
            .expect(b"AT+UDELFILE=\"log\"\r\n", b"\r\n+CME ERROR: FILE NOT FOUND\r\n");
        let mut client = client(&serial);

        let mut buf = [0u8; 200];
        assert_eq!(client.read_file("log", &mut buf), Ok(READ_BLOCK));
        assert_eq!(
            client.delete_file("log"),
            Err(Error::Rejected(Resp::Error))
        );
    }
}
