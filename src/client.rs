use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::{String, Vec};
use no_std_net::Ipv4Addr;

use atat::AtatCmd;

use crate::command::{Line, Resp};
use crate::config::{Auth, Config, DebugLevel};
use crate::digest::{LineType, Scan};
use crate::error::{Error, GenericError};
use crate::fmt::LossyStr;
use crate::module_timing::{self, POLL_INTERVAL_MS};
use crate::socket::{SocketRange, SocketSet};
use crate::status::{DeviceStatus, NetworkStatus};
use crate::transport::Transport;
use crate::urc_handler;

/// Longest line the response matcher can hold. Socket and file reads are
/// chunked so their payload lines fit.
pub const LINE_LEN: usize = 256;

/// Longest command line, including the terminating `\r\n`
const CMD_LEN: usize = 512;

/// Lifecycle of the modem session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModemState {
    #[default]
    Uninitialized,
    Initialized,
    Registered,
    /// The packet data context is up and an IP address is assigned
    Joined,
    Disconnected,
    PoweredDown,
}

/// Everything the response extractors may write to.
#[derive(Debug)]
pub(crate) struct Shared {
    pub dev: DeviceStatus,
    pub net: NetworkStatus,
    pub ip: Ipv4Addr,
    pub sockets: SocketSet,
    pub state: ModemState,
}

impl Default for Shared {
    fn default() -> Self {
        Self {
            dev: DeviceStatus::default(),
            net: NetworkStatus::default(),
            ip: Ipv4Addr::UNSPECIFIED,
            sockets: SocketSet::default(),
            state: ModemState::default(),
        }
    }
}

impl Shared {
    /// The assigned address while the data connection is up
    pub fn joined_ip(&self) -> Option<Ipv4Addr> {
        (self.state == ModemState::Joined && self.ip != Ipv4Addr::UNSPECIFIED).then_some(self.ip)
    }

    /// Forget the data connection and every socket
    pub fn reset_link(&mut self) {
        self.ip = Ipv4Addr::UNSPECIFIED;
        self.sockets.clear();
    }
}

pub(crate) struct Client<T, D, RST, PWR> {
    transport: T,
    pub(crate) delay: D,
    line: [u8; LINE_LEN],
    pub(crate) debug: DebugLevel,
    pub(crate) shared: Shared,
    pub(crate) rst_pin: Option<RST>,
    pub(crate) pwr_pin: Option<PWR>,
    pub(crate) auth_order: Vec<Auth, 3>,
    pub(crate) socket_range: Option<SocketRange>,
    pub(crate) pin: String<8>,
}

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    pub(crate) fn new(transport: T, delay: D, config: Config<RST, PWR>) -> Self {
        let mut shared = Shared::default();
        if let Some(range) = config.socket_range {
            shared.sockets.set_range(range);
        }
        Self {
            transport,
            delay,
            line: [0; LINE_LEN],
            debug: config.debug,
            shared,
            rst_pin: config.rst_pin,
            pwr_pin: config.pwr_pin,
            auth_order: config.auth_order,
            socket_range: config.socket_range,
            pin: config.pin,
        }
    }

    /// Serialize and send a single command line
    pub(crate) fn send_cmd<C: AtatCmd>(&mut self, cmd: &C) -> Result<(), Error> {
        if C::MAX_LEN > CMD_LEN {
            return Err(Error::Generic(GenericError::Overflow));
        }
        let mut buf = [0; CMD_LEN];
        let len = cmd.write(&mut buf);

        debug!(self.debug; "AT send {}", LossyStr(&buf[..len]));
        self.send_raw(&buf[..len])
    }

    /// Send bytes as they are, e.g. the data following a prompt
    pub(crate) fn send_raw(&mut self, data: &[u8]) -> Result<(), Error> {
        if self.transport.send(data) == data.len() {
            Ok(())
        } else {
            Err(Error::Transport)
        }
    }

    /// Drive the exchange until a final result code shows up.
    ///
    /// Every line is offered to `f`, which may end the exchange early by
    /// returning anything but [`Resp::Wait`]. `+` lines are run through the
    /// unsolicited result code handler first. Returns [`Resp::Wait`] once
    /// `timeout` elapsed; `None` waits forever.
    pub(crate) fn wait_final<F>(&mut self, mut f: F, timeout: Option<Duration>) -> Resp
    where
        F: FnMut(&Line, &mut Shared) -> Resp,
    {
        let start = Instant::now();
        loop {
            match self.transport.get_line(&mut self.line) {
                Scan::Found(ty, len) => {
                    let line = Line::new(ty, &self.line[..len]);
                    debug!(self.debug; "AT read {:?} {}", ty, LossyStr(line.raw));

                    if ty == LineType::Plus {
                        urc_handler::handle(&line, &mut self.shared, self.debug);
                    }

                    let resp = f(&line, &mut self.shared);
                    if resp != Resp::Wait {
                        return resp;
                    }
                    if ty.is_terminal() {
                        return Resp::from_line(ty);
                    }
                }
                Scan::Wait | Scan::NotFound => {
                    if let Some(timeout) = timeout {
                        if start.elapsed() >= timeout {
                            return Resp::Wait;
                        }
                    }
                    self.delay.delay_ms(POLL_INTERVAL_MS);
                }
            }
        }
    }

    /// Send `cmd` and expect `OK`, offering every line to `f`
    pub(crate) fn exec<C, F>(&mut self, cmd: &C, f: F) -> Result<(), Error>
    where
        C: AtatCmd,
        F: FnMut(&Line, &mut Shared) -> Resp,
    {
        self.send_cmd(cmd)?;
        self.finish(cmd, f)
    }

    /// Wait for the `OK` concluding `cmd`, which was sent already
    pub(crate) fn finish<C, F>(&mut self, _cmd: &C, f: F) -> Result<(), Error>
    where
        C: AtatCmd,
        F: FnMut(&Line, &mut Shared) -> Resp,
    {
        match self.wait_final(f, Some(timeout::<C>())) {
            Resp::Ok => Ok(()),
            resp => Err(self.failed(resp)),
        }
    }

    /// Send `cmd` and expect `OK`, ignoring any information response
    pub(crate) fn exec_simple<C: AtatCmd>(&mut self, cmd: &C) -> Result<(), Error> {
        self.exec(cmd, |_, _| Resp::Wait)
    }

    /// Send `cmd` and wait for the data prompt, then send `data` after the
    /// prompt settle time.
    pub(crate) fn exec_prompt<C: AtatCmd>(&mut self, cmd: &C, data: &[u8]) -> Result<(), Error> {
        self.send_cmd(cmd)?;
        match self.wait_final(|_, _| Resp::Wait, Some(timeout::<C>())) {
            Resp::Prompt => {}
            resp => return Err(self.failed(resp)),
        }
        self.delay
            .delay_ms(module_timing::prompt_delay().as_millis() as u32);
        debug!(self.debug; "AT send {} bytes of data", data.len());
        self.send_raw(data)
    }

    pub(crate) fn sleep(&mut self, duration: Duration) {
        let mut ms = duration.as_millis();
        while ms > 0 {
            let step = ms.min(u32::MAX as u64);
            self.delay.delay_ms(step as u32);
            ms -= step;
        }
    }

    /// Handle whatever arrived without waiting for more
    pub(crate) fn poll_urcs(&mut self) {
        self.wait_final(|_, _| Resp::Wait, Some(Duration::from_ticks(0)));
    }

    pub(crate) fn failed(&self, resp: Resp) -> Error {
        let err = Error::from(resp);
        match err {
            Error::Generic(GenericError::Timeout) => {
                warn!(self.debug; "Timed out waiting for a response")
            }
            _ => warn!(self.debug; "Command failed: {:?}", resp),
        }
        err
    }

    /// See if the module answers `AT` within `attempts` tries
    pub(crate) fn is_alive(&mut self, attempts: u8) -> Result<(), Error> {
        for _ in 0..attempts {
            self.send_cmd(&crate::command::general::AT)?;
            if self.wait_final(|_, _| Resp::Wait, Some(module_timing::alive_timeout())) == Resp::Ok {
                return Ok(());
            }
        }
        error!(self.debug; "Module is not responding");
        Err(Error::NotResponding)
    }

    pub(crate) fn purge(&mut self) {
        self.transport.purge();
    }
}

/// Longest time `C` may take to conclude
fn timeout<C: AtatCmd>() -> Duration {
    Duration::from_millis(C::MAX_TIMEOUT_MS.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::network_service::{responses::signal_quality, GetSignalQuality};
    use crate::config::NoPin;
    use crate::socket::{Protocol, SocketHandle};
    use crate::test_helpers::MockSerial;
    use crate::transport::SerialTransport;
    use embassy_time::Delay;

    type TestClient = Client<SerialTransport<MockSerial>, Delay, NoPin, NoPin>;

    fn client(serial: &MockSerial) -> TestClient {
        crate::test_helpers::init_logger();
        Client::new(
            SerialTransport::new(serial.clone()),
            Delay,
            Config::new().with_debug(DebugLevel::AtCmd),
        )
    }

    #[test]
    fn signal_quality_through_the_matcher() {
        let serial = MockSerial::new();
        serial.expect(b"AT+CSQ\r\n", b"\r\n+CSQ: 5,99\r\n\r\nOK\r\n");
        let mut client = client(&serial);

        client
            .exec(&GetSignalQuality, |l, s| signal_quality(l, &mut s.net))
            .unwrap();
        assert_eq!(client.shared.net.rssi, Some(-103));
        assert_eq!(serial.remaining(), 0);
    }

    #[test]
    fn interleaved_urc_updates_other_socket() {
        let serial = MockSerial::new();
        serial.expect(
            b"AT+CSQ\r\n",
            b"\r\n+CSQ: 5,99\r\n\r\n+UUSORD: 2,17\r\n\r\nOK\r\n",
        );
        let mut client = client(&serial);
        client
            .shared
            .sockets
            .claim(SocketHandle(3), Protocol::Tcp, 2, None)
            .unwrap();

        let mut seen = 0;
        let result = client.exec(&GetSignalQuality, |l, s| {
            seen += 1;
            signal_quality(l, &mut s.net)
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, 3);
        assert_eq!(client.shared.sockets.get(SocketHandle(3)).unwrap().pending(), 17);
        assert_eq!(client.shared.net.rssi, Some(-103));
    }

    #[test]
    fn error_and_timeout() {
        let serial = MockSerial::new();
        serial.expect(b"AT+CSQ\r\n", b"\r\n+CME ERROR: SIM failure\r\n");
        let mut client = client(&serial);
        assert_eq!(
            client.exec_simple(&GetSignalQuality),
            Err(Error::Rejected(Resp::Error))
        );

        serial.expect(b"AT+CSQ\r\n", b"\r\n+CSQ: 5,99\r\n");
        let resp = {
            client.send_cmd(&GetSignalQuality).unwrap();
            client.wait_final(|_, _| Resp::Wait, Some(Duration::from_millis(30)))
        };
        assert_eq!(resp, Resp::Wait);
    }

    #[test]
    fn extractor_can_finish_early() {
        let serial = MockSerial::new();
        serial.feed(b"\r\n+CUSD: 0,\"hi\",15\r\n");
        let mut client = client(&serial);
        let resp = client.wait_final(
            |l, _| match l.response("+CUSD") {
                Some(_) => Resp::Ok,
                None => Resp::Wait,
            },
            None,
        );
        assert_eq!(resp, Resp::Ok);
    }

    #[test]
    fn liveness_check() {
        let serial = MockSerial::new();
        serial.expect(b"AT\r\n", b"AT\r\r\nOK\r\n");
        let mut client = client(&serial);
        assert_eq!(client.is_alive(3), Ok(()));
    }

    /// Adds up the requested delays instead of waiting
    #[derive(Default)]
    struct CountingDelay {
        ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.ns += u64::from(ns);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.ns += u64::from(ms) * 1_000_000;
        }
    }

    #[test]
    fn long_sleep_is_not_truncated() {
        let serial = MockSerial::new();
        let mut client: Client<SerialTransport<MockSerial>, _, NoPin, NoPin> = Client::new(
            SerialTransport::new(serial.clone()),
            CountingDelay::default(),
            Config::new(),
        );
        // Longer than u32::MAX microseconds
        client.sleep(Duration::from_secs(5_000));
        assert_eq!(client.delay.ns, 5_000 * 1_000_000_000);
    }
}
