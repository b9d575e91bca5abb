//! The public session object. Every operation locks the engine for its whole
//! duration, so only one AT exchange is ever in flight.
use core::cell::RefCell;
use core::fmt::{self, Write};

use embassy_sync::blocking_mutex::raw::{NoopRawMutex, RawMutex};
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;
use no_std_net::{Ipv4Addr, SocketAddrV4};

use crate::client::{Client, ModemState};
use crate::config::{Apn, Auth, Config, DebugLevel, NoPin};
use crate::error::Error;
use crate::module_timing;
use crate::socket::{Protocol, SocketHandle, State};
use crate::status::{DeviceStatus, NetworkStatus};
use crate::transport::Transport;

/// A u-blox cellular modem attached through `T`.
///
/// `M` picks the lock guarding the engine. The lock is held for a whole
/// exchange, which may take up to 180 s, so it must be a blocking mutex of
/// the RTOS or thread library, or [`NoopRawMutex`] when the modem is only
/// used from one context.
pub struct Modem<T, D, RST = NoPin, PWR = NoPin, M = NoopRawMutex>
where
    M: RawMutex,
{
    inner: Mutex<M, RefCell<Client<T, D, RST, PWR>>>,
}

impl<T, D, RST, PWR, M> Modem<T, D, RST, PWR, M>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
    M: RawMutex,
{
    pub fn new(transport: T, delay: D, config: Config<RST, PWR>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Client::new(transport, delay, config))),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Client<T, D, RST, PWR>) -> R) -> R {
        self.inner.lock(|c| f(&mut c.borrow_mut()))
    }

    /// Like [`Self::with`], refusing to talk to a switched off module
    fn with_powered<R>(
        &self,
        f: impl FnOnce(&mut Client<T, D, RST, PWR>) -> Result<R, Error>,
    ) -> Result<R, Error> {
        self.with(|c| {
            if c.shared.state == ModemState::PoweredDown {
                return Err(Error::PoweredDown);
            }
            f(c)
        })
    }

    /// Like [`Self::with_powered`], for operations that need `init` to have
    /// run
    fn with_initialized<R>(
        &self,
        f: impl FnOnce(&mut Client<T, D, RST, PWR>) -> Result<R, Error>,
    ) -> Result<R, Error> {
        self.with(|c| match c.shared.state {
            ModemState::PoweredDown => Err(Error::PoweredDown),
            ModemState::Uninitialized => Err(Error::Uninitialized),
            _ => f(c),
        })
    }

    /// Initialize the module, wait for the network and bring up the data
    /// connection, all under one lock.
    pub fn connect(&self, pin: Option<&str>, apn: &Apn, auth: Auth) -> Result<Ipv4Addr, Error> {
        self.with(|c| {
            c.poll_urcs();
            if let Some(ip) = c.shared.joined_ip() {
                return Ok(ip);
            }
            c.init(pin)?;
            c.register_net(module_timing::registration_timeout())?;
            c.join(apn, auth)
        })
    }

    /// Power up and configure the module. `pin` takes precedence over the
    /// PIN of the configuration.
    pub fn init(&self, pin: Option<&str>) -> Result<(), Error> {
        self.with(|c| c.init(pin))
    }

    pub fn register_net(&self, timeout: Duration) -> Result<(), Error> {
        self.with_initialized(|c| c.register_net(timeout))
    }

    /// Refresh the network status, returning whether the module is registered
    pub fn check_net_status(&self) -> Result<bool, Error> {
        self.with_initialized(|c| c.check_net_status())
    }

    pub fn power_off(&self) -> Result<(), Error> {
        self.with_powered(|c| c.power_off())
    }

    pub fn join(&self, apn: &Apn, auth: Auth) -> Result<Ipv4Addr, Error> {
        self.with_initialized(|c| c.join(apn, auth))
    }

    pub fn disconnect(&self) -> Result<(), Error> {
        self.with_powered(|c| c.disconnect())
    }

    pub fn gethostbyname(&self, host: &str) -> Result<Ipv4Addr, Error> {
        self.with_powered(|c| c.gethostbyname(host))
    }

    pub fn socket(&self, protocol: Protocol, local_port: Option<u16>) -> Result<SocketHandle, Error> {
        self.with_powered(|c| c.socket(protocol, local_port))
    }

    /// Connect a socket to `host`, which is resolved unless it is a dotted
    /// address.
    pub fn socket_connect(&self, handle: SocketHandle, host: &str, port: u16) -> Result<(), Error> {
        self.with_powered(|c| c.connect_socket(handle, host, port))
    }

    pub fn is_connected(&self, handle: SocketHandle) -> bool {
        self.with(|c| c.is_connected(handle))
    }

    /// Set the read timeout of a socket. `None` blocks until data arrives.
    pub fn set_blocking(&self, handle: SocketHandle, timeout: Option<Duration>) -> Result<(), Error> {
        self.with(|c| c.set_blocking(handle, timeout))
    }

    pub fn send(&self, handle: SocketHandle, data: &[u8]) -> Result<usize, Error> {
        self.with_powered(|c| c.send(handle, data))
    }

    pub fn send_to(&self, handle: SocketHandle, addr: SocketAddrV4, data: &[u8]) -> Result<usize, Error> {
        self.with_powered(|c| c.send_to(handle, addr, data))
    }

    /// Bytes waiting to be read on the module side
    pub fn readable(&self, handle: SocketHandle) -> Result<usize, Error> {
        self.with_powered(|c| c.readable(handle))
    }

    pub fn recv(&self, handle: SocketHandle, buf: &mut [u8]) -> Result<usize, Error> {
        self.with_powered(|c| c.recv(handle, buf))
    }

    pub fn recv_from(&self, handle: SocketHandle, buf: &mut [u8]) -> Result<(usize, SocketAddrV4), Error> {
        self.with_powered(|c| c.recv_from(handle, buf))
    }

    pub fn close(&self, handle: SocketHandle) -> Result<(), Error> {
        self.with_powered(|c| c.close(handle))
    }

    pub fn free(&self, handle: SocketHandle) -> Result<(), Error> {
        self.with_powered(|c| c.free(handle))
    }

    pub fn socket_state(&self, handle: SocketHandle) -> Result<State, Error> {
        self.with(|c| c.shared.sockets.get(handle).map(|s| s.state()))
    }

    /// Indices of the stored messages with status `stat`, e.g. `"ALL"` or
    /// `"REC UNREAD"`. Returns the number of matches, which may exceed
    /// `ix.len()`.
    pub fn sms_list(&self, stat: &str, ix: &mut [u16]) -> Result<usize, Error> {
        self.with_powered(|c| c.sms_list(stat, ix))
    }

    pub fn sms_read(&self, index: u16, originator: &mut String<32>, body: &mut [u8]) -> Result<usize, Error> {
        self.with_powered(|c| c.sms_read(index, originator, body))
    }

    pub fn sms_delete(&self, index: u16) -> Result<(), Error> {
        self.with_powered(|c| c.sms_delete(index))
    }

    pub fn sms_send(&self, number: &str, text: &str) -> Result<(), Error> {
        self.with_powered(|c| c.sms_send(number, text))
    }

    pub fn ussd_command<const N: usize>(&self, cmd: &str, reply: &mut String<N>) -> Result<(), Error> {
        self.with_powered(|c| c.ussd_command(cmd, reply))
    }

    pub fn delete_file(&self, filename: &str) -> Result<(), Error> {
        self.with_powered(|c| c.delete_file(filename))
    }

    pub fn write_file(&self, filename: &str, data: &[u8]) -> Result<usize, Error> {
        self.with_powered(|c| c.write_file(filename, data))
    }

    pub fn read_file(&self, filename: &str, buf: &mut [u8]) -> Result<usize, Error> {
        self.with_powered(|c| c.read_file(filename, buf))
    }

    /// Set the log verbosity: 0 off, 1 info, 2 trace, 3 AT traffic. Returns
    /// `false` when no logging backend is compiled in.
    pub fn set_debug(&self, level: u8) -> bool {
        self.with(|c| c.debug = DebugLevel::from(level));
        cfg!(any(feature = "log", feature = "defmt"))
    }

    pub fn state(&self) -> ModemState {
        self.with(|c| c.shared.state)
    }

    /// Address of the data connection, [`Ipv4Addr::UNSPECIFIED`] while down
    pub fn ip(&self) -> Ipv4Addr {
        self.with(|c| c.shared.ip)
    }

    pub fn dev_status(&self) -> DeviceStatus {
        self.with(|c| c.shared.dev.clone())
    }

    pub fn net_status(&self) -> NetworkStatus {
        self.with(|c| c.shared.net.clone())
    }

    pub fn dump_dev_status<W: Write>(&self, w: &mut W) -> fmt::Result {
        self.with(|c| write!(w, "{}", c.shared.dev))
    }

    pub fn dump_net_status<W: Write>(&self, w: &mut W) -> fmt::Result {
        self.with(|c| {
            write!(w, "{}", c.shared.net)?;
            if c.shared.ip != Ipv4Addr::UNSPECIFIED {
                write!(w, "\r\n  {:<20}{}", "IP Address:", c.shared.ip)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use embassy_time::Delay;

    use super::*;
    use crate::command::Resp;
    use crate::modules::Module;
    use crate::registration::{AccessTechnology, Status};
    use crate::status::Sim;
    use crate::test_helpers::MockSerial;
    use crate::transport::SerialTransport;

    type TestModem = Modem<SerialTransport<MockSerial>, Delay>;

    fn modem(serial: &MockSerial) -> TestModem {
        crate::test_helpers::init_logger();
        Modem::new(
            SerialTransport::new(serial.clone()),
            Delay,
            Config::new().with_debug(DebugLevel::AtCmd),
        )
    }

    fn expect_init(serial: &MockSerial) {
        serial
            .expect(b"AT\r\n", b"\r\nOK\r\n")
            .expect(b"ATE0\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CMEE=2\r\n", b"\r\nOK\r\n")
            .expect(b"ATI\r\n", b"\r\nSARA-G350-00S-00\r\n\r\nOK\r\n")
            .expect(b"AT+CGMI\r\n", b"\r\nu-blox\r\n\r\nOK\r\n")
            .expect(b"AT+CGMM\r\n", b"\r\nSARA-G350\r\n\r\nOK\r\n")
            .expect(b"AT+CGMR\r\n", b"\r\n08.49\r\n\r\nOK\r\n")
            .expect(b"AT+CPIN?\r\n", b"\r\n+CPIN: READY\r\n\r\nOK\r\n")
            .expect(b"AT+CCID\r\n", b"\r\n+CCID: 89410000000000000001\r\n\r\nOK\r\n")
            .expect(b"AT+CGSN\r\n", b"\r\n004999010640000\r\n\r\nOK\r\n")
            .expect(b"AT+CIMI\r\n", b"\r\n228012345678901\r\n\r\nOK\r\n")
            .expect(b"AT+UPSV=0\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CMGF=1\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CNMI=2,1\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CREG=2\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CGREG=2\r\n", b"\r\nOK\r\n");
    }

    fn expect_profile(serial: &MockSerial, auth: u8, answer: &[u8]) {
        let cmd = std::format!("AT+UPSD=0,6,{}\r\n", auth);
        serial
            .expect(b"AT+UPSD=0,7,\"0.0.0.0\"\r\n", b"\r\nOK\r\n")
            .expect(b"AT+UPSD=0,1,\"internet\"\r\n", b"\r\nOK\r\n")
            .expect(b"AT+UPSD=0,2,\"\"\r\n", b"\r\nOK\r\n")
            .expect(b"AT+UPSD=0,3,\"\"\r\n", b"\r\nOK\r\n")
            .expect(cmd.as_bytes(), b"\r\nOK\r\n")
            .expect(b"AT+UPSDA=0,3\r\n", answer);
    }

    fn expect_register(serial: &MockSerial) {
        serial
            .expect(b"AT+CREG?\r\n", b"\r\n+CREG: 2,1\r\n\r\nOK\r\n")
            .expect(b"AT+CGREG?\r\n", b"\r\n+CGREG: 2,1\r\n\r\nOK\r\n")
            .expect(b"AT+COPS?\r\n", b"\r\n+COPS: 0,0,\"Swisscom\",2\r\n\r\nOK\r\n")
            .expect(b"AT+CNUM\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CSQ\r\n", b"\r\n+CSQ: 20,0\r\n\r\nOK\r\n");
    }

    fn expect_join(serial: &MockSerial, ip: &str) {
        serial
            .expect(b"AT+CGATT=1\r\n", b"\r\nOK\r\n")
            .expect(b"AT+UPSND=0,8\r\n", b"\r\n+UPSND: 0,8,0\r\n\r\nOK\r\n");
        expect_profile(serial, 1, b"\r\nOK\r\n");
        let answer = std::format!("\r\n+UPSND: 0,0,\"{}\"\r\n\r\nOK\r\n", ip);
        serial.expect(b"AT+UPSND=0,0\r\n", answer.as_bytes());
    }

    #[test]
    fn connect_end_to_end() {
        let serial = MockSerial::new();
        expect_init(&serial);
        serial
            .expect(b"AT+CREG?\r\n", b"\r\n+CREG: 2,1,\"0A2B\",\"1234ABCD\",2\r\n\r\nOK\r\n")
            .expect(b"AT+CGREG?\r\n", b"\r\n+CGREG: 2,5\r\n\r\nOK\r\n")
            .expect(b"AT+COPS?\r\n", b"\r\n+COPS: 0,0,\"Swisscom\",2\r\n\r\nOK\r\n")
            .expect(b"AT+CNUM\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CSQ\r\n", b"\r\n+CSQ: 20,0\r\n\r\nOK\r\n")
            .expect(b"AT+CGATT=1\r\n", b"\r\nOK\r\n")
            .expect(b"AT+UPSND=0,8\r\n", b"\r\n+UPSND: 0,8,0\r\n\r\nOK\r\n");
        // The module rejects no authentication, Detect moves on to PAP
        expect_profile(&serial, 0, b"\r\n+CME ERROR: 30\r\n");
        expect_profile(&serial, 1, b"\r\nOK\r\n");
        serial.expect(b"AT+UPSND=0,0\r\n", b"\r\n+UPSND: 0,0,\"10.20.30.40\"\r\n\r\nOK\r\n");

        let modem = modem(&serial);
        let ip = modem.connect(None, &Apn::new("internet"), Auth::Detect).unwrap();
        assert_eq!(ip, Ipv4Addr::new(10, 20, 30, 40));
        assert_eq!(modem.state(), ModemState::Joined);
        assert_eq!(serial.remaining(), 0);

        let dev = modem.dev_status();
        assert_eq!(dev.module, Module::SaraG350);
        assert_eq!(dev.sim, Sim::Ready);
        assert_eq!(dev.imei.as_str(), "004999010640000");
        assert_eq!(dev.imsi.as_str(), "228012345678901");
        assert_eq!(dev.manufacturer.as_str(), "u-blox");

        let net = modem.net_status();
        assert_eq!(net.csd, Status::Home);
        assert_eq!(net.psd, Status::Roaming);
        assert_eq!(net.lac, Some(0x0A2B));
        assert_eq!(net.rssi, Some(-73));
        assert_eq!(net.operator.as_str(), "Swisscom");

        let mut dump = std::string::String::new();
        modem.dump_net_status(&mut dump).unwrap();
        assert!(dump.contains("10.20.30.40"));

        // Already joined
        assert_eq!(
            modem.connect(None, &Apn::new("internet"), Auth::Detect),
            Ok(ip)
        );
    }

    #[test]
    fn init_forgets_connection_and_sockets() {
        let serial = MockSerial::new();
        expect_init(&serial);
        expect_register(&serial);
        expect_join(&serial, "10.20.30.40");
        serial.expect(b"AT+USOCR=6\r\n", b"\r\n+USOCR: 0\r\n\r\nOK\r\n");
        expect_init(&serial);
        expect_join(&serial, "10.20.30.41");
        serial.expect(b"AT+CPWROFF\r\n", b"\r\nOK\r\n");
        expect_init(&serial);

        let modem = modem(&serial);
        let apn = Apn::new("internet");
        assert_eq!(
            modem.connect(None, &apn, Auth::Pap),
            Ok(Ipv4Addr::new(10, 20, 30, 40))
        );
        let handle = modem.socket(Protocol::Tcp, None).unwrap();

        modem.init(None).unwrap();
        assert_eq!(modem.state(), ModemState::Initialized);
        assert_eq!(modem.ip(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(modem.socket_state(handle), Ok(State::Free));

        // The module is asked again rather than answered from the old address
        assert_eq!(modem.join(&apn, Auth::Pap), Ok(Ipv4Addr::new(10, 20, 30, 41)));

        modem.power_off().unwrap();
        assert_eq!(modem.ip(), Ipv4Addr::UNSPECIFIED);
        modem.init(None).unwrap();
        assert_eq!(modem.ip(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(serial.remaining(), 0);
    }

    #[test]
    fn deactivated_context_is_not_joined() {
        let serial = MockSerial::new();
        expect_init(&serial);
        expect_register(&serial);
        expect_join(&serial, "10.20.30.40");
        expect_register(&serial);
        expect_init(&serial);
        expect_register(&serial);
        expect_join(&serial, "10.20.30.41");

        let modem = modem(&serial);
        let apn = Apn::new("internet");
        modem.connect(None, &apn, Auth::Pap).unwrap();

        serial.feed(b"\r\n+UUPSDD: 0\r\n");
        assert_eq!(modem.check_net_status(), Ok(true));
        assert_ne!(modem.state(), ModemState::Joined);
        assert_eq!(modem.ip(), Ipv4Addr::UNSPECIFIED);

        assert_eq!(
            modem.connect(None, &apn, Auth::Pap),
            Ok(Ipv4Addr::new(10, 20, 30, 41))
        );
        assert_eq!(modem.state(), ModemState::Joined);
        assert_eq!(serial.remaining(), 0);
    }

    #[test]
    fn connect_cdma() {
        let serial = MockSerial::new();
        serial
            .expect(b"AT\r\n", b"\r\nOK\r\n")
            .expect(b"ATE0\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CMEE=2\r\n", b"\r\nOK\r\n")
            .expect(b"ATI\r\n", b"\r\nLISA-C200-00S-00\r\n\r\nOK\r\n")
            .expect(b"AT+CGMI\r\n", b"\r\nu-blox\r\n\r\nOK\r\n")
            .expect(b"AT+CGMM\r\n", b"\r\nLISA-C200\r\n\r\nOK\r\n")
            .expect(b"AT+CGMR\r\n", b"\r\n15.90\r\n\r\nOK\r\n")
            .expect(b"AT+CGSN\r\n", b"\r\nA1000012345678\r\n\r\nOK\r\n")
            .expect(b"AT+UPSV=0\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CMGF=1\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CNMI=2,1\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CREG=2\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CREG?\r\n", b"\r\n+CREG: 2,4138,2,1\r\n\r\nOK\r\n")
            .expect(b"AT+CNUM\r\n", b"\r\nOK\r\n")
            .expect(b"AT+CSQ\r\n", b"\r\n+CSQ: 18,99\r\n\r\nOK\r\n")
            .expect(b"AT+CMIP?\r\n", b"\r\n+CMIP: 10.4.5.6\r\n\r\nOK\r\n");

        let modem = modem(&serial);
        let ip = modem.connect(None, &Apn::new("internet"), Auth::Detect);
        assert_eq!(ip, Ok(Ipv4Addr::new(10, 4, 5, 6)));
        assert_eq!(serial.remaining(), 0);
        assert_eq!(modem.state(), ModemState::Joined);

        let dev = modem.dev_status();
        assert_eq!(dev.module, Module::LisaC200);
        assert_eq!(dev.meid.as_str(), "A1000012345678");
        assert!(dev.imei.is_empty());
        assert!(dev.ccid.is_empty());

        let net = modem.net_status();
        assert_eq!(net.csd, Status::Home);
        assert_eq!(net.psd, Status::Home);
        assert_eq!(net.act, AccessTechnology::Cdma);

        let sent = std::string::String::from_utf8(serial.sent()).unwrap();
        for cmd in ["AT+CPIN?", "AT+CCID", "AT+CIMI", "AT+CGREG", "AT+COPS?", "AT+UPSD"] {
            assert!(!sent.contains(cmd), "{} sent to a CDMA module", cmd);
        }

        assert_eq!(modem.socket_state(SocketHandle(18)), Ok(State::Free));
        assert_eq!(modem.socket_state(SocketHandle(29)), Ok(State::Free));
        assert_eq!(modem.socket_state(SocketHandle(1)), Err(Error::InvalidSocket));
    }

    #[test]
    fn register_with_zero_timeout_checks_once() {
        let serial = MockSerial::new();
        expect_init(&serial);
        serial
            .expect(b"AT+CREG?\r\n", b"\r\n+CREG: 2,2\r\n\r\nOK\r\n")
            .expect(b"AT+CGREG?\r\n", b"\r\n+CGREG: 2,2\r\n\r\nOK\r\n");
        let modem = modem(&serial);
        modem.init(None).unwrap();

        assert_eq!(
            modem.register_net(Duration::from_ticks(0)),
            Err(Error::NotRegistered)
        );
        assert_eq!(serial.remaining(), 0);
        let sent = serial.sent();
        let checks = sent.windows(10).filter(|w| *w == b"AT+CREG?\r\n").count();
        assert_eq!(checks, 1);
    }

    #[test]
    fn needs_init_before_registering() {
        let serial = MockSerial::new();
        let modem = modem(&serial);
        assert_eq!(
            modem.register_net(Duration::from_ticks(0)),
            Err(Error::Uninitialized)
        );
        assert!(serial.sent().is_empty());
    }

    #[test]
    fn socket_state_rules() {
        let serial = MockSerial::new();
        serial.expect(b"AT+USOCR=6\r\n", b"\r\n+USOCR: 0\r\n\r\nOK\r\n");
        let modem = modem(&serial);

        assert_eq!(modem.close(SocketHandle(1)), Ok(()));
        assert_eq!(modem.free(SocketHandle(1)), Ok(()));

        let handle = modem.socket(Protocol::Tcp, None).unwrap();
        assert_eq!(modem.socket_state(handle), Ok(State::Created));
        assert_eq!(modem.send(handle, b"data"), Err(Error::InvalidState));
        assert_eq!(modem.socket_state(SocketHandle(8)), Err(Error::InvalidSocket));
    }

    #[test]
    fn power_off_refuses_further_commands() {
        let serial = MockSerial::new();
        serial.expect(b"AT+CPWROFF\r\n", b"\r\nOK\r\n");
        let modem = modem(&serial);
        modem.power_off().unwrap();
        assert_eq!(modem.state(), ModemState::PoweredDown);
        assert_eq!(
            modem.socket(Protocol::Udp, None),
            Err(Error::PoweredDown)
        );
    }

    #[test]
    fn rejected_command_surfaces() {
        let serial = MockSerial::new();
        serial.expect(b"AT+CMGD=4\r\n", b"\r\n+CMS ERROR: 321\r\n");
        let modem = modem(&serial);
        assert_eq!(modem.sms_delete(4), Err(Error::Rejected(Resp::Error)));
    }

    #[test]
    fn debug_level_and_dumps() {
        let serial = MockSerial::new();
        let modem = modem(&serial);
        assert_eq!(modem.set_debug(0), cfg!(any(feature = "log", feature = "defmt")));

        let mut dump = std::string::String::new();
        modem.dump_dev_status(&mut dump).unwrap();
        assert!(dump.starts_with("Modem::devStatus"));
        assert!(!dump.contains("IMEI"));

        dump.clear();
        modem.dump_net_status(&mut dump).unwrap();
        assert!(!dump.contains("IP Address"));
    }
}
