use atat::AtatCmd;
use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use no_std_net::SocketAddrV4;

use crate::client::Client;
use crate::command::ip_transport_layer::responses::{
    data_written, socket_created, socket_data, udp_socket_data,
};
use crate::command::ip_transport_layer::types::SocketProtocol;
use crate::command::ip_transport_layer::{
    CloseSocket, ConnectSocket, CreateSocket, PrepareUDPSendToDataBinary,
    PrepareWriteSocketDataBinary, ReadSocketData, ReadUDPSocketData,
};
use crate::error::{Error, GenericError};
use crate::module_timing::POLL_INTERVAL_MS;
use crate::modules::ModuleParams;
use crate::socket::{Protocol, SocketCtrl, SocketHandle, State};
use crate::transport::Transport;

impl<T, D, RST, PWR> Client<T, D, RST, PWR>
where
    T: Transport,
    D: DelayNs,
    RST: OutputPin,
    PWR: OutputPin,
{
    /// Allocate a socket. A full table is reported before anything is sent to
    /// the module.
    pub(crate) fn socket(
        &mut self,
        protocol: Protocol,
        local_port: Option<u16>,
    ) -> Result<SocketHandle, Error> {
        let handle = self.shared.sockets.find_free().ok_or(Error::NoFreeSocket)?;

        let mut id = None;
        self.exec(
            &CreateSocket {
                protocol: SocketProtocol::from(protocol),
                local_port,
            },
            |l, _| socket_created(l, &mut id),
        )?;
        let id = id.ok_or(Error::InvalidResponse)?;

        self.shared.sockets.claim(handle, protocol, id, None)?;
        trace!(self.debug; "Socket {} created as module socket {}", handle, id);
        Ok(handle)
    }

    /// Module side id of a socket in one of `states`
    fn modem_id(&self, handle: SocketHandle, states: &[State]) -> Result<u8, Error> {
        let ctrl = self.shared.sockets.get(handle)?;
        if !states.contains(&ctrl.state) {
            return Err(Error::InvalidState);
        }
        ctrl.modem_id.ok_or(Error::SocketClosed)
    }

    pub(crate) fn connect_socket(
        &mut self,
        handle: SocketHandle,
        host: &str,
        port: u16,
    ) -> Result<(), Error> {
        let id = self.modem_id(handle, &[State::Created])?;
        let ip = self.gethostbyname(host)?;
        self.exec_simple(&ConnectSocket {
            socket: id,
            remote_addr: ip,
            remote_port: port,
        })?;
        self.shared.sockets.get_mut(handle)?.state = State::Connected;
        Ok(())
    }

    pub(crate) fn is_connected(&mut self, handle: SocketHandle) -> bool {
        self.poll_urcs();
        self.shared
            .sockets
            .get(handle)
            .map_or(false, |ctrl| ctrl.state == State::Connected)
    }

    /// `None` blocks until data arrives
    pub(crate) fn set_blocking(
        &mut self,
        handle: SocketHandle,
        timeout: Option<Duration>,
    ) -> Result<(), Error> {
        let ctrl = self.shared.sockets.get_mut(handle)?;
        if ctrl.state == State::Free {
            return Err(Error::InvalidState);
        }
        ctrl.timeout = timeout;
        Ok(())
    }

    /// Write `data` to a connected socket in blocks the module accepts
    pub(crate) fn send(&mut self, handle: SocketHandle, data: &[u8]) -> Result<usize, Error> {
        let id = self.modem_id(handle, &[State::Connected])?;
        let mut sent = 0;
        for chunk in data.chunks(self.shared.dev.module.max_write_len()) {
            let cmd = PrepareWriteSocketDataBinary {
                socket: id,
                length: chunk.len(),
            };
            sent += self.write_block(&cmd, id, chunk)?;
        }
        Ok(sent)
    }

    /// Send `data` as datagrams to `addr`
    pub(crate) fn send_to(
        &mut self,
        handle: SocketHandle,
        addr: SocketAddrV4,
        data: &[u8],
    ) -> Result<usize, Error> {
        let id = self.modem_id(handle, &[State::Created, State::Connected])?;
        let mut sent = 0;
        for chunk in data.chunks(self.shared.dev.module.max_write_len()) {
            let cmd = PrepareUDPSendToDataBinary {
                socket: id,
                remote_addr: *addr.ip(),
                remote_port: addr.port(),
                length: chunk.len(),
            };
            sent += self.write_block(&cmd, id, chunk)?;
        }
        Ok(sent)
    }

    fn write_block<C: AtatCmd>(&mut self, cmd: &C, id: u8, chunk: &[u8]) -> Result<usize, Error> {
        self.exec_prompt(cmd, chunk)?;
        let mut written = None;
        self.finish(cmd, |l, _| data_written(l, id, &mut written))?;
        Ok(written.unwrap_or(chunk.len()))
    }

    /// Bytes the module reported as available, after handling whatever
    /// notifications are already buffered
    pub(crate) fn readable(&mut self, handle: SocketHandle) -> Result<usize, Error> {
        if self.shared.sockets.get(handle)?.state == State::Free {
            return Err(Error::InvalidState);
        }
        self.poll_urcs();
        Ok(self.shared.sockets.get(handle)?.pending)
    }

    /// Wait until the socket has pending data, lost its module socket or the
    /// socket timeout elapsed.
    fn wait_pending(&mut self, handle: SocketHandle, start: Instant) -> Result<SocketCtrl, Error> {
        loop {
            let ctrl = self.shared.sockets.get(handle)?.clone();
            if ctrl.pending > 0 || ctrl.modem_id.is_none() || ctrl.state == State::Free {
                return Ok(ctrl);
            }
            if ctrl.timeout.map_or(false, |t| start.elapsed() >= t) {
                return Err(Error::Generic(GenericError::Timeout));
            }
            self.poll_urcs();
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
    }

    /// Read from a connected socket, blocking until some data arrived or the
    /// socket timeout elapsed. Returns 0 once the remote end closed the
    /// socket.
    pub(crate) fn recv(&mut self, handle: SocketHandle, buf: &mut [u8]) -> Result<usize, Error> {
        self.modem_id(handle, &[State::Connected])?;
        let start = Instant::now();
        let max_read = self.shared.dev.module.max_read_len();
        let mut cnt = 0;

        while cnt < buf.len() {
            let ctrl = if cnt == 0 {
                self.wait_pending(handle, start)?
            } else {
                self.shared.sockets.get(handle)?.clone()
            };
            let Some(id) = ctrl.modem_id.filter(|_| ctrl.state == State::Connected) else {
                break;
            };
            let blk = ctrl.pending.min(max_read).min(buf.len() - cnt);
            if blk == 0 {
                break;
            }

            let mut read = None;
            self.exec(
                &ReadSocketData {
                    socket: id,
                    length: blk,
                },
                |l, _| socket_data(l, id, &mut buf[cnt..], &mut read),
            )?;
            let n = read.ok_or(Error::InvalidResponse)?;
            let ctrl = self.shared.sockets.get_mut(handle)?;
            ctrl.pending = if n == 0 { 0 } else { ctrl.pending.saturating_sub(n) };
            cnt += n;
        }
        Ok(cnt)
    }

    /// Read one datagram, or the part of it that fits `buf`, and report its
    /// origin.
    pub(crate) fn recv_from(
        &mut self,
        handle: SocketHandle,
        buf: &mut [u8],
    ) -> Result<(usize, SocketAddrV4), Error> {
        self.modem_id(handle, &[State::Created, State::Connected])?;
        let start = Instant::now();
        let ctrl = self.wait_pending(handle, start)?;
        let id = ctrl.modem_id.ok_or(Error::SocketClosed)?;

        let blk = ctrl
            .pending
            .min(self.shared.dev.module.max_read_len())
            .min(buf.len());
        let mut read = None;
        self.exec(
            &ReadUDPSocketData {
                socket: id,
                length: blk,
            },
            |l, _| udp_socket_data(l, id, buf, &mut read),
        )?;
        let (n, from) = read.ok_or(Error::InvalidResponse)?;

        let ctrl = self.shared.sockets.get_mut(handle)?;
        ctrl.pending = if n == 0 { 0 } else { ctrl.pending.saturating_sub(n) };
        Ok((n, from))
    }

    /// Close the connection of a connected socket. The handle stays
    /// allocated; closing a socket that is not connected does nothing.
    pub(crate) fn close(&mut self, handle: SocketHandle) -> Result<(), Error> {
        let ctrl = self.shared.sockets.get(handle)?;
        if ctrl.state != State::Connected {
            return Ok(());
        }
        if let Some(id) = ctrl.modem_id {
            self.exec_simple(&CloseSocket { socket: id })?;
        }
        let ctrl = self.shared.sockets.get_mut(handle)?;
        ctrl.state = State::Created;
        ctrl.modem_id = None;
        Ok(())
    }

    /// Close the socket if needed and return the handle to the table
    pub(crate) fn free(&mut self, handle: SocketHandle) -> Result<(), Error> {
        let ctrl = self.shared.sockets.get(handle)?;
        let closed = match (ctrl.state, ctrl.modem_id) {
            (State::Free, _) => return Ok(()),
            (State::Connected, _) => self.close(handle),
            // Never connected, but the module still holds the socket
            (State::Created, Some(id)) => self.exec_simple(&CloseSocket { socket: id }),
            (State::Created, None) => Ok(()),
        };
        // The slot is released even when the module refused to close
        if let Err(e) = closed {
            warn!(self.debug; "Socket {} not closed by the module: {:?}", handle, e);
        }
        self.shared.sockets.release(handle)?;
        trace!(self.debug; "Socket {} freed", handle);
        Ok(())
    }
}
