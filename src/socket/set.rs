use embassy_time::Duration;

use super::{Protocol, SocketCtrl, SocketHandle, SocketRange, State};
use crate::error::Error;

/// Number of socket control blocks. Both module families' index ranges fit.
pub const MAX_SOCKETS: usize = 32;

/// Fixed set of socket control blocks, indexed by [`SocketHandle`].
///
/// Only the indices within the configured [`SocketRange`] are ever handed out.
#[derive(Debug)]
pub struct SocketSet {
    sockets: [SocketCtrl; MAX_SOCKETS],
    range: SocketRange,
}

impl Default for SocketSet {
    fn default() -> Self {
        Self::new(SocketRange::new(1, 7))
    }
}

impl SocketSet {
    pub fn new(range: SocketRange) -> Self {
        Self {
            sockets: core::array::from_fn(|_| SocketCtrl::default()),
            range,
        }
    }

    pub fn range(&self) -> SocketRange {
        self.range
    }

    /// Change the usable index range. Sockets outside the new range are
    /// dropped, so this is only done while resolving the module type.
    pub(crate) fn set_range(&mut self, range: SocketRange) {
        self.range = range;
        for (i, ctrl) in self.sockets.iter_mut().enumerate() {
            if !range.contains(SocketHandle(i as u8)) {
                *ctrl = SocketCtrl::default();
            }
        }
    }

    /// First free handle in range, without claiming it
    pub fn find_free(&self) -> Option<SocketHandle> {
        self.range
            .iter()
            .find(|h| self.sockets[h.0 as usize].state == State::Free)
    }

    /// Claim `handle` for the module socket `modem_id`
    pub(crate) fn claim(
        &mut self,
        handle: SocketHandle,
        protocol: Protocol,
        modem_id: u8,
        timeout: Option<Duration>,
    ) -> Result<(), Error> {
        let ctrl = self.get_mut(handle)?;
        if ctrl.state != State::Free {
            return Err(Error::InvalidState);
        }
        *ctrl = SocketCtrl {
            state: State::Created,
            protocol: Some(protocol),
            modem_id: Some(modem_id),
            pending: 0,
            timeout,
        };
        Ok(())
    }

    pub fn get(&self, handle: SocketHandle) -> Result<&SocketCtrl, Error> {
        if !self.range.contains(handle) {
            return Err(Error::InvalidSocket);
        }
        self.sockets
            .get(handle.0 as usize)
            .ok_or(Error::InvalidSocket)
    }

    pub(crate) fn get_mut(&mut self, handle: SocketHandle) -> Result<&mut SocketCtrl, Error> {
        if !self.range.contains(handle) {
            return Err(Error::InvalidSocket);
        }
        self.sockets
            .get_mut(handle.0 as usize)
            .ok_or(Error::InvalidSocket)
    }

    /// Look up the allocated socket currently bound to module socket `modem_id`
    pub(crate) fn by_modem_id_mut(&mut self, modem_id: u8) -> Option<(SocketHandle, &mut SocketCtrl)> {
        let range = self.range;
        self.sockets
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| range.contains(SocketHandle(*i as u8)))
            .find(|(_, s)| s.state != State::Free && s.modem_id == Some(modem_id))
            .map(|(i, s)| (SocketHandle(i as u8), s))
    }

    /// Release `handle` back to the pool
    pub(crate) fn release(&mut self, handle: SocketHandle) -> Result<(), Error> {
        *self.get_mut(handle)? = SocketCtrl::default();
        Ok(())
    }

    /// Forget every socket, e.g. after the module was switched off
    pub(crate) fn clear(&mut self) {
        for ctrl in self.sockets.iter_mut() {
            *ctrl = SocketCtrl::default();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SocketHandle, &SocketCtrl)> {
        self.range
            .iter()
            .map(move |h| (h, &self.sockets[h.0 as usize]))
    }
}
