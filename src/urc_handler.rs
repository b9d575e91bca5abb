//! Reaction to unsolicited result codes, run on every `+` line the response
//! matcher sees.
use crate::client::{ModemState, Shared};
use crate::command::network_service::responses::registration;
use crate::command::{Line, Urc};
use crate::config::DebugLevel;
use crate::modules::ModuleParams;
use crate::registration::Domain;
use crate::socket::State;

use no_std_net::Ipv4Addr;

pub(crate) fn handle(line: &Line, shared: &mut Shared, debug: DebugLevel) {
    let Some(urc) = Urc::parse(line) else {
        return;
    };
    let cdma = shared.dev.module.is_cdma();

    match urc {
        Urc::NetworkRegistration => {
            registration(line, Domain::Circuit, cdma, &mut shared.net);
        }
        Urc::GPRSNetworkRegistration => {
            registration(line, Domain::Packet, cdma, &mut shared.net);
        }
        Urc::DataConnectionDeactivated(urc) => {
            warn!(debug; "Data connection of profile {} deactivated", urc.profile_id);
            shared.ip = Ipv4Addr::UNSPECIFIED;
            if shared.state == ModemState::Joined {
                shared.state = ModemState::Disconnected;
            }
        }
        Urc::SocketDataAvailable(urc) => {
            if let Some((handle, ctrl)) = shared.sockets.by_modem_id_mut(urc.socket) {
                trace!(debug; "Socket {}: {} bytes pending", handle, urc.length);
                ctrl.pending = urc.length;
            }
        }
        Urc::SocketClosed(urc) => {
            if let Some((handle, ctrl)) = shared.sockets.by_modem_id_mut(urc.socket) {
                info!(debug; "Socket {} closed by remote host", handle);
                if ctrl.state == State::Connected {
                    ctrl.state = State::Created;
                }
                ctrl.modem_id = None;
            }
        }
        Urc::NewMessageIndication(urc) => {
            info!(debug; "New SMS in {} at index {}", urc.mem, urc.index);
        }
    }
}
