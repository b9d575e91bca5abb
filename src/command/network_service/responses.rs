//! Extractors for Network service Commands
use crate::command::{copy_str, Line, Resp};
use crate::registration::{AccessTechnology, Domain, Status};
use crate::status::NetworkStatus;

/// Bit error rate in tenths of a percent, indexed by the `<qual>` of `+CSQ`
const BER_TABLE: [u8; 8] = [49, 43, 37, 25, 19, 13, 7, 0];

/// 7.2 Signal quality +CSQ
///
/// `+CSQ: <rssi>,<qual>`, 99 meaning not known or not detectable.
pub fn signal_quality(line: &Line, net: &mut NetworkStatus) -> Resp {
    if let Some(mut args) = line.response("+CSQ") {
        match args.num::<u8>() {
            Some(a) if a != 99 && a <= 31 => net.rssi = Some(-113 + 2 * a as i16),
            Some(99) => net.rssi = None,
            _ => {}
        }
        match args.num::<u8>() {
            Some(b) if (b as usize) < BER_TABLE.len() => net.ber = Some(BER_TABLE[b as usize]),
            Some(99) => net.ber = None,
            _ => {}
        }
    }
    Resp::Wait
}

/// 7.5 Operator selection +COPS
///
/// `+COPS: <mode>[,<format>,<oper>[,<AcT>]]`
pub fn operator(line: &Line, net: &mut NetworkStatus) -> Resp {
    if let Some(mut args) = line.response("+COPS") {
        args.skip();
        args.skip();
        if let Some(name) = args.quoted() {
            copy_str(&mut net.operator, name);
        }
        if let Some(act) = args.num::<u8>() {
            net.act = AccessTechnology::from(act);
        }
    }
    Resp::Wait
}

/// 7.11 Subscriber number +CNUM
///
/// `+CNUM: [<alpha>],<number>,<type>`. Only the first number is kept.
pub fn subscriber_number(line: &Line, net: &mut NetworkStatus) -> Resp {
    if let Some(mut args) = line.response("+CNUM") {
        args.skip();
        if let Some(number) = args.quoted() {
            if net.number.is_empty() {
                copy_str(&mut net.number, number);
            }
        }
    }
    Resp::Wait
}

/// 7.9 Network registration status +CREG, 18.27 GPRS network registration
/// status +CGREG
///
/// Accepts the read response `<n>,<stat>[,<lac>,<ci>[,<AcTStatus>]]` as well
/// as the URC `<stat>[,<lac>,<ci>[,<AcTStatus>]]`. The two are told apart by
/// the second argument, which is quoted or absent in the URC. CDMA modules
/// answer `+CREG: <n>,<sid>,<nid>,<stat>` which covers both domains.
pub fn registration(line: &Line, domain: Domain, cdma: bool, net: &mut NetworkStatus) -> Resp {
    let name = match domain {
        Domain::Circuit => "+CREG",
        Domain::Packet => "+CGREG",
    };
    let Some(mut args) = line.response(name) else {
        return Resp::Wait;
    };

    let Some(first) = args.num::<u8>() else {
        return Resp::Wait;
    };

    if cdma && domain == Domain::Circuit {
        args.skip();
        args.skip();
        if let Some(stat) = args.num::<u8>() {
            let stat = Status::from(stat);
            net.csd = stat;
            net.psd = stat;
            net.act = AccessTechnology::Cdma;
        }
        return Resp::Wait;
    }

    let stat = if args.peek_quoted() || args.rest().is_empty() {
        first
    } else {
        match args.num::<u8>() {
            Some(stat) => stat,
            None => return Resp::Wait,
        }
    };

    let stat = Status::from(stat);
    match domain {
        Domain::Circuit => net.csd = stat,
        Domain::Packet => net.psd = stat,
    }

    if let Some(lac) = args.hex().and_then(|lac| u16::try_from(lac).ok()) {
        net.lac = Some(lac);
    }
    if let Some(ci) = args.hex() {
        net.ci = Some(ci);
    }
    if let Some(act) = args.num::<u8>() {
        net.act = AccessTechnology::from(act);
    }
    Resp::Wait
}
