//! ### 24 - DNS
pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use types::ResolutionType;

use super::NoResponse;

/// 24.1 Resolve name / IP number through DNS +UDNSRN
///
/// Translates a domain name to an IP address. The answer can take a while as
/// the lookup runs against the network's DNS server.
#[derive(Clone, AtatCmd)]
#[at_cmd("+UDNSRN", NoResponse, timeout_ms = 70000)]
pub struct ResolveNameIp<'a> {
    #[at_arg(position = 0)]
    pub resolution_type: ResolutionType,
    #[at_arg(position = 1, len = 128)]
    pub domain_string: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::written;

    #[test]
    fn lookup() {
        let cmd = ResolveNameIp {
            resolution_type: ResolutionType::DomainNameToIp,
            domain_string: "u-blox.com",
        };
        assert_eq!(written(&cmd), "AT+UDNSRN=0,\"u-blox.com\"\r\n");
    }
}
