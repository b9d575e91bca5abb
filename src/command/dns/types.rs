use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResolutionType {
    /// 0: domain name to IP address
    DomainNameToIp = 0,
    /// 1: IP address to domain name (host by address)
    IpToDomainName = 1,
}
