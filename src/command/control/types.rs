use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Echo {
    /// 0: echo off
    Off = 0,
    /// 1 (default and factory-programmed value): echo on
    On = 1,
}
