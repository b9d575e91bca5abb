use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageFormat {
    /// • 0 (default): PDU mode
    Pdu = 0,
    /// • 1: text mode
    Text = 1,
}

/// `<mode>` of `+CNMI`, how result codes are passed to the DTE
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NewMessageIndicationMode {
    /// • 0: buffer unsolicited result codes in the MT
    BufferInMt = 0,
    /// • 1: discard indications when the link is reserved
    Discard = 1,
    /// • 2: buffer result codes while the link is reserved and flush them afterwards
    BufferInTa = 2,
}

/// `<mt>` of `+CNMI`, routing of received messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NewMessageRouting {
    /// • 0: no indication
    NoIndication = 0,
    /// • 1: store the message and indicate its location with +CMTI
    StoreAndNotify = 1,
}
