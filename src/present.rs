//! Presence bitmask
//!
//! The 32-bit `present` word of the fixed header declares which optional
//! fields follow it. Each named bit is readable and writable on its own;
//! writing a bit never adds or removes decoded fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bits::{get_bit, set_bit};

/// Named bit positions of the presence word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PresentBit {
    Tsft = 0,
    Flags = 1,
    Rate = 2,
    Channel = 3,
    Fhss = 4,
    AntennaSignal = 5,
    AntennaNoise = 6,
    LockQuality = 7,
    TxAttenuation = 8,
    DbTxAttenuation = 9,
    DbmTxPower = 10,
    Antenna = 11,
    DbAntennaSignal = 12,
    DbAntennaNoise = 13,
    RxFlags = 14,
    /// Non-standard channel-plus field; recognised but never decoded
    ChannelPlus = 18,
    /// Another presence word follows; recognised but never decoded
    Ext = 31,
}

impl PresentBit {
    pub const ALL: [PresentBit; 17] = [
        PresentBit::Tsft,
        PresentBit::Flags,
        PresentBit::Rate,
        PresentBit::Channel,
        PresentBit::Fhss,
        PresentBit::AntennaSignal,
        PresentBit::AntennaNoise,
        PresentBit::LockQuality,
        PresentBit::TxAttenuation,
        PresentBit::DbTxAttenuation,
        PresentBit::DbmTxPower,
        PresentBit::Antenna,
        PresentBit::DbAntennaSignal,
        PresentBit::DbAntennaNoise,
        PresentBit::RxFlags,
        PresentBit::ChannelPlus,
        PresentBit::Ext,
    ];

    pub fn position(self) -> u32 {
        self as u32
    }

    pub fn mask(self) -> u32 {
        1 << self.position()
    }

    pub fn from_position(pos: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|bit| bit.position() == pos)
    }

    /// Accessor name, matching the decoded field name where one exists
    pub fn name(self) -> &'static str {
        match self {
            PresentBit::Tsft => "tsft",
            PresentBit::Flags => "flags",
            PresentBit::Rate => "rate",
            PresentBit::Channel => "channel",
            PresentBit::Fhss => "fhss",
            PresentBit::AntennaSignal => "ant_sig",
            PresentBit::AntennaNoise => "ant_noise",
            PresentBit::LockQuality => "lock_qual",
            PresentBit::TxAttenuation => "tx_attn",
            PresentBit::DbTxAttenuation => "db_tx_attn",
            PresentBit::DbmTxPower => "dbm_tx_power",
            PresentBit::Antenna => "ant",
            PresentBit::DbAntennaSignal => "db_ant_sig",
            PresentBit::DbAntennaNoise => "db_ant_noise",
            PresentBit::RxFlags => "rx_flags",
            PresentBit::ChannelPlus => "chanplus",
            PresentBit::Ext => "ext",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|bit| bit.name() == name)
    }
}

impl fmt::Display for PresentBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The presence word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentFlags(u32);

impl PresentFlags {
    pub fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn get(&self, bit: PresentBit) -> bool {
        get_bit(self.0, bit.position())
    }

    pub fn set(&mut self, bit: PresentBit, value: bool) {
        set_bit(&mut self.0, bit.position(), value);
    }

    /// Named bits currently set
    pub fn iter(&self) -> impl Iterator<Item = PresentBit> + '_ {
        PresentBit::ALL.iter().copied().filter(move |bit| self.get(*bit))
    }

    /// Set bits with no name in this decoder
    pub fn unknown_bits(&self) -> u32 {
        let known = PresentBit::ALL.iter().fold(0, |acc, bit| acc | bit.mask());
        self.0 & !known
    }
}

impl From<u32> for PresentFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<PresentFlags> for u32 {
    fn from(flags: PresentFlags) -> Self {
        flags.0
    }
}

impl fmt::Display for PresentFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x} [", self.0)?;
        for (i, bit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", bit)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_presence_bits() {
        let flags = PresentFlags::new(u32::from_le_bytes([0x6e, 0x48, 0x00, 0x00]));

        let set: Vec<_> = flags.iter().collect();
        assert_eq!(
            set,
            vec![
                PresentBit::Flags,
                PresentBit::Rate,
                PresentBit::Channel,
                PresentBit::AntennaSignal,
                PresentBit::AntennaNoise,
                PresentBit::Antenna,
                PresentBit::RxFlags,
            ]
        );
        assert!(!flags.get(PresentBit::Tsft));
        assert!(!flags.get(PresentBit::Fhss));
        assert!(!flags.get(PresentBit::LockQuality));
        assert_eq!(flags.unknown_bits(), 0);
    }

    #[test]
    fn test_set_get_every_bit() {
        for bit in PresentBit::ALL {
            for start in [0u32, u32::MAX, 0x0000_486e] {
                let mut flags = PresentFlags::new(start);
                flags.set(bit, true);
                assert!(flags.get(bit), "{} should be set", bit);
                assert_eq!(flags.bits() & !bit.mask(), start & !bit.mask());

                flags.set(bit, false);
                assert!(!flags.get(bit), "{} should be clear", bit);
                assert_eq!(flags.bits() & !bit.mask(), start & !bit.mask());
            }
        }
    }

    #[test]
    fn test_set_then_clear_restores() {
        let original = PresentFlags::new(0x0000_482f);
        let mut flags = original;
        flags.set(PresentBit::ChannelPlus, true);
        assert_eq!(flags.bits(), 0x0004_482f);
        flags.set(PresentBit::ChannelPlus, false);
        assert_eq!(flags, original);
    }

    #[test]
    fn test_ext_and_channel_plus_are_raw_bits() {
        let mut flags = PresentFlags::default();
        flags.set(PresentBit::Ext, true);
        assert_eq!(flags.bits(), 0x8000_0000);
        assert_eq!(PresentBit::from_position(18), Some(PresentBit::ChannelPlus));
        assert_eq!(PresentBit::from_position(17), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(PresentBit::from_name("ant_sig"), Some(PresentBit::AntennaSignal));
        assert_eq!(PresentBit::Antenna.name(), "ant");
        assert_eq!(PresentBit::from_name("bogus"), None);
        assert_eq!(
            PresentFlags::new(0x0000_0003).to_string(),
            "0x00000003 [tsft,flags]"
        );
    }
}
