//! Optional radiotap fields
//!
//! Each field is a small fixed-layout structure. [`FieldKind::CANONICAL_ORDER`]
//! is the order in which present fields appear on the wire, as defined by
//! the radiotap namespace; decoding must follow it rather than bit numbering.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bits::{get_bit, set_bit};
use crate::layout::{ByteOrder, FieldSpec, FixedLayout, Layout, Values};
use crate::present::PresentBit;

/// A decoded optional field type
pub trait RadiotapField: FixedLayout + Copy {
    const KIND: FieldKind;

    fn from_field(field: &OptionalField) -> Option<&Self>;

    fn into_field(self) -> OptionalField;
}

macro_rules! radiotap_field {
    ($ty:ident, $name:literal, { $($field:ident: $fty:ty = $width:literal),+ $(,)? }) => {
        impl FixedLayout for $ty {
            const LAYOUT: Layout = Layout {
                name: $name,
                fields: &[$(FieldSpec {
                    name: stringify!($field),
                    width: $width,
                    order: ByteOrder::Little,
                    default: 0,
                }),+],
            };

            fn from_values(values: &Values) -> Self {
                let mut iter = values.as_slice().iter().copied();
                Self {
                    $($field: iter.next().unwrap_or_default() as $fty),+
                }
            }

            fn to_values(&self) -> Values {
                Values::from_slice(&[$(u64::from(self.$field)),+])
            }
        }

        impl RadiotapField for $ty {
            const KIND: FieldKind = FieldKind::$ty;

            fn from_field(field: &OptionalField) -> Option<&Self> {
                match field {
                    OptionalField::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_field(self) -> OptionalField {
                OptionalField::$ty(self)
            }
        }
    };
}

/// TSF timer value when the first bit of the MPDU arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tsft {
    pub usecs: u64,
}

/// Bits of the [`Flags`] byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FrameFlag {
    Cfp = 0,
    ShortPreamble = 1,
    Wep = 2,
    Fragmented = 3,
    /// Frame includes a trailing FCS
    Fcs = 4,
    DataPad = 5,
    BadFcs = 6,
    ShortGi = 7,
}

impl FrameFlag {
    pub const ALL: [FrameFlag; 8] = [
        FrameFlag::Cfp,
        FrameFlag::ShortPreamble,
        FrameFlag::Wep,
        FrameFlag::Fragmented,
        FrameFlag::Fcs,
        FrameFlag::DataPad,
        FrameFlag::BadFcs,
        FrameFlag::ShortGi,
    ];

    pub fn position(self) -> u32 {
        self as u32
    }

    pub fn mask(self) -> u8 {
        1 << self.position()
    }
}

/// Generates a named getter and setter per flag bit
macro_rules! flag_accessors {
    ($flag:ident, $($get:ident, $set:ident => $variant:ident;)+) => {
        $(
            pub fn $get(&self) -> bool {
                self.flag($flag::$variant)
            }

            pub fn $set(&mut self, value: bool) {
                self.set_flag($flag::$variant, value);
            }
        )+
    };
}

/// Frame properties byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    pub val: u8,
}

impl Flags {
    pub fn flag(&self, flag: FrameFlag) -> bool {
        get_bit(self.val, flag.position())
    }

    pub fn set_flag(&mut self, flag: FrameFlag, value: bool) {
        set_bit(&mut self.val, flag.position(), value);
    }

    flag_accessors! {
        FrameFlag,
        cfp, set_cfp => Cfp;
        short_preamble, set_short_preamble => ShortPreamble;
        wep, set_wep => Wep;
        fragmented, set_fragmented => Fragmented;
        fcs, set_fcs => Fcs;
        data_pad, set_data_pad => DataPad;
        bad_fcs, set_bad_fcs => BadFcs;
        short_gi, set_short_gi => ShortGi;
    }
}

/// TX/RX data rate in 500 kbps units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rate {
    pub val: u8,
}

impl Rate {
    pub fn kbps(&self) -> u32 {
        u32::from(self.val) * 500
    }
}

/// Bits of [`Channel::flags`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChannelFlag {
    Turbo = 4,
    Cck = 5,
    Ofdm = 6,
    TwoGhz = 7,
    FiveGhz = 8,
    Passive = 9,
    DynCckOfdm = 10,
    Gfsk = 11,
}

impl ChannelFlag {
    pub const ALL: [ChannelFlag; 8] = [
        ChannelFlag::Turbo,
        ChannelFlag::Cck,
        ChannelFlag::Ofdm,
        ChannelFlag::TwoGhz,
        ChannelFlag::FiveGhz,
        ChannelFlag::Passive,
        ChannelFlag::DynCckOfdm,
        ChannelFlag::Gfsk,
    ];

    pub fn position(self) -> u32 {
        self as u32
    }

    pub fn mask(self) -> u16 {
        1 << self.position()
    }
}

/// Channel frequency in MHz and channel properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Channel {
    pub freq: u16,
    pub flags: u16,
}

impl Channel {
    pub fn flag(&self, flag: ChannelFlag) -> bool {
        get_bit(self.flags, flag.position())
    }

    /// Assign a single channel property bit
    pub fn set_flag(&mut self, flag: ChannelFlag, value: bool) {
        set_bit(&mut self.flags, flag.position(), value);
    }

    flag_accessors! {
        ChannelFlag,
        turbo, set_turbo => Turbo;
        cck, set_cck => Cck;
        ofdm, set_ofdm => Ofdm;
        two_ghz, set_two_ghz => TwoGhz;
        five_ghz, set_five_ghz => FiveGhz;
        passive, set_passive => Passive;
        dyn_cck_ofdm, set_dyn_cck_ofdm => DynCckOfdm;
        gfsk, set_gfsk => Gfsk;
    }

    /// IEEE channel number for the 2.4, 5 and 6 GHz bands
    pub fn channel_number(&self) -> Option<u16> {
        match self.freq {
            2484 => Some(14),
            2412..=2472 => Some((self.freq - 2407) / 5),
            5000..=5895 => Some((self.freq - 5000) / 5),
            5955..=7115 => Some((self.freq - 5950) / 5),
            _ => None,
        }
    }
}

/// Hop set and pattern for frequency-hopping radios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fhss {
    pub set: u8,
    pub pattern: u8,
}

/// RF signal power at the antenna, dBm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AntennaSignal {
    pub db: u8,
}

impl AntennaSignal {
    pub fn dbm(&self) -> i8 {
        self.db as i8
    }
}

/// RF noise power at the antenna, dBm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AntennaNoise {
    pub db: u8,
}

impl AntennaNoise {
    pub fn dbm(&self) -> i8 {
        self.db as i8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockQuality {
    pub val: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxAttenuation {
    pub val: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbTxAttenuation {
    pub db: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbmTxPower {
    pub dbm: u8,
}

/// Antenna index the frame was received or sent on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Antenna {
    pub index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbAntennaSignal {
    pub db: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DbAntennaNoise {
    pub db: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RxFlags {
    pub val: u16,
}

radiotap_field!(Tsft, "tsft", { usecs: u64 = 8 });
radiotap_field!(Flags, "flags", { val: u8 = 1 });
radiotap_field!(Rate, "rate", { val: u8 = 1 });
radiotap_field!(Channel, "channel", { freq: u16 = 2, flags: u16 = 2 });
radiotap_field!(Fhss, "fhss", { set: u8 = 1, pattern: u8 = 1 });
radiotap_field!(AntennaSignal, "ant_sig", { db: u8 = 1 });
radiotap_field!(AntennaNoise, "ant_noise", { db: u8 = 1 });
radiotap_field!(LockQuality, "lock_qual", { val: u16 = 2 });
radiotap_field!(TxAttenuation, "tx_attn", { val: u16 = 2 });
radiotap_field!(DbTxAttenuation, "db_tx_attn", { db: u16 = 2 });
radiotap_field!(DbmTxPower, "dbm_tx_power", { dbm: u8 = 1 });
radiotap_field!(Antenna, "ant", { index: u8 = 1 });
radiotap_field!(DbAntennaSignal, "db_ant_sig", { db: u8 = 1 });
radiotap_field!(DbAntennaNoise, "db_ant_noise", { db: u8 = 1 });
radiotap_field!(RxFlags, "rx_flags", { val: u16 = 2 });

/// Registry entry for each decodable optional field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Tsft,
    Flags,
    Rate,
    Channel,
    Fhss,
    AntennaSignal,
    AntennaNoise,
    LockQuality,
    TxAttenuation,
    DbTxAttenuation,
    DbmTxPower,
    Antenna,
    DbAntennaSignal,
    DbAntennaNoise,
    RxFlags,
}

impl FieldKind {
    /// Wire order of present fields
    pub const CANONICAL_ORDER: [FieldKind; 15] = [
        FieldKind::Tsft,
        FieldKind::Flags,
        FieldKind::Rate,
        FieldKind::Channel,
        FieldKind::Fhss,
        FieldKind::AntennaSignal,
        FieldKind::AntennaNoise,
        FieldKind::LockQuality,
        FieldKind::TxAttenuation,
        FieldKind::DbTxAttenuation,
        FieldKind::DbmTxPower,
        FieldKind::Antenna,
        FieldKind::DbAntennaSignal,
        FieldKind::DbAntennaNoise,
        FieldKind::RxFlags,
    ];

    pub fn layout(self) -> Layout {
        match self {
            FieldKind::Tsft => Tsft::LAYOUT,
            FieldKind::Flags => Flags::LAYOUT,
            FieldKind::Rate => Rate::LAYOUT,
            FieldKind::Channel => Channel::LAYOUT,
            FieldKind::Fhss => Fhss::LAYOUT,
            FieldKind::AntennaSignal => AntennaSignal::LAYOUT,
            FieldKind::AntennaNoise => AntennaNoise::LAYOUT,
            FieldKind::LockQuality => LockQuality::LAYOUT,
            FieldKind::TxAttenuation => TxAttenuation::LAYOUT,
            FieldKind::DbTxAttenuation => DbTxAttenuation::LAYOUT,
            FieldKind::DbmTxPower => DbmTxPower::LAYOUT,
            FieldKind::Antenna => Antenna::LAYOUT,
            FieldKind::DbAntennaSignal => DbAntennaSignal::LAYOUT,
            FieldKind::DbAntennaNoise => DbAntennaNoise::LAYOUT,
            FieldKind::RxFlags => RxFlags::LAYOUT,
        }
    }

    pub fn bit(self) -> PresentBit {
        match self {
            FieldKind::Tsft => PresentBit::Tsft,
            FieldKind::Flags => PresentBit::Flags,
            FieldKind::Rate => PresentBit::Rate,
            FieldKind::Channel => PresentBit::Channel,
            FieldKind::Fhss => PresentBit::Fhss,
            FieldKind::AntennaSignal => PresentBit::AntennaSignal,
            FieldKind::AntennaNoise => PresentBit::AntennaNoise,
            FieldKind::LockQuality => PresentBit::LockQuality,
            FieldKind::TxAttenuation => PresentBit::TxAttenuation,
            FieldKind::DbTxAttenuation => PresentBit::DbTxAttenuation,
            FieldKind::DbmTxPower => PresentBit::DbmTxPower,
            FieldKind::Antenna => PresentBit::Antenna,
            FieldKind::DbAntennaSignal => PresentBit::DbAntennaSignal,
            FieldKind::DbAntennaNoise => PresentBit::DbAntennaNoise,
            FieldKind::RxFlags => PresentBit::RxFlags,
        }
    }

    pub fn name(self) -> &'static str {
        self.layout().name
    }

    /// Encoded width in bytes
    pub fn width(self) -> usize {
        self.layout().len()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::CANONICAL_ORDER
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }

    /// Index in [`FieldKind::CANONICAL_ORDER`]
    pub fn canonical_index(self) -> usize {
        self as usize
    }

    /// Decode this field from the front of `buf`, or `None` if too short
    pub fn decode(self, buf: &mut impl Buf) -> Option<OptionalField> {
        match self {
            FieldKind::Tsft => Tsft::decode(buf).map(OptionalField::Tsft),
            FieldKind::Flags => Flags::decode(buf).map(OptionalField::Flags),
            FieldKind::Rate => Rate::decode(buf).map(OptionalField::Rate),
            FieldKind::Channel => Channel::decode(buf).map(OptionalField::Channel),
            FieldKind::Fhss => Fhss::decode(buf).map(OptionalField::Fhss),
            FieldKind::AntennaSignal => AntennaSignal::decode(buf).map(OptionalField::AntennaSignal),
            FieldKind::AntennaNoise => AntennaNoise::decode(buf).map(OptionalField::AntennaNoise),
            FieldKind::LockQuality => LockQuality::decode(buf).map(OptionalField::LockQuality),
            FieldKind::TxAttenuation => TxAttenuation::decode(buf).map(OptionalField::TxAttenuation),
            FieldKind::DbTxAttenuation => {
                DbTxAttenuation::decode(buf).map(OptionalField::DbTxAttenuation)
            }
            FieldKind::DbmTxPower => DbmTxPower::decode(buf).map(OptionalField::DbmTxPower),
            FieldKind::Antenna => Antenna::decode(buf).map(OptionalField::Antenna),
            FieldKind::DbAntennaSignal => {
                DbAntennaSignal::decode(buf).map(OptionalField::DbAntennaSignal)
            }
            FieldKind::DbAntennaNoise => {
                DbAntennaNoise::decode(buf).map(OptionalField::DbAntennaNoise)
            }
            FieldKind::RxFlags => RxFlags::decode(buf).map(OptionalField::RxFlags),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded optional field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field")]
pub enum OptionalField {
    #[serde(rename = "tsft")]
    Tsft(Tsft),
    #[serde(rename = "flags")]
    Flags(Flags),
    #[serde(rename = "rate")]
    Rate(Rate),
    #[serde(rename = "channel")]
    Channel(Channel),
    #[serde(rename = "fhss")]
    Fhss(Fhss),
    #[serde(rename = "ant_sig")]
    AntennaSignal(AntennaSignal),
    #[serde(rename = "ant_noise")]
    AntennaNoise(AntennaNoise),
    #[serde(rename = "lock_qual")]
    LockQuality(LockQuality),
    #[serde(rename = "tx_attn")]
    TxAttenuation(TxAttenuation),
    #[serde(rename = "db_tx_attn")]
    DbTxAttenuation(DbTxAttenuation),
    #[serde(rename = "dbm_tx_power")]
    DbmTxPower(DbmTxPower),
    #[serde(rename = "ant")]
    Antenna(Antenna),
    #[serde(rename = "db_ant_sig")]
    DbAntennaSignal(DbAntennaSignal),
    #[serde(rename = "db_ant_noise")]
    DbAntennaNoise(DbAntennaNoise),
    #[serde(rename = "rx_flags")]
    RxFlags(RxFlags),
}

macro_rules! with_field {
    ($field:expr, $inner:ident => $body:expr) => {
        match $field {
            OptionalField::Tsft($inner) => $body,
            OptionalField::Flags($inner) => $body,
            OptionalField::Rate($inner) => $body,
            OptionalField::Channel($inner) => $body,
            OptionalField::Fhss($inner) => $body,
            OptionalField::AntennaSignal($inner) => $body,
            OptionalField::AntennaNoise($inner) => $body,
            OptionalField::LockQuality($inner) => $body,
            OptionalField::TxAttenuation($inner) => $body,
            OptionalField::DbTxAttenuation($inner) => $body,
            OptionalField::DbmTxPower($inner) => $body,
            OptionalField::Antenna($inner) => $body,
            OptionalField::DbAntennaSignal($inner) => $body,
            OptionalField::DbAntennaNoise($inner) => $body,
            OptionalField::RxFlags($inner) => $body,
        }
    };
}

fn kind_of<T: RadiotapField>(_: &T) -> FieldKind {
    T::KIND
}

impl OptionalField {
    pub fn kind(&self) -> FieldKind {
        with_field!(self, inner => kind_of(inner))
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Encoded width in bytes
    pub fn len(&self) -> usize {
        with_field!(self, inner => inner.encoded_len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of a named layout member, e.g. `"freq"` on a channel field
    pub fn value(&self, name: &str) -> Option<u64> {
        with_field!(self, inner => inner.value(name))
    }

    pub fn encode(&self, buf: &mut impl BufMut) {
        with_field!(self, inner => inner.encode(buf))
    }

    pub fn downcast<T: RadiotapField>(&self) -> Option<&T> {
        T::from_field(self)
    }
}

impl fmt::Display for OptionalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.kind().layout();
        write!(f, "{}(", layout.name)?;
        for (i, spec) in layout.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:#x}", spec.name, self.value(spec.name).unwrap_or_default())?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_widths() {
        let widths: Vec<usize> = FieldKind::CANONICAL_ORDER
            .iter()
            .map(|kind| kind.width())
            .collect();
        assert_eq!(widths, vec![8, 1, 1, 4, 2, 1, 1, 2, 2, 2, 1, 1, 1, 1, 2]);
    }

    #[test]
    fn test_canonical_names() {
        let names: Vec<&str> = FieldKind::CANONICAL_ORDER
            .iter()
            .map(|kind| kind.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "tsft", "flags", "rate", "channel", "fhss", "ant_sig", "ant_noise", "lock_qual",
                "tx_attn", "db_tx_attn", "dbm_tx_power", "ant", "db_ant_sig", "db_ant_noise",
                "rx_flags",
            ]
        );
        for (i, kind) in FieldKind::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(kind.canonical_index(), i);
            assert_eq!(FieldKind::from_name(kind.name()), Some(*kind));
            assert_eq!(kind.bit().name(), kind.name());
        }
    }

    #[test]
    fn test_channel_decode_little_endian() {
        let data: [u8; 5] = [0x6c, 0x09, 0xa0, 0x00, 0xff];
        let mut buf = &data[..];

        let field = FieldKind::Channel.decode(&mut buf).unwrap();
        let channel = field.downcast::<Channel>().unwrap();
        assert_eq!(channel.freq, 0x096c);
        assert_eq!(channel.flags, 0x00a0);
        assert_eq!(channel.freq.swap_bytes(), 0x6c09);
        assert_eq!(channel.flags.swap_bytes(), 0xa000);
        assert_eq!(buf, &[0xff]);

        assert!(channel.cck());
        assert!(channel.two_ghz());
        assert!(!channel.ofdm());
        assert!(!channel.five_ghz());
        assert_eq!(channel.channel_number(), Some(1));
        assert_eq!(field.value("freq"), Some(2412));
        assert_eq!(field.value("nope"), None);
    }

    #[test]
    fn test_channel_set_flag() {
        let mut channel = Channel {
            freq: 5180,
            flags: 0,
        };
        channel.set_five_ghz(true);
        channel.set_flag(ChannelFlag::Ofdm, true);
        assert_eq!(channel.flags, 0x0140);
        channel.set_ofdm(false);
        assert_eq!(channel.flags, 0x0100);
        assert!(channel.five_ghz());
        assert_eq!(channel.channel_number(), Some(36));
    }

    #[test]
    fn test_channel_every_flag() {
        for flag in ChannelFlag::ALL {
            let mut channel = Channel {
                freq: 2412,
                flags: 0x00a0,
            };
            let original = channel.flags;

            channel.set_flag(flag, true);
            assert!(channel.flag(flag));
            assert_eq!(channel.flags, original | flag.mask());

            channel.set_flag(flag, false);
            assert!(!channel.flag(flag));
            assert_eq!(channel.flags, original & !flag.mask());
        }
    }

    #[test]
    fn test_flags_fcs() {
        let mut flags = Flags { val: 0x10 };
        assert!(flags.fcs());
        flags.set_fcs(false);
        assert_eq!(flags.val, 0x00);
        flags.set_fcs(true);
        flags.set_short_preamble(true);
        assert_eq!(flags.val, 0x12);
        assert!(flags.short_preamble());
        assert!(!flags.bad_fcs());
    }

    #[test]
    fn test_flags_every_flag() {
        for flag in FrameFlag::ALL {
            let mut flags = Flags { val: 0x10 };

            flags.set_flag(flag, true);
            assert!(flags.flag(flag));
            assert_eq!(flags.val, 0x10 | flag.mask());

            flags.set_flag(flag, false);
            assert!(!flags.flag(flag));
            assert_eq!(flags.val, 0x10 & !flag.mask());
        }

        let mut flags = Flags::default();
        flags.set_wep(true);
        flags.set_short_gi(true);
        assert_eq!(flags.val, 0x84);
        assert!(flags.wep() && flags.short_gi());
    }

    #[test]
    fn test_signed_signal() {
        let signal = AntennaSignal { db: 0xa8 };
        let noise = AntennaNoise { db: 0x81 };
        assert_eq!(signal.dbm(), -88);
        assert_eq!(noise.dbm(), -127);
    }

    #[test]
    fn test_decode_short_buffer() {
        let data: [u8; 7] = [0; 7];
        let mut buf = &data[..];
        assert!(FieldKind::Tsft.decode(&mut buf).is_none());
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn test_encode_field() {
        let field = Tsft { usecs: 0x0102_0304_0506_0708 }.into_field();
        let mut out = Vec::new();
        field.encode(&mut out);
        assert_eq!(out, vec![0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(field.len(), 8);
        assert_eq!(field.kind(), FieldKind::Tsft);
        assert_eq!(field.to_string(), "tsft(usecs=0x102030405060708)");
    }
}
