//! IEEE 802.11 frame decoding for the radiotap payload
//!
//! The radiotap decoder hands its payload to a [`FrameDecoder`] together
//! with the frame-check-sequence indication taken from the `flags` field.
//! [`Ieee80211Decoder`] is the default implementation; callers with their
//! own frame model plug in through the trait.

use bytes::Bytes;
use crc::{Crc, CRC_32_ISO_HDLC};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{RadiotapError, Result, FCS_LEN};

/// Frame control, duration and the receiver address
pub const MIN_FRAME_LEN: usize = 10;

const FCS_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Frame control flag bits, as read from the little-endian frame control word
pub mod fc_flags {
    pub const TO_DS: u16 = 0x0100;
    pub const FROM_DS: u16 = 0x0200;
    pub const MORE_FRAGMENTS: u16 = 0x0400;
    pub const RETRY: u16 = 0x0800;
    pub const POWER_MGMT: u16 = 0x1000;
    pub const MORE_DATA: u16 = 0x2000;
    pub const PROTECTED: u16 = 0x4000;
    pub const ORDER: u16 = 0x8000;
}

/// Decoder invoked on the bytes that follow the radiotap header
pub trait FrameDecoder {
    type Frame;

    /// `fcs_present` is true when the last four bytes are a frame check sequence.
    fn decode(&self, payload: Bytes, fcs_present: bool) -> Result<Self::Frame>;
}

/// Default decoder producing [`Ieee80211Frame`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Ieee80211Decoder;

impl FrameDecoder for Ieee80211Decoder {
    type Frame = Ieee80211Frame;

    fn decode(&self, payload: Bytes, fcs_present: bool) -> Result<Ieee80211Frame> {
        Ieee80211Frame::parse(payload, fcs_present)
    }
}

/// IEEE 802.11 frame types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameType {
    /// Management frames (beacon, probe, auth, etc.)
    Management = 0,
    /// Control frames (RTS, CTS, ACK, etc.)
    Control = 1,
    /// Data frames
    Data = 2,
    /// Extension frames
    Extension = 3,
}

impl From<u16> for FrameType {
    fn from(bits: u16) -> Self {
        match bits & 0x3 {
            0 => FrameType::Management,
            1 => FrameType::Control,
            2 => FrameType::Data,
            _ => FrameType::Extension,
        }
    }
}

/// Decoded 802.11 MAC header with the body and optional FCS split off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ieee80211Frame {
    pub frame_control: u16,
    pub frame_type: FrameType,
    pub subtype: u8,
    pub duration: u16,
    pub addr1: [u8; 6],
    pub addr2: Option<[u8; 6]>,
    pub addr3: Option<[u8; 6]>,
    pub addr4: Option<[u8; 6]>,
    pub sequence: Option<u16>,
    pub fragment: Option<u8>,
    pub header_len: usize,
    pub body: Bytes,
    /// Trailing frame check sequence, when the radiotap flags announced one
    pub fcs: Option<u32>,
    /// MAC header and body, without the FCS
    #[serde(skip)]
    raw: Bytes,
}

impl Ieee80211Frame {
    pub fn parse(data: Bytes, fcs_present: bool) -> Result<Self> {
        let fcs_len = if fcs_present { FCS_LEN } else { 0 };
        if data.len() < MIN_FRAME_LEN + fcs_len {
            return Err(RadiotapError::Frame {
                message: format!(
                    "Frame too short for 802.11 header: {} bytes",
                    data.len()
                ),
            });
        }

        let (raw, fcs) = if fcs_present {
            let split = data.len() - FCS_LEN;
            let trailer = [data[split], data[split + 1], data[split + 2], data[split + 3]];
            (data.slice(..split), Some(u32::from_le_bytes(trailer)))
        } else {
            (data, None)
        };

        let frame_control = u16::from_le_bytes([raw[0], raw[1]]);
        let frame_type = FrameType::from(frame_control >> 2);
        let subtype = ((frame_control >> 4) & 0xF) as u8;
        let duration = u16::from_le_bytes([raw[2], raw[3]]);

        let header_len = Self::calculate_header_length(frame_control, frame_type, subtype);
        if raw.len() < header_len {
            return Err(RadiotapError::Frame {
                message: format!(
                    "{:?} frame needs a {} byte header, have {}",
                    frame_type,
                    header_len,
                    raw.len()
                ),
            });
        }

        let addr1 = Self::extract_mac_addr(&raw, 4).unwrap_or_default();
        let addr2 = (header_len >= 16).then(|| Self::extract_mac_addr(&raw, 10)).flatten();
        let addr3 = (header_len >= 22).then(|| Self::extract_mac_addr(&raw, 16)).flatten();

        let (sequence, fragment) = if header_len >= 24 {
            let seq_ctrl = u16::from_le_bytes([raw[22], raw[23]]);
            (Some((seq_ctrl >> 4) & 0xFFF), Some((seq_ctrl & 0xF) as u8))
        } else {
            (None, None)
        };

        let addr4 = if frame_type == FrameType::Data && Self::has_addr4(frame_control) {
            Self::extract_mac_addr(&raw, 24)
        } else {
            None
        };

        Ok(Self {
            frame_control,
            frame_type,
            subtype,
            duration,
            addr1,
            addr2,
            addr3,
            addr4,
            sequence,
            fragment,
            header_len,
            body: raw.slice(header_len..),
            fcs,
            raw,
        })
    }

    fn has_addr4(frame_control: u16) -> bool {
        frame_control & (fc_flags::TO_DS | fc_flags::FROM_DS) == fc_flags::TO_DS | fc_flags::FROM_DS
    }

    fn extract_mac_addr(data: &[u8], offset: usize) -> Option<[u8; 6]> {
        let mut addr = [0u8; 6];
        addr.copy_from_slice(data.get(offset..offset + 6)?);
        Some(addr)
    }

    fn calculate_header_length(frame_control: u16, frame_type: FrameType, subtype: u8) -> usize {
        match frame_type {
            FrameType::Management => {
                if frame_control & fc_flags::ORDER != 0 {
                    28
                } else {
                    24
                }
            }
            FrameType::Control => match subtype {
                // CTS, ACK
                12 | 13 => 10,
                // BlockAckReq, BlockAck, PS-Poll, RTS, CF-End, CF-End+CF-Ack
                8..=11 | 14 | 15 => 16,
                _ => 10,
            },
            FrameType::Data => {
                let mut len = 24;
                if Self::has_addr4(frame_control) {
                    len += 6;
                }
                if subtype & 0x8 != 0 {
                    len += 2;
                    if frame_control & fc_flags::ORDER != 0 {
                        len += 4;
                    }
                }
                len
            }
            FrameType::Extension => 24,
        }
    }

    pub fn has_flag(&self, flag: u16) -> bool {
        self.frame_control & flag != 0
    }

    pub fn is_protected(&self) -> bool {
        self.has_flag(fc_flags::PROTECTED)
    }

    pub fn is_retry(&self) -> bool {
        self.has_flag(fc_flags::RETRY)
    }

    pub fn is_beacon(&self) -> bool {
        self.frame_type == FrameType::Management && self.subtype == 8
    }

    pub fn is_probe_request(&self) -> bool {
        self.frame_type == FrameType::Management && self.subtype == 4
    }

    pub fn is_data(&self) -> bool {
        self.frame_type == FrameType::Data
    }

    /// Check the trailing FCS against a CRC-32 of header and body.
    /// `None` when no FCS was present.
    pub fn fcs_valid(&self) -> Option<bool> {
        self.fcs.map(|fcs| FCS_CRC.checksum(&self.raw) == fcs)
    }

    /// Frame bytes without the FCS
    pub fn as_bytes(&self) -> &Bytes {
        &self.raw
    }
}

pub fn format_mac(addr: &[u8; 6]) -> String {
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        addr[0], addr[1], addr[2], addr[3], addr[4], addr[5]
    )
}

impl fmt::Display for Ieee80211Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "802.11 {:?} frame (subtype={}), len={}, ra={}, ta={}",
            self.frame_type,
            self.subtype,
            self.raw.len(),
            format_mac(&self.addr1),
            self.addr2.as_ref().map(format_mac).unwrap_or_else(|| "-".to_string()),
        )?;
        if let Some(valid) = self.fcs_valid() {
            write!(f, ", fcs={}", if valid { "ok" } else { "bad" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beacon() -> Vec<u8> {
        let mut frame = vec![0x80, 0x00, 0x00, 0x00];
        frame.extend_from_slice(&[0xff; 6]);
        frame.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        frame.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        frame.extend_from_slice(&[0x30, 0x01]);
        frame.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        frame
    }

    #[test]
    fn test_parse_beacon() {
        let frame = Ieee80211Frame::parse(Bytes::from(beacon()), false).unwrap();

        assert_eq!(frame.frame_type, FrameType::Management);
        assert_eq!(frame.subtype, 8);
        assert!(frame.is_beacon());
        assert_eq!(frame.addr1, [0xff; 6]);
        assert_eq!(frame.addr2, Some([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]));
        assert_eq!(frame.sequence, Some(0x13));
        assert_eq!(frame.fragment, Some(0));
        assert_eq!(frame.header_len, 24);
        assert_eq!(&frame.body[..], &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(frame.fcs, None);
        assert_eq!(frame.fcs_valid(), None);
    }

    #[test]
    fn test_parse_with_fcs() {
        let mut data = beacon();
        let crc = FCS_CRC.checksum(&data);
        data.extend_from_slice(&crc.to_le_bytes());

        let frame = Ieee80211Frame::parse(Bytes::from(data.clone()), true).unwrap();
        assert_eq!(frame.fcs, Some(crc));
        assert_eq!(frame.fcs_valid(), Some(true));
        assert_eq!(&frame.body[..], &[0xde, 0xad, 0xbe, 0xef]);

        let last = data.len() - 1;
        data[last] ^= 0xff;
        let frame = Ieee80211Frame::parse(Bytes::from(data), true).unwrap();
        assert_eq!(frame.fcs_valid(), Some(false));
    }

    #[test]
    fn test_parse_ack() {
        let data = vec![0xd4, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let frame = Ieee80211Frame::parse(Bytes::from(data), false).unwrap();

        assert_eq!(frame.frame_type, FrameType::Control);
        assert_eq!(frame.subtype, 13);
        assert_eq!(frame.header_len, 10);
        assert_eq!(frame.addr2, None);
        assert_eq!(frame.sequence, None);
        assert!(frame.body.is_empty());
    }

    #[test]
    fn test_parse_qos_data_four_address() {
        let mut data = vec![0x88, 0x03, 0x2c, 0x00];
        data.extend_from_slice(&[1; 6]);
        data.extend_from_slice(&[2; 6]);
        data.extend_from_slice(&[3; 6]);
        data.extend_from_slice(&[0x00, 0x00]);
        data.extend_from_slice(&[4; 6]);
        data.extend_from_slice(&[0x07, 0x00]);
        data.extend_from_slice(&[0xaa, 0xaa, 0x03]);

        let frame = Ieee80211Frame::parse(Bytes::from(data), false).unwrap();
        assert!(frame.is_data());
        assert_eq!(frame.header_len, 32);
        assert_eq!(frame.addr4, Some([4; 6]));
        assert_eq!(frame.duration, 0x2c);
        assert_eq!(&frame.body[..], &[0xaa, 0xaa, 0x03]);
    }

    #[test]
    fn test_too_short() {
        let err = Ieee80211Frame::parse(Bytes::from_static(&[0x80, 0x00, 0x00]), false).unwrap_err();
        assert!(matches!(err, RadiotapError::Frame { .. }));

        let mut data = vec![0x80, 0x00];
        data.resize(12, 0);
        let err = Ieee80211Frame::parse(Bytes::from(data), false).unwrap_err();
        assert!(err.to_string().contains("24 byte header"));
    }

    #[test]
    fn test_format_mac() {
        assert_eq!(format_mac(&[0x00, 0x11, 0x22, 0xaa, 0xbb, 0xcc]), "00:11:22:aa:bb:cc");
    }
}
