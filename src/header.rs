//! The 8-byte fixed radiotap header

use serde::{Deserialize, Serialize};

use crate::layout::{FieldSpec, FixedLayout, Layout, Values};
use crate::present::{PresentBit, PresentFlags};
use crate::{RadiotapError, Result, RADIOTAP_HEADER_LEN, RADIOTAP_VERSION};

const FIXED_HEADER_FIELDS: &[FieldSpec] = &[
    FieldSpec::le("version", 1),
    FieldSpec::le("pad", 1),
    FieldSpec::le("length", 2),
    FieldSpec::le("present_flags", 4),
];

/// Version, pad, total length and presence word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHeader {
    pub version: u8,
    pub pad: u8,
    /// Bytes of fixed header plus optional fields; the payload starts here
    pub length: u16,
    pub present: PresentFlags,
}

impl FixedLayout for FixedHeader {
    const LAYOUT: Layout = Layout::new("radiotap", FIXED_HEADER_FIELDS);

    fn from_values(values: &Values) -> Self {
        Self {
            version: values.get(0).unwrap_or_default() as u8,
            pad: values.get(1).unwrap_or_default() as u8,
            length: values.get(2).unwrap_or_default() as u16,
            present: PresentFlags::new(values.get(3).unwrap_or_default() as u32),
        }
    }

    fn to_values(&self) -> Values {
        Values::from_slice(&[
            u64::from(self.version),
            u64::from(self.pad),
            u64::from(self.length),
            u64::from(self.present.bits()),
        ])
    }
}

impl FixedHeader {
    pub fn new(length: u16, present: PresentFlags) -> Self {
        Self {
            version: RADIOTAP_VERSION,
            pad: 0,
            length,
            present,
        }
    }

    /// Parse the fixed header and check `length` against the buffer.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let header = Self::decode(&mut buf).ok_or(RadiotapError::TruncatedHeader {
            needed: RADIOTAP_HEADER_LEN,
            available: data.len(),
        })?;

        if usize::from(header.length) < RADIOTAP_HEADER_LEN {
            return Err(RadiotapError::InvalidLength {
                length: header.length,
            });
        }

        if usize::from(header.length) > data.len() {
            return Err(RadiotapError::TruncatedHeader {
                needed: usize::from(header.length),
                available: data.len(),
            });
        }

        if header.version != RADIOTAP_VERSION {
            log::debug!("Unexpected radiotap version {}", header.version);
        }

        Ok(header)
    }

    pub fn is_present(&self, bit: PresentBit) -> bool {
        self.present.get(bit)
    }

    pub fn set_present(&mut self, bit: PresentBit, value: bool) {
        self.present.set(bit, value);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RADIOTAP_HEADER_LEN);
        self.encode(&mut out);
        out
    }
}
