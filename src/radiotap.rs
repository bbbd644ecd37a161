//! Radiotap header decoding
//!
//! Decoding walks [`FieldKind::CANONICAL_ORDER`] over the bytes between the
//! fixed header and `length`, decoding each field whose presence bit is set.
//! Fields are packed back to back; no alignment padding is inserted or
//! skipped. Everything after `length` is the link-layer payload and is
//! handed to a [`FrameDecoder`] together with the FCS bit of the `flags`
//! field.

use bytes::{Bytes, BytesMut};
use serde::Serialize;

use crate::config::DecoderConfig;
use crate::dot11::{FrameDecoder, Ieee80211Decoder, Ieee80211Frame};
use crate::field::{
    AntennaNoise, AntennaSignal, Channel, FieldKind, Flags, OptionalField, RadiotapField,
};
use crate::header::FixedHeader;
use crate::layout::FixedLayout;
use crate::present::{PresentBit, PresentFlags};
use crate::{RadiotapError, Result, RADIOTAP_HEADER_LEN};

/// What follows the radiotap header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Payload<F> {
    /// `length` covered the whole buffer
    Empty,
    /// Payload left undecoded
    Raw(Bytes),
    /// Result of the frame decoder
    Frame(F),
}

impl<F> Payload<F> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    pub fn frame(&self) -> Option<&F> {
        match self {
            Payload::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn raw(&self) -> Option<&Bytes> {
        match self {
            Payload::Raw(raw) => Some(raw),
            _ => None,
        }
    }
}

/// A decoded radiotap header and its payload
#[derive(Debug, Clone, Serialize)]
pub struct Radiotap<F = Ieee80211Frame> {
    header: FixedHeader,
    fields: Vec<OptionalField>,
    /// `data[..length]` as received
    #[serde(skip)]
    raw: Bytes,
    /// Header bytes after the last decoded field
    unparsed: Bytes,
    payload: Payload<F>,
}

impl Radiotap {
    /// Decode with the default 802.11 frame decoder and configuration
    pub fn parse(data: impl Into<Bytes>) -> Result<Self> {
        Self::parse_with(data, &Ieee80211Decoder, &DecoderConfig::default())
    }

    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Self::parse(Bytes::copy_from_slice(data))
    }
}

impl<F> Radiotap<F> {
    pub fn parse_with<D>(data: impl Into<Bytes>, decoder: &D, config: &DecoderConfig) -> Result<Self>
    where
        D: FrameDecoder<Frame = F>,
    {
        let data: Bytes = data.into();
        let header = FixedHeader::parse(&data)?;
        let length = usize::from(header.length);

        let raw = data.slice(..length);
        let (fields, end) = Self::decode_fields(&header, &raw)?;
        let unparsed = raw.slice(end..);

        log::debug!(
            "Radiotap v{} len={} present={} fields={}",
            header.version,
            header.length,
            header.present,
            fields.len()
        );
        if !unparsed.is_empty() {
            log::debug!(
                "{} header bytes left unparsed after offset {}",
                unparsed.len(),
                end
            );
        }

        let fcs_present = fields
            .iter()
            .find_map(|field| field.downcast::<Flags>())
            .map_or(false, |flags| flags.fcs());

        let payload = Self::hand_off(data.slice(length..), fcs_present, decoder, config)?;

        Ok(Self {
            header,
            fields,
            raw,
            unparsed,
            payload,
        })
    }

    /// Decode the present fields of `region` (the first `length` bytes).
    /// Returns the fields and the offset where decoding stopped.
    fn decode_fields(header: &FixedHeader, region: &[u8]) -> Result<(Vec<OptionalField>, usize)> {
        let unknown = header.present.unknown_bits()
            | (header.present.bits() & (PresentBit::ChannelPlus.mask() | PresentBit::Ext.mask()));
        if unknown != 0 {
            log::debug!("Ignoring presence bits {:#010x} without a decoder", unknown);
        }

        let mut buf = &region[RADIOTAP_HEADER_LEN..];
        let mut offset = RADIOTAP_HEADER_LEN;
        let mut fields = Vec::new();

        for kind in FieldKind::CANONICAL_ORDER {
            if !header.is_present(kind.bit()) {
                continue;
            }

            let field = kind
                .decode(&mut buf)
                .ok_or_else(|| RadiotapError::TruncatedField {
                    field: kind.name(),
                    offset,
                    needed: kind.width(),
                    available: buf.len(),
                })?;

            log::trace!("Decoded {} at offset {}", field, offset);
            offset += field.len();
            fields.push(field);
        }

        Ok((fields, offset))
    }

    fn hand_off<D>(payload: Bytes, fcs_present: bool, decoder: &D, config: &DecoderConfig) -> Result<Payload<F>>
    where
        D: FrameDecoder<Frame = F>,
    {
        if payload.is_empty() {
            return Ok(Payload::Empty);
        }

        if !config.decode_payload {
            return Ok(Payload::Raw(payload));
        }

        match decoder.decode(payload.clone(), fcs_present) {
            Ok(frame) => Ok(Payload::Frame(frame)),
            Err(e) if !config.strict_payload => {
                log::warn!("Keeping {} byte payload undecoded: {}", payload.len(), e);
                Ok(Payload::Raw(payload))
            }
            Err(e) => Err(e),
        }
    }

    pub fn header(&self) -> &FixedHeader {
        &self.header
    }

    pub fn version(&self) -> u8 {
        self.header.version
    }

    pub fn pad(&self) -> u8 {
        self.header.pad
    }

    pub fn length(&self) -> u16 {
        self.header.length
    }

    pub fn present_flags(&self) -> u32 {
        self.header.present.bits()
    }

    pub fn present(&self) -> PresentFlags {
        self.header.present
    }

    pub fn is_present(&self, bit: PresentBit) -> bool {
        self.header.is_present(bit)
    }

    /// Toggle a presence bit. Decoded fields are left as they are.
    pub fn set_present(&mut self, bit: PresentBit, value: bool) {
        self.header.set_present(bit, value);
    }

    /// Decoded fields in canonical order
    pub fn fields(&self) -> &[OptionalField] {
        &self.fields
    }

    pub fn field(&self, kind: FieldKind) -> Option<&OptionalField> {
        self.fields.iter().find(|field| field.kind() == kind)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&OptionalField> {
        FieldKind::from_name(name).and_then(|kind| self.field(kind))
    }

    pub fn get<T: RadiotapField>(&self) -> Option<&T> {
        self.fields.iter().find_map(|field| T::from_field(field))
    }

    pub fn flags(&self) -> Option<&Flags> {
        self.get::<Flags>()
    }

    pub fn channel(&self) -> Option<&Channel> {
        self.get::<Channel>()
    }

    /// Whether the payload was handed off with the FCS indication set
    pub fn fcs_present(&self) -> bool {
        self.flags().map_or(false, Flags::fcs)
    }

    /// Signal to noise ratio in dB
    pub fn snr(&self) -> Option<i16> {
        let signal = self.get::<AntennaSignal>()?;
        let noise = self.get::<AntennaNoise>()?;
        Some(i16::from(signal.dbm()) - i16::from(noise.dbm()))
    }

    /// Bytes between the last decoded field and `length`
    pub fn unparsed(&self) -> &Bytes {
        &self.unparsed
    }

    /// The first `length` bytes exactly as received
    pub fn header_bytes(&self) -> &Bytes {
        &self.raw
    }

    /// Re-encode the header region from the current presence word, the
    /// decoded fields and the unparsed trailer.
    pub fn encode_header(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(usize::from(self.header.length));
        self.header.encode(&mut buf);
        for field in &self.fields {
            field.encode(&mut buf);
        }
        buf.extend_from_slice(&self.unparsed);
        buf.freeze()
    }

    pub fn payload(&self) -> &Payload<F> {
        &self.payload
    }

    pub fn frame(&self) -> Option<&F> {
        self.payload.frame()
    }

    pub fn into_payload(self) -> Payload<F> {
        self.payload
    }
}

/// Assembles a radiotap header from fields, laid out in canonical order
#[derive(Debug, Clone, Default)]
pub struct RadiotapBuilder {
    fields: [Option<OptionalField>; 15],
}

impl RadiotapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field
    pub fn field<T: RadiotapField>(self, value: T) -> Self {
        self.optional_field(value.into_field())
    }

    pub fn optional_field(mut self, field: OptionalField) -> Self {
        self.fields[field.kind().canonical_index()] = Some(field);
        self
    }

    pub fn present(&self) -> PresentFlags {
        let mut present = PresentFlags::default();
        for field in self.fields.iter().flatten() {
            present.set(field.kind().bit(), true);
        }
        present
    }

    pub fn length(&self) -> usize {
        RADIOTAP_HEADER_LEN + self.fields.iter().flatten().map(OptionalField::len).sum::<usize>()
    }

    /// Encode the header alone
    pub fn build(&self) -> Bytes {
        self.build_frame(&[])
    }

    /// Encode the header followed by `payload`
    pub fn build_frame(&self, payload: &[u8]) -> Bytes {
        let length = self.length();
        let mut buf = BytesMut::with_capacity(length + payload.len());

        // At most 8 + 30 bytes with every field set.
        FixedHeader::new(length as u16, self.present()).encode(&mut buf);
        for field in self.fields.iter().flatten() {
            field.encode(&mut buf);
        }
        buf.extend_from_slice(payload);
        buf.freeze()
    }
}
