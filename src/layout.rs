//! Declarative fixed-layout structures
//!
//! A [`Layout`] is an ordered list of named integer fields with a width,
//! byte order and default value. One generic packer/unpacker drives every
//! structure in the header, so the fixed header and each optional field are
//! described as data rather than hand-written readers.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

/// Largest number of fields any layout in this crate declares
pub const MAX_LAYOUT_FIELDS: usize = 4;

/// Byte order of a multi-byte field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    Little,
    Big,
}

/// One named integer inside a fixed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Width in bytes, 1 to 8
    pub width: usize,
    pub order: ByteOrder,
    pub default: u64,
}

impl FieldSpec {
    pub const fn new(name: &'static str, width: usize, order: ByteOrder, default: u64) -> Self {
        Self {
            name,
            width,
            order,
            default,
        }
    }

    /// Little-endian field defaulting to zero
    pub const fn le(name: &'static str, width: usize) -> Self {
        Self::new(name, width, ByteOrder::Little, 0)
    }

    fn read(&self, buf: &mut impl Buf) -> u64 {
        match self.order {
            ByteOrder::Little => buf.get_uint_le(self.width),
            ByteOrder::Big => buf.get_uint(self.width),
        }
    }

    fn write(&self, value: u64, buf: &mut impl BufMut) {
        match self.order {
            ByteOrder::Little => buf.put_uint_le(value, self.width),
            ByteOrder::Big => buf.put_uint(value, self.width),
        }
    }
}

/// Ordered field specification of a fixed-size structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Layout {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Encoded size in bytes
    pub const fn len(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width;
            i += 1;
        }
        total
    }

    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of the field called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn defaults(&self) -> Values {
        let mut values = Values::new();
        for field in self.fields {
            values.push(field.default);
        }
        values
    }

    /// Read every field in order. Returns `None` without consuming anything
    /// when fewer than [`Layout::len`] bytes remain.
    pub fn unpack(&self, buf: &mut impl Buf) -> Option<Values> {
        if buf.remaining() < self.len() {
            return None;
        }

        let mut values = Values::new();
        for field in self.fields {
            values.push(field.read(buf));
        }
        Some(values)
    }

    /// Write every field in order. Missing values are written as the
    /// field's default.
    pub fn pack(&self, values: &Values, buf: &mut impl BufMut) {
        for (i, field) in self.fields.iter().enumerate() {
            field.write(values.get(i).unwrap_or(field.default), buf);
        }
    }
}

/// Decoded integer values of a layout, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Values {
    raw: [u64; MAX_LAYOUT_FIELDS],
    len: usize,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(values: &[u64]) -> Self {
        let mut out = Self::new();
        for &value in values {
            out.push(value);
        }
        out
    }

    pub fn push(&mut self, value: u64) {
        debug_assert!(self.len < MAX_LAYOUT_FIELDS, "layout has too many fields");
        if self.len < MAX_LAYOUT_FIELDS {
            self.raw[self.len] = value;
            self.len += 1;
        }
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.as_slice().get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.raw[..self.len]
    }
}

/// A structure whose wire form is described by a static [`Layout`]
pub trait FixedLayout: Sized {
    const LAYOUT: Layout;

    fn from_values(values: &Values) -> Self;

    fn to_values(&self) -> Values;

    /// Decode from the front of `buf`, or `None` if it is too short
    fn decode(buf: &mut impl Buf) -> Option<Self> {
        Self::LAYOUT.unpack(buf).map(|values| Self::from_values(&values))
    }

    fn encode(&self, buf: &mut impl BufMut) {
        Self::LAYOUT.pack(&self.to_values(), buf)
    }

    fn encoded_len(&self) -> usize {
        Self::LAYOUT.len()
    }

    /// Value of the layout field called `name`
    fn value(&self, name: &str) -> Option<u64> {
        Self::LAYOUT
            .index_of(name)
            .and_then(|i| self.to_values().get(i))
    }
}
