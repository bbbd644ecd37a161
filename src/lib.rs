//! # Radiotap decoder
//!
//! A decoder for the Radiotap capture header that wireless drivers prepend
//! to raw 802.11 frames. The header carries per-packet radio conditions
//! (signal, noise, channel, rate, antenna) in a variable set of optional
//! fields selected by a presence bitmask.
//!
//! ## Architecture
//!
//! - `bits`: single-bit get/set helpers shared by every bitmask
//! - `layout`: declarative fixed-layout structures and their packer/unpacker
//! - `present`: the presence bitmask and its named bit positions
//! - `field`: the optional field decoders and the canonical field registry
//! - `header`: the 8-byte fixed header
//! - `radiotap`: the decode walk, payload handoff and header builder
//! - `dot11`: the 802.11 frame decoder the payload is handed to
//! - `config`: decoder configuration

pub mod bits;
pub mod config;
pub mod dot11;
pub mod field;
pub mod header;
pub mod layout;
pub mod present;
pub mod radiotap;

pub use crate::{
    config::{DecoderConfig, LoggingConfig, ValidationResult},
    dot11::{FrameDecoder, FrameType, Ieee80211Decoder, Ieee80211Frame},
    field::*,
    header::FixedHeader,
    layout::{ByteOrder, FieldSpec, FixedLayout, Layout, Values},
    present::{PresentBit, PresentFlags},
    radiotap::{Payload, Radiotap, RadiotapBuilder},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadiotapError {
    #[error("Truncated header: need {needed} bytes, have {available}")]
    TruncatedHeader { needed: usize, available: usize },

    #[error("Invalid header length {length}, must be at least {}", RADIOTAP_HEADER_LEN)]
    InvalidLength { length: u16 },

    #[error("Truncated field '{field}' at offset {offset}: need {needed} bytes, have {available}")]
    TruncatedField {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Frame decode error: {message}")]
    Frame { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RadiotapError>;

/// Current version of the decoder
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size of the always-present part of the header
pub const RADIOTAP_HEADER_LEN: usize = 8;

/// Header revision defined by radiotap.org; other values are accepted
pub const RADIOTAP_VERSION: u8 = 0;

/// Length of the 802.11 frame check sequence trailer
pub const FCS_LEN: usize = 4;

pub fn init_logging() {
    env_logger::init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(RADIOTAP_HEADER_LEN, 8);
        assert_eq!(RADIOTAP_VERSION, 0);
        assert_eq!(FCS_LEN, 4);
    }

    #[test]
    fn test_error_messages() {
        let err = RadiotapError::TruncatedField {
            field: "channel",
            offset: 10,
            needed: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "Truncated field 'channel' at offset 10: need 4 bytes, have 2"
        );

        let err = RadiotapError::InvalidLength { length: 4 };
        assert_eq!(err.to_string(), "Invalid header length 4, must be at least 8");
    }
}
