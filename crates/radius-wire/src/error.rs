//! Codec error types.
//!
//! Every decode and encode failure is reported to the immediate caller with
//! the offset and size context needed to diagnose the input. Nothing is
//! logged or swallowed inside the codec, and a failed call never produces a
//! partial packet or a partial buffer.

use crate::attributes::AttributeType;
use thiserror::Error;

/// Errors produced while decoding a byte buffer into a [`Packet`].
///
/// Offsets are relative to the start of the buffer handed to
/// [`Packet::decode`]; errors surfaced by the standalone attribute codecs
/// are relative to the slice they were given.
///
/// [`Packet`]: crate::Packet
/// [`Packet::decode`]: crate::Packet::decode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes were available than a field declares.
    #[error("truncated input at offset {offset}: need {expected} bytes, {available} available")]
    Truncated {
        offset: usize,
        expected: usize,
        available: usize,
    },
    /// The header Length field is internally inconsistent: smaller than the
    /// 20-byte header or beyond the 65535-byte protocol ceiling.
    #[error("invalid packet length: {declared}")]
    InvalidLength { declared: usize },
    /// An attribute declares a length below the 2-byte TLV minimum.
    #[error("invalid attribute length {declared} at offset {offset}")]
    InvalidAttributeLength { offset: usize, declared: u8 },
    /// An attribute's declared length extends past the attribute region
    /// derived from the packet's Length field, even though bytes may
    /// physically remain in the buffer.
    #[error(
        "attribute at offset {offset} declares {declared} bytes but only {remaining} remain in the attribute region"
    )]
    AttributeOverrun {
        offset: usize,
        declared: usize,
        remaining: usize,
    },
}

impl DecodeError {
    /// Shift the carried offset by `base` bytes, so errors raised against a
    /// sub-slice report positions in the enclosing buffer.
    pub(crate) fn offset_by(self, base: usize) -> Self {
        match self {
            DecodeError::Truncated {
                offset,
                expected,
                available,
            } => DecodeError::Truncated {
                offset: offset + base,
                expected,
                available,
            },
            DecodeError::InvalidAttributeLength { offset, declared } => {
                DecodeError::InvalidAttributeLength {
                    offset: offset + base,
                    declared,
                }
            }
            DecodeError::AttributeOverrun {
                offset,
                declared,
                remaining,
            } => DecodeError::AttributeOverrun {
                offset: offset + base,
                declared,
                remaining,
            },
            DecodeError::InvalidLength { declared } => DecodeError::InvalidLength { declared },
        }
    }
}

/// Errors produced while encoding a [`Packet`] into bytes.
///
/// [`Packet`]: crate::Packet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// An attribute value exceeds the 253 bytes that fit in a one-byte TLV
    /// length field.
    #[error("attribute {attr_type} value too long: {value_len} bytes (max 253)")]
    AttributeTooLong {
        attr_type: AttributeType,
        value_len: usize,
    },
    /// The assembled packet would exceed the 65535-byte protocol maximum.
    #[error("packet too large: {wire_len} bytes (max 65535)")]
    PacketTooLarge { wire_len: usize },
}
