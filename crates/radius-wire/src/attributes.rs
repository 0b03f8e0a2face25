//! RADIUS attribute handling: the TLV codec for a single attribute and the
//! codec for the ordered attribute list filling the rest of a packet.
//!
//! Attribute order is significant and preserved exactly; RFC 2865 permits
//! repeated types with per-occurrence meaning, so the list is never
//! deduplicated or reordered.

mod attribute;
mod types;

pub use attribute::Attribute;
pub use types::AttributeType;

use crate::error::{DecodeError, EncodeError};

/// Decode the ordered attribute list occupying exactly the `region` slice.
///
/// `region` must be the authoritative attribute region derived from the
/// packet header's Length field, with its physical presence in the buffer
/// already verified by the caller. An attribute whose declared length runs
/// past the end of the region therefore means the header lied about the
/// region's extent, reported as [`DecodeError::AttributeOverrun`] with
/// offsets relative to the start of the region. An empty region is a valid
/// header-only packet and yields an empty list.
pub fn decode_list(region: &[u8]) -> Result<Vec<Attribute>, DecodeError> {
    let mut attributes = Vec::new();
    let mut offset = 0;

    while offset < region.len() {
        let attribute = Attribute::decode(&region[offset..]).map_err(|err| match err {
            DecodeError::Truncated {
                expected,
                available,
                ..
            } => DecodeError::AttributeOverrun {
                offset,
                declared: expected,
                remaining: available,
            },
            other => other.offset_by(offset),
        })?;
        offset += attribute.wire_len();
        attributes.push(attribute);
    }

    Ok(attributes)
}

/// Append the encoded attributes to `buffer` in order, returning the total
/// bytes written.
pub fn encode_list(attributes: &[Attribute], buffer: &mut Vec<u8>) -> Result<usize, EncodeError> {
    let start = buffer.len();
    for attribute in attributes {
        attribute.encode_into(buffer)?;
    }
    Ok(buffer.len() - start)
}
