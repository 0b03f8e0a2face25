//! RADIUS Wire Codec
//!
//! This crate decodes and encodes RADIUS packets as defined in RFC 2865,
//! with the packet codes and attribute types of RFC 2866, 2869 and 3579.
//! It turns a raw byte buffer into a structured [`Packet`] (fixed header
//! plus an ordered list of TLV attributes) and back, with strict bounds
//! checking against truncated or malformed input and bit-exact round-trip
//! serialization: re-encoding a decoded packet reproduces the original
//! bytes precisely.
//!
//! The codec stops at the wire format. Delivering datagrams, verifying
//! Authenticator fields and interpreting attribute values all belong to the
//! caller; value bytes are carried opaquely and preserved exactly, and
//! unknown packet codes or attribute types round-trip untouched.
//!
//! # Example
//!
//! ```rust
//! use radius_wire::{Attribute, AttributeType, Code, Packet};
//!
//! // Build an Access-Request packet
//! let mut packet = Packet::new(Code::ACCESS_REQUEST, 1, [0u8; 16]);
//! packet.add_attribute(Attribute::string(AttributeType::USER_NAME, "alice").unwrap());
//! packet.add_attribute(Attribute::integer(AttributeType::NAS_PORT, 0).unwrap());
//!
//! // Encode to bytes; the Length field is derived from the content
//! let bytes = packet.encode().unwrap();
//! assert_eq!(bytes.len(), packet.wire_len());
//!
//! // Decode reproduces the packet structurally
//! let decoded = Packet::decode(&bytes).unwrap();
//! assert_eq!(decoded, packet);
//! ```

pub mod attributes;
pub mod error;
pub mod packet;

pub use attributes::{Attribute, AttributeType};
pub use error::{DecodeError, EncodeError};
pub use packet::{Code, Header, Packet};
