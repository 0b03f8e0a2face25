use std::net::Ipv4Addr;

use super::AttributeType;
use crate::error::{DecodeError, EncodeError};

/// RADIUS Attribute structure as defined in RFC 2865 Section 5
///
/// ```text
///  0                   1                   2
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Type      |    Length     |  Value ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The wire Length byte covers the Type and Length fields themselves, so a
/// value carries at most 253 bytes. Value bytes are opaque to the codec:
/// their meaning depends on the attribute type and is left to the caller,
/// but they are preserved exactly through a decode/encode round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute type (1 byte)
    pub attr_type: AttributeType,
    /// Attribute value (0-253 bytes)
    pub value: Vec<u8>,
}

impl Attribute {
    /// Minimum attribute length (type + length fields = 2 bytes)
    pub const MIN_LENGTH: usize = 2;
    /// Maximum attribute length (255 bytes including type and length)
    pub const MAX_LENGTH: usize = 255;
    /// Maximum value length (253 bytes)
    pub const MAX_VALUE_LENGTH: usize = 253;

    pub fn new(attr_type: impl Into<AttributeType>, value: Vec<u8>) -> Result<Self, EncodeError> {
        let attr_type = attr_type.into();
        if value.len() > Self::MAX_VALUE_LENGTH {
            return Err(EncodeError::AttributeTooLong {
                attr_type,
                value_len: value.len(),
            });
        }
        Ok(Attribute { attr_type, value })
    }

    /// Create a text attribute
    pub fn string(
        attr_type: impl Into<AttributeType>,
        value: impl AsRef<str>,
    ) -> Result<Self, EncodeError> {
        Self::new(attr_type, value.as_ref().as_bytes().to_vec())
    }

    /// Create an integer attribute (32-bit big-endian)
    pub fn integer(attr_type: impl Into<AttributeType>, value: u32) -> Result<Self, EncodeError> {
        Self::new(attr_type, value.to_be_bytes().to_vec())
    }

    /// Create an IPv4 address attribute
    pub fn ipv4(attr_type: impl Into<AttributeType>, addr: Ipv4Addr) -> Result<Self, EncodeError> {
        Self::new(attr_type, addr.octets().to_vec())
    }

    /// Decode one attribute from the front of `data`.
    ///
    /// `data` is the unconsumed remainder of an attribute region; exactly
    /// [`wire_len`](Self::wire_len) bytes of it are consumed on success.
    /// Offsets in returned errors are relative to the start of `data`.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < Self::MIN_LENGTH {
            return Err(DecodeError::Truncated {
                offset: 0,
                expected: Self::MIN_LENGTH,
                available: data.len(),
            });
        }

        let declared = data[1] as usize;
        if declared < Self::MIN_LENGTH {
            return Err(DecodeError::InvalidAttributeLength {
                offset: 0,
                declared: data[1],
            });
        }
        if data.len() < declared {
            return Err(DecodeError::Truncated {
                offset: 0,
                expected: declared,
                available: data.len(),
            });
        }

        Ok(Attribute {
            attr_type: AttributeType::from_u8(data[0]),
            value: data[Self::MIN_LENGTH..declared].to_vec(),
        })
    }

    /// Encode the attribute to a fresh buffer.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buffer = Vec::with_capacity(self.wire_len());
        self.encode_into(&mut buffer)?;
        Ok(buffer)
    }

    /// Append the encoded attribute to `buffer`, returning the bytes written.
    ///
    /// `value` is a public field, so the length ceiling is re-checked here
    /// even though the constructors enforce it.
    pub fn encode_into(&self, buffer: &mut Vec<u8>) -> Result<usize, EncodeError> {
        let wire_len = self.wire_len();
        if wire_len > Self::MAX_LENGTH {
            return Err(EncodeError::AttributeTooLong {
                attr_type: self.attr_type,
                value_len: self.value.len(),
            });
        }

        buffer.push(self.attr_type.as_u8());
        buffer.push(wire_len as u8);
        buffer.extend_from_slice(&self.value);
        Ok(wire_len)
    }

    /// Encoded size of this attribute, Type and Length bytes included.
    pub fn wire_len(&self) -> usize {
        Self::MIN_LENGTH + self.value.len()
    }

    /// Interpret the value as text, if it is valid UTF-8.
    pub fn as_string(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// Interpret the value as a 32-bit big-endian integer, if it is 4 bytes.
    pub fn as_integer(&self) -> Option<u32> {
        <[u8; 4]>::try_from(self.value.as_slice())
            .ok()
            .map(u32::from_be_bytes)
    }

    /// Interpret the value as an IPv4 address, if it is 4 bytes.
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        <[u8; 4]>::try_from(self.value.as_slice())
            .ok()
            .map(Ipv4Addr::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_attribute() {
        let attr = Attribute::string(AttributeType::USER_NAME, "testuser").unwrap();
        assert_eq!(attr.attr_type, AttributeType::USER_NAME);
        assert_eq!(attr.as_string(), Some("testuser"));
    }

    #[test]
    fn test_integer_attribute() {
        let attr = Attribute::integer(AttributeType::SERVICE_TYPE, 1234).unwrap();
        assert_eq!(attr.as_integer(), Some(1234));
        assert_eq!(attr.value, vec![0, 0, 0x04, 0xd2]);
    }

    #[test]
    fn test_ipv4_attribute() {
        let attr =
            Attribute::ipv4(AttributeType::NAS_IP_ADDRESS, Ipv4Addr::new(127, 0, 1, 1)).unwrap();
        assert_eq!(attr.value, vec![127, 0, 1, 1]);
        assert_eq!(attr.as_ipv4(), Some(Ipv4Addr::new(127, 0, 1, 1)));
    }

    #[test]
    fn test_attribute_encode_decode() {
        let attr = Attribute::string(AttributeType::USER_NAME, "test").unwrap();
        let encoded = attr.encode().unwrap();
        assert_eq!(encoded, vec![1, 6, b't', b'e', b's', b't']);
        let decoded = Attribute::decode(&encoded).unwrap();
        assert_eq!(attr, decoded);
    }

    #[test]
    fn test_empty_value_round_trip() {
        let attr = Attribute::new(AttributeType::STATE, Vec::new()).unwrap();
        let encoded = attr.encode().unwrap();
        assert_eq!(encoded, vec![24, 2]);
        assert_eq!(Attribute::decode(&encoded).unwrap(), attr);
    }

    #[test]
    fn test_max_value_length() {
        let err = Attribute::new(AttributeType::USER_NAME, vec![0u8; 254]).unwrap_err();
        assert_eq!(
            err,
            EncodeError::AttributeTooLong {
                attr_type: AttributeType::USER_NAME,
                value_len: 254,
            }
        );
        assert!(Attribute::new(AttributeType::USER_NAME, vec![0u8; 253]).is_ok());
    }

    #[test]
    fn test_oversized_value_rejected_at_encode() {
        // Bypass the constructor check through the public field.
        let mut attr = Attribute::new(AttributeType::CLASS, Vec::new()).unwrap();
        attr.value = vec![0u8; 300];
        assert!(matches!(
            attr.encode_into(&mut Vec::new()),
            Err(EncodeError::AttributeTooLong { value_len: 300, .. })
        ));
    }

    #[test]
    fn test_decode_too_short_for_tlv_header() {
        assert_eq!(
            Attribute::decode(&[1]),
            Err(DecodeError::Truncated {
                offset: 0,
                expected: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn test_decode_invalid_declared_length() {
        for declared in [0u8, 1] {
            assert_eq!(
                Attribute::decode(&[1, declared, 0xff]),
                Err(DecodeError::InvalidAttributeLength {
                    offset: 0,
                    declared,
                })
            );
        }
    }

    #[test]
    fn test_decode_declared_length_past_input() {
        assert_eq!(
            Attribute::decode(&[1, 7, b'A', b'd', b'm']),
            Err(DecodeError::Truncated {
                offset: 0,
                expected: 7,
                available: 5,
            })
        );
    }
}
