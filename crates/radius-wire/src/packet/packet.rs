use tracing::trace;

use super::{Code, Header};
use crate::attributes::{self, Attribute, AttributeType};
use crate::error::{DecodeError, EncodeError};

/// RADIUS Packet structure as defined in RFC 2865 Section 3
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     Code      |  Identifier   |            Length             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// |                         Authenticator                         |
/// |                                                               |
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  Attributes ...
/// +-+-+-+-+-+-+-+-+-+-+-+-+-
/// ```
///
/// The wire Length field is not stored: [`Packet::encode`] derives it from
/// the attributes actually present, so a decoded or constructed packet can
/// never carry a length that disagrees with its content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Packet {
    /// Packet type (1 byte)
    pub code: Code,
    /// Packet identifier for matching requests/responses (1 byte)
    pub identifier: u8,
    /// Request/Response Authenticator (16 bytes), opaque to the codec
    pub authenticator: [u8; 16],
    /// Ordered list of attributes
    pub attributes: Vec<Attribute>,
}

impl Packet {
    /// Minimum RADIUS packet size (the bare 20-byte header)
    pub const MIN_PACKET_SIZE: usize = Header::LEN;
    /// Maximum RADIUS packet size (65535 bytes, the Length field ceiling)
    pub const MAX_PACKET_SIZE: usize = u16::MAX as usize;

    pub fn new(code: Code, identifier: u8, authenticator: [u8; 16]) -> Self {
        Packet {
            code,
            identifier,
            authenticator,
            attributes: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Decode a packet from `data`, ignoring any bytes past the declared
    /// length.
    ///
    /// Use [`Packet::decode_with_trailing`] when the trailing bytes matter.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let (packet, _) = Self::decode_with_trailing(data)?;
        Ok(packet)
    }

    /// Decode a packet from `data` and return the leftover bytes beyond the
    /// header's declared length.
    ///
    /// Some transports pad the datagram past the RADIUS packet proper; the
    /// padding is not part of the packet, so it is handed back to the caller
    /// rather than dropped. Decoding is all-or-nothing: on error no partial
    /// packet is produced.
    pub fn decode_with_trailing(data: &[u8]) -> Result<(Self, &[u8]), DecodeError> {
        let header = Header::decode(data)?;

        let declared = header.length as usize;
        if declared < Self::MIN_PACKET_SIZE {
            return Err(DecodeError::InvalidLength { declared });
        }
        if data.len() < declared {
            return Err(DecodeError::Truncated {
                offset: Header::LEN,
                expected: declared,
                available: data.len(),
            });
        }

        let attributes = attributes::decode_list(&data[Header::LEN..declared])
            .map_err(|err| err.offset_by(Header::LEN))?;

        let packet = Packet {
            code: header.code,
            identifier: header.identifier,
            authenticator: header.authenticator,
            attributes,
        };
        trace!(
            code = %packet.code,
            identifier = packet.identifier,
            attributes = packet.attributes.len(),
            wire_len = declared,
            "decoded RADIUS packet"
        );
        Ok((packet, &data[declared..]))
    }

    /// Encode the packet to bytes.
    ///
    /// The Length field is computed from the attributes actually written,
    /// never taken from the caller. Encoding is all-or-nothing: on error no
    /// buffer is returned.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buffer = Vec::with_capacity(self.wire_len());

        // Length is patched in once the attributes are written.
        Header {
            code: self.code,
            identifier: self.identifier,
            length: 0,
            authenticator: self.authenticator,
        }
        .encode_into(&mut buffer);

        attributes::encode_list(&self.attributes, &mut buffer)?;

        let wire_len = buffer.len();
        if wire_len > Self::MAX_PACKET_SIZE {
            return Err(EncodeError::PacketTooLarge { wire_len });
        }
        buffer[2..4].copy_from_slice(&(wire_len as u16).to_be_bytes());

        trace!(
            code = %self.code,
            identifier = self.identifier,
            attributes = self.attributes.len(),
            wire_len,
            "encoded RADIUS packet"
        );
        Ok(buffer)
    }

    /// Size the packet occupies on the wire, header included.
    pub fn wire_len(&self) -> usize {
        Header::LEN
            + self
                .attributes
                .iter()
                .map(Attribute::wire_len)
                .sum::<usize>()
    }

    /// Find the first attribute with the given type.
    pub fn find_attribute(&self, attr_type: impl Into<AttributeType>) -> Option<&Attribute> {
        let attr_type = attr_type.into();
        self.attributes.iter().find(|a| a.attr_type == attr_type)
    }

    /// Find all attributes with the given type, in packet order.
    pub fn find_all_attributes(&self, attr_type: impl Into<AttributeType>) -> Vec<&Attribute> {
        let attr_type = attr_type.into();
        self.attributes
            .iter()
            .filter(|a| a.attr_type == attr_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_encode_decode() {
        let mut packet = Packet::new(Code::ACCESS_REQUEST, 42, [1u8; 16]);
        packet.add_attribute(Attribute::string(AttributeType::USER_NAME, "alice").unwrap());

        let encoded = packet.encode().unwrap();
        assert_eq!(encoded.len(), packet.wire_len());
        assert_eq!(&encoded[2..4], &[0, 27]);

        let decoded = Packet::decode(&encoded).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn test_packet_min_size() {
        let data = vec![0u8; 19];
        assert_eq!(
            Packet::decode(&data),
            Err(DecodeError::Truncated {
                offset: 0,
                expected: 20,
                available: 19,
            })
        );
    }

    #[test]
    fn test_header_only_packet() {
        let mut data = vec![2, 0x8d, 0x00, 0x14];
        data.extend_from_slice(&[0xab; 16]);

        let packet = Packet::decode(&data).unwrap();
        assert_eq!(packet.code, Code::ACCESS_ACCEPT);
        assert!(packet.attributes.is_empty());
        assert_eq!(packet.encode().unwrap(), data);
    }

    #[test]
    fn test_declared_length_below_header() {
        let mut data = vec![1, 1, 0x00, 0x13];
        data.extend_from_slice(&[0; 16]);
        assert_eq!(
            Packet::decode(&data),
            Err(DecodeError::InvalidLength { declared: 19 })
        );
    }

    #[test]
    fn test_declared_length_past_buffer() {
        let mut data = vec![1, 1, 0x00, 0x20];
        data.extend_from_slice(&[0; 16]);
        assert_eq!(
            Packet::decode(&data),
            Err(DecodeError::Truncated {
                offset: 20,
                expected: 32,
                available: 20,
            })
        );
    }

    #[test]
    fn test_lying_header_length() {
        // Header claims 26 bytes, the attribute claims 10: the region holds 6.
        let mut data = vec![1, 1, 0x00, 0x1a];
        data.extend_from_slice(&[0; 16]);
        data.extend_from_slice(&[18, 10, b'h', b'i', b'h', b'i']);
        // Physical bytes beyond the declared region must not rescue it.
        data.extend_from_slice(&[0xff; 8]);

        assert_eq!(
            Packet::decode(&data),
            Err(DecodeError::AttributeOverrun {
                offset: 20,
                declared: 10,
                remaining: 6,
            })
        );
    }

    #[test]
    fn test_decode_with_trailing() {
        let mut data = vec![2, 9, 0x00, 0x14];
        data.extend_from_slice(&[0; 16]);
        data.extend_from_slice(&[0xde, 0xad]);

        let (packet, trailing) = Packet::decode_with_trailing(&data).unwrap();
        assert_eq!(packet.wire_len(), 20);
        assert_eq!(trailing, &[0xde, 0xad]);
    }

    #[test]
    fn test_unknown_code_and_type_round_trip() {
        let mut packet = Packet::new(Code::from_u8(200), 3, [7; 16]);
        packet.add_attribute(Attribute::new(AttributeType::from_u8(17), vec![1, 2]).unwrap());

        let encoded = packet.encode().unwrap();
        let decoded = Packet::decode(&encoded).unwrap();
        assert_eq!(decoded.code.as_u8(), 200);
        assert_eq!(decoded.attributes[0].attr_type.as_u8(), 17);
        assert_eq!(decoded, packet);
    }

    #[test]
    fn test_find_attribute() {
        let mut packet = Packet::new(Code::ACCESS_REQUEST, 1, [0; 16]);
        packet.add_attribute(Attribute::string(AttributeType::REPLY_MESSAGE, "one").unwrap());
        packet.add_attribute(Attribute::string(AttributeType::REPLY_MESSAGE, "two").unwrap());

        let first = packet.find_attribute(AttributeType::REPLY_MESSAGE).unwrap();
        assert_eq!(first.as_string(), Some("one"));
        assert_eq!(
            packet.find_all_attributes(AttributeType::REPLY_MESSAGE).len(),
            2
        );
        assert!(packet.find_attribute(AttributeType::USER_NAME).is_none());
    }

    #[test]
    fn test_packet_too_large() {
        let mut packet = Packet::new(Code::ACCOUNTING_REQUEST, 1, [0; 16]);
        // 260 full-size attributes put the total past the u16 ceiling.
        for _ in 0..260 {
            packet.add_attribute(
                Attribute::new(AttributeType::CLASS, vec![0u8; 253]).unwrap(),
            );
        }
        assert_eq!(
            packet.encode(),
            Err(EncodeError::PacketTooLarge {
                wire_len: packet.wire_len(),
            })
        );
    }

    #[test]
    fn test_encode_is_idempotent() {
        let mut packet = Packet::new(Code::ACCESS_CHALLENGE, 11, [5; 16]);
        packet.add_attribute(Attribute::new(AttributeType::STATE, vec![9; 8]).unwrap());
        assert_eq!(packet.encode().unwrap(), packet.encode().unwrap());
    }
}
