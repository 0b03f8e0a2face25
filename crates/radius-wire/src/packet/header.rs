use super::Code;
use crate::error::DecodeError;

/// Fixed 20-byte RADIUS packet header (RFC 2865 Section 3).
///
/// The Length field declares the total packet size, header included, in
/// network byte order. The header codec does not check Length against the
/// buffer it was read from: how much of the buffer is authoritative is the
/// packet codec's call, since transports may deliver padding beyond the
/// declared length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub code: Code,
    pub identifier: u8,
    /// Declared total packet size (header + attributes), big-endian on the wire.
    pub length: u16,
    /// Opaque to the codec; verification is the caller's concern.
    pub authenticator: [u8; 16],
}

impl Header {
    /// Encoded header size: 1 code + 1 identifier + 2 length + 16 authenticator.
    pub const LEN: usize = 20;

    /// Read the fixed header from the front of `data`, consuming
    /// [`Header::LEN`] bytes.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < Self::LEN {
            return Err(DecodeError::Truncated {
                offset: 0,
                expected: Self::LEN,
                available: data.len(),
            });
        }

        let mut authenticator = [0u8; 16];
        authenticator.copy_from_slice(&data[4..Self::LEN]);

        Ok(Header {
            code: Code::from_u8(data[0]),
            identifier: data[1],
            length: u16::from_be_bytes([data[2], data[3]]),
            authenticator,
        })
    }

    /// Append the 20 encoded header bytes to `buffer`.
    ///
    /// `length` must already reflect the true total packet size; computing
    /// it from the encoded attributes is the packet codec's job.
    pub fn encode_into(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.code.as_u8());
        buffer.push(self.identifier);
        buffer.extend_from_slice(&self.length.to_be_bytes());
        buffer.extend_from_slice(&self.authenticator);
    }
}
