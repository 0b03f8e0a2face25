use std::fmt;

/// RADIUS packet code as defined in RFC 2865 Section 4.
///
/// The code space is open-ended: the constants below cover the codes
/// assigned by RFC 2865, RFC 2866 and RFC 5997, but any other value decodes
/// and re-encodes untouched rather than being rejected. Vendor and future
/// codes therefore survive a round trip through the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Code(u8);

impl Code {
    /// Access-Request (1)
    pub const ACCESS_REQUEST: Code = Code(1);
    /// Access-Accept (2)
    pub const ACCESS_ACCEPT: Code = Code(2);
    /// Access-Reject (3)
    pub const ACCESS_REJECT: Code = Code(3);
    /// Accounting-Request (4) - RFC 2866
    pub const ACCOUNTING_REQUEST: Code = Code(4);
    /// Accounting-Response (5) - RFC 2866
    pub const ACCOUNTING_RESPONSE: Code = Code(5);
    /// Access-Challenge (11)
    pub const ACCESS_CHALLENGE: Code = Code(11);
    /// Status-Server (12) - RFC 5997
    pub const STATUS_SERVER: Code = Code(12);
    /// Status-Client (13) - RFC 5997
    pub const STATUS_CLIENT: Code = Code(13);

    pub const fn from_u8(value: u8) -> Self {
        Code(value)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// RFC name of the code, if it is one of the assigned values.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("Access-Request"),
            2 => Some("Access-Accept"),
            3 => Some("Access-Reject"),
            4 => Some("Accounting-Request"),
            5 => Some("Accounting-Response"),
            11 => Some("Access-Challenge"),
            12 => Some("Status-Server"),
            13 => Some("Status-Client"),
            _ => None,
        }
    }
}

impl From<u8> for Code {
    fn from(value: u8) -> Self {
        Code(value)
    }
}

impl From<Code> for u8 {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Code({})", self.0),
        }
    }
}
