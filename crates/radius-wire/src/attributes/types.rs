use std::fmt;

/// RADIUS attribute type as defined in RFC 2865 and related RFCs.
///
/// Like [`Code`](crate::Code), the type space is open-ended: unassigned and
/// vendor values are carried as-is and never rejected by the codec. The
/// constants cover the types assigned by RFC 2865, RFC 2866, RFC 2869 and
/// RFC 3579.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeType(u8);

impl AttributeType {
    /// User-Name (1) - RFC 2865
    pub const USER_NAME: AttributeType = AttributeType(1);
    /// User-Password (2) - RFC 2865
    pub const USER_PASSWORD: AttributeType = AttributeType(2);
    /// CHAP-Password (3) - RFC 2865
    pub const CHAP_PASSWORD: AttributeType = AttributeType(3);
    /// NAS-IP-Address (4) - RFC 2865
    pub const NAS_IP_ADDRESS: AttributeType = AttributeType(4);
    /// NAS-Port (5) - RFC 2865
    pub const NAS_PORT: AttributeType = AttributeType(5);
    /// Service-Type (6) - RFC 2865
    pub const SERVICE_TYPE: AttributeType = AttributeType(6);
    /// Framed-Protocol (7) - RFC 2865
    pub const FRAMED_PROTOCOL: AttributeType = AttributeType(7);
    /// Framed-IP-Address (8) - RFC 2865
    pub const FRAMED_IP_ADDRESS: AttributeType = AttributeType(8);
    /// Framed-IP-Netmask (9) - RFC 2865
    pub const FRAMED_IP_NETMASK: AttributeType = AttributeType(9);
    /// Framed-Routing (10) - RFC 2865
    pub const FRAMED_ROUTING: AttributeType = AttributeType(10);
    /// Filter-Id (11) - RFC 2865
    pub const FILTER_ID: AttributeType = AttributeType(11);
    /// Framed-MTU (12) - RFC 2865
    pub const FRAMED_MTU: AttributeType = AttributeType(12);
    /// Framed-Compression (13) - RFC 2865
    pub const FRAMED_COMPRESSION: AttributeType = AttributeType(13);
    /// Login-IP-Host (14) - RFC 2865
    pub const LOGIN_IP_HOST: AttributeType = AttributeType(14);
    /// Login-Service (15) - RFC 2865
    pub const LOGIN_SERVICE: AttributeType = AttributeType(15);
    /// Login-TCP-Port (16) - RFC 2865
    pub const LOGIN_TCP_PORT: AttributeType = AttributeType(16);
    /// Reply-Message (18) - RFC 2865
    pub const REPLY_MESSAGE: AttributeType = AttributeType(18);
    /// Callback-Number (19) - RFC 2865
    pub const CALLBACK_NUMBER: AttributeType = AttributeType(19);
    /// Callback-Id (20) - RFC 2865
    pub const CALLBACK_ID: AttributeType = AttributeType(20);
    /// Framed-Route (22) - RFC 2865
    pub const FRAMED_ROUTE: AttributeType = AttributeType(22);
    /// Framed-IPX-Network (23) - RFC 2865
    pub const FRAMED_IPX_NETWORK: AttributeType = AttributeType(23);
    /// State (24) - RFC 2865
    pub const STATE: AttributeType = AttributeType(24);
    /// Class (25) - RFC 2865
    pub const CLASS: AttributeType = AttributeType(25);
    /// Vendor-Specific (26) - RFC 2865
    pub const VENDOR_SPECIFIC: AttributeType = AttributeType(26);
    /// Session-Timeout (27) - RFC 2865
    pub const SESSION_TIMEOUT: AttributeType = AttributeType(27);
    /// Idle-Timeout (28) - RFC 2865
    pub const IDLE_TIMEOUT: AttributeType = AttributeType(28);
    /// Termination-Action (29) - RFC 2865
    pub const TERMINATION_ACTION: AttributeType = AttributeType(29);
    /// Called-Station-Id (30) - RFC 2865
    pub const CALLED_STATION_ID: AttributeType = AttributeType(30);
    /// Calling-Station-Id (31) - RFC 2865
    pub const CALLING_STATION_ID: AttributeType = AttributeType(31);
    /// NAS-Identifier (32) - RFC 2865
    pub const NAS_IDENTIFIER: AttributeType = AttributeType(32);
    /// Proxy-State (33) - RFC 2865
    pub const PROXY_STATE: AttributeType = AttributeType(33);
    /// Login-LAT-Service (34) - RFC 2865
    pub const LOGIN_LAT_SERVICE: AttributeType = AttributeType(34);
    /// Login-LAT-Node (35) - RFC 2865
    pub const LOGIN_LAT_NODE: AttributeType = AttributeType(35);
    /// Login-LAT-Group (36) - RFC 2865
    pub const LOGIN_LAT_GROUP: AttributeType = AttributeType(36);
    /// Framed-AppleTalk-Link (37) - RFC 2865
    pub const FRAMED_APPLETALK_LINK: AttributeType = AttributeType(37);
    /// Framed-AppleTalk-Network (38) - RFC 2865
    pub const FRAMED_APPLETALK_NETWORK: AttributeType = AttributeType(38);
    /// Framed-AppleTalk-Zone (39) - RFC 2865
    pub const FRAMED_APPLETALK_ZONE: AttributeType = AttributeType(39);
    /// Acct-Status-Type (40) - RFC 2866
    pub const ACCT_STATUS_TYPE: AttributeType = AttributeType(40);
    /// Acct-Delay-Time (41) - RFC 2866
    pub const ACCT_DELAY_TIME: AttributeType = AttributeType(41);
    /// Acct-Input-Octets (42) - RFC 2866
    pub const ACCT_INPUT_OCTETS: AttributeType = AttributeType(42);
    /// Acct-Output-Octets (43) - RFC 2866
    pub const ACCT_OUTPUT_OCTETS: AttributeType = AttributeType(43);
    /// Acct-Session-Id (44) - RFC 2866
    pub const ACCT_SESSION_ID: AttributeType = AttributeType(44);
    /// Acct-Authentic (45) - RFC 2866
    pub const ACCT_AUTHENTIC: AttributeType = AttributeType(45);
    /// Acct-Session-Time (46) - RFC 2866
    pub const ACCT_SESSION_TIME: AttributeType = AttributeType(46);
    /// Acct-Input-Packets (47) - RFC 2866
    pub const ACCT_INPUT_PACKETS: AttributeType = AttributeType(47);
    /// Acct-Output-Packets (48) - RFC 2866
    pub const ACCT_OUTPUT_PACKETS: AttributeType = AttributeType(48);
    /// Acct-Terminate-Cause (49) - RFC 2866
    pub const ACCT_TERMINATE_CAUSE: AttributeType = AttributeType(49);
    /// Acct-Multi-Session-Id (50) - RFC 2866
    pub const ACCT_MULTI_SESSION_ID: AttributeType = AttributeType(50);
    /// Acct-Link-Count (51) - RFC 2866
    pub const ACCT_LINK_COUNT: AttributeType = AttributeType(51);
    /// Acct-Input-Gigawords (52) - RFC 2869
    pub const ACCT_INPUT_GIGAWORDS: AttributeType = AttributeType(52);
    /// Acct-Output-Gigawords (53) - RFC 2869
    pub const ACCT_OUTPUT_GIGAWORDS: AttributeType = AttributeType(53);
    /// CHAP-Challenge (60) - RFC 2865
    pub const CHAP_CHALLENGE: AttributeType = AttributeType(60);
    /// NAS-Port-Type (61) - RFC 2865
    pub const NAS_PORT_TYPE: AttributeType = AttributeType(61);
    /// Port-Limit (62) - RFC 2865
    pub const PORT_LIMIT: AttributeType = AttributeType(62);
    /// Login-LAT-Port (63) - RFC 2865
    pub const LOGIN_LAT_PORT: AttributeType = AttributeType(63);
    /// EAP-Message (79) - RFC 3579
    pub const EAP_MESSAGE: AttributeType = AttributeType(79);
    /// Message-Authenticator (80) - RFC 2869
    pub const MESSAGE_AUTHENTICATOR: AttributeType = AttributeType(80);

    pub const fn from_u8(value: u8) -> Self {
        AttributeType(value)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// RFC name of the attribute type, if it is one of the assigned values.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("User-Name"),
            2 => Some("User-Password"),
            3 => Some("CHAP-Password"),
            4 => Some("NAS-IP-Address"),
            5 => Some("NAS-Port"),
            6 => Some("Service-Type"),
            7 => Some("Framed-Protocol"),
            8 => Some("Framed-IP-Address"),
            9 => Some("Framed-IP-Netmask"),
            10 => Some("Framed-Routing"),
            11 => Some("Filter-Id"),
            12 => Some("Framed-MTU"),
            13 => Some("Framed-Compression"),
            14 => Some("Login-IP-Host"),
            15 => Some("Login-Service"),
            16 => Some("Login-TCP-Port"),
            18 => Some("Reply-Message"),
            19 => Some("Callback-Number"),
            20 => Some("Callback-Id"),
            22 => Some("Framed-Route"),
            23 => Some("Framed-IPX-Network"),
            24 => Some("State"),
            25 => Some("Class"),
            26 => Some("Vendor-Specific"),
            27 => Some("Session-Timeout"),
            28 => Some("Idle-Timeout"),
            29 => Some("Termination-Action"),
            30 => Some("Called-Station-Id"),
            31 => Some("Calling-Station-Id"),
            32 => Some("NAS-Identifier"),
            33 => Some("Proxy-State"),
            34 => Some("Login-LAT-Service"),
            35 => Some("Login-LAT-Node"),
            36 => Some("Login-LAT-Group"),
            37 => Some("Framed-AppleTalk-Link"),
            38 => Some("Framed-AppleTalk-Network"),
            39 => Some("Framed-AppleTalk-Zone"),
            40 => Some("Acct-Status-Type"),
            41 => Some("Acct-Delay-Time"),
            42 => Some("Acct-Input-Octets"),
            43 => Some("Acct-Output-Octets"),
            44 => Some("Acct-Session-Id"),
            45 => Some("Acct-Authentic"),
            46 => Some("Acct-Session-Time"),
            47 => Some("Acct-Input-Packets"),
            48 => Some("Acct-Output-Packets"),
            49 => Some("Acct-Terminate-Cause"),
            50 => Some("Acct-Multi-Session-Id"),
            51 => Some("Acct-Link-Count"),
            52 => Some("Acct-Input-Gigawords"),
            53 => Some("Acct-Output-Gigawords"),
            60 => Some("CHAP-Challenge"),
            61 => Some("NAS-Port-Type"),
            62 => Some("Port-Limit"),
            63 => Some("Login-LAT-Port"),
            79 => Some("EAP-Message"),
            80 => Some("Message-Authenticator"),
            _ => None,
        }
    }
}

impl From<u8> for AttributeType {
    fn from(value: u8) -> Self {
        AttributeType(value)
    }
}

impl From<AttributeType> for u8 {
    fn from(attr_type: AttributeType) -> Self {
        attr_type.0
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Attribute({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_types() {
        assert_eq!(AttributeType::USER_NAME.as_u8(), 1);
        assert_eq!(AttributeType::from_u8(80), AttributeType::MESSAGE_AUTHENTICATOR);
        assert_eq!(AttributeType::NAS_IP_ADDRESS.name(), Some("NAS-IP-Address"));
    }

    #[test]
    fn test_unknown_type_preserved() {
        let attr_type = AttributeType::from_u8(17);
        assert_eq!(attr_type.as_u8(), 17);
        assert_eq!(attr_type.name(), None);
        assert_eq!(attr_type.to_string(), "Attribute(17)");
    }
}
