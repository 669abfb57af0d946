/// DNS response code constants from RFC 1035 and subsequent RFCs.
pub struct Rcode;

impl Rcode {
    pub const NOERROR: u8 = 0; // No error
    pub const FORMERR: u8 = 1; // Format error
    pub const SERVFAIL: u8 = 2; // Server failure
    pub const NXDOMAIN: u8 = 3; // Name error
    pub const NOTIMP: u8 = 4; // Not implemented
    pub const REFUSED: u8 = 5; // Query refused
    pub const YXDOMAIN: u8 = 6; // Name exists when it should not
    pub const YXRRSET: u8 = 7; // RR set exists when it should not
    pub const NXRRSET: u8 = 8; // RR set that should exist does not
    pub const NOTAUTH: u8 = 9; // Not authorized
    pub const NOTZONE: u8 = 10; // Name not contained in zone
    pub const DSOTYPENI: u8 = 11; // DSO-TYPE not implemented
    pub const BADVERS: u8 = 16; // Bad OPT version
    // BADSIG shares 16 with BADVERS; the RFC extension history assigned the
    // same code point twice and both names are kept.
    pub const BADSIG: u8 = 16; // TSIG signature failure
    pub const BADKEY: u8 = 17; // Key not recognized
    pub const BADTIME: u8 = 18; // Signature out of time window
    pub const BADMODE: u8 = 19; // Bad TKEY mode
    pub const BADNAME: u8 = 20; // Duplicate key name
    pub const BADALG: u8 = 21; // Algorithm not supported
    pub const BADTRUNC: u8 = 22; // Bad truncation
    pub const BADCOOKIE: u8 = 23; // Bad or missing server cookie

    /// Human-readable description for a response code, `None` for NOERROR
    /// and unassigned values.
    pub fn description(rcode: u8) -> Option<&'static str> {
        match rcode {
            Self::FORMERR => Some("Format Error"),
            Self::SERVFAIL => Some("Server Failure"),
            Self::NXDOMAIN => Some("Non-Existent Domain"),
            Self::NOTIMP => Some("Not Implemented"),
            Self::REFUSED => Some("Query Refused"),
            Self::YXDOMAIN => Some("Name Exists when it should not"),
            Self::YXRRSET => Some("RR Set Exists when it should not"),
            Self::NXRRSET => Some("RR Set that should exist does not"),
            Self::NOTAUTH => Some("Not Authorized"),
            Self::NOTZONE => Some("Name not contained in zone"),
            Self::DSOTYPENI => Some("DSO-TYPE Not Implemented"),
            Self::BADVERS => Some("Bad OPT Version or TSIG Signature Failure"),
            Self::BADKEY => Some("Key not recognized"),
            Self::BADTIME => Some("Signature out of time window"),
            Self::BADMODE => Some("Bad TKEY Mode"),
            Self::BADNAME => Some("Duplicate key name"),
            Self::BADALG => Some("Algorithm not supported"),
            Self::BADTRUNC => Some("Bad Truncation"),
            Self::BADCOOKIE => Some("Bad/missing Server Cookie"),
            _ => None,
        }
    }
}

/// DNS opcode constants from RFC 1035 and successors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Opcode {
    #[default]
    QUERY = 0,
    IQUERY = 1,
    STATUS = 2,
    NOTIFY = 4,
    UPDATE = 5,
    /// DNS Stateful Operations, RFC 8490.
    DSO = 6,
}

impl From<u8> for Opcode {
    fn from(value: u8) -> Self {
        match value {
            0 => Opcode::QUERY,
            1 => Opcode::IQUERY,
            2 => Opcode::STATUS,
            4 => Opcode::NOTIFY,
            5 => Opcode::UPDATE,
            6 => Opcode::DSO,
            _ => Opcode::QUERY,
        }
    }
}

impl From<Opcode> for u8 {
    fn from(value: Opcode) -> Self {
        value as u8
    }
}
