use std::fmt;

/// Declares a 16-bit code enum with a catch-all variant that keeps the raw
/// value, so that unknown codes still survive a parse.
macro_rules! code_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$inner:meta])*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
        pub enum $name {
            $(
                $(#[$inner])*
                $variant,
            )*
            /// Any value not listed above, kept as it was on the wire
            Unknown(u16),
        }

        impl From<u16> for $name {
            fn from(code: u16) -> $name {
                match code {
                    $( $value => $name::$variant, )*
                    code => $name::Unknown(code),
                }
            }
        }

        impl From<$name> for u16 {
            fn from(value: $name) -> u16 {
                match value {
                    $( $name::$variant => $value, )*
                    $name::Unknown(code) => code,
                }
            }
        }
    };
}

code_enum! {
    /// The TYPE and QTYPE values according to RFC 1035, plus AAAA and SRV
    pub enum Type {
        /// a host address
        A = 1,
        /// an authoritative name server
        NS = 2,
        /// a mail destination (Obsolete - use MX)
        MD = 3,
        /// a mail forwarder (Obsolete - use MX)
        MF = 4,
        /// the canonical name for an alias
        CNAME = 5,
        /// marks the start of a zone of authority
        SOA = 6,
        /// a mailbox domain name (EXPERIMENTAL)
        MB = 7,
        /// a mail group member (EXPERIMENTAL)
        MG = 8,
        /// a mail rename domain name (EXPERIMENTAL)
        MR = 9,
        /// a null RR (EXPERIMENTAL)
        NULL = 10,
        /// a well known service description
        WKS = 11,
        /// a domain name pointer, the usual mDNS browse query
        PTR = 12,
        /// host information
        HINFO = 13,
        /// mailbox or mail list information
        MINFO = 14,
        /// mail exchange
        MX = 15,
        /// text strings
        TXT = 16,
        /// IPv6 host address (RFC 3596)
        AAAA = 28,
        /// service record (RFC 2782)
        SRV = 33,
        /// A request for a transfer of an entire zone
        AXFR = 252,
        /// A request for mailbox-related records (MB, MG or MR)
        MAILB = 253,
        /// A request for mail agent RRs (Obsolete - see MX)
        MAILA = 254,
        /// A request for all records (`*`)
        All = 255,
    }
}

code_enum! {
    /// The CLASS and QCLASS values according to RFC 1035
    pub enum Class {
        /// the Internet
        IN = 1,
        /// the CSNET class (Obsolete)
        CS = 2,
        /// the CHAOS class
        CH = 3,
        /// Hesiod [Dyer 87]
        HS = 4,
        /// Any class (`*`), only meaningful in questions
        Any = 255,
    }
}

/// The OPCODE value according to RFC 1035
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Opcode {
    StandardQuery,
    InverseQuery,
    ServerStatusRequest,
    /// Values 3-15 are reserved; the 4-bit value is kept untouched
    Reserved(u8),
}

/// The RCODE value according to RFC 1035
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    /// Values 6-15 are reserved; the 4-bit value is kept untouched
    Reserved(u8),
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Opcode {
        use self::Opcode::*;
        match code {
            0 => StandardQuery,
            1 => InverseQuery,
            2 => ServerStatusRequest,
            x => Reserved(x),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(code: Opcode) -> u8 {
        use self::Opcode::*;
        match code {
            StandardQuery => 0,
            InverseQuery => 1,
            ServerStatusRequest => 2,
            Reserved(x) => x,
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> ResponseCode {
        use self::ResponseCode::*;
        match code {
            0 => NoError,
            1 => FormatError,
            2 => ServerFailure,
            3 => NameError,
            4 => NotImplemented,
            5 => Refused,
            x => Reserved(x),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> u8 {
        use self::ResponseCode::*;
        match code {
            NoError => 0,
            FormatError => 1,
            ServerFailure => 2,
            NameError => 3,
            NotImplemented => 4,
            Refused => 5,
            Reserved(x) => x,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Type::All => f.write_str("*"),
            Type::Unknown(code) => write!(f, "TYPE{}", code),
            ref other => fmt::Debug::fmt(other, f),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Class::Any => f.write_str("*"),
            Class::Unknown(code) => write!(f, "CLASS{}", code),
            ref other => fmt::Debug::fmt(other, f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_codes_map_to_variants() {
        assert_eq!(Type::from(28), Type::AAAA);
        assert_eq!(Type::from(33), Type::SRV);
        assert_eq!(Type::from(255), Type::All);
        assert_eq!(Class::from(1), Class::IN);
        assert_eq!(u16::from(Type::PTR), 12);
        assert_eq!(u16::from(Class::Any), 255);
    }

    #[test]
    fn unknown_codes_are_preserved() {
        assert_eq!(Type::from(65), Type::Unknown(65));
        assert_eq!(u16::from(Type::Unknown(65)), 65);
        assert_eq!(Class::from(254), Class::Unknown(254));
        assert_eq!(Opcode::from(9), Opcode::Reserved(9));
        assert_eq!(u8::from(Opcode::Reserved(9)), 9);
        assert_eq!(ResponseCode::from(11), ResponseCode::Reserved(11));
        assert_eq!(u8::from(ResponseCode::Refused), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Type::SRV.to_string(), "SRV");
        assert_eq!(Type::All.to_string(), "*");
        assert_eq!(Type::Unknown(99).to_string(), "TYPE99");
        assert_eq!(Class::IN.to_string(), "IN");
    }
}
