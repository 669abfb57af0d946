//! RFC 1035 DNS wire-format codec: header bit packing, domain-name label
//! encoding with compression-pointer resolution, and full message assembly.

pub mod dns;

pub use dns::{DNSPacket, ParseError};
