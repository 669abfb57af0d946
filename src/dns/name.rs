use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Label lengths 64..=255 are reserved for compression pointers.
pub const MAX_LABEL_LEN: usize = 63;
/// Whole encoded name, length octets and terminator included.
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0b1100_0000;
const MAX_POINTER_HOPS: usize = 20;

/// One dot-separated segment of a domain name, stored as raw bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(Vec<u8>);

impl Label {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// A domain name as an ordered label sequence.
///
/// The zero-length terminating label is not stored; the wire codec always
/// appends exactly one, so the terminator invariant holds by construction.
/// Names are lowercased when built from text (DNS comparison is
/// case-insensitive) and immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainName {
    labels: Vec<Label>,
}

impl DomainName {
    /// The root name, a lone terminator on the wire.
    pub fn root() -> Self {
        DomainName::default()
    }

    /// Builds a name from dotted text, e.g. `venera.isi.edu` (one trailing
    /// dot tolerated). Segments are ASCII-lowercased.
    pub fn from_text(name: &str) -> Result<Self, ParseError> {
        if name.is_empty() || name == "." {
            return Ok(DomainName::root());
        }

        let mut parts: Vec<&str> = name.split('.').collect();
        if parts.last() == Some(&"") {
            parts.pop();
        }

        let mut labels = Vec::with_capacity(parts.len());
        for part in parts {
            if part.is_empty() {
                return Err(ParseError::InvalidName(format!(
                    "empty label in {name:?}"
                )));
            }
            if part.len() > MAX_LABEL_LEN {
                return Err(ParseError::InvalidName(format!(
                    "label {part:?} exceeds {MAX_LABEL_LEN} octets"
                )));
            }
            labels.push(Label(part.to_ascii_lowercase().into_bytes()));
        }

        let domain = DomainName { labels };
        if domain.encoded_len() > MAX_NAME_LEN {
            return Err(ParseError::InvalidName(format!(
                "encoded form of {name:?} exceeds {MAX_NAME_LEN} octets"
            )));
        }
        Ok(domain)
    }

    /// Decodes a name starting at `offset`, following compression pointers.
    ///
    /// Returns the name and the number of bytes it occupies *at `offset`*:
    /// once a pointer is taken, forward consumption stops at the two pointer
    /// bytes no matter how many labels the jump resolves. Pointers must move
    /// strictly backwards and each hop strictly earlier than the last, so a
    /// self-referencing or forward pointer fails with `CompressionLoop`
    /// rather than spinning.
    pub fn decode(packet: &[u8], start: usize) -> Result<(Self, usize), ParseError> {
        let mut labels = Vec::new();
        let mut offset = start;
        let mut consumed = None;
        let mut last_target = usize::MAX;
        let mut hops = 0;
        // Terminator octet counts toward the 255-octet name limit.
        let mut resolved_len = 1usize;

        loop {
            let len = *packet.get(offset).ok_or(ParseError::Truncated)?;
            if len == 0 {
                // Lazy: after a pointer jump `offset` sits before `start` and
                // the eager subtraction would underflow.
                let consumed = consumed.unwrap_or_else(|| offset + 1 - start);
                return Ok((DomainName { labels }, consumed));
            }
            if len & POINTER_MASK == POINTER_MASK {
                let low = *packet.get(offset + 1).ok_or(ParseError::Truncated)?;
                let target = usize::from(u16::from_be_bytes([len & !POINTER_MASK, low]));
                if target >= offset || target >= last_target {
                    return Err(ParseError::CompressionLoop);
                }
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(ParseError::CompressionLoop);
                }
                if consumed.is_none() {
                    consumed = Some(offset + 2 - start);
                }
                last_target = target;
                offset = target;
                continue;
            }
            if len & POINTER_MASK != 0 {
                // 0b01/0b10 prefixes are reserved label types.
                return Err(ParseError::InvalidLabel);
            }

            let end = offset + 1 + usize::from(len);
            let bytes = packet
                .get(offset + 1..end)
                .ok_or(ParseError::Truncated)?;
            resolved_len += usize::from(len) + 1;
            if resolved_len > MAX_NAME_LEN {
                return Err(ParseError::InvalidName(format!(
                    "resolved name exceeds {MAX_NAME_LEN} octets"
                )));
            }
            labels.push(Label(bytes.to_vec()));
            offset = end;
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Size of the uncompressed wire form, terminator included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1
    }

    /// Uncompressed wire form: length-prefixed labels plus the zero
    /// terminator. Never emits compression pointers.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        buf
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for label in &self.labels {
            write!(f, "{label}.")?;
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainName::from_text(s)
    }
}
