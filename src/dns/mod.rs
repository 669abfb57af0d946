pub mod common;
pub mod constants;
pub mod enums;
pub mod header;
pub mod name;
pub mod question;
pub mod resource;


use bitstream_io::{BigEndian, BitWriter};
use common::PacketComponent;
use header::DNSHeader;
use question::DNSQuestion;
use resource::DNSResource;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Error raised while encoding or decoding wire-format data.
///
/// Every decode failure is terminal for that call: no partial packet is
/// returned and the read position is undefined afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("packet is shorter than the structure being read")]
    Truncated,
    #[error("invalid domain name: {0}")]
    InvalidName(String),
    #[error("label has a reserved or unknown label format")]
    InvalidLabel,
    #[error("compression pointer chain loops, points forward, or is too deep")]
    CompressionLoop,
    #[error("{section} count in header is {header} but the section holds {actual} entries")]
    CountMismatch {
        section: &'static str,
        header: u16,
        actual: usize,
    },
    #[error("{0} section holds more than 65535 entries")]
    TooManyRecords(&'static str),
    #[error("rdata length {0} does not fit in a 16-bit RDLENGTH")]
    RdataTooLong(usize),
    #[error("bit stream error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        // The only in-memory read failure is running off the end of the slice.
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => ParseError::Truncated,
            _ => ParseError::Io(e.to_string()),
        }
    }
}

/// A full DNS message: header plus the four entry sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DNSPacket {
    pub header: DNSHeader,
    pub questions: Vec<DNSQuestion>,
    pub answers: Vec<DNSResource>,
    pub authorities: Vec<DNSResource>,
    pub additionals: Vec<DNSResource>,
}

impl DNSPacket {
    /// Decodes a whole message from its wire representation.
    ///
    /// Section counts come from the header; entries are read in the fixed
    /// order questions, answers, authorities, additionals over one running
    /// offset. The first structural error aborts the whole decode.
    pub fn parse(buf: &[u8]) -> Result<Self, ParseError> {
        trace!("parsing DNS packet, size: {} bytes", buf.len());
        let (header, mut offset) = DNSHeader::read(buf, 0)?;
        debug!(
            "parsed DNS header: id={}, qr={}, opcode={}, questions={}",
            header.id, header.qr, header.opcode, header.qdcount
        );

        let mut questions = Vec::new();
        for _ in 0..header.qdcount {
            let (question, next) = DNSQuestion::read(buf, offset)?;
            questions.push(question);
            offset = next;
        }

        let mut answers = Vec::new();
        for _ in 0..header.ancount {
            let (answer, next) = DNSResource::read(buf, offset)?;
            answers.push(answer);
            offset = next;
        }

        let mut authorities = Vec::new();
        for _ in 0..header.nscount {
            let (authority, next) = DNSResource::read(buf, offset)?;
            authorities.push(authority);
            offset = next;
        }

        let mut additionals = Vec::new();
        for _ in 0..header.arcount {
            let (additional, next) = DNSResource::read(buf, offset)?;
            additionals.push(additional);
            offset = next;
        }

        Ok(DNSPacket {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    /// Encodes the message, recomputing the four header counts from the
    /// actual section lengths. Caller-supplied counts are never trusted.
    pub fn serialize(&self) -> Result<Vec<u8>, ParseError> {
        let mut header = self.header.clone();
        header.qdcount = section_count(self.questions.len(), "questions")?;
        header.ancount = section_count(self.answers.len(), "answers")?;
        header.nscount = section_count(self.authorities.len(), "authorities")?;
        header.arcount = section_count(self.additionals.len(), "additionals")?;

        let mut buf = Vec::with_capacity(512);
        let mut writer: BitWriter<&mut Vec<u8>, BigEndian> = BitWriter::new(&mut buf);

        header.write(&mut writer)?;
        for question in &self.questions {
            question.write(&mut writer)?;
        }
        for answer in &self.answers {
            answer.write(&mut writer)?;
        }
        for authority in &self.authorities {
            authority.write(&mut writer)?;
        }
        for additional in &self.additionals {
            additional.write(&mut writer)?;
        }

        Ok(buf)
    }

    /// Checks that the stored header counts agree with the section lengths.
    ///
    /// `serialize` recomputes counts and never fails on a mismatch; this is
    /// for callers that hand-build packets and want the discrepancy reported
    /// instead of silently corrected.
    pub fn validate(&self) -> Result<(), ParseError> {
        let sections = [
            ("questions", self.header.qdcount, self.questions.len()),
            ("answers", self.header.ancount, self.answers.len()),
            ("authorities", self.header.nscount, self.authorities.len()),
            ("additionals", self.header.arcount, self.additionals.len()),
        ];
        for (section, header, actual) in sections {
            if usize::from(header) != actual {
                return Err(ParseError::CountMismatch {
                    section,
                    header,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Clones the packet as a response skeleton: QR and RA set, everything
    /// else carried over unchanged.
    pub fn generate_response(&self) -> Self {
        let mut packet = self.clone();
        packet.header.qr = true;
        packet.header.ra = true;
        for question in &packet.questions {
            debug!("DNS query for: {}", question.name);
        }
        packet
    }
}

fn section_count(len: usize, section: &'static str) -> Result<u16, ParseError> {
    u16::try_from(len).map_err(|_| ParseError::TooManyRecords(section))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_packet_roundtrip() {
        let packet = DNSPacket::default();
        let bytes = packet.serialize().expect("Failed to serialize");
        assert_eq!(bytes.len(), 12);
        let parsed = DNSPacket::parse(&bytes).expect("Failed to parse");
        assert_eq!(parsed, packet);
    }
}
