use bitstream_io::{BitWrite, BitWriter, Endianness};
use serde::{Deserialize, Serialize};

use super::{
    ParseError,
    common::{self, PacketComponent},
    enums::{RecordClass, RecordType},
    name::DomainName,
};

/// One resource record, the shared shape of the answer, authority and
/// additional sections.
///
/// RDATA is opaque here; interpreting it per record type is the caller's
/// concern. RDLENGTH is derived from `rdata.len()` on encode so the two can
/// never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DNSResource {
    pub name: DomainName,
    pub rtype: RecordType,
    pub rclass: RecordClass,
    /// Time to live in seconds.
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl DNSResource {
    pub fn new(
        name: &str,
        rtype: RecordType,
        rclass: RecordClass,
        ttl: u32,
        rdata: Vec<u8>,
    ) -> Result<Self, ParseError> {
        Ok(DNSResource {
            name: DomainName::from_text(name)?,
            rtype,
            rclass,
            ttl,
            rdata,
        })
    }

    pub fn rdlength(&self) -> Result<u16, ParseError> {
        u16::try_from(self.rdata.len()).map_err(|_| ParseError::RdataTooLong(self.rdata.len()))
    }
}

impl PacketComponent for DNSResource {
    fn write<E: Endianness>(
        &self,
        writer: &mut BitWriter<&mut Vec<u8>, E>,
    ) -> Result<(), ParseError> {
        writer.write_bytes(&self.name.to_wire())?;
        writer.write_var::<u16>(16, self.rtype.into())?;
        writer.write_var::<u16>(16, self.rclass.into())?;
        writer.write_var::<u32>(32, self.ttl)?;
        writer.write_var::<u16>(16, self.rdlength()?)?;
        writer.write_bytes(&self.rdata)?;
        Ok(())
    }

    fn read(packet: &[u8], offset: usize) -> Result<(Self, usize), ParseError> {
        let (name, used) = DomainName::decode(packet, offset)?;
        let mut offset = offset + used;
        let rtype = common::read_u16(packet, offset)?.into();
        offset += 2;
        let rclass = common::read_u16(packet, offset)?.into();
        offset += 2;
        let ttl = common::read_u32(packet, offset)?;
        offset += 4;
        let rdlength = usize::from(common::read_u16(packet, offset)?);
        offset += 2;
        let rdata = packet
            .get(offset..offset + rdlength)
            .ok_or(ParseError::Truncated)?
            .to_vec();
        offset += rdlength;
        Ok((
            DNSResource {
                name,
                rtype,
                rclass,
                ttl,
                rdata,
            },
            offset,
        ))
    }
}
