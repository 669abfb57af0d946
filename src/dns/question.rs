use bitstream_io::{BitWrite, BitWriter, Endianness};
use serde::{Deserialize, Serialize};

use super::{
    ParseError,
    common::{self, PacketComponent},
    enums::{RecordClass, RecordType},
    name::DomainName,
};

/// One entry in the question section: name, type, class. No TTL or RDATA.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DNSQuestion {
    pub name: DomainName,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl DNSQuestion {
    pub fn new(name: &str, qtype: RecordType, qclass: RecordClass) -> Result<Self, ParseError> {
        Ok(DNSQuestion {
            name: DomainName::from_text(name)?,
            qtype,
            qclass,
        })
    }
}

impl PacketComponent for DNSQuestion {
    fn write<E: Endianness>(
        &self,
        writer: &mut BitWriter<&mut Vec<u8>, E>,
    ) -> Result<(), ParseError> {
        writer.write_bytes(&self.name.to_wire())?;
        writer.write_var::<u16>(16, self.qtype.into())?;
        writer.write_var::<u16>(16, self.qclass.into())?;
        Ok(())
    }

    fn read(packet: &[u8], offset: usize) -> Result<(Self, usize), ParseError> {
        let (name, used) = DomainName::decode(packet, offset)?;
        let mut offset = offset + used;
        let qtype = common::read_u16(packet, offset)?.into();
        offset += 2;
        let qclass = common::read_u16(packet, offset)?.into();
        offset += 2;
        Ok((
            DNSQuestion {
                name,
                qtype,
                qclass,
            },
            offset,
        ))
    }
}
