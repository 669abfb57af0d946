use bitstream_io::{BitWriter, Endianness};

use super::ParseError;

/// One encodable/decodable piece of a DNS message.
///
/// Writes go through a bit writer so the header's sub-byte flag fields pack
/// naturally. Reads take the whole packet buffer plus the component's byte
/// offset, because domain names may jump backwards through compression
/// pointers while the caller's offset keeps moving forward.
pub trait PacketComponent: Sized {
    fn write<E: Endianness>(
        &self,
        writer: &mut BitWriter<&mut Vec<u8>, E>,
    ) -> Result<(), ParseError>;

    /// Reads one component at `offset`, returning it together with the
    /// offset of the first byte after it.
    fn read(packet: &[u8], offset: usize) -> Result<(Self, usize), ParseError>;
}

pub(crate) fn read_u16(packet: &[u8], offset: usize) -> Result<u16, ParseError> {
    let bytes = packet
        .get(offset..offset + 2)
        .ok_or(ParseError::Truncated)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub(crate) fn read_u32(packet: &[u8], offset: usize) -> Result<u32, ParseError> {
    let bytes = packet
        .get(offset..offset + 4)
        .ok_or(ParseError::Truncated)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
