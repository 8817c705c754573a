//! Packing between `0`/`1` bitstrings and bytes
//!
//! Bits are written most significant first; the final byte is zero padded.

use crate::error::{CodecError, Result};
use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::io::Cursor;

/// Pack a bitstring into bytes.
pub fn pack(bitstring: &str) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bitstring.len().div_ceil(8)), BigEndian);
    for (position, found) in bitstring.chars().enumerate() {
        let bit = match found {
            '0' => false,
            '1' => true,
            _ => return Err(CodecError::InvalidBit { position, found }),
        };
        writer.write_bit(bit)?;
    }
    writer.byte_align()?;
    Ok(writer.into_writer())
}

/// Read `bit_len` bits back out of `bytes` as a bitstring.
pub fn unpack(bytes: &[u8], bit_len: usize) -> Result<String> {
    let mut reader = BitReader::endian(Cursor::new(bytes), BigEndian);
    let mut bitstring = String::with_capacity(bit_len);
    for _ in 0..bit_len {
        let bit = reader.read_bit()?;
        bitstring.push(if bit { '1' } else { '0' });
    }
    Ok(bitstring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_msb_first_with_padding() {
        assert_eq!(pack("110").unwrap(), vec![0b1100_0000]);
        assert_eq!(pack("101010101").unwrap(), vec![0b1010_1010, 0b1000_0000]);
        assert!(pack("").unwrap().is_empty());
    }

    #[test]
    fn test_unpack_ignores_padding() {
        assert_eq!(unpack(&[0b1100_0000], 3).unwrap(), "110");
        assert_eq!(unpack(&[0b1010_1010, 0b1000_0000], 9).unwrap(), "101010101");
    }

    #[test]
    fn test_pack_rejects_non_binary() {
        assert!(matches!(
            pack("01x1"),
            Err(CodecError::InvalidBit { position: 2, found: 'x' })
        ));
    }

    #[test]
    fn test_unpack_past_end() {
        assert!(matches!(unpack(&[0xFF], 9), Err(CodecError::IoError(_))));
    }
}
