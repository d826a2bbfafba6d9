use bytes::{Buf, BufMut};
use commonware_codec::{Error, ReadExt, Write};

/// Writes a string as length-prefixed UTF-8 bytes.
pub fn write_string(s: &str, writer: &mut impl BufMut) {
    let bytes = s.as_bytes();
    (bytes.len() as u32).write(writer);
    writer.put_slice(bytes);
}

/// Reads a length-prefixed UTF-8 string of at most `max_len` bytes.
pub fn read_string(reader: &mut impl Buf, max_len: usize) -> Result<String, Error> {
    let len = u32::read(reader)? as usize;
    if len > max_len {
        return Err(Error::Invalid("String", "too long"));
    }
    if reader.remaining() < len {
        return Err(Error::EndOfBuffer);
    }
    let mut bytes = vec![0u8; len];
    reader.copy_to_slice(&mut bytes);
    String::from_utf8(bytes).map_err(|_| Error::Invalid("String", "invalid UTF-8"))
}

/// Encoded size of a string written with [write_string].
pub fn string_encode_size(s: &str) -> usize {
    4 + s.len()
}

/// Bankroll and score values can go negative, so they travel as two's complement u64.
pub(crate) fn write_chips(value: i64, writer: &mut impl BufMut) {
    (value as u64).write(writer);
}

pub(crate) fn read_chips(reader: &mut impl Buf) -> Result<i64, Error> {
    Ok(u64::read(reader)? as i64)
}

pub(crate) const CHIPS_SIZE: usize = 8;
