use crate::{Error, Result};
use bytes::{Buf, BufMut};

/// The size of the value encoded as a compact-size integer.
pub fn varint_size(value: u64) -> u64 {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x10000..=0xffffffff => 5,
        _ => 9,
    }
}

/// Write a compact-size integer to the buffer.
///
/// This is the Bitcoin wire encoding: values below 0xfd occupy a single byte,
/// larger values are prefixed with one of the reserved discriminators 0xfd, 0xfe
/// or 0xff announcing a 2, 4 or 8 byte little-endian payload. The discriminator
/// values themselves are never emitted as literal single-byte values.
pub fn varint_encode(buffer: &mut dyn BufMut, value: u64) -> Result<()> {
    match value {
        0..=0xfc => buffer.put_u8(value as u8),
        0xfd..=0xffff => {
            buffer.put_u8(0xfd);
            buffer.put_u16_le(value as u16);
        }
        0x10000..=0xffffffff => {
            buffer.put_u8(0xfe);
            buffer.put_u32_le(value as u32);
        }
        _ => {
            buffer.put_u8(0xff);
            buffer.put_u64_le(value);
        }
    };
    Ok(())
}

/// Read a compact-size integer from the buffer.
///
/// Fails with [Error::DataTooSmall] if the buffer does not hold the full payload
/// announced by the discriminator. Non-minimal encodings are accepted.
pub fn varint_decode(buffer: &mut dyn Buf) -> Result<u64> {
    if buffer.remaining() < 1 {
        return Err(Error::DataTooSmall);
    }
    let n0 = buffer.get_u8();
    let v = match n0 {
        0xff => {
            if buffer.remaining() < 8 {
                return Err(Error::DataTooSmall);
            }
            buffer.get_u64_le()
        }
        0xfe => {
            if buffer.remaining() < 4 {
                return Err(Error::DataTooSmall);
            }
            buffer.get_u32_le() as u64
        }
        0xfd => {
            if buffer.remaining() < 2 {
                return Err(Error::DataTooSmall);
            }
            buffer.get_u16_le() as u64
        }
        _ => n0 as u64,
    };
    Ok(v)
}
