use crate::{Error, Result};
use bytes::{Buf, BufMut};

/// The size of the value encoded as a bigsize integer.
///
/// Bigsize shares the compact-size tiering, so the two encodings always occupy
/// the same number of bytes for the same value.
pub fn bigsize_size(value: u64) -> u64 {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x10000..=0xffffffff => 5,
        _ => 9,
    }
}

/// Write a bigsize integer to the buffer.
///
/// This is the Lightning wire encoding: the same 0xfd/0xfe/0xff discriminators
/// as compact size, but every multi-byte payload is big-endian. The two formats
/// are not interchangeable on the wire.
pub fn bigsize_encode(buffer: &mut dyn BufMut, value: u64) -> Result<()> {
    match value {
        0..=0xfc => buffer.put_u8(value as u8),
        0xfd..=0xffff => {
            buffer.put_u8(0xfd);
            buffer.put_u16(value as u16);
        }
        0x10000..=0xffffffff => {
            buffer.put_u8(0xfe);
            buffer.put_u32(value as u32);
        }
        _ => {
            buffer.put_u8(0xff);
            buffer.put_u64(value);
        }
    };
    Ok(())
}

/// Read a bigsize integer from the buffer.
///
/// Fails with [Error::DataTooSmall] if the buffer does not hold the full payload
/// announced by the discriminator. Non-minimal encodings are accepted.
pub fn bigsize_decode(buffer: &mut dyn Buf) -> Result<u64> {
    if buffer.remaining() < 1 {
        return Err(Error::DataTooSmall);
    }
    let n0 = buffer.get_u8();
    let v = match n0 {
        0xff => {
            if buffer.remaining() < 8 {
                return Err(Error::DataTooSmall);
            }
            buffer.get_u64()
        }
        0xfe => {
            if buffer.remaining() < 4 {
                return Err(Error::DataTooSmall);
            }
            buffer.get_u32() as u64
        }
        0xfd => {
            if buffer.remaining() < 2 {
                return Err(Error::DataTooSmall);
            }
            buffer.get_u16() as u64
        }
        _ => n0 as u64,
    };
    Ok(v)
}
