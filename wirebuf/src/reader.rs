use crate::big_size::bigsize_decode;
use crate::var_int::varint_decode;
use crate::{Error, Result};
use bytes::{Buf, Bytes};

/// A consuming decoder for the wire encodings produced by
/// [ByteWriter](crate::ByteWriter).
///
/// Every read is the exact inverse of the matching write operation, including
/// discriminator thresholds and byte order per encoding. Reads that need more
/// bytes than remain fail with [Error::DataTooSmall].
pub struct ByteReader {
    buf: Bytes,
}

impl ByteReader {
    /// Create a reader over the given bytes.
    pub fn new(data: impl Into<Bytes>) -> ByteReader {
        ByteReader { buf: data.into() }
    }

    /// The number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        if self.buf.remaining() < 1 {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.get_u8())
    }

    /// Read a u16 in little-endian byte order.
    pub fn read_u16_le(&mut self) -> Result<u16> {
        if self.buf.remaining() < 2 {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.get_u16_le())
    }

    /// Read a u16 in big-endian byte order.
    pub fn read_u16_be(&mut self) -> Result<u16> {
        if self.buf.remaining() < 2 {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.get_u16())
    }

    /// Read a u32 in little-endian byte order.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        if self.buf.remaining() < 4 {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.get_u32_le())
    }

    /// Read a u32 in big-endian byte order.
    pub fn read_u32_be(&mut self) -> Result<u32> {
        if self.buf.remaining() < 4 {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.get_u32())
    }

    /// Read a u64 in little-endian byte order.
    pub fn read_u64_le(&mut self) -> Result<u64> {
        if self.buf.remaining() < 8 {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.get_u64_le())
    }

    /// Read a u64 in big-endian byte order.
    pub fn read_u64_be(&mut self) -> Result<u64> {
        if self.buf.remaining() < 8 {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.get_u64())
    }

    /// Read the next `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Bytes> {
        if self.buf.remaining() < count {
            return Err(Error::DataTooSmall);
        }
        Ok(self.buf.copy_to_bytes(count))
    }

    /// Read a Bitcoin compact-size integer.
    pub fn read_varint(&mut self) -> Result<u64> {
        varint_decode(&mut self.buf)
    }

    /// Read a Lightning bigsize integer.
    pub fn read_bigsize(&mut self) -> Result<u64> {
        bigsize_decode(&mut self.buf)
    }
}
