use crate::big_size::{bigsize_encode, bigsize_size};
use crate::var_int::{varint_encode, varint_size};
use crate::{Error, Result};
use bytes::{Bytes, BytesMut};
use log::trace;
use std::fmt;

/// An append-only accumulator for building wire-format message payloads.
///
/// A writer is either *growing* ([ByteWriter::new]), reallocating its storage on
/// demand, or *capped* ([ByteWriter::fixed]), holding a preallocated region that
/// writes must never overrun. The mode is set at construction and never changes.
///
/// All write operations either commit fully or fail without touching the
/// committed bytes. Reading the output ([ByteWriter::as_slice],
/// [ByteWriter::to_bytes]) does not consume the writer; further writes may
/// follow.
pub struct ByteWriter {
    /// backing storage, always at least `pos` bytes long
    storage: Vec<u8>,
    /// number of bytes committed so far
    pos: usize,
    /// hard capacity in capped mode
    fixed: Option<usize>,
}

impl ByteWriter {
    /// Create a writer that grows on demand, starting with no allocated storage.
    pub fn new() -> ByteWriter {
        ByteWriter {
            storage: Vec::new(),
            pos: 0,
            fixed: None,
        }
    }

    /// Create a writer with a hard capacity of `capacity` bytes.
    ///
    /// The full region is preallocated and zeroed up front. Any write that would
    /// advance past `capacity` fails with [Error::BufferFull] and commits
    /// nothing; the storage is never reallocated.
    pub fn fixed(capacity: usize) -> ByteWriter {
        ByteWriter {
            storage: vec![0; capacity],
            pos: 0,
            fixed: Some(capacity),
        }
    }

    /// The number of bytes committed so far.
    pub fn size(&self) -> usize {
        self.pos
    }

    /// The accumulated output.
    ///
    /// In capped mode this is the entire preallocated region, which callers are
    /// expected to have filled to capacity. In growing mode it is exactly the
    /// committed bytes; the unwritten tail of the storage is never exposed.
    pub fn as_slice(&self) -> &[u8] {
        match self.fixed {
            Some(_) => &self.storage[..],
            None => &self.storage[..self.pos],
        }
    }

    /// An owned copy of [ByteWriter::as_slice], unaffected by later writes or
    /// reallocation.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_slice())
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Append a u16 in little-endian byte order.
    pub fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a u16 in big-endian byte order.
    pub fn write_u16_be(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Append a u32 in little-endian byte order.
    pub fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a u32 in big-endian byte order.
    pub fn write_u32_be(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Append a u64 in little-endian byte order.
    pub fn write_u64_le(&mut self, value: u64) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a u64 in big-endian byte order.
    pub fn write_u64_be(&mut self, value: u64) -> Result<()> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Append a byte sequence verbatim. An empty sequence is a no-op.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_space(data.len())?;
        self.storage[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Append `value` in Bitcoin compact-size encoding.
    pub fn write_varint(&mut self, value: u64) -> Result<()> {
        let mut raw = BytesMut::with_capacity(varint_size(value) as usize);
        varint_encode(&mut raw, value)?;
        self.write_bytes(&raw)
    }

    /// Append `value` in Lightning bigsize encoding.
    pub fn write_bigsize(&mut self, value: u64) -> Result<()> {
        let mut raw = BytesMut::with_capacity(bigsize_size(value) as usize);
        bigsize_encode(&mut raw, value)?;
        self.write_bytes(&raw)
    }

    /// Make room for `additional` bytes past the current position.
    ///
    /// Capped mode: the request fails, before anything is committed, if it would
    /// advance past the capacity. Growing mode: the storage is reallocated to
    /// the next power of two at or above the required length, preserving the
    /// committed bytes in order.
    fn ensure_space(&mut self, additional: usize) -> Result<()> {
        let required = self.pos + additional;
        if let Some(capacity) = self.fixed {
            if required > capacity {
                return Err(Error::BufferFull { capacity, required });
            }
            return Ok(());
        }
        if required > self.storage.len() {
            let new_len = required.next_power_of_two();
            trace!(
                "growing writer storage from {} to {} bytes",
                self.storage.len(),
                new_len
            );
            self.storage.resize(new_len, 0);
        }
        Ok(())
    }
}

// Prints the committed bytes as hex so captured payloads are easy to compare
impl fmt::Debug for ByteWriter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ByteWriter {{ size: {}, data: {} }}",
            self.pos,
            hex::encode(&self.storage[..self.pos])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn new_writer_is_empty() {
        let w = ByteWriter::new();
        assert_eq!(w.size(), 0);
        assert!(w.as_slice().is_empty());
        assert!(w.to_bytes().is_empty());
    }

    #[test]
    fn fixed_width_layouts() {
        let mut w = ByteWriter::new();
        w.write_u8(0xab).unwrap();
        w.write_u16_le(0x0102).unwrap();
        w.write_u16_be(0x0102).unwrap();
        w.write_u32_le(0x01020304).unwrap();
        w.write_u32_be(0x01020304).unwrap();
        assert_eq!(
            w.as_slice(),
            &hex!("ab 0201 0102 04030201 01020304")
        );
    }

    #[test]
    fn u64_byte_orders_mirror() {
        let mut le = ByteWriter::new();
        le.write_u64_le(0x0102030405060708).unwrap();
        let mut be = ByteWriter::new();
        be.write_u64_be(0x0102030405060708).unwrap();
        assert_eq!(le.as_slice(), &hex!("0807060504030201"));
        assert_eq!(be.as_slice(), &hex!("0102030405060708"));
        let mut reversed = le.to_bytes().to_vec();
        reversed.reverse();
        assert_eq!(reversed.as_slice(), be.as_slice());
    }

    #[test]
    fn varint_and_bigsize_via_writer() {
        let mut w = ByteWriter::new();
        w.write_varint(0x10000).unwrap();
        w.write_bigsize(0x10000).unwrap();
        assert_eq!(w.as_slice(), &hex!("fe00000100 fe00010000"));
    }

    #[test]
    fn capped_writer_accepts_exactly_its_capacity() {
        let mut w = ByteWriter::fixed(4);
        w.write_u16_le(0x0102).unwrap();
        // a 4-byte write at position 2 must be refused whole
        assert!(matches!(
            w.write_u32_le(0xdeadbeef),
            Err(Error::BufferFull {
                capacity: 4,
                required: 6
            })
        ));
        assert_eq!(w.size(), 2);
        w.write_u16_be(0x0304).unwrap();
        assert_eq!(w.size(), 4);
        assert!(w.write_u8(0).is_err());
        assert_eq!(w.size(), 4);
        assert_eq!(w.as_slice(), &hex!("02010304"));
    }

    #[test]
    fn capped_writer_exposes_whole_region() {
        let mut w = ByteWriter::fixed(8);
        w.write_u8(0xaa).unwrap();
        w.write_u16_be(0xbbcc).unwrap();
        // unwritten tail is the zeroed remainder of the preallocated region
        assert_eq!(w.as_slice(), &hex!("aabbcc 0000000000"));
        assert_eq!(w.size(), 3);
    }

    #[test]
    fn empty_append_is_a_noop() {
        let mut w = ByteWriter::fixed(2);
        w.write_u16_le(0xffff).unwrap();
        w.write_bytes(&[]).unwrap();
        assert_eq!(w.size(), 2);

        let mut g = ByteWriter::new();
        g.write_bytes(&[]).unwrap();
        assert_eq!(g.size(), 0);
        assert!(g.as_slice().is_empty());
    }

    #[test]
    fn growth_preserves_committed_bytes() {
        // single-byte appends walking well past several power-of-two boundaries
        let mut w = ByteWriter::new();
        let expected: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        for b in &expected {
            w.write_u8(*b).unwrap();
        }
        assert_eq!(w.size(), expected.len());
        assert_eq!(w.as_slice(), expected.as_slice());
    }

    #[test]
    fn snapshot_survives_later_writes() {
        let mut w = ByteWriter::new();
        w.write_bytes(b"abc").unwrap();
        let snapshot = w.to_bytes();
        w.write_bytes(&[0u8; 128]).unwrap();
        assert_eq!(snapshot, Bytes::from_static(b"abc"));
        assert_eq!(w.size(), 131);
    }

    #[test]
    fn writer_reusable_after_finalize() {
        let mut w = ByteWriter::new();
        w.write_u8(1).unwrap();
        assert_eq!(w.as_slice(), &[1]);
        w.write_u8(2).unwrap();
        assert_eq!(w.as_slice(), &[1, 2]);
    }

    #[test]
    fn debug_prints_hex() {
        let mut w = ByteWriter::new();
        w.write_u16_be(0xbeef).unwrap();
        assert_eq!(format!("{:?}", w), "ByteWriter { size: 2, data: beef }");
    }
}
