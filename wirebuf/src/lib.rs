//! Wire serialization for Bitcoin-family and Lightning-style peer-to-peer protocols.
//!
//! This library provides the byte-level building blocks for assembling and parsing
//! wire-format message payloads: an append-only [ByteWriter] with fixed-width and
//! variable-length integer encoders, and the matching [ByteReader]. It is not a
//! message framing or transport layer.

mod big_size;
mod reader;
mod result;
mod var_int;
mod writer;

pub use self::big_size::{bigsize_decode, bigsize_encode, bigsize_size};
pub use self::reader::ByteReader;
pub use self::result::{Error, Result};
pub use self::var_int::{varint_decode, varint_encode, varint_size};
pub use self::writer::ByteWriter;
pub use hex::{FromHex, ToHex};
