#![no_main]

use libfuzzer_sys::fuzz_target;
use wirebuf::{ByteReader, ByteWriter};

const CAP: usize = 64;

// Interprets the fuzz input as a stream of write operations, applied to a
// growing writer and a capped writer in lockstep, and checks the committed
// output and capacity invariants after every step.
fuzz_target!(|data: &[u8]| {
    let mut growing = ByteWriter::new();
    let mut capped = ByteWriter::fixed(CAP);
    let mut expected: Vec<u8> = Vec::new();

    let mut input = data.iter().copied();
    while let Some(op) = input.next() {
        let mut raw = [0u8; 8];
        for slot in raw.iter_mut() {
            *slot = input.next().unwrap_or(0);
        }
        match op % 5 {
            0 => {
                growing.write_u8(raw[0]).unwrap();
                expected.push(raw[0]);
                let _ = capped.write_u8(raw[0]);
            }
            1 => {
                let v = u16::from_le_bytes([raw[0], raw[1]]);
                growing.write_u16_le(v).unwrap();
                expected.extend_from_slice(&v.to_le_bytes());
                let _ = capped.write_u16_le(v);
            }
            2 => {
                let v = u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]);
                growing.write_u32_be(v).unwrap();
                expected.extend_from_slice(&v.to_be_bytes());
                let _ = capped.write_u32_be(v);
            }
            3 => {
                let v = u64::from_le_bytes(raw);
                growing.write_varint(v).unwrap();
                let mut enc = Vec::new();
                wirebuf::varint_encode(&mut enc, v).unwrap();
                expected.extend_from_slice(&enc);
                let _ = capped.write_varint(v);
            }
            _ => {
                let v = u64::from_le_bytes(raw);
                growing.write_bigsize(v).unwrap();
                let mut enc = Vec::new();
                wirebuf::bigsize_encode(&mut enc, v).unwrap();
                expected.extend_from_slice(&enc);
                let _ = capped.write_bigsize(v);
            }
        }
        assert!(capped.size() <= CAP);
        assert_eq!(growing.size(), expected.len());
    }

    assert_eq!(growing.as_slice(), &expected[..]);

    // everything written must read back out
    let mut reader = ByteReader::new(growing.to_bytes());
    let echoed = reader.read_bytes(expected.len()).unwrap();
    assert_eq!(echoed, &expected[..]);
    assert_eq!(reader.remaining(), 0);
});
