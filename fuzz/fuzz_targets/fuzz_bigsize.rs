#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use wirebuf::{bigsize_decode, bigsize_encode, bigsize_size};

fuzz_target!(|data: &[u8]| {
    let mut buffer = data;
    if let Ok(value) = bigsize_decode(&mut buffer) {
        let mut encode_buffer = BytesMut::new();
        bigsize_encode(&mut encode_buffer, value).unwrap();

        // size calculation must match the encoded form
        assert_eq!(bigsize_size(value) as usize, encode_buffer.len());

        // re-decoding the canonical encoding must give the value back
        let mut decode_buffer = encode_buffer.as_ref();
        assert_eq!(bigsize_decode(&mut decode_buffer).unwrap(), value);
        assert!(decode_buffer.is_empty());
    }
});
