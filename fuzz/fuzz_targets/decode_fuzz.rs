#![no_main]
use libfuzzer_sys::fuzz_target;
use oxbase58::{DecodeError, decode, decode_u64, encode};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary text must never panic, only return errors.
    let text = String::from_utf8_lossy(data);
    match decode(&text) {
        Ok(bytes) => {
            // Whatever decodes must re-encode to a string that decodes the same.
            let again = encode(&bytes).unwrap();
            assert_eq!(decode(&again).unwrap(), bytes);
        }
        Err(DecodeError::InvalidCharacter { position, .. }) => {
            assert!(position < text.len());
        }
        Err(e) => panic!("unexpected error from general decode: {e}"),
    }

    let _ = decode_u64(&text);
});
