#![no_main]
use libfuzzer_sys::fuzz_target;
use oxbase58::{FixedWidth, decode, decode_fixed, encode, encode_fixed};

fuzz_target!(|data: &[u8]| {
    let text = encode(data).unwrap();
    assert_eq!(decode(&text).unwrap(), data);

    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let ones = text.bytes().take_while(|&c| c == b'1').count();
    assert_eq!(zeros, ones);

    // Reuse the leading bytes as a fixed-width value.
    if let Some(v) = u128::unpack(data.get(..16).unwrap_or_default()) {
        assert_eq!(decode_fixed::<u128>(&encode_fixed(v)).unwrap(), v);
    }
});
