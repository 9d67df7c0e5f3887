#![no_main]

use levain::{Codec, TimeMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to decode() and decode_all() - should never panic.
    // May return an error for short or malformed input, but should not crash
    // or read out of bounds.
    for mode in [TimeMode::Unix, TimeMode::UnixMinute, TimeMode::Compact] {
        let codec = Codec::new(mode);
        let _ = codec.decode(data);
        let _ = codec.decode_all(data);
    }
});
