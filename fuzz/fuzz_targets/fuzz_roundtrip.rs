#![no_main]

use chrono::NaiveDate;
use levain::{Codec, FlourType, Record, TimeMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Need 9 bytes for date/time fields, grams, and flour code
    if data.len() < 9 {
        return;
    }

    let year = 2025 + i32::from(data[0]);
    let month = u32::from(data[1] % 12) + 1;
    let day = u32::from(data[2] % 31) + 1;
    let hour = u32::from(data[3] % 24);
    let minute = u32::from(data[4] % 60);

    // Day may not exist in that month (e.g. February 30)
    let Some(time) = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
    else {
        return;
    };

    let record = Record {
        time,
        starter_grams: data[5],
        flour_grams: data[6],
        water_grams: data[7],
        flour_type: FlourType::from_code(data[8] % 16),
    };

    for mode in [TimeMode::Unix, TimeMode::UnixMinute, TimeMode::Compact] {
        let codec = Codec::new(mode);

        // Property 1: output width is the mode's declared constant
        let bytes = codec.encode(&record);
        assert_eq!(bytes.len(), mode.record_size(), "width mismatch");

        // Property 2: round-trip identity for every in-range record
        let back = codec.decode(&bytes).expect("decode of freshly encoded record");
        assert_eq!(back, record, "round-trip mismatch");

        // Property 3: checked encode accepts everything the generator builds
        assert_eq!(codec.encode_checked(&record).expect("in-range record"), bytes);
    }
});
