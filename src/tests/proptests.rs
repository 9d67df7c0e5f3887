use chrono::{NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;

use crate::{Codec, FlourType, Record, TimeMode};

const ALL_MODES: [TimeMode; 3] = [TimeMode::Unix, TimeMode::UnixMinute, TimeMode::Compact];

/// Any minute-granularity instant the compact layout can represent
fn arb_time() -> impl Strategy<Value = NaiveDateTime> {
    (2025i32..=2280, 1u32..=12, 1u32..=31, 0u32..=23, 0u32..=59).prop_filter_map(
        "day does not exist in that month",
        |(year, month, day, hour, minute)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|date| date.and_hms_opt(hour, minute, 0))
        },
    )
}

prop_compose! {
    fn arb_record()(
        time in arb_time(),
        starter_grams in any::<u8>(),
        flour_grams in any::<u8>(),
        water_grams in any::<u8>(),
        code in 0u8..=15,
    ) -> Record {
        Record {
            time,
            starter_grams,
            flour_grams,
            water_grams,
            flour_type: FlourType::from_code(code),
        }
    }
}

proptest! {
    /// Property: decode(encode(r)) == r, field for field, in every mode
    #[test]
    fn prop_roundtrip_identity(record in arb_record()) {
        for mode in ALL_MODES {
            let codec = Codec::new(mode);
            let bytes = codec.encode(&record);
            let back = codec.decode(&bytes).unwrap();
            prop_assert_eq!(back, record, "mode {:?}", mode);
        }
    }

    /// Property: encoded length equals the mode's declared constant
    #[test]
    fn prop_fixed_width(record in arb_record()) {
        for mode in ALL_MODES {
            prop_assert_eq!(Codec::new(mode).encode(&record).len(), mode.record_size());
        }
    }

    /// Property: 12 > 8 > 7 for every record
    #[test]
    fn prop_mode_size_ordering(record in arb_record()) {
        let unix = Codec::new(TimeMode::Unix).encode(&record).len();
        let unix_minute = Codec::new(TimeMode::UnixMinute).encode(&record).len();
        let compact = Codec::new(TimeMode::Compact).encode(&record).len();
        prop_assert!(unix > unix_minute && unix_minute > compact);
    }

    /// Property: checked encode agrees with unchecked for in-range records
    #[test]
    fn prop_checked_matches_unchecked(record in arb_record()) {
        for mode in ALL_MODES {
            let codec = Codec::new(mode);
            prop_assert_eq!(codec.encode_checked(&record).unwrap(), codec.encode(&record));
        }
    }

    /// Property: encode_into writes exactly the bytes encode allocates
    #[test]
    fn prop_encode_into_agrees(record in arb_record()) {
        for mode in ALL_MODES {
            let codec = Codec::new(mode);
            let mut buf = [0xAAu8; 16];
            let written = codec.encode_into(&record, &mut buf).unwrap();
            prop_assert_eq!(written, mode.record_size());
            prop_assert_eq!(&buf[..written], &codec.encode(&record)[..]);
        }
    }

    /// Property: changing only a gram field flips bits only in its byte
    #[test]
    fn prop_grams_isolated(record in arb_record(), new_starter in any::<u8>()) {
        prop_assume!(new_starter != record.starter_grams);
        let changed = Record { starter_grams: new_starter, ..record };
        for mode in ALL_MODES {
            let codec = Codec::new(mode);
            let a = codec.encode(&record);
            let b = codec.encode(&changed);
            for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
                if i == 0 {
                    prop_assert_ne!(x, y);
                } else {
                    prop_assert_eq!(x, y, "mode {:?}, byte {}", mode, i);
                }
            }
        }
    }

    /// Property: changing only the flour type stays inside its field
    #[test]
    fn prop_flour_isolated(record in arb_record(), code in 0u8..=15) {
        prop_assume!(code != record.flour_type.code());
        let changed = Record { flour_type: FlourType::from_code(code), ..record };
        for mode in ALL_MODES {
            let codec = Codec::new(mode);
            let a = codec.encode(&record);
            let b = codec.encode(&changed);
            for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
                let mask = match (mode, i) {
                    (TimeMode::Compact, 6) => 0b0000_1111u8,
                    (TimeMode::Unix | TimeMode::UnixMinute, 3) => 0xFF,
                    _ => 0,
                };
                prop_assert_eq!((x ^ y) & !mask, 0, "mode {:?}, byte {}", mode, i);
            }
        }
    }

    /// Property: changing only the minute stays inside its compact bit range
    #[test]
    fn prop_minute_isolated_compact(record in arb_record(), minute in 0u32..=59) {
        prop_assume!(minute != record.time.minute());
        let changed = Record { time: record.time.with_minute(minute).unwrap(), ..record };
        let codec = Codec::new(TimeMode::Compact);
        let a = codec.encode(&record);
        let b = codec.encode(&changed);
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            let mask = match i {
                5 => 0b0000_0011u8,
                6 => 0b1111_0000,
                _ => 0,
            };
            prop_assert_eq!((x ^ y) & !mask, 0, "byte {}", i);
        }
    }

    /// Property: batch encode/decode round-trips any record sequence
    #[test]
    fn prop_batch_roundtrip(records in prop::collection::vec(arb_record(), 0..50)) {
        for mode in ALL_MODES {
            let codec = Codec::new(mode);
            let bytes = codec.encode_all(&records);
            prop_assert_eq!(bytes.len(), records.len() * mode.record_size());
            let back = codec.decode_all(&bytes).unwrap();
            prop_assert_eq!(&back, &records, "mode {:?}", mode);
        }
    }

    /// Property: any truncated record errors with InsufficientData, never panics
    #[test]
    fn prop_short_input_errors(record in arb_record(), keep in 0usize..=6) {
        for mode in ALL_MODES {
            let codec = Codec::new(mode);
            let bytes = codec.encode(&record);
            let result = codec.decode(&bytes[..keep.min(bytes.len() - 1)]);
            let is_insufficient = matches!(
                result,
                Err(crate::DecodeError::InsufficientData { .. })
            );
            prop_assert!(is_insufficient);
        }
    }
}
