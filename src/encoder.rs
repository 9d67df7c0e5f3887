//! Encoding of feeding-log records into their fixed-width wire layouts.

use chrono::{Datelike, Timelike};

use crate::codec::TimeMode;
use crate::compact;
use crate::error::EncodeError;
use crate::flour::FlourType;
use crate::record::Record;

/// Write one record into `buf`, which must be exactly the mode's record size.
///
/// Baseline truncation semantics: field values wider than their wire field
/// are masked down to the field width, and timestamps are cast into the
/// mode's integer type with wrapping. `check_ranges` is the gate for callers
/// who want rejection instead.
pub(crate) fn encode_record(mode: TimeMode, record: &Record, buf: &mut [u8]) {
    debug_assert_eq!(buf.len(), mode.record_size());

    buf[0] = record.starter_grams;
    buf[1] = record.flour_grams;
    buf[2] = record.water_grams;

    match mode {
        TimeMode::Unix => {
            buf[3] = record.flour_type.code();
            let seconds = record.time.and_utc().timestamp() as u64;
            buf[4..12].copy_from_slice(&seconds.to_le_bytes());
        }
        TimeMode::UnixMinute => {
            buf[3] = record.flour_type.code();
            let minutes = (record.time.and_utc().timestamp() / 60) as u32;
            buf[4..8].copy_from_slice(&minutes.to_le_bytes());
        }
        TimeMode::Compact => {
            let time = record.time;
            let packed = compact::pack(
                time.year(),
                time.month(),
                time.day(),
                time.hour(),
                time.minute(),
                record.flour_type.code(),
            );
            buf[3..7].copy_from_slice(&packed);
        }
    }
}

/// Range validation for `Codec::encode_checked`.
///
/// Month, day, hour, and minute are always in range by construction of
/// `NaiveDateTime`, and the gram fields by their u8 type, so only the fields
/// the type system cannot police are checked here.
pub(crate) fn check_ranges(mode: TimeMode, record: &Record) -> Result<(), EncodeError> {
    let seconds = record.time.and_utc().timestamp();
    match mode {
        TimeMode::Unix => {
            if seconds < 0 {
                return Err(EncodeError::FieldOutOfRange {
                    field: "timestamp",
                    value: seconds,
                    min: 0,
                    max: i64::MAX,
                });
            }
        }
        TimeMode::UnixMinute => {
            let minutes = seconds.div_euclid(60);
            if minutes < 0 || minutes > i64::from(u32::MAX) {
                return Err(EncodeError::FieldOutOfRange {
                    field: "timestamp",
                    value: minutes,
                    min: 0,
                    max: i64::from(u32::MAX),
                });
            }
        }
        TimeMode::Compact => {
            let year = i64::from(record.time.year());
            let min = i64::from(compact::EPOCH_YEAR);
            let max = min + 255;
            if year < min || year > max {
                return Err(EncodeError::FieldOutOfRange {
                    field: "year",
                    value: year,
                    min,
                    max,
                });
            }
            let code = record.flour_type.code();
            if code > FlourType::MAX_COMPACT_CODE {
                return Err(EncodeError::FieldOutOfRange {
                    field: "flour_type",
                    value: i64::from(code),
                    min: 0,
                    max: i64::from(FlourType::MAX_COMPACT_CODE),
                });
            }
        }
    }
    Ok(())
}
