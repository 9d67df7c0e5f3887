//! Decoding of fixed-width wire layouts back into feeding-log records.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::codec::TimeMode;
use crate::compact;
use crate::error::DecodeError;
use crate::flour::FlourType;
use crate::record::Record;

/// Decode one record from the front of `buf`.
pub(crate) fn decode_record(mode: TimeMode, buf: &[u8]) -> Result<Record, DecodeError> {
    let size = mode.record_size();
    if buf.len() < size {
        return Err(DecodeError::InsufficientData {
            expected: size,
            actual: buf.len(),
        });
    }

    let (time, flour_type) = match mode {
        TimeMode::Unix => {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&buf[4..12]);
            // Stored as u64 on the wire, interpreted as i64 seconds
            let seconds = u64::from_le_bytes(raw) as i64;
            (unix_time(seconds)?, FlourType::from_code(buf[3]))
        }
        TimeMode::UnixMinute => {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(&buf[4..8]);
            let seconds = i64::from(u32::from_le_bytes(raw)) * 60;
            (unix_time(seconds)?, FlourType::from_code(buf[3]))
        }
        TimeMode::Compact => decode_compact(&buf[3..7])?,
    };

    Ok(Record {
        time,
        starter_grams: buf[0],
        flour_grams: buf[1],
        water_grams: buf[2],
        flour_type,
    })
}

fn unix_time(seconds: i64) -> Result<NaiveDateTime, DecodeError> {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.naive_utc())
        .ok_or(DecodeError::TimestampOutOfRange { seconds })
}

fn decode_compact(packed: &[u8]) -> Result<(NaiveDateTime, FlourType), DecodeError> {
    debug_assert_eq!(packed.len(), compact::PACKED_SIZE);

    let year = compact::unpack_year(packed[0]);
    let month = compact::unpack_month(packed[1]);
    let day = compact::unpack_day(packed[1], packed[2]);
    let hour = compact::unpack_hour(packed[2]);
    let minute = compact::unpack_minute(packed[2], packed[3]);
    let flour_type = FlourType::from_code(compact::unpack_flour(packed[3]));

    // Arbitrary bytes can hold field values like month 0 or February 30 that
    // no encoded record produces
    let time = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or(DecodeError::InvalidDate {
            year,
            month,
            day,
            hour,
            minute,
        })?;

    Ok((time, flour_type))
}
