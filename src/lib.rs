//! `levain` - Compact fixed-width binary records for a sourdough feeding log
//!
//! A small codec that serializes one feeding-event measurement (timestamp,
//! three gram measurements, flour type) into a fixed-width byte sequence,
//! far more compactly than a generic text format. Three interchangeable
//! timestamp-encoding modes trade precision for density; the densest mode
//! bit-packs six fields into four bytes with no padding.
//!
//! # Modes
//!
//! | Mode | Record size | Timestamp encoding |
//! |------|-------------|--------------------|
//! | `Unix` | 12 bytes | seconds since 1970 as u64 (LE) |
//! | `UnixMinute` | 8 bytes | minutes since 1970 as u32 (LE) |
//! | `Compact` | 7 bytes | bit-packed calendar fields, 2025 epoch |
//!
//! All records in a stream must use the same mode; there is no header, magic
//! number, or per-record tag. The reader must know the mode out of band.
//!
//! # Wire Format
//!
//! Every mode starts with the three gram measurements:
//!
//! | Offset | Field |
//! |--------|-------|
//! | 0 | `starter_grams` |
//! | 1 | `flour_grams` |
//! | 2 | `water_grams` |
//!
//! The byte-aligned modes follow with the flour type at offset 3 and the
//! timestamp integer at offset 4. The compact mode packs the timestamp and
//! flour type together into bytes 3..7:
//!
//! | Field | Bits | Legal range | Position |
//! |-------|------|-------------|----------|
//! | Year offset | 8 | 0-255 (year 2025-2280) | byte 3 |
//! | Month | 4 | 1-12 | byte 4, bits 7-4 |
//! | Day | 5 | 1-31 | byte 4 bits 3-0, byte 5 bit 7 |
//! | Hour | 5 | 0-23 | byte 5, bits 6-2 |
//! | Minute | 6 | 0-59 | byte 5 bits 1-0, byte 6 bits 7-4 |
//! | Flour type | 4 | 0-15 | byte 6, bits 3-0 |
//!
//! # Truncation Contract
//!
//! [`Codec::encode`] performs no bounds checking: a field value wider than its
//! wire field is masked down to the field width. This is a deliberate caller
//! contract, not a defect; [`Codec::encode_checked`] is the hardened variant
//! that reports [`EncodeError::FieldOutOfRange`] instead of truncating.
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use levain::{Codec, FlourType, Record, TimeMode};
//!
//! let record = Record {
//!     time: NaiveDate::from_ymd_opt(2025, 4, 16)
//!         .unwrap()
//!         .and_hms_opt(8, 30, 0)
//!         .unwrap(),
//!     starter_grams: 50,
//!     flour_grams: 100,
//!     water_grams: 100,
//!     flour_type: FlourType::WholeWheat,
//! };
//!
//! let codec = Codec::new(TimeMode::Compact);
//! let bytes = codec.encode(&record);
//! assert_eq!(bytes.len(), 7);
//!
//! let back = codec.decode(&bytes).unwrap();
//! assert_eq!(back, record);
//! ```

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod codec;
mod compact;
mod decoder;
mod encoder;
mod error;
mod flour;
mod record;

#[cfg(test)]
mod tests;

// Re-export public API
pub use codec::{Codec, TimeMode};
pub use error::{DecodeError, EncodeError};
pub use flour::FlourType;
pub use record::Record;
