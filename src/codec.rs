//! Codec configuration: timestamp-encoding modes and the public
//! encode/decode operations.

use serde::{Deserialize, Serialize};

use crate::decoder;
use crate::encoder;
use crate::error::{DecodeError, EncodeError};
use crate::record::Record;

/// Timestamp-encoding strategy. Selects the wire layout and fixed record size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeMode {
    /// Seconds since the 1970 epoch as a u64. Full precision, 12-byte records.
    Unix,
    /// Minutes since the 1970 epoch as a u32. Minute precision, 8-byte records.
    UnixMinute,
    /// Bit-packed calendar fields with a 2025 epoch. Minute precision,
    /// 7-byte records.
    Compact,
}

impl TimeMode {
    /// Fixed encoded size of one record in this mode
    #[inline]
    #[must_use]
    pub const fn record_size(self) -> usize {
        match self {
            Self::Unix => 12,
            Self::UnixMinute => 8,
            Self::Compact => 7,
        }
    }
}

/// Immutable codec configuration.
///
/// A `Codec` is a plain value, not a registry: every call names its
/// configuration explicitly, so concurrent use across different modes needs
/// no coordination. All records in one stream must use the same codec; there
/// is no per-record mode tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codec {
    mode: TimeMode,
}

impl Codec {
    /// Create a codec for the given mode
    #[inline]
    #[must_use]
    pub const fn new(mode: TimeMode) -> Self {
        Self { mode }
    }

    /// The mode this codec encodes and decodes
    #[inline]
    #[must_use]
    pub const fn mode(self) -> TimeMode {
        self.mode
    }

    /// Fixed encoded size of one record
    #[inline]
    #[must_use]
    pub const fn record_size(self) -> usize {
        self.mode.record_size()
    }

    /// Encode one record to a freshly allocated buffer.
    ///
    /// The output length always equals [`Codec::record_size`]. Field values
    /// wider than their wire field are masked down, never rejected; use
    /// [`Codec::encode_checked`] to surface range errors instead.
    #[must_use]
    pub fn encode(self, record: &Record) -> Vec<u8> {
        let mut buf = vec![0u8; self.record_size()];
        encoder::encode_record(self.mode, record, &mut buf);
        buf
    }

    /// Encode one record into the front of a caller-provided buffer.
    ///
    /// Returns the number of bytes written, which always equals
    /// [`Codec::record_size`].
    ///
    /// # Errors
    /// Returns [`EncodeError::BufferTooSmall`] if `buf` is shorter than the
    /// mode's record size.
    pub fn encode_into(self, record: &Record, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let size = self.record_size();
        if buf.len() < size {
            return Err(EncodeError::BufferTooSmall {
                expected: size,
                actual: buf.len(),
            });
        }
        encoder::encode_record(self.mode, record, &mut buf[..size]);
        Ok(size)
    }

    /// Encode one record, rejecting values the mode cannot represent.
    ///
    /// The hardened variant of [`Codec::encode`]: instead of masking, any
    /// field value outside its wire field's legal range is reported.
    ///
    /// # Errors
    /// Returns [`EncodeError::FieldOutOfRange`] naming the offending field
    /// and its legal bounds:
    /// - `Compact`: year outside 2025..=2280, or a flour code above 15
    /// - `Unix`: timestamp before the 1970 epoch
    /// - `UnixMinute`: minute counter outside the u32 range
    pub fn encode_checked(self, record: &Record) -> Result<Vec<u8>, EncodeError> {
        encoder::check_ranges(self.mode, record)?;
        Ok(self.encode(record))
    }

    /// Decode one record from the front of `buf`.
    ///
    /// Bytes past the record size are ignored.
    ///
    /// # Errors
    /// - [`DecodeError::InsufficientData`] if `buf` is shorter than the
    ///   mode's record size
    /// - [`DecodeError::InvalidDate`] if compact-mode calendar fields name no
    ///   real instant
    /// - [`DecodeError::TimestampOutOfRange`] if a unix-mode seconds count is
    ///   unrepresentable
    pub fn decode(self, buf: &[u8]) -> Result<Record, DecodeError> {
        decoder::decode_record(self.mode, buf)
    }

    /// Encode a batch of records back to back, fixed width, no framing.
    #[must_use]
    pub fn encode_all(self, records: &[Record]) -> Vec<u8> {
        let size = self.record_size();
        let mut out = vec![0u8; size * records.len()];
        for (record, chunk) in records.iter().zip(out.chunks_exact_mut(size)) {
            encoder::encode_record(self.mode, record, chunk);
        }
        out
    }

    /// Decode a back-to-back batch produced by [`Codec::encode_all`].
    ///
    /// # Errors
    /// Returns [`DecodeError::InsufficientData`] if the input length is not
    /// an exact multiple of the record size, plus any per-record decode error.
    pub fn decode_all(self, buf: &[u8]) -> Result<Vec<Record>, DecodeError> {
        let size = self.record_size();
        if buf.len() % size != 0 {
            return Err(DecodeError::InsufficientData {
                expected: size,
                actual: buf.len() % size,
            });
        }
        buf.chunks_exact(size)
            .map(|chunk| decoder::decode_record(self.mode, chunk))
            .collect()
    }
}

impl Default for Codec {
    /// The compact mode, the densest layout
    fn default() -> Self {
        Self::new(TimeMode::Compact)
    }
}
