//! Record struct for one feeding-event measurement.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::flour::FlourType;

/// One feeding-event measurement.
///
/// A record is a plain value: it is passed by copy into encode and produced
/// by value from decode, with no ownership relationships.
///
/// `time` is interpreted as UTC and is expected to be truncated to minute
/// granularity by the caller. The `Unix` mode preserves whatever seconds the
/// input carries; the other two modes drop sub-minute precision on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the feeding happened, minute granularity
    pub time: NaiveDateTime,
    /// Grams of existing starter kept
    pub starter_grams: u8,
    /// Grams of fresh flour added
    pub flour_grams: u8,
    /// Grams of water added
    pub water_grams: u8,
    /// Category of flour used
    pub flour_type: FlourType,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:3}g starter + {:3}g water + {:3}g {} flour",
            self.time.format("%Y-%m-%d %H:%M:%S"),
            self.starter_grams,
            self.water_grams,
            self.flour_grams,
            self.flour_type,
        )
    }
}
