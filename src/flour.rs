//! Flour type enumeration and its wire codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of flour used for a feeding.
///
/// The compact layout reserves four bits for the flour type, so at most
/// sixteen categories can ever exist on the wire. Codes without a named
/// variant decode to [`FlourType::Unrecognized`], which keeps the raw code so
/// records written by a newer producer survive a round trip through an older
/// reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlourType {
    /// Code 0, the explicit "don't know" variant
    #[default]
    Unknown,
    /// Code 1
    AllPurpose,
    /// Code 2
    WholeWheat,
    /// Code 3
    Rye,
    /// Code 4
    Bread,
    /// Any code without a named variant, kept verbatim.
    ///
    /// Only produced by [`FlourType::from_code`] for codes 5 and above;
    /// constructing `Unrecognized(0..=4)` by hand aliases a named variant.
    Unrecognized(u8),
}

impl FlourType {
    /// Highest code the compact layout's four-bit field can hold
    pub const MAX_COMPACT_CODE: u8 = 15;

    /// Wire code for this flour type
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::AllPurpose => 1,
            Self::WholeWheat => 2,
            Self::Rye => 3,
            Self::Bread => 4,
            Self::Unrecognized(code) => code,
        }
    }

    /// Map a wire code back to a flour type
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::AllPurpose,
            2 => Self::WholeWheat,
            3 => Self::Rye,
            4 => Self::Bread,
            other => Self::Unrecognized(other),
        }
    }
}

impl fmt::Display for FlourType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AllPurpose => "All Purpose",
            Self::WholeWheat => "Whole Wheat",
            Self::Rye => "Rye",
            Self::Bread => "Bread",
            Self::Unknown | Self::Unrecognized(_) => "Unknown/Invalid",
        };
        f.write_str(name)
    }
}
