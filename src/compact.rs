//! Bit packing for the compact timestamp layout.
//!
//! Four bytes hold six fields with no padding:
//! year offset (8) | month (4) | day (5) | hour (5) | minute (6) | flour (4)
//!
//! Byte boundaries do not align with field boundaries: day straddles bytes 1
//! and 2 of the packed area, minute straddles bytes 2 and 3. Each field gets a
//! named pack/unpack helper pair here so the shift/mask arithmetic stays
//! auditable; the encoder and decoder only OR the contributions together.
//!
//! Every pack helper masks its input to the field width first, so values wider
//! than the field are silently truncated. That is the documented baseline
//! contract; range rejection lives in the checked encode path instead.

/// Epoch year for the compact layout. Distinct from the 1970 epoch of the
/// unix modes, and part of the wire format.
pub(crate) const EPOCH_YEAR: i32 = 2025;

/// Size of the packed date/time/flour area in bytes
pub(crate) const PACKED_SIZE: usize = 4;

/// Year is stored as an offset from [`EPOCH_YEAR`], filling packed byte 0.
#[inline]
pub(crate) fn pack_year(year: i32) -> u8 {
    year.wrapping_sub(EPOCH_YEAR) as u8
}

#[inline]
pub(crate) fn unpack_year(byte: u8) -> i32 {
    i32::from(byte) + EPOCH_YEAR
}

/// Month fills the top four bits of packed byte 1.
#[inline]
pub(crate) fn pack_month(month: u32) -> u8 {
    ((month as u8) & 0b0000_1111) << 4
}

#[inline]
pub(crate) fn unpack_month(byte: u8) -> u32 {
    u32::from(byte >> 4)
}

/// Day is five bits split across packed bytes 1 and 2: the top four bits land
/// in the bottom nibble of byte 1, the last bit in the top bit of byte 2.
#[inline]
pub(crate) fn pack_day(day: u32) -> (u8, u8) {
    let day = day as u8;
    let hi = (day & 0b000_1111_0) >> 1;
    let lo = (day & 0b0000_000_1) << 7;
    (hi, lo)
}

#[inline]
pub(crate) fn unpack_day(byte1: u8, byte2: u8) -> u32 {
    let hi = (byte1 << 1) & 0b000_1111_0;
    let lo = (byte2 >> 7) & 0b0000_000_1;
    u32::from(hi | lo)
}

/// Hour is five bits in the middle of packed byte 2.
#[inline]
pub(crate) fn pack_hour(hour: u32) -> u8 {
    ((hour as u8) & 0b000_11111) << 2
}

#[inline]
pub(crate) fn unpack_hour(byte: u8) -> u32 {
    u32::from((byte >> 2) & 0b000_11111)
}

/// Minute is six bits split across packed bytes 2 and 3: the top two bits land
/// in the bottom of byte 2, the remaining four in the top nibble of byte 3.
#[inline]
pub(crate) fn pack_minute(minute: u32) -> (u8, u8) {
    let minute = minute as u8;
    let hi = (minute & 0b00_11_0000) >> 4;
    let lo = (minute & 0b00_00_1111) << 4;
    (hi, lo)
}

#[inline]
pub(crate) fn unpack_minute(byte2: u8, byte3: u8) -> u32 {
    let hi = (byte2 << 4) & 0b00_11_0000;
    let lo = (byte3 >> 4) & 0b00_00_1111;
    u32::from(hi | lo)
}

/// Flour type takes the leftover four bits at the bottom of packed byte 3.
#[inline]
pub(crate) fn pack_flour(code: u8) -> u8 {
    code & 0b0000_1111
}

#[inline]
pub(crate) fn unpack_flour(byte: u8) -> u8 {
    byte & 0b0000_1111
}

/// Assemble the full packed area from field values.
#[inline]
pub(crate) fn pack(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    flour_code: u8,
) -> [u8; PACKED_SIZE] {
    let (day_hi, day_lo) = pack_day(day);
    let (minute_hi, minute_lo) = pack_minute(minute);
    [
        pack_year(year),
        pack_month(month) | day_hi,
        day_lo | pack_hour(hour) | minute_hi,
        minute_lo | pack_flour(flour_code),
    ]
}
