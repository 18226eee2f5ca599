//! Block descriptor word (BDW) codec.
//!
//! A BDW is four bytes describing a physical block. Bit 0 of byte 0 is the
//! extension flag. With the flag clear the BDW is nonextended: the low 7
//! bits of byte 0 and byte 1 form a 15-bit big-endian block length, and
//! bytes 2–3 are conventionally zero. With the flag set the BDW is
//! extended: the low 7 bits of byte 0 and bytes 1–3 form a 31-bit
//! big-endian block length.
//!
//! The nonextended ceiling is 32760 — the record descriptor word maximum,
//! a cross-structure convention — rather than the 32767 the field could
//! physically hold. Extended mode has no ceiling below the field width.

use crate::{
    error::DescriptorWordError,
    view::{DESCRIPTOR_WORD_LEN, DescriptorView},
};

/// Largest valid block length in nonextended mode, header included.
///
/// Deliberately the RDW maximum, not the raw 15-bit capacity.
pub const MAX_NONEXTENDED_LENGTH: u32 = 32_760;

/// Largest valid block length in extended mode: the 31-bit field width.
pub const MAX_EXTENDED_LENGTH: u32 = 0x7FFF_FFFF;

/// Smallest valid block length: a header with an empty payload.
pub const MIN_BLOCK_LENGTH: u32 = DESCRIPTOR_WORD_LEN as u32;

const EXTENSION_BIT: u8 = 0x80;

fn check_block_length(length: u32, extended: bool) -> Result<(), DescriptorWordError> {
    let max = if extended {
        MAX_EXTENDED_LENGTH
    } else {
        MAX_NONEXTENDED_LENGTH
    };
    if length < MIN_BLOCK_LENGTH || length > max {
        return Err(DescriptorWordError::LengthOutOfRange {
            length,
            min: MIN_BLOCK_LENGTH,
            max,
        });
    }
    Ok(())
}

/// Decodes the extension flag from the top bit of byte 0.
///
/// # Errors
///
/// [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn decode_extension_flag(view: &DescriptorView<'_>) -> Result<bool, DescriptorWordError> {
    Ok(view.byte_at(0)? & EXTENSION_BIT != 0)
}

/// Decodes the block length in whichever mode the extension flag selects.
///
/// # Errors
///
/// [`DescriptorWordError::LengthOutOfRange`] unless the decoded value lies
/// in `[4, 32760]` (nonextended) or is at least 4 (extended);
/// [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn decode_length(view: &DescriptorView<'_>) -> Result<u32, DescriptorWordError> {
    let first = view.byte_at(0)?;
    let length = if first & EXTENSION_BIT == 0 {
        u32::from(u16::from_be_bytes([first & 0x7F, view.byte_at(1)?]))
    } else {
        u32::from_be_bytes([
            first & 0x7F,
            view.byte_at(1)?,
            view.byte_at(2)?,
            view.byte_at(3)?,
        ])
    };
    check_block_length(length, first & EXTENSION_BIT != 0)?;
    Ok(length)
}

/// Encodes `length` in the requested mode.
///
/// Extended mode writes all four bytes with the extension bit set.
/// Nonextended mode writes bytes 0–1 with the extension bit clear and
/// leaves bytes 2–3 untouched; callers wanting a fresh four-byte field
/// should zero them beforehand.
///
/// # Errors
///
/// [`DescriptorWordError::LengthOutOfRange`] unless `length` lies in
/// `[4, 32760]` (nonextended) or `[4, 0x7FFF_FFFF]` (extended);
/// [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn encode_length(
    view: &mut DescriptorView<'_>,
    length: u32,
    extended: bool,
) -> Result<(), DescriptorWordError> {
    check_block_length(length, extended)?;
    if extended {
        let bytes = length.to_be_bytes();
        view.set_byte_at(0, bytes[0] | EXTENSION_BIT)?;
        view.set_byte_at(1, bytes[1])?;
        view.set_byte_at(2, bytes[2])?;
        view.set_byte_at(3, bytes[3])?;
    } else {
        #[allow(clippy::cast_possible_truncation)] // bounded by MAX_NONEXTENDED_LENGTH
        let [hi, lo] = (length as u16).to_be_bytes();
        view.set_byte_at(0, hi & !EXTENSION_BIT)?;
        view.set_byte_at(1, lo)?;
    }
    Ok(())
}
