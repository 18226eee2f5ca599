//! Record/segment descriptor word (RDW/SDW) codec.
//!
//! An RDW is four bytes. Bytes 0–1 hold the segment length as a big-endian
//! unsigned integer, inclusive of the header itself, at most 32760. Byte 2
//! holds the segmentation code describing the segment's place within a
//! logical record. Byte 3 is reserved for future use and conventionally
//! zero. When a record is spanned across several segments the same layout
//! frames each segment and is then called an SDW.
//!
//! Length and code are validated strictly on both read and write so a
//! malformed header is caught before any payload is interpreted. The
//! reserved byte is only ever checked through the advisory
//! [`is_reserved_byte_valid`] predicate.
//!
//! # Examples
//!
//! ```
//! use zrecfm::{DescriptorView, SegmentationCode, rdw};
//!
//! let mut header = [0u8; 4];
//! let mut view = DescriptorView::bound(&mut header, 0)?;
//! rdw::encode_length(&mut view, 255)?;
//! rdw::encode_segmentation_code(&mut view, SegmentationCode::CompleteRecord)?;
//! rdw::write_reserved_zero(&mut view)?;
//! assert_eq!(header, [0x00, 0xFF, 0x00, 0x00]);
//! # Ok::<(), zrecfm::DescriptorWordError>(())
//! ```

use crate::{
    error::DescriptorWordError,
    view::{DESCRIPTOR_WORD_LEN, DescriptorView},
};

/// Largest valid segment length, header included.
pub const MAX_SEGMENT_LENGTH: u16 = 32_760;

/// Smallest valid segment length: a header with an empty payload.
pub const MIN_SEGMENT_LENGTH: u16 = DESCRIPTOR_WORD_LEN as u16;

/// Position of a segment within a logical record.
///
/// A record either stands alone as [`CompleteRecord`](Self::CompleteRecord)
/// or is spanned as the run `FirstSegment, OtherSegment*, LastSegment`.
/// The codec validates single codes only; sequencing across headers is the
/// reading side's protocol to enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentationCode {
    /// `0x00`: a complete logical record.
    CompleteRecord,
    /// `0x01`: the first segment of a spanned record.
    FirstSegment,
    /// `0x02`: the last segment of a spanned record.
    LastSegment,
    /// `0x03`: a segment other than the first or last.
    OtherSegment,
}

impl SegmentationCode {
    /// Maps a wire byte to its code.
    ///
    /// # Errors
    ///
    /// [`DescriptorWordError::InvalidCode`] for any byte outside
    /// `0x00..=0x03`.
    pub const fn from_byte(code: u8) -> Result<Self, DescriptorWordError> {
        match code {
            0x00 => Ok(Self::CompleteRecord),
            0x01 => Ok(Self::FirstSegment),
            0x02 => Ok(Self::LastSegment),
            0x03 => Ok(Self::OtherSegment),
            _ => Err(DescriptorWordError::InvalidCode { code }),
        }
    }

    /// The wire byte for this code.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::CompleteRecord => 0x00,
            Self::FirstSegment => 0x01,
            Self::LastSegment => 0x02,
            Self::OtherSegment => 0x03,
        }
    }
}

fn check_segment_length(length: u16) -> Result<(), DescriptorWordError> {
    if length < MIN_SEGMENT_LENGTH || length > MAX_SEGMENT_LENGTH {
        return Err(DescriptorWordError::LengthOutOfRange {
            length: u32::from(length),
            min: u32::from(MIN_SEGMENT_LENGTH),
            max: u32::from(MAX_SEGMENT_LENGTH),
        });
    }
    Ok(())
}

/// Decodes the segment length from bytes 0–1.
///
/// # Errors
///
/// [`DescriptorWordError::LengthOutOfRange`] unless the decoded value lies
/// in `[4, 32760]`; [`DescriptorWordError::UnboundBuffer`] on an unbound
/// view.
pub fn decode_length(view: &DescriptorView<'_>) -> Result<u16, DescriptorWordError> {
    let length = u16::from_be_bytes([view.byte_at(0)?, view.byte_at(1)?]);
    check_segment_length(length)?;
    Ok(length)
}

/// Encodes `length` big-endian into bytes 0–1.
///
/// # Errors
///
/// [`DescriptorWordError::LengthOutOfRange`] unless `length` lies in
/// `[4, 32760]`; [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn encode_length(
    view: &mut DescriptorView<'_>,
    length: u16,
) -> Result<(), DescriptorWordError> {
    check_segment_length(length)?;
    let [hi, lo] = length.to_be_bytes();
    view.set_byte_at(0, hi)?;
    view.set_byte_at(1, lo)?;
    Ok(())
}

/// Decodes the segmentation code from byte 2.
///
/// # Errors
///
/// [`DescriptorWordError::InvalidCode`] for a byte outside `0x00..=0x03`;
/// [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn decode_segmentation_code(
    view: &DescriptorView<'_>,
) -> Result<SegmentationCode, DescriptorWordError> {
    SegmentationCode::from_byte(view.byte_at(2)?)
}

/// Writes the wire byte for `code` into byte 2.
///
/// # Errors
///
/// [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn encode_segmentation_code(
    view: &mut DescriptorView<'_>,
    code: SegmentationCode,
) -> Result<(), DescriptorWordError> {
    view.set_byte_at(2, code.as_byte())
}

/// Whether the reserved byte (byte 3) holds its conventional zero.
///
/// Purely a diagnostic predicate: a nonzero byte yields `Ok(false)`, never
/// an error.
///
/// # Errors
///
/// [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn is_reserved_byte_valid(view: &DescriptorView<'_>) -> Result<bool, DescriptorWordError> {
    Ok(view.byte_at(3)? == 0x00)
}

/// Sets the reserved byte (byte 3) to zero.
///
/// # Errors
///
/// [`DescriptorWordError::UnboundBuffer`] on an unbound view.
pub fn write_reserved_zero(view: &mut DescriptorView<'_>) -> Result<(), DescriptorWordError> {
    view.set_byte_at(3, 0x00)
}
