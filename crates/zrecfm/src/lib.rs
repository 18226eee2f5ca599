//! Descriptor-word codecs for mainframe-style variable record formats.
//!
//! Sequential files in the variable record formats (`RECFM=V`, `VB`, `VBS`)
//! frame every logical record or segment with a four-byte record descriptor
//! word (RDW, called SDW when the record is spanned) and every physical
//! block with a four-byte block descriptor word (BDW). This crate decodes
//! and encodes those two headers bit-exactly, with strict validation of
//! lengths and segmentation codes.
//!
//! The codecs operate in place over a [`DescriptorView`]: a borrowed
//! four-byte window into a caller-owned buffer. The view copies nothing and
//! allocates nothing; every operation is a constant-time transformation of
//! the bytes under the window. The [`stream`] module (feature `std`, on by
//! default) layers record and block readers and writers over any
//! [`std::io::Read`]/[`std::io::Write`] stream, including spanned-record
//! reassembly and segmentation.
//!
//! # Examples
//!
//! ```
//! use zrecfm::{DescriptorView, SegmentationCode, rdw};
//!
//! let mut header = [0x00, 0xFF, 0x00, 0x00];
//! let view = DescriptorView::bound(&mut header, 0)?;
//! assert_eq!(rdw::decode_length(&view)?, 255);
//! assert_eq!(
//!     rdw::decode_segmentation_code(&view)?,
//!     SegmentationCode::CompleteRecord
//! );
//! assert!(rdw::is_reserved_byte_valid(&view)?);
//! # Ok::<(), zrecfm::DescriptorWordError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bdw;
mod error;
pub mod rdw;
#[cfg(feature = "std")]
pub mod stream;
mod view;

#[cfg(test)]
mod tests;

pub use error::DescriptorWordError;
pub use rdw::SegmentationCode;
pub use view::{DESCRIPTOR_WORD_LEN, DescriptorView};
