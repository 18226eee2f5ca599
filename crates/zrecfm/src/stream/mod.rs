//! Framed record and block streams over `std::io`.
//!
//! This module is the consuming side of the descriptor-word contract: a
//! reader pulls one four-byte header from the stream, runs it through the
//! relevant codec, then transfers `length − 4` payload bytes; a writer
//! produces the header for a payload before emitting both. Spanned records
//! are reassembled and segmented here — the codecs themselves never track
//! adjacency between headers, so the valid-run rule
//! (`CompleteRecord` alone, or `FirstSegment, OtherSegment*, LastSegment`)
//! is enforced by [`RecordReader`].
//!
//! The adapters are device-independent: anything implementing
//! [`std::io::Read`] or [`std::io::Write`] will do.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use zrecfm::stream::{RecordReader, RecordWriter};
//!
//! let mut wire = Vec::new();
//! let mut writer = RecordWriter::new(&mut wire);
//! writer.write_record(b"hello")?;
//! writer.write_record(b"world")?;
//!
//! let mut reader = RecordReader::new(Cursor::new(wire));
//! assert_eq!(reader.read_record()?.as_deref(), Some(&b"hello"[..]));
//! assert_eq!(reader.read_record()?.as_deref(), Some(&b"world"[..]));
//! assert_eq!(reader.read_record()?, None);
//! # Ok::<(), zrecfm::stream::StreamError>(())
//! ```

mod options;
mod reader;
mod writer;

use std::io;

use thiserror::Error;

pub use options::{ReaderOptions, WriterOptions};
pub use reader::{Block, BlockReader, RecordReader};
pub use writer::{BlockWriter, RecordWriter};

use crate::{DescriptorWordError, SegmentationCode};

/// Errors produced while reading or writing a framed stream.
#[derive(Error, Debug)]
pub enum StreamError {
    /// The underlying stream failed.
    #[error("stream i/o failed")]
    Io(#[from] io::Error),

    /// A descriptor word could not be decoded or encoded.
    #[error(transparent)]
    DescriptorWord(#[from] DescriptorWordError),

    /// The stream ended inside a header or payload.
    #[error("truncated frame: expected {expected} bytes, got {got}")]
    TruncatedFrame {
        /// Bytes the frame section should have held.
        expected: usize,
        /// Bytes actually available before end of stream.
        got: usize,
    },

    /// A record began with a segment that can only continue one.
    #[error("record begins with segmentation code {found:?}: expected a complete record or first segment")]
    UnexpectedLeadingSegment {
        /// The code that opened the record.
        found: SegmentationCode,
    },

    /// A segment that starts a new record appeared inside an open span.
    #[error("segmentation code {found:?} inside a spanned record: expected a middle or last segment")]
    UnexpectedSpanSegment {
        /// The code found mid-span.
        found: SegmentationCode,
    },

    /// The stream ended before the last segment of a spanned record.
    #[error("stream ended inside a spanned record after {segments} segments")]
    UnterminatedSpannedRecord {
        /// Segments read before the stream ended.
        segments: usize,
    },

    /// A reserved byte was nonzero and the reader was configured to reject
    /// that.
    #[error("nonzero reserved byte {value:#04x} in record descriptor word")]
    ReservedByteNonzero {
        /// The reserved byte's actual value.
        value: u8,
    },
}
