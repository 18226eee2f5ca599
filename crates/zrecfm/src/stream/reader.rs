//! Record and block readers.

use std::io::{self, Read};

use super::{ReaderOptions, StreamError};
use crate::{DESCRIPTOR_WORD_LEN, DescriptorView, SegmentationCode, bdw, rdw};

/// Fills `buf` from the stream.
///
/// At a frame boundary a clean end of stream before the first byte returns
/// `false`; any later shortfall is a truncated frame.
fn read_frame<R: Read>(
    inner: &mut R,
    buf: &mut [u8],
    at_boundary: bool,
) -> Result<bool, StreamError> {
    let mut filled = 0;
    while filled < buf.len() {
        match inner.read(&mut buf[filled..]) {
            Ok(0) => {
                if at_boundary && filled == 0 {
                    return Ok(false);
                }
                return Err(StreamError::TruncatedFrame {
                    expected: buf.len(),
                    got: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(true)
}

/// Reads RDW-framed logical records from a byte stream.
///
/// Each call to [`read_record`](Self::read_record) consumes one complete
/// record: either a single `CompleteRecord` frame or a
/// `FirstSegment, OtherSegment*, LastSegment` run whose payloads are
/// concatenated into one logical record. Any other segment adjacency is a
/// protocol violation and fails the read.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use zrecfm::stream::RecordReader;
///
/// // length 9, complete record, reserved zero, then five payload bytes
/// let wire = [0x00, 0x09, 0x00, 0x00, b'h', b'e', b'l', b'l', b'o'];
/// let mut reader = RecordReader::new(Cursor::new(wire));
/// assert_eq!(reader.read_record()?.as_deref(), Some(&b"hello"[..]));
/// assert_eq!(reader.read_record()?, None);
/// # Ok::<(), zrecfm::stream::StreamError>(())
/// ```
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    options: ReaderOptions,
}

impl<R: Read> RecordReader<R> {
    /// Creates a reader with default options.
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, ReaderOptions::default())
    }

    /// Creates a reader with the given options.
    pub fn with_options(inner: R, options: ReaderOptions) -> Self {
        Self { inner, options }
    }

    /// Reads the next logical record, reassembling spanned runs.
    ///
    /// Returns `Ok(None)` at a clean end of stream.
    ///
    /// # Errors
    ///
    /// [`StreamError::TruncatedFrame`] when the stream ends inside a header
    /// or payload; [`StreamError::UnexpectedLeadingSegment`],
    /// [`StreamError::UnexpectedSpanSegment`] and
    /// [`StreamError::UnterminatedSpannedRecord`] on segment-sequence
    /// violations; [`StreamError::DescriptorWord`] when a header itself is
    /// malformed; [`StreamError::Io`] when the underlying stream fails.
    pub fn read_record(&mut self) -> Result<Option<Vec<u8>>, StreamError> {
        let Some((code, mut payload)) = self.read_segment()? else {
            return Ok(None);
        };
        match code {
            SegmentationCode::CompleteRecord => Ok(Some(payload)),
            SegmentationCode::FirstSegment => {
                let mut segments = 1usize;
                loop {
                    let Some((code, rest)) = self.read_segment()? else {
                        return Err(StreamError::UnterminatedSpannedRecord { segments });
                    };
                    segments += 1;
                    payload.extend_from_slice(&rest);
                    match code {
                        SegmentationCode::OtherSegment => {}
                        SegmentationCode::LastSegment => return Ok(Some(payload)),
                        SegmentationCode::CompleteRecord | SegmentationCode::FirstSegment => {
                            return Err(StreamError::UnexpectedSpanSegment { found: code });
                        }
                    }
                }
            }
            SegmentationCode::LastSegment | SegmentationCode::OtherSegment => {
                Err(StreamError::UnexpectedLeadingSegment { found: code })
            }
        }
    }

    /// Reads one segment: header plus payload. `None` at a clean end of
    /// stream.
    fn read_segment(&mut self) -> Result<Option<(SegmentationCode, Vec<u8>)>, StreamError> {
        let mut header = [0u8; DESCRIPTOR_WORD_LEN];
        if !read_frame(&mut self.inner, &mut header, true)? {
            return Ok(None);
        }
        let view = DescriptorView::bound(&mut header, 0)?;
        let length = rdw::decode_length(&view)?;
        let code = rdw::decode_segmentation_code(&view)?;
        if self.options.enforce_reserved_byte && !rdw::is_reserved_byte_valid(&view)? {
            return Err(StreamError::ReservedByteNonzero {
                value: view.byte_at(3)?,
            });
        }
        let mut payload = vec![0u8; usize::from(length) - DESCRIPTOR_WORD_LEN];
        read_frame(&mut self.inner, &mut payload, false)?;
        Ok(Some((code, payload)))
    }

    /// A reference to the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// A physical block read from a BDW-framed stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The bytes following the four-byte BDW.
    pub payload: Vec<u8>,
    /// Whether the block used the extended (31-bit) length encoding.
    pub extended: bool,
}

/// Reads BDW-framed physical blocks from a byte stream.
///
/// An extended BDW can claim a payload of up to 2 GiB, and the reader
/// allocates for whatever the header claims; callers consuming untrusted
/// data should bound the source stream.
#[derive(Debug)]
pub struct BlockReader<R> {
    inner: R,
}

impl<R: Read> BlockReader<R> {
    /// Creates a block reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next physical block.
    ///
    /// Returns `Ok(None)` at a clean end of stream.
    ///
    /// # Errors
    ///
    /// [`StreamError::TruncatedFrame`] when the stream ends inside the
    /// header or payload; [`StreamError::DescriptorWord`] when the header
    /// is malformed; [`StreamError::Io`] when the underlying stream fails.
    pub fn read_block(&mut self) -> Result<Option<Block>, StreamError> {
        let mut header = [0u8; DESCRIPTOR_WORD_LEN];
        if !read_frame(&mut self.inner, &mut header, true)? {
            return Ok(None);
        }
        let view = DescriptorView::bound(&mut header, 0)?;
        let extended = bdw::decode_extension_flag(&view)?;
        let length = bdw::decode_length(&view)?;
        #[allow(clippy::cast_possible_truncation)] // 31-bit length
        let mut payload = vec![0u8; length as usize - DESCRIPTOR_WORD_LEN];
        read_frame(&mut self.inner, &mut payload, false)?;
        Ok(Some(Block { payload, extended }))
    }

    /// A reference to the underlying stream.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the reader, returning the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
