//! Record and block writers.

use std::io::Write;

use super::{StreamError, WriterOptions};
use crate::{DESCRIPTOR_WORD_LEN, DescriptorView, DescriptorWordError, SegmentationCode, bdw, rdw};

// A segment must hold its header plus at least one payload byte, or
// splitting a long record could never make progress.
const MIN_SPLITTABLE_SEGMENT: u16 = rdw::MIN_SEGMENT_LENGTH + 1;

/// Writes logical records as RDW-framed byte streams.
///
/// A record whose framed size fits within the configured maximum segment
/// length is written as a single `CompleteRecord` frame. A longer record is
/// split into a `FirstSegment, OtherSegment*, LastSegment` run of spanned
/// segments. The reserved byte of every header is written as zero.
///
/// # Examples
///
/// ```
/// use zrecfm::stream::RecordWriter;
///
/// let mut wire = Vec::new();
/// let mut writer = RecordWriter::new(&mut wire);
/// writer.write_record(b"hello")?;
/// assert_eq!(wire, [0x00, 0x09, 0x00, 0x00, b'h', b'e', b'l', b'l', b'o']);
/// # Ok::<(), zrecfm::stream::StreamError>(())
/// ```
#[derive(Debug)]
pub struct RecordWriter<W> {
    inner: W,
    options: WriterOptions,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a writer with default options.
    pub fn new(inner: W) -> Self {
        Self::with_options(inner, WriterOptions::default())
    }

    /// Creates a writer with the given options.
    pub fn with_options(inner: W, options: WriterOptions) -> Self {
        Self { inner, options }
    }

    /// Writes one logical record, splitting it into spanned segments when
    /// its framed size exceeds the configured maximum segment length.
    ///
    /// # Errors
    ///
    /// [`StreamError::DescriptorWord`] when the configured maximum segment
    /// length lies outside `[5, 32760]`; [`StreamError::Io`] when the
    /// underlying stream fails.
    pub fn write_record(&mut self, payload: &[u8]) -> Result<(), StreamError> {
        let max = self.options.max_segment_length;
        if max < MIN_SPLITTABLE_SEGMENT || max > rdw::MAX_SEGMENT_LENGTH {
            return Err(DescriptorWordError::LengthOutOfRange {
                length: u32::from(max),
                min: u32::from(MIN_SPLITTABLE_SEGMENT),
                max: u32::from(rdw::MAX_SEGMENT_LENGTH),
            }
            .into());
        }
        let max_payload = usize::from(max) - DESCRIPTOR_WORD_LEN;
        if payload.len() <= max_payload {
            return self.write_segment(SegmentationCode::CompleteRecord, payload);
        }
        let chunks: Vec<&[u8]> = payload.chunks(max_payload).collect();
        let last = chunks.len() - 1;
        for (i, chunk) in chunks.into_iter().enumerate() {
            let code = if i == 0 {
                SegmentationCode::FirstSegment
            } else if i == last {
                SegmentationCode::LastSegment
            } else {
                SegmentationCode::OtherSegment
            };
            self.write_segment(code, chunk)?;
        }
        Ok(())
    }

    fn write_segment(
        &mut self,
        code: SegmentationCode,
        payload: &[u8],
    ) -> Result<(), StreamError> {
        let mut header = [0u8; DESCRIPTOR_WORD_LEN];
        let mut view = DescriptorView::bound(&mut header, 0)?;
        let framed = payload.len() + DESCRIPTOR_WORD_LEN;
        let length =
            u16::try_from(framed).map_err(|_| DescriptorWordError::LengthOutOfRange {
                length: u32::try_from(framed).unwrap_or(u32::MAX),
                min: u32::from(rdw::MIN_SEGMENT_LENGTH),
                max: u32::from(rdw::MAX_SEGMENT_LENGTH),
            })?;
        rdw::encode_length(&mut view, length)?;
        rdw::encode_segmentation_code(&mut view, code)?;
        rdw::write_reserved_zero(&mut view)?;
        self.inner.write_all(&header)?;
        self.inner.write_all(payload)?;
        Ok(())
    }

    /// Flushes the underlying stream.
    ///
    /// # Errors
    ///
    /// [`StreamError::Io`] when the underlying stream fails.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        self.inner.flush().map_err(Into::into)
    }

    /// A reference to the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Writes physical blocks as BDW-framed byte streams.
///
/// The caller chooses the length encoding per block; nonextended headers
/// come out with bytes 2–3 zeroed.
///
/// # Examples
///
/// ```
/// use zrecfm::stream::BlockWriter;
///
/// let mut wire = Vec::new();
/// let mut writer = BlockWriter::new(&mut wire);
/// writer.write_block(&[0xAB; 3], false)?;
/// assert_eq!(wire, [0x00, 0x07, 0x00, 0x00, 0xAB, 0xAB, 0xAB]);
/// # Ok::<(), zrecfm::stream::StreamError>(())
/// ```
#[derive(Debug)]
pub struct BlockWriter<W> {
    inner: W,
}

impl<W: Write> BlockWriter<W> {
    /// Creates a block writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one physical block in the requested length encoding.
    ///
    /// # Errors
    ///
    /// [`StreamError::DescriptorWord`] when the framed size does not fit
    /// the chosen mode; [`StreamError::Io`] when the underlying stream
    /// fails.
    pub fn write_block(&mut self, payload: &[u8], extended: bool) -> Result<(), StreamError> {
        let mut header = [0u8; DESCRIPTOR_WORD_LEN];
        let mut view = DescriptorView::bound(&mut header, 0)?;
        let framed = payload.len() + DESCRIPTOR_WORD_LEN;
        let length =
            u32::try_from(framed).map_err(|_| DescriptorWordError::LengthOutOfRange {
                length: u32::MAX,
                min: bdw::MIN_BLOCK_LENGTH,
                max: bdw::MAX_EXTENDED_LENGTH,
            })?;
        bdw::encode_length(&mut view, length, extended)?;
        self.inner.write_all(&header)?;
        self.inner.write_all(payload)?;
        Ok(())
    }

    /// Flushes the underlying stream.
    ///
    /// # Errors
    ///
    /// [`StreamError::Io`] when the underlying stream fails.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        self.inner.flush().map_err(Into::into)
    }

    /// A reference to the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
