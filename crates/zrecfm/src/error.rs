use thiserror::Error;

/// Errors produced while binding a descriptor view or transcoding a
/// descriptor word.
///
/// Every variant signals either programmer misuse or corrupt input, never a
/// transient condition: there is nothing to retry. The codec reports the
/// error immediately and leaves recovery policy (skip, abort, log) to the
/// caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorWordError {
    /// An operation was attempted on a view with no bound buffer.
    #[error("no buffer has been bound to the descriptor view")]
    UnboundBuffer,

    /// A bind was attempted on a buffer that cannot provide the four
    /// descriptor bytes starting at the requested offset.
    #[error("buffer of {len} bytes cannot hold a descriptor word at offset {offset}")]
    BufferTooSmall {
        /// Total length of the rejected buffer.
        len: usize,
        /// Offset at which the descriptor word was to start.
        offset: usize,
    },

    /// A decoded or to-be-encoded length lies outside the range valid for
    /// the structure and mode.
    #[error("invalid segment length {length}: length must be in the range [{min}, {max}]")]
    LengthOutOfRange {
        /// The offending length.
        length: u32,
        /// Smallest acceptable length, header included.
        min: u32,
        /// Largest acceptable length, header included.
        max: u32,
    },

    /// A segmentation-code byte is none of the four legal values.
    #[error("invalid code {code:#04x}: valid values are [0x00, 0x01, 0x02, 0x03]")]
    InvalidCode {
        /// The offending byte.
        code: u8,
    },
}
