use thiserror::Error;

/// Errors reported by cipherers, hashers and algorithm descriptors.
///
/// Every variant is a programming error on the caller's side and is
/// reported at the offending call. None of them is transient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The key does not have the length the algorithm requires.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Length required by the algorithm.
        expected: usize,
        /// Length of the key that was supplied.
        actual: usize,
    },
    /// A block cipher was given data that is not a whole number of blocks.
    #[error("data length {len} is not a multiple of the {block_len}-byte block length")]
    InvalidBlockLength {
        /// Block length of the algorithm.
        block_len: usize,
        /// Length of the data that was supplied.
        len: usize,
    },
    /// The instance was zeroized and can no longer be used.
    #[error("already zeroized")]
    AlreadyZeroized,
    /// An offset/length pair does not lie inside the buffer.
    #[error("range of {len} bytes at offset {off} is out of bounds for a {buf_len}-byte buffer")]
    OutOfBounds {
        /// Length of the buffer.
        buf_len: usize,
        /// Requested offset.
        off: usize,
        /// Requested length.
        len: usize,
    },
    /// Algorithm parameters are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    /// A textual digest is not valid hexadecimal of even length.
    #[error("invalid hexadecimal string")]
    InvalidHex,
}

/// Result type used across the framework.
pub type Result<T> = core::result::Result<T, Error>;
