use core::fmt;

use crate::BLOCK_BYTES;

/// Result alias for the fallible conversions in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned when building a [`Block`](crate::Block) from untrusted input.
///
/// Compression itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A byte slice was not exactly one block long.
    InvalidLength { len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "invalid block length: expected {BLOCK_BYTES} bytes, got {len}")
            }
        }
    }
}

impl core::error::Error for Error {}
