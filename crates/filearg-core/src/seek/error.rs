//! Seek failure type.

use thiserror::Error;

/// Failure to position a stream at a requested offset.
#[derive(Debug, Error)]
pub enum SeekError {
    /// The underlying stream refused to seek or read.
    #[error("seek failed: {0}")]
    Io(#[from] std::io::Error),

    /// The walk ran out of input (or the target was negative) before reaching
    /// the requested logical offset.
    #[error("seek target {target} out of range (reached {reached})")]
    OutOfRange { target: i64, reached: i64 },
}
