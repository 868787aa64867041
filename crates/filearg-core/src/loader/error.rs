//! Load failure type.

use std::path::PathBuf;

use thiserror::Error;

use crate::seek::SeekError;

/// Why a load produced no buffer. Loads are all-or-nothing: every variant
/// means the partial accumulator was dropped.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Positioning at the range start (or tail) failed.
    #[error(transparent)]
    Seek(#[from] SeekError),

    /// The stream reported an I/O error while reading.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    /// Content would grow past the load size limit.
    #[error("content exceeds the load limit of {limit} bytes")]
    CapacityExceeded { limit: usize },

    /// Range flags disagree with the populated bounds, a bound is negative,
    /// or `end` lies before `start`.
    #[error("invalid range (start {start:?}, end {end:?})")]
    InvalidRange {
        start: Option<i64>,
        end: Option<i64>,
    },

    /// The filename ends in something that reads as a range but does not
    /// parse, and the reject policy is active.
    #[error("malformed range suffix in '{0}'")]
    MalformedRangeSuffix(String),

    /// A range was requested on standard input, which cannot seek.
    #[error("a range cannot be applied to standard input")]
    UnseekableRange,

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
