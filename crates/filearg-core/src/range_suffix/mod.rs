//! Range suffix on file arguments.
//!
//! A file argument may end in `!start-end`, `!start-` or `!-end` to request a
//! slice of the file instead of all of it. Parsing never touches the
//! filesystem; the result carries the range plus the name to open.

mod parse;

use serde::Serialize;

pub use parse::{looks_like_range, parse_range_suffix};

/// Which fields of a [`RangeSpec`] are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeFlags {
    #[default]
    None,
    Start,
    End,
    Both,
}

/// Requested byte range. `start` is an offset from the beginning of the file;
/// `end` is either the inclusive last offset (with `start`) or a count of
/// trailing characters (alone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RangeSpec {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl RangeSpec {
    /// Flags describing which fields are set.
    pub fn flags(&self) -> RangeFlags {
        match (self.start, self.end) {
            (None, None) => RangeFlags::None,
            (Some(_), None) => RangeFlags::Start,
            (None, Some(_)) => RangeFlags::End,
            (Some(_), Some(_)) => RangeFlags::Both,
        }
    }

    /// Number of bytes covered by a `start-end` range (`end - start + 1`).
    ///
    /// Returns `None` unless both bounds are set, `end >= start`, and the
    /// length fits in an `i64`.
    pub fn byte_len(&self) -> Option<i64> {
        let (start, end) = (self.start?, self.end?);
        if end < start {
            return None;
        }
        end.checked_sub(start)?.checked_add(1)
    }
}

/// Result of scanning a filename for a range suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSuffix {
    pub flags: RangeFlags,
    pub spec: RangeSpec,
    /// The filename after parsing. Only the `start-end` form removes the
    /// suffix here; single-bound forms keep it.
    pub filename: String,
    #[serde(skip)]
    open_len: usize,
}

impl RangeSuffix {
    /// A result with no range and the filename untouched.
    pub(crate) fn unranged(filename: &str) -> Self {
        Self {
            flags: RangeFlags::None,
            spec: RangeSpec::default(),
            filename: filename.to_string(),
            open_len: filename.len(),
        }
    }

    /// Path to open on disk: the filename with any recognized suffix removed.
    pub fn open_path(&self) -> &str {
        &self.filename[..self.open_len]
    }

    pub fn has_range(&self) -> bool {
        self.flags != RangeFlags::None
    }
}
