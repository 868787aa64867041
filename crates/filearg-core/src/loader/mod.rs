//! Bounded stream loading.
//!
//! Applies an optional [`RangeSpec`] to a seekable stream and reads what
//! remains into a capped buffer, either verbatim ("memory" mode) or with
//! line terminators removed ("string" mode).

mod accum;
mod error;
mod file;
mod strip;

use std::io::{ErrorKind, Read, Seek};

use crate::config::{FileargConfig, RangeSuffixPolicy};
use crate::range_suffix::{RangeFlags, RangeSpec};
use crate::seek::{seek_to, LogicalCounter, SeekAnchor, SeekMode};

pub use accum::AccumBuffer;
pub use error::LoadError;
pub use file::STDIN_NAME;
pub use strip::strip_terminators;

/// Bytes requested from the stream per read.
pub const CHUNK_SIZE: usize = 4096;

/// Default upper bound on loaded content, shared by both load modes.
pub const MAX_FILE_LOAD_SIZE: usize = 1024 * 1024 * 1024;

/// Output transformation applied while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Keep every byte.
    PreserveBytes,
    /// Drop CR, LF and NUL bytes.
    StripTerminators,
}

/// Knobs for a [`Loader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Largest buffer a load may produce.
    pub max_size: usize,
    /// Position string-mode loads by logical characters (CRLF = 1).
    pub text_mode_seek: bool,
    /// What to do with a suffix that looks like a range but does not parse.
    pub range_suffix: RangeSuffixPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_LOAD_SIZE,
            text_mode_seek: true,
            range_suffix: RangeSuffixPolicy::Ignore,
        }
    }
}

impl From<&FileargConfig> for LoadOptions {
    fn from(cfg: &FileargConfig) -> Self {
        Self {
            max_size: cfg.max_load_size,
            text_mode_seek: cfg.text_mode_seek,
            range_suffix: cfg.range_suffix,
        }
    }
}

/// Where to position before reading and how much to read afterwards.
struct ReadPlan {
    seek: Option<(i64, SeekAnchor)>,
    cap: Option<u64>,
}

impl ReadPlan {
    /// Validates the range without touching the stream.
    fn new(flags: RangeFlags, spec: &RangeSpec) -> Result<Self, LoadError> {
        let invalid = || LoadError::InvalidRange {
            start: spec.start,
            end: spec.end,
        };
        let plan = match (flags, spec.start, spec.end) {
            (RangeFlags::None, _, _) => ReadPlan {
                seek: None,
                cap: None,
            },
            (RangeFlags::Start, Some(start), _) if start >= 0 => ReadPlan {
                seek: Some((start, SeekAnchor::FromStart)),
                cap: None,
            },
            (RangeFlags::End, _, Some(end)) if end >= 0 => ReadPlan {
                seek: Some((-end, SeekAnchor::FromEnd)),
                cap: None,
            },
            (RangeFlags::Both, Some(start), Some(_)) if start >= 0 => {
                let len = spec.byte_len().ok_or_else(invalid)?;
                ReadPlan {
                    seek: Some((start, SeekAnchor::FromStart)),
                    cap: Some(len as u64),
                }
            }
            _ => return Err(invalid()),
        };
        Ok(plan)
    }
}

/// Loads file arguments into memory under a fixed size limit.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    opts: LoadOptions,
}

impl Loader {
    pub fn new(opts: LoadOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.opts
    }

    /// Applies the range described by `flags`/`spec`, then reads the rest of
    /// `stream` (or `end - start + 1` units for a two-sided range, counted in
    /// the same units as the seek).
    ///
    /// The stream is borrowed; it is left positioned wherever reading
    /// stopped. On error nothing is returned and the partial buffer is freed.
    pub fn load<S: Read + Seek>(
        &self,
        stream: &mut S,
        flags: RangeFlags,
        spec: &RangeSpec,
        mode: LoadMode,
    ) -> Result<Vec<u8>, LoadError> {
        self.load_chunked(stream, flags, spec, mode, CHUNK_SIZE)
    }

    /// Reads all of `reader` without any range; works on pipes and stdin.
    pub fn load_unranged<R: Read>(&self, reader: &mut R, mode: LoadMode) -> Result<Vec<u8>, LoadError> {
        self.read_into(reader, None, SeekMode::ByteExact, mode, CHUNK_SIZE)
    }

    pub(crate) fn load_chunked<S: Read + Seek>(
        &self,
        stream: &mut S,
        flags: RangeFlags,
        spec: &RangeSpec,
        mode: LoadMode,
        chunk_size: usize,
    ) -> Result<Vec<u8>, LoadError> {
        let plan = ReadPlan::new(flags, spec)?;
        let units = self.seek_mode(mode);
        if let Some((offset, anchor)) = plan.seek {
            seek_to(stream, offset, anchor, units)?;
        }
        self.read_into(stream, plan.cap, units, mode, chunk_size)
    }

    /// String-mode loads count offsets in logical characters unless
    /// text-mode seeking is turned off.
    fn seek_mode(&self, mode: LoadMode) -> SeekMode {
        match mode {
            LoadMode::StripTerminators if self.opts.text_mode_seek => SeekMode::Logical,
            _ => SeekMode::ByteExact,
        }
    }

    fn read_into<R: Read>(
        &self,
        reader: &mut R,
        cap: Option<u64>,
        units: SeekMode,
        mode: LoadMode,
        chunk_size: usize,
    ) -> Result<Vec<u8>, LoadError> {
        let mut acc = AccumBuffer::new(self.opts.max_size);
        let mut chunk = vec![0u8; chunk_size];
        let mut remaining = cap;
        let mut counter = LogicalCounter::default();

        loop {
            let want = match remaining {
                Some(0) => break,
                Some(r) => r.min(chunk_size as u64) as usize,
                None => chunk_size,
            };
            let n = match reader.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(LoadError::Read(e)),
            };
            // A logical character is at least one byte, so `n <= r` keeps
            // the logical count within `r` as well.
            if let Some(r) = remaining.as_mut() {
                *r -= match units {
                    SeekMode::ByteExact => n as u64,
                    SeekMode::Logical => counter.count(&chunk[..n]),
                };
            }

            match mode {
                LoadMode::PreserveBytes => acc.push(&chunk[..n])?,
                LoadMode::StripTerminators => strip::append_stripped(&mut acc, &chunk[..n])?,
            }
        }

        tracing::debug!(bytes = acc.len(), ?mode, "load complete");
        Ok(acc.into_inner())
    }
}
