//! Stream positioning by byte offset or by logical character offset.
//!
//! A logical character is one byte, except that a CR immediately followed by
//! LF counts once. Offsets given as "characters from the start/end" therefore
//! land on the same content whether the file uses LF or CRLF line endings.

mod error;

use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

pub use error::SeekError;

/// How an offset is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekMode {
    /// Raw byte offset, one `Seek::seek` call.
    ByteExact,
    /// Logical characters, resolved by walking the stream.
    Logical,
}

/// What an offset is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekAnchor {
    FromStart,
    FromEnd,
}

/// Positions `stream` at `offset` interpreted according to `mode`.
pub fn seek_to<S: Read + Seek>(
    stream: &mut S,
    offset: i64,
    anchor: SeekAnchor,
    mode: SeekMode,
) -> Result<(), SeekError> {
    tracing::debug!(offset, ?anchor, ?mode, "seek");
    match mode {
        SeekMode::Logical => logical_seek(stream, offset, anchor),
        SeekMode::ByteExact => byte_seek(stream, offset, anchor),
    }
}

fn byte_seek<S: Seek>(stream: &mut S, offset: i64, anchor: SeekAnchor) -> Result<(), SeekError> {
    let from = match anchor {
        SeekAnchor::FromStart => {
            let start = u64::try_from(offset).map_err(|_| SeekError::OutOfRange {
                target: offset,
                reached: 0,
            })?;
            SeekFrom::Start(start)
        }
        SeekAnchor::FromEnd => SeekFrom::End(offset),
    };
    stream.seek(from)?;
    Ok(())
}

/// Walks `stream` forward from its beginning until `offset` logical
/// characters (relative to `anchor`) have been consumed.
///
/// For [`SeekAnchor::FromEnd`] the logical length is counted first, so
/// `offset` is normally negative (`-n` = the last `n` characters). The walk
/// is O(n) in the target; seeking far into large files is slow.
///
/// On success the stream's cursor sits directly after the last consumed
/// character. Fails with [`SeekError::OutOfRange`] when the target is
/// negative or beyond the end of the stream.
pub fn logical_seek<S: Read + Seek>(
    stream: &mut S,
    offset: i64,
    anchor: SeekAnchor,
) -> Result<(), SeekError> {
    let base = match anchor {
        SeekAnchor::FromStart => 0,
        SeekAnchor::FromEnd => {
            stream.seek(SeekFrom::Start(0))?;
            let mut reader = BufReader::new(&mut *stream);
            walk(&mut reader, i64::MAX)?
        }
    };

    stream.seek(SeekFrom::Start(0))?;
    let target = offset.checked_add(base).ok_or(SeekError::OutOfRange {
        target: offset,
        reached: 0,
    })?;

    let mut reader = BufReader::new(&mut *stream);
    let reached = walk(&mut reader, target)?;
    // Hand back any read-ahead so the inner cursor matches the walk.
    reader.seek(SeekFrom::Current(0))?;

    if reached == target {
        Ok(())
    } else {
        Err(SeekError::OutOfRange { target, reached })
    }
}

/// Consumes up to `limit` logical characters; returns how many were read.
fn walk<R: BufRead>(reader: &mut R, limit: i64) -> Result<i64, SeekError> {
    let mut count = 0i64;
    while count < limit {
        let (first, second) = {
            let buf = fill(reader)?;
            if buf.is_empty() {
                break;
            }
            (buf[0], buf.get(1).copied())
        };
        reader.consume(1);
        if first == b'\r' {
            let next = match second {
                Some(b) => Some(b),
                None => fill(reader)?.first().copied(),
            };
            if next == Some(b'\n') {
                reader.consume(1);
            }
        }
        count += 1;
    }
    Ok(count)
}

/// Counts logical characters across consecutive slices of one stream.
///
/// An LF whose preceding byte was CR costs nothing, even when the CR ended
/// the previous slice.
#[derive(Debug, Default)]
pub(crate) struct LogicalCounter {
    after_cr: bool,
}

impl LogicalCounter {
    pub(crate) fn count(&mut self, bytes: &[u8]) -> u64 {
        let mut units = 0;
        for &b in bytes {
            if !(b == b'\n' && self.after_cr) {
                units += 1;
            }
            self.after_cr = b == b'\r';
        }
        units
    }
}

fn fill<R: BufRead>(reader: &mut R) -> std::io::Result<&[u8]> {
    loop {
        match reader.fill_buf() {
            Ok(_) => break,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    reader.fill_buf()
}

#[cfg(test)]
mod tests;
