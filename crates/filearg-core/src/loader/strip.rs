//! Terminator-run scanning for string-mode loads.
//!
//! Terminator bytes are CR, LF and NUL. Content is a sequence of alternating
//! kept and dropped runs; dropping a run never depends on what came before
//! it, so chunks can be scanned independently.

use super::{AccumBuffer, LoadError};

fn is_terminator(b: u8) -> bool {
    matches!(b, b'\r' | b'\n' | b'\0')
}

/// Length of the leading run of `bytes` whose terminator-ness equals
/// `terminators`.
fn run_len(bytes: &[u8], terminators: bool) -> usize {
    bytes
        .iter()
        .position(|&b| is_terminator(b) != terminators)
        .unwrap_or(bytes.len())
}

/// Appends the non-terminator runs of `chunk` to `acc`.
pub(super) fn append_stripped(acc: &mut AccumBuffer, chunk: &[u8]) -> Result<(), LoadError> {
    let mut rest = chunk;
    while !rest.is_empty() {
        let keep = run_len(rest, false);
        acc.push(&rest[..keep])?;
        rest = &rest[keep..];

        let skip = run_len(rest, true);
        rest = &rest[skip..];
    }
    Ok(())
}

/// Returns `bytes` with every CR, LF and NUL removed.
pub fn strip_terminators(bytes: &[u8]) -> Vec<u8> {
    let mut acc = AccumBuffer::new(usize::MAX);
    // An unbounded accumulator cannot hit its limit.
    let _ = append_stripped(&mut acc, bytes);
    acc.into_inner()
}
