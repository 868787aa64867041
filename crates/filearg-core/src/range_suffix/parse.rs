//! Backward scan for the `!start-end` suffix.

use super::{RangeFlags, RangeSpec, RangeSuffix};

/// Parses an optional range suffix off the end of `filename`.
///
/// Scanning runs from the last character toward the front and stops at the
/// first `!`. Any character other than a digit, `-` or `!` on the way
/// rejects the suffix, as does a second `-`, an empty bound where one is
/// required, or a bound that overflows `i64`. The first character is never
/// treated as the delimiter.
///
/// # Examples
///
/// - `"f!10-20"` → `Both`, start 10, end 20, filename `"f"`
/// - `"f!-20"` → `End`, end 20, filename `"f!-20"`
/// - `"f!10-"` → `Start`, start 10, filename `"f!10-"`
/// - `"f!abc"` → `None`
pub fn parse_range_suffix(filename: &str) -> RangeSuffix {
    let Some((bang, spec)) = scan(filename) else {
        return RangeSuffix::unranged(filename);
    };

    let flags = spec.flags();
    let filename = if flags == RangeFlags::Both {
        filename[..bang].to_string()
    } else {
        filename.to_string()
    };

    RangeSuffix {
        flags,
        spec,
        filename,
        open_len: bang,
    }
}

/// True when the text after the last `!` is made only of digits and `-`,
/// i.e. it reads as an attempted range even if it did not parse.
pub fn looks_like_range(filename: &str) -> bool {
    match filename.rfind('!') {
        Some(bang) if bang > 0 => {
            let token = &filename[bang + 1..];
            !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit() || b == b'-')
        }
        _ => false,
    }
}

fn scan(filename: &str) -> Option<(usize, RangeSpec)> {
    let bang = find_delimiter(filename.as_bytes())?;
    let token = &filename[bang + 1..];

    let spec = match token.split_once('-') {
        None => RangeSpec {
            start: Some(parse_bound(token)?),
            end: None,
        },
        Some((_, end)) if end.contains('-') => return None,
        Some((start, end)) => RangeSpec {
            start: optional_bound(start)?,
            end: optional_bound(end)?,
        },
    };

    if spec.flags() == RangeFlags::None {
        return None;
    }
    Some((bang, spec))
}

fn find_delimiter(bytes: &[u8]) -> Option<usize> {
    for (i, &b) in bytes.iter().enumerate().skip(1).rev() {
        match b {
            b'!' => return Some(i),
            b'0'..=b'9' | b'-' => {}
            _ => return None,
        }
    }
    None
}

/// Empty is "not given"; anything else must parse.
fn optional_bound(digits: &str) -> Option<Option<i64>> {
    if digits.is_empty() {
        Some(None)
    } else {
        parse_bound(digits).map(Some)
    }
}

fn parse_bound(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i64>().ok()
}
