//! Numeric parameter parsing.
//!
//! All parsers are strict: the whole string must be consumed.

use std::num::IntErrorKind;

use crate::error::ParamError;

fn parse_radix(s: &str, radix: u32) -> Result<i64, ParamError> {
    if s.is_empty() {
        return Err(ParamError::BlankString);
    }
    i64::from_str_radix(s.trim_start(), radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParamError::NumberTooLarge,
        _ => ParamError::BadNumeric,
    })
}

/// Decimal integer; leading whitespace and a sign are accepted.
pub fn parse_num(s: &str) -> Result<i64, ParamError> {
    parse_radix(s, 10)
}

/// Non-negative decimal integer.
pub fn parse_unum(s: &str) -> Result<i64, ParamError> {
    let n = parse_num(s)?;
    if n < 0 {
        return Err(ParamError::NegativeNumeric);
    }
    Ok(n)
}

/// Non-negative decimal integer no larger than `max`.
pub fn parse_unum_max(s: &str, max: i64) -> Result<i64, ParamError> {
    let n = parse_unum(s)?;
    if n > max {
        return Err(ParamError::NumberTooLarge);
    }
    Ok(n)
}

/// Octal integer in `0..=max` (file modes and the like).
pub fn parse_octal_max(s: &str, max: i64) -> Result<i64, ParamError> {
    let n = parse_radix(s, 8)?;
    if n > max {
        return Err(ParamError::NumberTooLarge);
    }
    if n < 0 {
        return Err(ParamError::NegativeNumeric);
    }
    Ok(n)
}

/// Seconds with optional decimals, returned as whole milliseconds.
pub fn parse_secs_to_ms(s: &str) -> Result<i64, ParamError> {
    let value: f64 = s
        .trim_start()
        .parse()
        .map_err(|_| ParamError::BadNumeric)?;
    if value.is_nan() {
        return Err(ParamError::BadNumeric);
    }
    if value > (i64::MAX / 1000) as f64 {
        return Err(ParamError::NumberTooLarge);
    }
    if value < 0.0 {
        return Err(ParamError::NegativeNumeric);
    }
    Ok((value * 1000.0) as i64)
}

/// Byte offset: decimal digits only, never negative.
pub fn parse_offset(s: &str) -> Result<i64, ParamError> {
    if s.starts_with('-') {
        return Err(ParamError::NegativeNumeric);
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParamError::BadNumeric);
    }
    s.parse::<i64>().map_err(|_| ParamError::NumberTooLarge)
}
