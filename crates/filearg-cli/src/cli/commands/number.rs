//! Number command: run one of the numeric option parsers.

use anyhow::Result;
use clap::ValueEnum;
use filearg_core::numeric;

/// Largest value accepted for octal file modes.
const MAX_FILE_MODE: i64 = 0o777;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberKind {
    /// Signed decimal integer.
    Num,
    /// Non-negative decimal integer.
    Unum,
    /// Byte offset.
    Offset,
    /// Seconds (decimals allowed), printed as milliseconds.
    Secs,
    /// Octal file mode up to 777.
    Octal,
}

pub fn run_number(kind: NumberKind, value: &str) -> Result<()> {
    let n = match kind {
        NumberKind::Num => numeric::parse_num(value)?,
        NumberKind::Unum => numeric::parse_unum(value)?,
        NumberKind::Offset => numeric::parse_offset(value)?,
        NumberKind::Secs => numeric::parse_secs_to_ms(value)?,
        NumberKind::Octal => numeric::parse_octal_max(value, MAX_FILE_MODE)?,
    };
    match kind {
        NumberKind::Octal => println!("{:o}", n),
        _ => println!("{}", n),
    }
    Ok(())
}
