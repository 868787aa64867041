//! Loading of file-valued command-line arguments.
//!
//! A file argument may carry a range suffix (`data.bin!10-20`) selecting part
//! of the file. The [`loader`] reads it into a size-capped buffer, either
//! verbatim or with line terminators stripped, positioning string-mode loads
//! by logical characters so CRLF and LF files agree on offsets.

pub mod config;
pub mod logging;

pub mod args;
pub mod digest;
pub mod error;
pub mod keywords;
pub mod loader;
pub mod numeric;
pub mod protocols;
pub mod range_suffix;
pub mod seek;

pub use error::ParamError;
pub use loader::{LoadError, LoadMode, LoadOptions, Loader};
pub use range_suffix::{parse_range_suffix, RangeFlags, RangeSpec, RangeSuffix};
