//! Loading a file argument by name, range suffix included.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use super::{LoadError, LoadMode, Loader};
use crate::config::RangeSuffixPolicy;
use crate::range_suffix::{looks_like_range, parse_range_suffix};

/// Name that selects standard input instead of a file.
pub const STDIN_NAME: &str = "-";

impl Loader {
    /// Parses a trailing `!start-end` range off `name`, opens the file it
    /// names (or stdin for `-`) and loads it.
    pub fn load_file(&self, name: &str, mode: LoadMode) -> Result<Vec<u8>, LoadError> {
        let suffix = parse_range_suffix(name);
        if !suffix.has_range()
            && self.opts.range_suffix == RangeSuffixPolicy::Reject
            && looks_like_range(name)
        {
            return Err(LoadError::MalformedRangeSuffix(name.to_string()));
        }

        let path = suffix.open_path();
        if path == STDIN_NAME {
            if suffix.has_range() {
                return Err(LoadError::UnseekableRange);
            }
            let stdin = io::stdin();
            let mut lock = stdin.lock();
            return self.load_unranged(&mut lock, mode);
        }

        tracing::debug!(path, flags = ?suffix.flags, "loading file argument");
        let mut file = File::open(path).map_err(|source| LoadError::Open {
            path: PathBuf::from(path),
            source,
        })?;
        self.load(&mut file, suffix.flags, &suffix.spec, mode)
    }
}
