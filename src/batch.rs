//! Loading of prefix and range lists
//!
//! Lists are newline-delimited; each line is a CIDR block, a single address or a `low-high` range.
//! Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use crate::{AddressRange, Error};

const COMMENT: char = '#';

#[derive(Debug, thiserror::Error)]
///Errors reading list of ranges
pub enum LoadError {
    ///Failed to read input
    #[error("failed to read ranges: {0}")]
    Io(#[from] io::Error),
    ///Line cannot be parsed
    #[error("line {line}: {source}")]
    Parse {
        ///1-based line number
        line: usize,
        ///Parse failure
        source: Error,
    },
}

///Reads every range from `reader`
pub fn read_ranges<R: BufRead>(reader: R) -> Result<Vec<AddressRange>, LoadError> {
    let mut ranges = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line: String = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with(COMMENT) {
            continue;
        }

        let range = text.parse::<AddressRange>().map_err(|source| LoadError::Parse {
            line: idx + 1,
            source,
        })?;
        ranges.push(range);
    }

    tracing::debug!(count = ranges.len(), "read address ranges");
    Ok(ranges)
}

///Reads every range from file at `path`
pub fn load_ranges(path: impl AsRef<Path>) -> Result<Vec<AddressRange>, LoadError> {
    let file = File::open(path)?;
    read_ranges(BufReader::new(file))
}
