use std::io;
use std::path::PathBuf;

use anyhow::Context;
use range_cidr::{AddressRange, batch};
use tracing::{info, warn};

use crate::terminal::print;

fn load(files: &[PathBuf]) -> anyhow::Result<Vec<AddressRange>> {
    if files.is_empty() {
        info!("Reading ranges from stdin");
        return batch::read_ranges(io::stdin().lock()).context("failed to read ranges from stdin");
    }

    let mut ranges = Vec::new();
    for path in files {
        let loaded = batch::load_ranges(path).with_context(|| format!("failed to load '{}'", path.display()))?;
        info!("{} ranges read from {}", loaded.len(), path.display());
        ranges.extend(loaded);
    }
    Ok(ranges)
}

pub fn aggregate(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut ranges = load(files)?;
    if ranges.is_empty() {
        warn!("No ranges to aggregate");
        return Ok(());
    }

    let input_len = ranges.len();
    let blocks = range_cidr::aggregate(&mut ranges);
    print::prefixes(&blocks);

    info!("{input_len} ranges merged into {} ranges, {} prefixes", ranges.len(), blocks.len());
    Ok(())
}
