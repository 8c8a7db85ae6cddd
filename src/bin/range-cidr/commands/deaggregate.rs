use range_cidr::{Address, AddressRange, Cidr};
use tracing::info;

use crate::terminal::print;

pub fn deaggregate(low: Address, high: Address) -> anyhow::Result<()> {
    let range = AddressRange::from_endpoints(low, high);
    info!("Splitting {range}");

    let blocks: Vec<Cidr> = range.deaggregate().collect();
    print::prefixes(&blocks);

    let unit = if blocks.len() == 1 { "prefix" } else { "prefixes" };
    info!("{} {unit} produced", blocks.len());
    Ok(())
}
