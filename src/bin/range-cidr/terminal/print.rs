use colored::*;
use range_cidr::Cidr;

use crate::config::Config;

const IPV4_PREFIX: Color = Color::Green;
const IPV6_PREFIX: Color = Color::Cyan;

pub fn initialize(cfg: &Config) {
    if !cfg.color {
        colored::control::set_override(false);
    }
}

fn colored_prefix(block: &Cidr) -> ColoredString {
    let color = match block {
        Cidr::V4(_) => IPV4_PREFIX,
        Cidr::V6(_) => IPV6_PREFIX,
    };
    block.to_string().color(color)
}

pub fn prefixes(blocks: &[Cidr]) {
    for block in blocks {
        println!("{}", colored_prefix(block));
    }
}
