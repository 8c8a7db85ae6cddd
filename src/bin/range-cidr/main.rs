mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, aggregate, deaggregate};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(&cfg);
    print::initialize(&cfg);

    match commands.command {
        Commands::Deaggregate { low, high } => deaggregate::deaggregate(low, high),
        Commands::Aggregate { files } => aggregate::aggregate(&files),
    }
}
