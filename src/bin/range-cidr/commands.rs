pub mod aggregate;
pub mod deaggregate;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use range_cidr::Address;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "range-cidr")]
#[command(about = "Convert IP address ranges into minimal CIDR prefix lists.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a single address range into CIDR prefixes
    #[command(alias = "d")]
    Deaggregate { low: Address, high: Address },
    /// Merge prefix and range lists into minimal CIDR prefixes (reads stdin without files)
    #[command(alias = "a")]
    Aggregate { files: Vec<PathBuf> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config::new(self.no_color, self.verbose, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn parses_deaggregate_alias() {
        let commands = CommandLine::try_parse_from(["range-cidr", "d", "10.0.0.0", "10.0.0.255"]).expect("to parse");
        match commands.command {
            Commands::Deaggregate { low, high } => {
                assert_eq!(low, "10.0.0.0".parse::<Address>().expect("valid"));
                assert_eq!(high, "10.0.0.255".parse::<Address>().expect("valid"));
            },
            Commands::Aggregate { .. } => panic!("expected deaggregate"),
        }
    }

    #[test]
    fn rejects_invalid_address() {
        assert!(CommandLine::try_parse_from(["range-cidr", "deaggregate", "10.0.0.0", "10.0.0.300"]).is_err());
    }
}
