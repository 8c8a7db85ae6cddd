use tracing::level_filters::LevelFilter;

/// Runtime settings collected from the command line.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub color: bool,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new(no_color: bool, verbose: u8, quiet: bool) -> Self {
        let log_level = match (quiet, verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::INFO,
            (false, 1) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        };
        Self {
            color: !no_color,
            log_level,
        }
    }
}
