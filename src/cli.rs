use std::path::PathBuf;

use clap::Parser;

/// Execute a Universal Machine program.
#[derive(Debug, Parser)]
#[command(name = "rum", version, about)]
pub struct Cli {
    /// Path to the UM program to execute (a sequence of big-endian 32-bit
    /// instruction words).
    pub program: PathBuf,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace).
    /// Overridden by RUST_LOG if that is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The `log` level implied by the verbosity count, absent an explicit
    /// `RUST_LOG` override.
    pub fn default_log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
