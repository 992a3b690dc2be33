// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, LogFormat};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Arguments fall back to environment variables (`PORT`, `VENDING_HOST`,
/// `VENDING_PRICE`, `VENDING_STOCK`) and then to defaults. If parsing fails
/// or `--help` is given, clap prints a message and exits the process.
///
/// # Returns
///
/// Returns a `CliArgs` struct with the parsed command-line arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
