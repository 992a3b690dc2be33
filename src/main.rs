//! Vending Machine CLI
//!
//! Serves a vending machine over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! PORT=9000 cargo run
//! cargo run -- --port 9000 --price 3 --stock 10,10,10,10
//! RUST_LOG=debug cargo run -- --log-format json
//! ```
//!
//! The machine starts with no coins and the configured stock. All state is
//! in memory and is lost when the process exits.
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown (Ctrl-C or SIGTERM)
//! - 1: Error (invalid machine configuration, port unavailable, etc.)
//! - 2: Invalid command-line arguments

use std::process;
use std::sync::Arc;
use tracing::error;
use vending_machine::cli;
use vending_machine::http::{self, SharedMachine};
use vending_machine::telemetry;
use vending_machine::{MachineState, ServerError};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = telemetry::init_tracing(args.log_format) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        error!(error = %e, "Vending machine failed");
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), ServerError> {
    let machine: SharedMachine = Arc::new(MachineState::new(args.to_machine_config())?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(args.worker_threads())
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let listener = http::bind(args.socket_addr()).await?;
        http::serve(listener, machine, http::shutdown_signal()).await
    })
}
