use crate::types::config::{DEFAULT_PRICE, MachineConfig};
use crate::types::Quantity;
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};

/// Serve a vending machine over HTTP
#[derive(Parser, Debug)]
#[command(name = "vending-machine")]
#[command(about = "Serve a vending machine over HTTP", long_about = None)]
pub struct CliArgs {
    /// Port to listen on
    #[arg(
        long = "port",
        env = "PORT",
        value_name = "PORT",
        default_value_t = 8080,
        help = "Port to listen on"
    )]
    pub port: u16,

    /// Address to bind
    #[arg(
        long = "host",
        env = "VENDING_HOST",
        value_name = "ADDR",
        default_value = "0.0.0.0",
        help = "Address to bind"
    )]
    pub host: IpAddr,

    /// Price of every item, in quarters
    #[arg(
        long = "price",
        env = "VENDING_PRICE",
        value_name = "QUARTERS",
        default_value_t = DEFAULT_PRICE,
        help = "Price of every item, in quarters (must be greater than zero)"
    )]
    pub price: u32,

    /// Initial stock per item
    #[arg(
        long = "stock",
        env = "VENDING_STOCK",
        value_name = "COUNTS",
        value_delimiter = ',',
        default_value = "5,5,5",
        help = "Comma-separated initial stock per item; the number of entries is the number of items"
    )]
    pub stock: Vec<Quantity>,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Log output format
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        default_value = "pretty",
        help = "Log output format: 'pretty' for humans or 'json' for collectors"
    )]
    pub log_format: LogFormat,
}

/// Available log output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl CliArgs {
    /// Machine configuration described by the arguments
    ///
    /// The configuration is not validated here; `MachineState::new` does that.
    pub fn to_machine_config(&self) -> MachineConfig {
        MachineConfig::new(self.price, self.stock.clone())
    }

    /// Socket address to listen on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Number of worker threads for the runtime
    ///
    /// Falls back to the number of CPU cores when unset or zero.
    pub fn worker_threads(&self) -> usize {
        match self.workers {
            Some(count) if count > 0 => count,
            _ => num_cpus::get(),
        }
    }
}
