//! Process configuration: command-line flags with environment fallbacks.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Dev,
    Stage,
    Acc,
    Sandbox,
    Prod,
}

impl Environment {
    /// How long in-flight requests may drain after a shutdown signal.
    /// Instant in dev.
    pub fn shutdown_timeout(&self) -> Duration {
        match self {
            Environment::Dev => Duration::ZERO,
            _ => Duration::from_secs(30),
        }
    }

    /// Whether shutdown waits for in-flight requests at all.
    pub fn drains_on_shutdown(&self) -> bool {
        !self.shutdown_timeout().is_zero()
    }

    /// JSON log lines everywhere but on a developer machine.
    pub fn json_logs(&self) -> bool {
        !matches!(self, Environment::Dev)
    }
}

/// Top-level CLI parser for `tasklist-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "tasklist-server", version, about = "In-memory task tracker")]
pub struct Config {
    /// Environment.
    #[arg(long = "env", env = "APP_ENV", value_enum, default_value_t = Environment::Dev)]
    pub environment: Environment,

    /// Log output level.
    #[arg(long = "loglevel", env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// HTTP port.
    #[arg(long = "port", env = "HTTP_PORT", default_value_t = 8080)]
    pub http_port: u16,

    /// Address to bind.
    #[arg(long = "host", env = "HTTP_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }
}
