use clap::Parser;
use codeshare_generator::random::DEFAULT_LENGTH as DEFAULT_ID_LENGTH;
use codeshare_store::config::{DEFAULT_MAX_ID_ATTEMPTS, DEFAULT_MAX_PAYLOAD_BYTES};
use codeshare_telemetry::LogFormat;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "CODESHARE_LISTEN_ADDR";
pub const MAX_PAYLOAD_BYTES_ENV: &str = "CODESHARE_MAX_PAYLOAD_BYTES";
pub const MAX_ID_ATTEMPTS_ENV: &str = "CODESHARE_MAX_ID_ATTEMPTS";
pub const ID_LENGTH_ENV: &str = "CODESHARE_ID_LENGTH";
pub const SWEEP_INTERVAL_SECS_ENV: &str = "CODESHARE_SWEEP_INTERVAL_SECS";
pub const STORAGE_TIMEOUT_MS_ENV: &str = "CODESHARE_STORAGE_TIMEOUT_MS";
pub const LOG_FORMAT_ENV: &str = "CODESHARE_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_STORAGE_TIMEOUT_MS: u64 = 2_000;

#[derive(Debug, Parser)]
#[command(name = "codeshare-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Largest accepted `code` or `input`, in bytes.
    #[arg(long, env = MAX_PAYLOAD_BYTES_ENV, default_value_t = DEFAULT_MAX_PAYLOAD_BYTES)]
    pub max_payload_bytes: usize,

    #[arg(
        long,
        env = MAX_ID_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_ID_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub max_id_attempts: u32,

    #[arg(long, env = ID_LENGTH_ENV, default_value_t = DEFAULT_ID_LENGTH)]
    pub id_length: usize,

    #[arg(
        long,
        env = SWEEP_INTERVAL_SECS_ENV,
        default_value_t = DEFAULT_SWEEP_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub sweep_interval_secs: u64,

    #[arg(
        long,
        env = STORAGE_TIMEOUT_MS_ENV,
        default_value_t = DEFAULT_STORAGE_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub storage_timeout_ms: u64,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
