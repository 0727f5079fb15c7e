use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Database connection URL; the scheme selects the backend
    /// (sqlite://... or postgres://...)
    #[arg(long, env = "ROSTER_DATABASE_URL", default_value = "sqlite://database.db")]
    pub database_url: String,

    /// Which field identifies a user on the wire
    #[arg(long, env = "ROSTER_API_VARIANT", value_enum, default_value_t = ApiVariant::Username)]
    pub api_variant: ApiVariant,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "ROSTER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "ROSTER_PORT", default_value_t = 3000)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "ROSTER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// The two wire flavors of the user resource. Canonical deployments pair
/// `username` with a SQLite file and `email` with networked PostgreSQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ApiVariant {
    /// Users are keyed by `username` on the wire
    Username,
    /// Users are keyed by `email` on the wire
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
