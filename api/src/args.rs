use clap::Parser;
use nourish_core::domain::common::{BackendConfig, NourishConfig};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "nourish-api", version, about = "NourishCare presentation gateway")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub backend: BackendArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BackendArgs {
    #[arg(long = "backend-url", env = "BACKEND_URL", default_value = "http://localhost:8080")]
    pub url: Url,

    #[arg(long = "backend-timeout-secs", env = "BACKEND_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directives.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for NourishConfig {
    fn from(args: Args) -> Self {
        Self {
            backend: BackendConfig {
                base_url: args.backend.url,
                timeout_secs: args.backend.timeout_secs,
            },
        }
    }
}
