//! Sum-and-lookup gateway.
//!
//! ```text
//!   Client                     day-gateway                      day service
//!     │ GET /api/add-and-get-day   │                                 │
//!     │ ?num1=2&num2=3             │                                 │
//!     ├───────────────────────────▶│ validate, sum = 5               │
//!     │                            │ GET <base_url>?number=5         │
//!     │                            ├────────────────────────────────▶│
//!     │                            │◀────────────────────────────────┤
//!     │                            │ {"day": "Sunday"}   (≤ 5 s)     │
//!     │◀───────────────────────────┤                                 │
//!     │ {"input_sum": 5.0, "day_of_the_week": "Sunday"}              │
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use day_gateway::config::{load_config, validate_config, ConfigError, GatewayConfig};
use day_gateway::http::HttpServer;
use day_gateway::lifecycle::Shutdown;
use day_gateway::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "day-gateway")]
#[command(about = "Adds two numbers and looks up the day of the week for the sum", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "DAY_GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address, overrides `listener.bind_address`.
    #[arg(long, env = "DAY_GATEWAY_BIND")]
    bind: Option<String>,

    /// Day service URL, overrides `downstream.base_url`.
    #[arg(long, env = "DAY_GATEWAY_DOWNSTREAM_URL")]
    downstream_url: Option<String>,

    /// Day service deadline in milliseconds, overrides `downstream.timeout_ms`.
    #[arg(long, env = "DAY_GATEWAY_DOWNSTREAM_TIMEOUT_MS")]
    downstream_timeout_ms: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<GatewayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GatewayConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(url) = self.downstream_url {
            config.downstream.base_url = url;
        }
        if let Some(timeout_ms) = self.downstream_timeout_ms {
            config.downstream.timeout_ms = timeout_ms;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        downstream = %config.downstream.base_url,
        downstream_timeout_ms = config.downstream.timeout_ms,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_signal());

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
