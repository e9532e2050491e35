//! Reference day-of-week service.
//!
//! Serves `GET /api/get-day?number=<float>` → `{"input_number": n, "day": "..."}`.

use clap::Parser;
use tokio::net::TcpListener;

use day_gateway::config::{LogFormat, ObservabilityConfig};
use day_gateway::dayservice;
use day_gateway::lifecycle::Shutdown;
use day_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "day-service")]
#[command(about = "Maps a number to a day of the week", long_about = None)]
struct Cli {
    #[arg(short, long, env = "DAY_SERVICE_BIND", default_value = "0.0.0.0:7001")]
    bind: String,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init_logging(&ObservabilityConfig {
        log_level: cli.log_level,
        log_format: if cli.json_logs { LogFormat::Json } else { LogFormat::Pretty },
        ..ObservabilityConfig::default()
    });

    let listener = TcpListener::bind(&cli.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "Day service started");

    let shutdown = Shutdown::new();
    let mut stop = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_signal());

    axum::serve(listener, dayservice::router())
        .with_graceful_shutdown(async move {
            let _ = stop.recv().await;
        })
        .await?;

    tracing::info!("Day service stopped");
    Ok(())
}
