//! Polling chat room server.
//!
//! Participants register, post and fetch messages over HTTP and keep their
//! presence alive with heartbeats; silent participants are swept out.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin batepapo-server
//! cargo run --bin batepapo-server -- --host 0.0.0.0 --port 5000
//! ```

use std::{sync::Arc, time::Duration};

use batepapo_server::{
    config::ServerConfig,
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    ui::{AppState, Server},
    usecase::SweepInactiveParticipantsUseCase,
};
use batepapo_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "batepapo-server")]
#[command(about = "Polling chat room server with inactivity eviction", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Seconds between two sweeps of inactive participants
    #[arg(
        long,
        env = "SWEEP_INTERVAL_SECS",
        default_value = "15",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    sweep_interval_secs: u64,

    /// Seconds without heartbeat after which a participant is evicted
    #[arg(long, env = "INACTIVITY_TIMEOUT_SECS", default_value = "10")]
    inactivity_timeout_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            sweep_interval: Duration::from_secs(args.sweep_interval_secs),
            inactivity_timeout: Duration::from_secs(args.inactivity_timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before reading configuration from the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    setup_logger(
        &[env!("CARGO_PKG_NAME"), "tower_http"],
        &args.log_level,
    );

    let config = ServerConfig::from(&args);

    // Initialize dependencies in order:
    // 1. Repositories
    // 2. Clock
    // 3. UseCases
    // 4. Server

    // 1. Create Repositories (in-memory stores)
    let participant_repository = Arc::new(InMemoryParticipantRepository::new());
    let message_repository = Arc::new(InMemoryMessageRepository::new());

    // 2. Create Clock
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 3. Create UseCases
    let app_state = Arc::new(AppState::new(
        participant_repository.clone(),
        message_repository.clone(),
        clock.clone(),
    ));
    let sweep_usecase = Arc::new(SweepInactiveParticipantsUseCase::new(
        participant_repository,
        message_repository,
        clock,
        config.inactivity_timeout,
    ));

    // 4. Create and run the server
    let server = Server::new(config, app_state, sweep_usecase);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
