//! Diagnostic HTTP Echo Server
//!
//! Accepts any HTTP request on any path and method and answers with a
//! JSON description of that request. Built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────┐
//!                   │                 HTTP ECHO                    │
//!                   │                                              │
//!   Client Request  │  ┌──────────┐   ┌─────────┐   ┌──────────┐  │
//!   ────────────────┼─▶│   net    │──▶│  http   │──▶│   http   │  │
//!                   │  │  probe*  │   │ server  │   │   echo   │  │
//!                   │  └──────────┘   └─────────┘   └────┬─────┘  │
//!                   │   *startup gate only                │        │
//!   Client Response │                               ┌────▼─────┐  │
//!   ◀───────────────┼───────────────────────────────│  record  │  │
//!                   │                               │  (JSON)  │  │
//!                   │                               └──────────┘  │
//!                   │  ┌────────────────────────────────────────┐ │
//!                   │  │   config  ·  lifecycle  ·  logging     │ │
//!                   │  └────────────────────────────────────────┘ │
//!                   └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use http_echo::config::schema::DEFAULT_PORT;
use http_echo::lifecycle::{signals, startup};
use http_echo::observability::logging;
use http_echo::{EchoConfig, EchoServer, Shutdown};

#[derive(Parser)]
#[command(name = "http-echo")]
#[command(about = "HTTP echo server for inspecting client requests", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init("http_echo=debug,tower_http=debug");

    let config = EchoConfig::default().with_port(cli.port);

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        "Configuration loaded"
    );

    // Startup gate: an occupied port is fatal before anything binds.
    if let Err(e) = startup::ensure_port_free(&config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let shutdown = Shutdown::new();
    let serve_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_interrupt(shutdown));

    let server = EchoServer::new(config);
    server.run(listener, serve_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
