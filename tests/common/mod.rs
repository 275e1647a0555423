//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use http_echo::{EchoConfig, EchoServer, Shutdown};

/// Spawn an echo server on an ephemeral loopback port.
///
/// The listener is bound before the serve task is spawned, so requests
/// may be issued immediately. Trigger the returned coordinator to stop
/// the server at the end of a test.
pub async fn spawn_echo_server() -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = EchoConfig::default().with_port(addr.port());
    let server = EchoServer::new(config);

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Non-pooled client so connections never outlive a test's server.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
