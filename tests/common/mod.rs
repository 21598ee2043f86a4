//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use status_rotator::config::RotatorConfig;
use status_rotator::http::HttpServer;
use status_rotator::lifecycle::Shutdown;
use status_rotator::rotation::Rotation;

/// A rotator serving on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub rotation: Arc<Rotation>,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a rotator over `codes`. The listener is bound before returning.
pub async fn start_server(codes: &[u16]) -> TestServer {
    let mut config = RotatorConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.rotation.status_codes = codes.to_vec();

    let server = HttpServer::new(&config).unwrap();
    let rotation = server.rotation();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(server.run(listener, server_shutdown));

    TestServer {
        addr,
        rotation,
        shutdown,
        handle,
    }
}

/// Client without connection pooling or system proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
