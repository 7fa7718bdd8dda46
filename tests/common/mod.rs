//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use rsvp_backend::config::RsvpConfig;
use rsvp_backend::http::HttpServer;

pub const ADMIN_KEY: &str = "Thea2025";

/// A running server on an ephemeral port backed by a temp directory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub data_file: PathBuf,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Resolve the server's shutdown future and wait for it to drain.
    pub async fn stop(self) -> std::io::Result<()> {
        let _ = self.shutdown.send(());
        self.handle.await.expect("server task panicked")
    }
}

pub fn test_config(dir: &TempDir) -> RsvpConfig {
    let mut config = RsvpConfig::default();
    config.admin.key = ADMIN_KEY.to_string();
    config.storage.data_file = dir
        .path()
        .join("data")
        .join("responses.json")
        .to_string_lossy()
        .into_owned();
    config
}

/// Start a server and wait until it accepts connections.
pub async fn start_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let data_file = PathBuf::from(&config.storage.data_file);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown, rx) = oneshot::channel::<()>();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, async move {
        let _ = rx.await;
    }));

    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    TestServer {
        addr,
        data_file,
        shutdown,
        handle,
        _dir: dir,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
