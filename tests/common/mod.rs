//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use gluetun_webui::config::AppConfig;
use gluetun_webui::http::HttpServer;
use gluetun_webui::lifecycle::Shutdown;

/// Canned reply from the mock control server.
#[derive(Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn json(value: Value) -> Self {
        Self { status: 200, body: value.to_string(), delay: None }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self { status, body: body.to_string(), delay: None }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// One request as seen by the mock control server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

type Responder = Arc<dyn Fn(&Method, &str) -> MockReply + Send + Sync>;

#[derive(Clone)]
struct MockState {
    responder: Responder,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// A mock control server on an ephemeral port.
pub struct MockUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockUpstream {
    /// Start a mock whose replies are decided per method and path.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Method, &str) -> MockReply + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responder: Arc::new(responder),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(record_and_reply).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn record_and_reply(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).ok(),
    });

    let reply = (state.responder)(&method, uri.path());
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (StatusCode::from_u16(reply.status).unwrap(), reply.body).into_response()
}

/// An address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Config pointing at `upstream_url`, serving assets from `assets_dir`.
pub fn test_config(upstream_url: &str, assets_dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1".into();
    config.listener.port = 0;
    config.upstream.base_url = upstream_url.to_string();
    config.upstream.timeout_ms = 1000;
    config.assets.dir = assets_dir.to_path_buf();
    config
}

/// A running proxy. Shuts down on drop.
pub struct TestProxy {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestProxy {
    pub async fn start(config: AppConfig) -> Self {
        let server = HttpServer::new(config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        tokio::spawn(async move {
            let _ = server.run(listener, rx).await;
        });

        Self { addr, shutdown }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// HTTP client that never reuses connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
