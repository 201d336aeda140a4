//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use message_board::{Binding, BoardConfig, HttpServer, MessageStore, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A board running on an ephemeral port.
pub struct RunningBoard {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningBoard {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = tokio::time::timeout(Duration::from_secs(5), self.handle).await;
    }
}

/// Start the server over `binding` with default settings.
pub async fn start_board<S: MessageStore>(binding: Binding<S>) -> RunningBoard {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&BoardConfig::default(), binding);
    let handle = tokio::spawn(server.run(listener, shutdown.listener()));

    RunningBoard {
        addr,
        shutdown,
        handle,
    }
}

/// A client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// Number of message cards on the rendered list page.
pub fn card_count(html: &str) -> usize {
    html.matches(r#"class="message-card""#).count()
}
