// Shared helpers for driving the real reqwest client against a local stub API.
use axum::Router;
use form_client::domain::PageEnvironment;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use url::Url;

// Public origin of the page the forms live on; the stub API is always cross-origin to it.
pub const PAGE_URL: &str = "https://www.example.com/";

// Serve `app` on an ephemeral port and return its base URL.
pub async fn spawn_api(app: Router) -> String {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub api failed");
    });
    format!("http://{addr}")
}

// A base URL nothing listens on: the port is released before it is returned.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn page_for(base_url: &str) -> PageEnvironment {
    PageEnvironment::new(Url::parse(PAGE_URL).expect("page url")).with_runtime_base_url(base_url)
}

// Raw HTTP server for responses axum cannot shape: it answers one request with
// the status line, headers and `head` of the body at once, then `tail` after `delay`.
pub async fn spawn_split_response(head: &'static str, tail: &'static str, delay: Duration) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept test connection");
        read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 201 Created\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{head}",
            head.len() + tail.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response head");
        socket.flush().await.expect("flush response head");

        tokio::time::sleep(delay).await;
        socket
            .write_all(tail.as_bytes())
            .await
            .expect("write response tail");
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}")
}

// Consume headers plus `Content-Length` bytes of body so the client sees a clean exchange.
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("read request");
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
        let body_len = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + body_len {
            return;
        }
    }
}
