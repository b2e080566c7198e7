//! `HttpEmployeeSource` against a one-shot local HTTP server.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use employee_directory::api::{ApiError, EmployeeSource, HttpEmployeeSource, PageRequest};
use employee_directory::app::{DirectoryStore, Status};

const PAGE: &str = r#"{
  "users": [
    {
      "id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@x.io",
      "phone": "+1 555-123-4567", "image": "https://example.test/ada.png",
      "company": { "name": "Analytical", "title": "Engineer", "department": "Research" },
      "address": { "address": "1 Main St", "city": "London", "state": "LDN", "postalCode": "N1" }
    },
    { "id": 2, "firstName": "Grace", "lastName": "Hopper", "email": "grace@x.io" }
  ],
  "total": 2, "skip": 0, "limit": 30
}"#;

/// Answers a single request with `status` and `body`, yielding the request line.
async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut chunk = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.expect("read");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.expect("shutdown");

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    let url = Url::parse(&format!("http://{addr}")).expect("url");
    (url, handle)
}

/// Accepts connections and never answers them.
async fn serve_silence() -> (Url, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let url = Url::parse(&format!("http://{addr}")).expect("url");
    (url, handle)
}

fn source_with_timeout(base: Url, timeout: Duration) -> HttpEmployeeSource {
    // Local server; keep any proxy from the environment out of the way.
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .expect("client");
    HttpEmployeeSource::with_client(client, base)
}

fn source(base: Url) -> HttpEmployeeSource {
    source_with_timeout(base, Duration::from_secs(5))
}

#[tokio::test]
async fn lists_the_first_page() {
    let (base, server) = serve_once("200 OK", PAGE).await;

    let page = source(base)
        .get_employees(PageRequest::default())
        .await
        .expect("page");

    assert_eq!(server.await.expect("server"), "GET /users?limit=30&skip=0 HTTP/1.1");
    assert_eq!(page.total, 2);
    assert_eq!(page.users[0].full_name(), "Ada Lovelace");
    assert_eq!(page.users[0].department(), Some("Research"));
    assert_eq!(
        page.users[0].address.as_ref().map(|a| a.street.as_str()),
        Some("1 Main St")
    );
    assert!(page.users[1].company.is_none());
}

#[tokio::test]
async fn search_encodes_the_query() {
    let (base, server) = serve_once("200 OK", r#"{"users": [], "total": 0}"#).await;
    let base = base.join("api").expect("join");

    let page = source(base)
        .search_employees("ada l&co", 5)
        .await
        .expect("page");

    assert!(page.users.is_empty());
    assert_eq!(
        server.await.expect("server"),
        "GET /api/users/search?q=ada+l%26co&limit=5 HTTP/1.1"
    );
}

#[tokio::test]
async fn unknown_employee_is_a_404() {
    let (base, server) = serve_once("404 Not Found", r#"{"message": "not found"}"#).await;

    let error = source(base).get_employee(999).await.expect_err("must fail");

    assert_eq!(server.await.expect("server"), "GET /users/999 HTTP/1.1");
    assert_eq!(error, ApiError::Http { status: 404 });
    assert_eq!(error.user_message(), "Resource not found.");
}

#[tokio::test]
async fn non_json_bodies_are_decode_errors() {
    let (base, _server) = serve_once("200 OK", "<html>maintenance</html>").await;

    let error = source(base)
        .get_employees(PageRequest::default())
        .await
        .expect_err("must fail");

    assert!(matches!(error, ApiError::Decode(_)));
}

#[tokio::test]
async fn refused_connections_are_network_errors() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let base = Url::parse(&format!("http://{addr}")).expect("url");
    let error = source(base)
        .get_employees(PageRequest::default())
        .await
        .expect_err("must fail");

    assert!(matches!(error, ApiError::Network(_)), "got {error:?}");
}

#[tokio::test]
async fn store_over_http_reports_server_errors() {
    let (base, _server) = serve_once("500 Internal Server Error", "{}").await;
    let store = DirectoryStore::new(Arc::new(source(base)));

    store.fetch().await;

    assert_eq!(
        store.status(),
        Status::Error {
            message: "Server error. Please try again later.".to_string()
        }
    );
}

#[tokio::test]
async fn store_over_http_loads_employees() {
    let (base, _server) = serve_once("200 OK", PAGE).await;
    let store = DirectoryStore::new(Arc::new(source(base)));

    store.fetch().await;
    store.set_search_query("research");

    assert_eq!(store.status(), Status::Ready);
    assert_eq!(store.counts().total, 2);
    assert_eq!(store.filtered_employees().len(), 1);
}

#[tokio::test]
async fn gateway_timeouts_are_status_failures() {
    let (base, _server) = serve_once("504 Gateway Timeout", "{}").await;
    let store = DirectoryStore::new(Arc::new(source(base)));

    store.fetch().await;

    assert_eq!(
        store.status(),
        Status::Error {
            message: "Request failed with status 504".to_string()
        }
    );
}

#[tokio::test]
async fn client_timeout_surfaces_as_a_failure() {
    let (base, server) = serve_silence().await;
    let timeout = Duration::from_millis(200);

    let error = source_with_timeout(base.clone(), timeout)
        .get_employees(PageRequest::default())
        .await
        .expect_err("must time out");
    assert!(matches!(error, ApiError::Timeout(_)), "got {error:?}");

    let store = DirectoryStore::new(Arc::new(source_with_timeout(base, timeout)));
    store.fetch().await;

    let state = store.snapshot();
    assert_eq!(
        state.error_message(),
        Some("Request timeout. Please check your internet connection.")
    );
    assert!(!state.loading_states().is_loading);
    server.abort();
}
