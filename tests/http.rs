use std::sync::Arc;
use std::time::Duration;

use sakari::{
    MapEnv, MessageText, Pagination, PhoneNumber, RequestError, SakariClient, SakariError,
    SendMessage, SettingsStore,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

struct Captured {
    head: String,
    body: String,
}

impl Captured {
    fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim())
        })
    }
}

async fn read_request(socket: &mut TcpStream) -> Captured {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let head_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request head");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let length = head
        .lines()
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    let mut body = buf[head_end..].to_vec();
    while body.len() < length {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before request body");
        body.extend_from_slice(&chunk[..n]);
    }

    Captured {
        head,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

/// Serve exactly one canned response and hand back the request it answered.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let captured = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        captured
    });

    (base_url, handle)
}

fn settings(dir: &TempDir, base_url: &str) -> SettingsStore {
    let env = MapEnv::new()
        .with("SAKARI_CLIENT_ID", "abc")
        .with("SAKARI_CLIENT_SECRET", "xyz")
        .with("SAKARI_ACCOUNT_ID", "acc-1")
        .with("SAKARI_BASE_URL", base_url);
    SettingsStore::open_with_env(dir.path().join("config.json"), Arc::new(env)).unwrap()
}

#[tokio::test]
async fn list_messages_sends_auth_headers_and_pagination() {
    let (base_url, server) = serve_once("200 OK", r#"{"success":true,"data":[]}"#).await;
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, &base_url);
    let client = SakariClient::new(&settings);

    let data = client.list_messages(Pagination::default()).await.unwrap();
    assert_eq!(data, json!({"success": true, "data": []}));

    let request = server.await.unwrap();
    assert_eq!(
        request.request_line(),
        "GET /v1/accounts/acc-1/messages?limit=50&offset=0 HTTP/1.1"
    );
    assert_eq!(request.header("authorization"), Some("Basic YWJjOnh5eg=="));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert!(
        request
            .header("user-agent")
            .is_some_and(|ua| ua.starts_with("sakari-cli/"))
    );
}

#[tokio::test]
async fn send_message_posts_json_payload() {
    let (base_url, server) = serve_once("201 Created", r#"{"success":true}"#).await;
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, &base_url);
    let client = SakariClient::new(&settings);

    let message = SendMessage::new(
        PhoneNumber::new("+12345678900"),
        PhoneNumber::new("+10987654321"),
        MessageText::new("Hello World").unwrap(),
    );
    client.send_message(&message).await.unwrap();

    let request = server.await.unwrap();
    assert_eq!(
        request.request_line(),
        "POST /v1/accounts/acc-1/messages HTTP/1.1"
    );
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body,
        json!({"to": "+12345678900", "from": "+10987654321", "body": "Hello World"})
    );
}

#[tokio::test]
async fn unauthorized_maps_to_request_error_with_body() {
    let (base_url, server) =
        serve_once("401 Unauthorized", r#"{"error":"unauthorized"}"#).await;
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, &base_url);
    let client = SakariClient::new(&settings);

    let err = client.list_accounts().await.unwrap_err();
    server.await.unwrap();

    let request = err.as_request().expect("request error");
    assert_eq!(request.status(), Some(401));
    assert_eq!(request.body(), Some(&json!({"error": "unauthorized"})));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, &base_url);
    let client = SakariClient::builder(&settings)
        .timeout(Duration::from_millis(200))
        .build();

    let err = client.list_accounts().await.unwrap_err();
    server.abort();

    match err {
        SakariError::Request(RequestError::Timeout { timeout, .. }) => {
            assert_eq!(timeout, Duration::from_millis(200));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
    drop(listener);

    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, &base_url);
    let client = SakariClient::new(&settings);

    let err = client.list_accounts().await.unwrap_err();
    let request = err.as_request().expect("request error");
    assert!(matches!(request, RequestError::Network { .. }));
    assert_eq!(request.status(), None);
}

#[tokio::test]
async fn missing_secret_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let env = MapEnv::new().with("SAKARI_CLIENT_ID", "abc");
    let settings =
        SettingsStore::open_with_env(dir.path().join("config.json"), Arc::new(env)).unwrap();
    let client = SakariClient::new(&settings);

    let err = client.list_accounts().await.unwrap_err();
    match &err {
        SakariError::Configuration(config) => {
            assert_eq!(config.key(), "clientSecret");
            assert!(config.message().contains("sakari config set clientSecret"));
            assert!(config.message().contains("SAKARI_CLIENT_SECRET"));
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}
