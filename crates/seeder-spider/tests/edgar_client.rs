use seeder_spider::api::{FetchError, IndexSource};
use seeder_spider::config::Config;
use seeder_spider::edgar::index::EdgarClient;
use seeder_spider::edgar::quarters::Quarter;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const USER_AGENT: &str = "SeederTest/1.0 (contact: test@example.com)";

// Serve a single HTTP response on a local port; the handle yields the raw request.
async fn serve_once(status_line: &'static str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // read until the end of the request headers
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&request).into_owned()
    });

    (base_url, handle)
}

fn client(base_url: String) -> EdgarClient {
    EdgarClient::new(&Config {
        base_url,
        user_agent: USER_AGENT.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_sends_user_agent_and_decodes_latin1() {
    let body = b"CIK|Company Name|Form Type|Date Filed|Filename\n\
                 1|Soci\xe9t\xe9 G\xe9n\xe9rale|13F-HR|2024-05-15|a.txt\n"
        .to_vec();
    let (base_url, server) = serve_once("200 OK", body).await;

    let text = client(base_url)
        .fetch(Quarter { year: 2024, qtr: 2 })
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /2024/QTR2/master.idx HTTP/1.1\r\n"));
    assert!(request
        .to_lowercase()
        .contains(&format!("user-agent: {}", USER_AGENT.to_lowercase())));
    assert!(text.contains("1|Soci\u{e9}t\u{e9} G\u{e9}n\u{e9}rale|13F-HR"));
}

#[tokio::test]
async fn fetch_rejects_non_success_status() {
    let (base_url, server) = serve_once("404 Not Found", b"not here".to_vec()).await;

    let result = client(base_url).fetch(Quarter { year: 2024, qtr: 2 }).await;
    server.await.unwrap();

    match result {
        Err(FetchError::Status { url, status }) => {
            assert!(url.ends_with("/2024/QTR2/master.idx"));
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_reports_connection_failure() {
    // bind then drop, so nothing is listening on the port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = client(base_url).fetch(Quarter { year: 2024, qtr: 1 }).await;
    assert!(matches!(result, Err(FetchError::Http(_))));
}
