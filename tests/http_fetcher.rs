use std::sync::Arc;
use pretty_assertions::assert_eq;
use reqwest::Url;
use serde_json::json;
use tokio::{io::{AsyncReadExt, AsyncWriteExt}, net::TcpListener};

use site_i18n::{error::FetchError, HttpFetcher, LocaleFetcher, LocaleLoader};

fn respond(path: &str) -> (u16, &'static str) {
    match path {
        "/locales/id.json" => (200, r#"{"nav":{"home":"Beranda"}}"#),
        "/site/locales/id.json" => (500, "oops"),
        _ => (404, "not found"),
    }
}

/// Page URL on a port that was just released, so nothing listens there.
async fn closed_page(path: &str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}{path}")).unwrap()
}

/// Tiny HTTP/1.1 server answering from `respond`, one request per connection.
async fn serve() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else { break };
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf).to_string();
                let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, body) = respond(&path);
                let reply = format!("HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}", body.len());
                let _ = stream.write_all(reply.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });
    Url::parse(&format!("http://{addr}/site/index.html")).unwrap()
}

#[tokio::test]
async fn error_statuses_fall_through_to_next_candidate() {
    let page = serve().await;
    let loader = LocaleLoader::new(Arc::new(HttpFetcher::new(page.clone())), page.path(), "locales");

    let dict = loader.load("id").await;

    assert_eq!(dict.get("nav.home"), Some(&json!("Beranda")));
    assert_eq!(loader.resolved_base().as_deref(), Some("../locales/"));
}

#[tokio::test]
async fn statuses_and_transport_failures_are_errors() {
    let page = serve().await;
    let fetcher = HttpFetcher::new(page);
    assert!(matches!(fetcher.fetch("locales/id.json").await, Err(FetchError::Status(500))));
    assert!(matches!(fetcher.fetch("/nope.json").await, Err(FetchError::Status(404))));

    let dead = HttpFetcher::new(closed_page("/index.html").await);
    assert!(matches!(dead.fetch("locales/en.json").await, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn unreachable_site_resolves_to_empty_dictionary() {
    let page = closed_page("/myrepo/index.html").await;
    let loader = LocaleLoader::new(Arc::new(HttpFetcher::new(page.clone())), page.path(), "locales");

    assert!(loader.load("en").await.is_empty());
    assert!(loader.is_cached("en"));
}
