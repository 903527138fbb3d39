// tests/common/mod.rs
//! Minimal one-shot HTTP responder for wire-level tests.
#![allow(dead_code)]

use async_trait::async_trait;
use quote_status::error::{PublishError, SourceError};
use quote_status::{Category, FormattedQuote, Quote, QuoteSource, StatusPayload, StatusPublisher};
use rand::RngCore;
use std::sync::Mutex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve exactly one request. Returns the base URL and a handle yielding the raw request.
pub async fn serve_once(status: u16, content_type: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let req = read_request(&mut sock).await;
        let resp = format!(
            "HTTP/1.1 {status} {}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            reason(status),
            body.len()
        );
        sock.write_all(resp.as_bytes()).await.unwrap();
        let _ = sock.shutdown().await;
        req
    });
    (format!("http://{addr}"), handle)
}

pub async fn serve_json_once(body: serde_json::Value) -> (String, JoinHandle<String>) {
    serve_once(200, "application/json", body.to_string()).await
}

/// Accept one connection and never answer.
pub async fn serve_silence(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((sock, _)) = listener.accept().await {
            tokio::time::sleep(hold).await;
            drop(sock);
        }
    });
    format!("http://{addr}")
}

async fn read_request(sock: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = sock.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
            let len = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// Replays scripted fetch results in order and counts calls.
pub struct ScriptedSource {
    results: Mutex<Vec<Result<Quote, SourceError>>>,
    calls: Mutex<u32>,
    fallback: (&'static str, &'static str),
}

impl ScriptedSource {
    pub fn new(mut results: Vec<Result<Quote, SourceError>>) -> Self {
        results.reverse();
        Self {
            results: Mutex::new(results),
            calls: Mutex::new(0),
            fallback: ("Code is poetry. - WordPress", "tech"),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl QuoteSource for ScriptedSource {
    async fn fetch(&self, _rng: &mut (dyn RngCore + Send)) -> Result<Quote, SourceError> {
        *self.calls.lock().unwrap() += 1;
        let next = self.results.lock().unwrap().pop();
        next.unwrap_or_else(|| Err(SourceError::unavailable("scripted", "no more results")))
    }

    fn fallback(&self, _rng: &mut (dyn RngCore + Send)) -> (FormattedQuote, Category) {
        (
            FormattedQuote::from_display(self.fallback.0, 100),
            Category::from(self.fallback.1),
        )
    }
}

/// Records payloads; optionally fails every call.
#[derive(Default)]
pub struct RecordingPublisher {
    pub fail_with: Option<String>,
    pub seen: Mutex<Vec<StatusPayload>>,
}

impl RecordingPublisher {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl StatusPublisher for RecordingPublisher {
    async fn publish(&self, payload: &StatusPayload) -> Result<(), PublishError> {
        self.seen.lock().unwrap().push(payload.clone());
        match &self.fail_with {
            Some(msg) => Err(PublishError::Api(msg.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
