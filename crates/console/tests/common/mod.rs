//! Common test utilities for integration tests.
//!
//! The page controllers are driven against an in-process stub of the
//! remote tracking API: an axum router bound to a random local port,
//! with shared state for counting hits and capturing what the client
//! actually sent.

// Allow dead code in this module - these are helper utilities that may not
// be used by every integration test.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use serde_json::{json, Value};

use gateway::ApiGateway;

/// Counters and captures shared between stub handlers and assertions.
#[derive(Debug, Default)]
pub struct StubState {
    pub list_calls: AtomicUsize,
    pub details_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub fail_list: AtomicBool,
    pub reject_mutation: AtomicBool,
    pub captured_body: Mutex<Option<Value>>,
    pub captured_query: Mutex<Option<String>>,
    pub captured_path: Mutex<Option<String>>,
    pub captured_upload: Mutex<Option<(String, usize)>>,
}

impl StubState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

/// Serves `router` on a random local port and returns a gateway pointed
/// at it.
pub async fn serve(router: Router) -> ApiGateway {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr: SocketAddr = listener.local_addr().expect("stub listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub api");
    });

    let base = url::Url::parse(&format!("http://{addr}")).expect("stub base url");
    ApiGateway::new(base, Duration::from_secs(5)).expect("build gateway")
}

/// A change-request record as the API returns it.
pub fn request_json(id: i64, request_no: &str) -> Value {
    json!({
        "id": id,
        "request_no": request_no,
        "requested_by": "M. Rao",
        "department": "Retail",
        "category": "Bug",
        "request_date": "2024-01-09",
        "request_title": "Fix rounding in EMI schedule",
        "description": "Schedule is off by one paisa"
    })
}

/// Writes a throwaway spreadsheet file for upload tests.
pub async fn temp_upload_file(tag: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("cr-console-{}-{}.xlsx", std::process::id(), tag));
    tokio::fs::write(&path, b"PK\x03\x04 not a real workbook")
        .await
        .expect("write temp upload file");
    path
}
