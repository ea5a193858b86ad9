use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Canned reply and request log shared with the stub handler
#[derive(Clone)]
pub struct StubCatalog {
    pub status: StatusCode,
    pub body: String,
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl StubCatalog {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[allow(dead_code)]
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn search(
    State(stub): State<StubCatalog>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.requests.lock().unwrap().push(query);
    (
        stub.status,
        [("content-type", "text/javascript; charset=utf-8")],
        stub.body.clone(),
    )
        .into_response()
}

/// Serve `stub` on an ephemeral local port and return the base URL
pub async fn spawn_stub(stub: StubCatalog) -> String {
    let app = Router::new()
        .route("/api/itunes/search", get(search))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A raw catalog record as JSON
pub fn record(kind: &str, name: &str, preview: Option<&str>) -> serde_json::Value {
    let mut value = serde_json::json!({
        "wrapperType": "track",
        "kind": kind,
        "trackId": 1000,
        "collectionId": 2000,
        "artistName": "Jack Johnson",
        "trackName": name,
        "collectionName": "In Between Dreams",
        "artworkUrl100": format!("https://is1-ssl.mzstatic.com/image/thumb/{name}/100x100bb.jpg"),
        "releaseDate": "2005-03-01T08:00:00Z",
        "trackViewUrl": "https://music.apple.com/us/album/in-between-dreams/2000?i=1000",
        "collectionViewUrl": "https://music.apple.com/us/album/in-between-dreams/2000",
    });
    if let Some(url) = preview {
        value["previewUrl"] = serde_json::Value::String(url.to_string());
    }
    value
}
