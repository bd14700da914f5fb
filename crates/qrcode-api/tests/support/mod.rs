//! In-process mock of the QR code backend.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;

/// What the mock saw for one request
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub api_key: Option<String>,
    pub accept: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct MockBackend {
    /// Base URL including the `/v1` prefix the real service mounts under
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockBackend {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

async fn list_handler(State(state): State<MockState>, headers: HeaderMap) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let text = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string);
    state.seen.lock().unwrap().push(SeenRequest {
        api_key: text("x-api-key"),
        accept: text("accept"),
    });
    (state.status, [(header::CONTENT_TYPE, "application/json")], state.body.clone())
}

/// Serve `GET /v1/qrcodes` answering every request with `status` and `body`.
pub async fn start_mock_backend(status: u16, body: &str) -> MockBackend {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/v1/qrcodes", get(list_handler))
        .with_state(state);

    // Bind to random port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}/v1", addr),
        seen,
    }
}

/// Address nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
