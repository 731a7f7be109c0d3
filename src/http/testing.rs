use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-process webhook answering `statuses[n]` on the n-th hit, repeating the last one
pub struct Endpoint {
    statuses: Vec<u16>,
    pub hits: AtomicUsize,
    /// (content type, body) of every request received
    pub requests: Mutex<Vec<(Option<String>, String)>>,
}

async fn hook(State(endpoint): State<Arc<Endpoint>>, headers: HeaderMap, body: String) -> StatusCode {
    let hit = endpoint.hits.fetch_add(1, Ordering::SeqCst);
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    endpoint.requests.lock().unwrap().push((content_type, body));

    let code = endpoint.statuses[hit.min(endpoint.statuses.len() - 1)];
    StatusCode::from_u16(code).unwrap()
}

/// Binds an ephemeral port and returns the hook URL
pub async fn spawn_endpoint(statuses: &[u16]) -> (String, Arc<Endpoint>) {
    let endpoint = Arc::new(Endpoint {
        statuses: statuses.to_vec(),
        hits: AtomicUsize::new(0),
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/hook", post(hook))
        .with_state(endpoint.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/hook", addr), endpoint)
}
