//! Local stand-in for the Airtable and Resend APIs.

use axum::{
    Router,
    body::Bytes,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
};
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

pub type CapturedRequests = Arc<Mutex<Vec<CapturedRequest>>>;

/// Serve every request on an ephemeral port with `status`, recording it.
///
/// Returns the server root URL and the shared request log.
pub async fn spawn_capture_server(status: StatusCode) -> (Url, CapturedRequests) {
    let captured: CapturedRequests = Arc::default();
    let log = captured.clone();

    let app = Router::new().fallback(
        move |method: Method, uri: Uri, headers: HeaderMap, body: Bytes| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(CapturedRequest {
                    method: method.to_string(),
                    path: uri.path().to_string(),
                    authorization: headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned),
                    body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
                });
                status
            }
        },
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (Url::parse(&format!("http://{addr}")).unwrap(), captured)
}
