use std::io;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::ServiceExt;

use order_service::ServiceProfile;
use order_service::gateway;

/// In-memory writer handed to the fmt subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Route one request with a thread-local subscriber and return what it logged
async fn logs_for(profile: ServiceProfile, method: Method, uri: &str) -> (StatusCode, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _default = tracing::subscriber::set_default(subscriber);

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from("ignored"))
        .unwrap();
    let response = gateway::router(profile).oneshot(request).await.unwrap();

    (response.status(), logs.text())
}

#[tokio::test]
async fn full_profile_logs_method_and_path() {
    let (status, logs) = logs_for(ServiceProfile::Full, Method::POST, "/orders?x=1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(logs.contains("INFO"), "logs: {logs}");
    assert!(logs.contains("method=POST"), "logs: {logs}");
    assert!(logs.contains("/orders"), "logs: {logs}");
    assert!(!logs.contains("x=1"), "query string leaked into path: {logs}");
}

#[tokio::test]
async fn full_profile_logs_health_requests() {
    let (status, logs) = logs_for(ServiceProfile::Full, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(logs.contains("method=GET"), "logs: {logs}");
    assert!(logs.contains("/health"), "logs: {logs}");
}

#[tokio::test]
async fn minimal_profile_logs_nothing() {
    let (status, logs) = logs_for(ServiceProfile::Minimal, Method::GET, "/orders").await;

    assert_eq!(status, StatusCode::OK);
    assert!(logs.is_empty(), "logs: {logs}");
}
