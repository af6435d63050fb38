use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};

use quiz_core::model::UploadedFile;
use services::{DocumentProcessor, HttpProcessor, ProcessingConfig, ProcessingError};

#[derive(Clone, Default)]
struct Hits(Arc<AtomicUsize>);

impl Hits {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn processor(base_url: &str, timeout: Duration) -> HttpProcessor {
    let config = ProcessingConfig::new(base_url, timeout).expect("config");
    HttpProcessor::new(config).expect("client")
}

fn pdf() -> UploadedFile {
    UploadedFile::from_name("doc.pdf", b"%PDF-1.4 body".to_vec())
}

async fn echo_document(
    State(hits): State<Hits>,
    mut multipart: Multipart,
) -> Result<Json<Value>, StatusCode> {
    hits.0.fetch_add(1, Ordering::SeqCst);

    let mut fields = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        fields.push((name, file_name, content_type, bytes.len()));
    }

    match fields.as_slice() {
        [(name, file_name, content_type, len)]
            if name == "file" && content_type == "application/pdf" && *len > 0 =>
        {
            Ok(Json(json!({
                "filename": file_name,
                "summary": "Summary text.",
                "quiz": [{"question": "Q1", "options": ["A", "B"], "answer": "A"}]
            })))
        }
        _ => Err(StatusCode::UNPROCESSABLE_ENTITY),
    }
}

#[tokio::test]
async fn posts_single_file_field_and_parses_document() {
    let hits = Hits::default();
    let router = Router::new()
        .route("/process", post(echo_document))
        .with_state(hits.clone());
    let base = spawn_server(router).await;

    let doc = processor(&base, Duration::from_secs(5))
        .process(&pdf())
        .await
        .expect("process");

    assert_eq!(hits.count(), 1);
    assert_eq!(doc.filename(), "doc.pdf");
    assert_eq!(doc.summary(), "Summary text.");
    assert_eq!(doc.question_count(), 1);
    assert_eq!(doc.quiz()[0].answer(), "A");
}

#[tokio::test]
async fn server_error_carries_status_and_detail() {
    let router = Router::new().route(
        "/process",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "summarizer crashed"})),
            )
        }),
    );
    let base = spawn_server(router).await;

    let err = processor(&base, Duration::from_secs(5))
        .process(&pdf())
        .await
        .unwrap_err();

    match err {
        ProcessingError::HttpStatus { status, detail } => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(detail.as_deref(), Some("summarizer crashed"));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let router = Router::new().route(
        "/process",
        post(|| async { Json(json!({"filename": "doc.pdf", "quiz": "nope"})) }),
    );
    let base = spawn_server(router).await;

    let err = processor(&base, Duration::from_secs(5))
        .process(&pdf())
        .await
        .unwrap_err();
    assert!(matches!(err, ProcessingError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let router = Router::new().route(
        "/process",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({"filename": "doc.pdf", "summary": "", "quiz": []}))
        }),
    );
    let base = spawn_server(router).await;

    let err = processor(&base, Duration::from_millis(200))
        .process(&pdf())
        .await
        .unwrap_err();
    assert!(matches!(err, ProcessingError::Timeout), "{err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = processor(&format!("http://{addr}"), Duration::from_secs(2))
        .process(&pdf())
        .await
        .unwrap_err();
    assert!(matches!(err, ProcessingError::Http(_)), "{err:?}");
}
