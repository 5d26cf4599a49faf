//! `HttpQuizStore` against a local `tiny_http` server.

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use quiz_core::contracts::QuizRepository;
use quiz_core::entities::{Question, Quiz, QuizOption};
use quiz_store::{HttpQuizStore, StoreError};

/// A request as the server saw it.
#[derive(Debug)]
struct Seen {
    method: String,
    url: String,
    body: String,
}

/// Serve `replies.len()` requests, answering the n-th with `replies[n]`.
fn serve(replies: Vec<(u16, &'static str)>) -> (String, mpsc::Receiver<Seen>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("ip listener")
        .port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in replies {
            let Ok(mut request) = server.recv() else {
                return;
            };
            let mut received = String::new();
            let _ = request.as_reader().read_to_string(&mut received);
            let _ = tx.send(Seen {
                method: request.method().to_string(),
                url: request.url().to_string(),
                body: received,
            });
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json")
                        .expect("static header"),
                );
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{port}/api"), rx)
}

fn store(base: &str) -> HttpQuizStore {
    HttpQuizStore::new(base, Duration::from_secs(5)).expect("client builds")
}

fn quiz() -> Quiz {
    Quiz {
        id: "geo-1".into(),
        title: "Capitals".into(),
        description: "European capitals".into(),
        category: "Geography".into(),
        time_limit: None,
        questions: vec![Question {
            id: "q1".into(),
            text: "Capital of France?".into(),
            options: vec![
                QuizOption {
                    id: "o1".into(),
                    text: "Paris".into(),
                    is_correct: true,
                },
                QuizOption {
                    id: "o2".into(),
                    text: "Lyon".into(),
                    is_correct: false,
                },
            ],
        }],
    }
}

const LIST_BODY: &str = r#"[{
    "id": "geo-1",
    "title": "Capitals",
    "description": "European capitals",
    "category": "Geography",
    "questions": [{
        "id": "q1",
        "text": "Capital of France?",
        "options": [
            {"id": "o1", "text": "Paris", "isCorrect": true},
            {"id": "o2", "text": "Lyon", "isCorrect": false}
        ]
    }]
}]"#;

#[tokio::test]
async fn list_parses_catalog() {
    let (base, seen) = serve(vec![(200, LIST_BODY)]);
    let quizzes = store(&base).list().await.expect("list succeeds");
    assert_eq!(quizzes, vec![quiz()]);

    let request = seen.recv().expect("request seen");
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "/api/quizzes");
}

#[tokio::test]
async fn save_posts_camel_case_json() {
    let (base, seen) = serve(vec![(201, r#"{"success":true}"#)]);
    store(&base).save(&quiz()).await.expect("save succeeds");

    let request = seen.recv().expect("request seen");
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/api/quizzes");
    let sent: Quiz = serde_json::from_str(&request.body).expect("body is a quiz");
    assert_eq!(sent, quiz());
    assert!(request.body.contains("\"isCorrect\""));
}

#[tokio::test]
async fn delete_hits_item_url_and_tolerates_missing() {
    let (base, seen) = serve(vec![(200, "{}"), (404, "not found")]);
    let store = store(&base);
    store.delete("geo-1").await.expect("delete succeeds");
    store.delete("gone").await.expect("missing id is fine");

    let first = seen.recv().expect("request seen");
    assert_eq!(first.method, "DELETE");
    assert_eq!(first.url, "/api/quizzes/geo-1");
    assert_eq!(seen.recv().expect("request seen").url, "/api/quizzes/gone");
}

#[tokio::test]
async fn server_error_becomes_api_error() {
    let (base, _seen) = serve(vec![(500, "disk full")]);
    let err = store(&base).list().await.expect_err("500 fails");
    match err {
        StoreError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "disk full");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn health_check() {
    let (base, seen) = serve(vec![(200, r#"{"status":"ok"}"#)]);
    store(&base).health().await.expect("healthy");
    assert_eq!(seen.recv().expect("request seen").url, "/api/health");
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    // port 9 (discard) is not listening on loopback in test environments
    let err = store("http://127.0.0.1:9/api").list().await.expect_err("no server");
    assert!(matches!(err, StoreError::Http(_)));
}
