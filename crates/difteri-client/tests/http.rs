//! Drives `HttpBackend` against a one-shot local HTTP responder.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use difteri_client::wire::{PredictRequest, TOP_K};
use difteri_client::{ClientError, HttpBackend, PredictionBackend};

/// Serve a single canned response and hand back the raw request text.
fn respond_once(status: &str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let status = status.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base, handle)
}

fn read_request(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn sample_request() -> PredictRequest {
    let mut data = serde_json::Map::new();
    data.insert("id_casebase".into(), serde_json::json!("CB-1234"));
    data.insert("usia".into(), serde_json::json!(7));
    PredictRequest {
        data,
        topk: TOP_K,
        similar_fields: vec!["id_casebase".into()],
    }
}

#[test]
fn health_reads_features() {
    let (base, server) = respond_once(
        "200 OK",
        r#"{"status":"ok","model_info":{"features":["batuk"]}}"#,
    );
    let backend = HttpBackend::new(&format!("{base}/"));

    let caps = backend.health().unwrap();
    assert_eq!(caps.features, vec!["batuk"]);

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /health "), "{request}");
}

#[test]
fn health_error_status_is_reported() {
    let (base, server) = respond_once("500 Internal Server Error", r#"{"error":"down"}"#);
    let backend = HttpBackend::new(&base);

    match backend.health() {
        Err(ClientError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Status, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn predict_posts_body_and_parses_result() {
    let (base, server) = respond_once(
        "200 OK",
        r#"{"diagnosis":"Difteri","confidence":0.82,"top_scores":[["Difteri",0.82]],"similar_cases":[[4,0.1]]}"#,
    );
    let backend = HttpBackend::new(&base);

    let result = backend.predict(&sample_request()).unwrap();
    assert_eq!(result.diagnosis, "Difteri");
    assert_eq!(result.similar_cases, vec![(4, 0.1)]);
    assert!(result.similar_cases_detailed.is_empty());

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /predict "), "{request}");
    let (_, body) = request.split_once("\r\n\r\n").unwrap();
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(body["topk"], TOP_K);
    assert_eq!(body["data"]["id_casebase"], "CB-1234");
}

#[test]
fn predict_422_carries_first_message() {
    let (base, server) = respond_once(
        "422 Unprocessable Entity",
        r#"{"detail":[{"msg":"Field usia wajib diisi"}]}"#,
    );
    let backend = HttpBackend::new(&base);

    match backend.predict(&sample_request()) {
        Err(ClientError::Rejected(Some(msg))) => assert_eq!(msg, "Field usia wajib diisi"),
        other => panic!("expected Rejected, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn unreachable_backend_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let backend = HttpBackend::new(&base);
    assert!(matches!(
        backend.health(),
        Err(ClientError::Transport { .. })
    ));
}
