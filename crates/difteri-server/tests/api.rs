use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use difteri_client::wire::{Capabilities, PredictRequest};
use difteri_client::{ClientError, PredictionBackend};
use difteri_core::models::diagnosis::DiagnosisResult;
use difteri_server::{AppState, app};
use difteri_store::DiagnosisStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

struct MockBackend {
    outcome: Result<DiagnosisResult, u16>,
    health_delay: Duration,
    requests: Mutex<Vec<PredictRequest>>,
}

impl PredictionBackend for MockBackend {
    fn health(&self) -> Result<Capabilities, ClientError> {
        std::thread::sleep(self.health_delay);
        Ok(Capabilities {
            features: vec!["usia".into(), "suhu".into()],
        })
    }

    fn predict(&self, request: &PredictRequest) -> Result<DiagnosisResult, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(422) => Err(ClientError::Rejected(Some("Data tidak valid".into()))),
            Err(status) => Err(ClientError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

fn fixed_result() -> DiagnosisResult {
    DiagnosisResult {
        diagnosis: "Suspect Difteri".into(),
        confidence: 0.64,
        top_scores: vec![
            ("Suspect Difteri".into(), 0.64),
            ("Difteri".into(), 0.3),
            ("Bukan Difteri".into(), 0.06),
        ],
        similar_cases: vec![(5, 0.1), (9, 0.22), (11, 0.35)],
        similar_cases_detailed: vec![],
    }
}

struct Harness {
    app: Router,
    store: Arc<DiagnosisStore>,
    backend: Arc<MockBackend>,
    _dir: tempfile::TempDir,
}

fn harness(outcome: Result<DiagnosisResult, u16>, hydrate: bool) -> Harness {
    slow_harness(outcome, hydrate, Duration::ZERO)
}

fn slow_harness(
    outcome: Result<DiagnosisResult, u16>,
    hydrate: bool,
    health_delay: Duration,
) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(DiagnosisStore::open(dir.path()));
    if hydrate {
        store.hydrate().unwrap();
    }
    let backend = Arc::new(MockBackend {
        outcome,
        health_delay,
        requests: Mutex::new(Vec::new()),
    });
    let state = AppState::new(backend.clone(), Arc::clone(&store));
    Harness {
        app: app(state),
        store,
        backend,
        _dir: dir,
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn step_edits() -> Vec<Value> {
    vec![
        json!({ "no_rm": "RM-0042", "nama": "Budi Santoso", "usia": "7" }),
        json!({ "batuk": "1", "nyeri_menelan": "1", "lama_demam": "3" }),
        json!({
            "terdapat_membran_di": "Faring",
            "luas_membran": "1.5",
            "konjungtiva": "1",
            "kelenjar_getah_bening": "2",
            "tonsil": "2",
        }),
        json!({
            "hemoglobin": "11", "hematrokit": "33", "eritrosit": "4", "m_c_v": "80",
            "m_c_h": "27", "m_c_h_c": "33", "leukosit": "12000", "trombosit": "240000",
            "laju_endap_darah": "18", "basofil": "0", "eosinofil": "1", "neutrofil": "70",
            "limposit": "24", "monosit": "5", "glukosa": "95", "natrium": "139",
            "kalium": "4", "khlorida": "100", "ph": "7.4", "3pco2": "41", "be": "0",
            "so2": "98", "rate": "100", "qtc": "410",
        }),
        json!({
            "bb": "20", "sistol": "105", "diastol": "65", "nadi": "92",
            "pernafasan": "22", "suhu": "37.8",
        }),
    ]
}

async fn walk_to_last(app: &Router) {
    for edits in step_edits() {
        let (status, body) = send(app, "POST", "/wizard/next", Some(edits)).await;
        assert_eq!(status, StatusCode::OK, "{body}");
    }
}

#[tokio::test]
async fn health_is_ok() {
    let h = harness(Ok(fixed_result()), true);
    let (status, body) = send(&h.app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn wizard_starts_on_patient_step() {
    let h = harness(Ok(fixed_result()), true);
    let (status, body) = send(&h.app, "GET", "/wizard", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "patient");
    assert_eq!(body["title"], "Data Pasien");
    assert_eq!(body["progress_label"], "Langkah 1 dari 6");
    assert_eq!(body["can_go_back"], false);
    assert_eq!(body["steps"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn invalid_step_returns_field_errors() {
    let h = harness(Ok(fixed_result()), true);
    let (status, body) = send(
        &h.app,
        "POST",
        "/wizard/next",
        Some(json!({ "no_rm": "RM-1", "nama": "B", "usia": "0" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"nama"));
    assert!(fields.contains(&"usia"));

    let (_, wizard) = send(&h.app, "GET", "/wizard", None).await;
    assert_eq!(wizard["step"], "patient");
}

#[tokio::test]
async fn vitals_cross_field_error_is_on_diastol() {
    let h = harness(Ok(fixed_result()), true);
    for edits in &step_edits()[..4] {
        send(&h.app, "POST", "/wizard/next", Some(edits.clone())).await;
    }
    let (status, body) = send(
        &h.app,
        "POST",
        "/wizard/next",
        Some(json!({
            "bb": "20", "sistol": "100", "diastol": "100", "nadi": "90",
            "pernafasan": "20", "suhu": "37",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"][0]["field"], "diastol");
    assert_eq!(body["fields"][0]["message"], "Diastol harus lebih kecil dari sistol");
}

#[tokio::test]
async fn unknown_field_is_bad_request() {
    let h = harness(Ok(fixed_result()), true);
    let (status, _) = send(&h.app, "PATCH", "/wizard/fields", Some(json!({ "nope": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&h.app, "PATCH", "/wizard/fields", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn physical_membrane_side_effect_applies() {
    let h = harness(Ok(fixed_result()), true);
    for edits in &step_edits()[..2] {
        send(&h.app, "POST", "/wizard/next", Some(edits.clone())).await;
    }
    send(
        &h.app,
        "PATCH",
        "/wizard/fields",
        Some(json!({ "luas_membran": "3" })),
    )
    .await;
    let (status, body) = send(
        &h.app,
        "PATCH",
        "/wizard/fields",
        Some(json!({ "terdapat_membran_di": "Tidak Ada" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["values"]["luas_membran"], 0);
}

#[tokio::test]
async fn prev_and_reset_navigate() {
    let h = harness(Ok(fixed_result()), true);
    let (_, body) = send(&h.app, "POST", "/wizard/prev", None).await;
    assert_eq!(body["index"], 0);

    send(&h.app, "POST", "/wizard/next", Some(step_edits()[0].clone())).await;
    let (_, body) = send(&h.app, "POST", "/wizard/prev", None).await;
    assert_eq!(body["index"], 0);
    assert_eq!(body["values"]["nama"], "Budi Santoso");

    let (status, body) = send(&h.app, "POST", "/wizard/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Formulir berhasil direset!");
    assert_eq!(body["wizard"]["index"], 0);
    assert_eq!(body["wizard"]["values"]["nama"], "");
}

#[tokio::test]
async fn submit_before_final_step_is_refused() {
    let h = harness(Ok(fixed_result()), true);
    let (status, _) = send(&h.app, "POST", "/wizard/submit", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(h.backend.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn result_waits_for_hydration() {
    let h = harness(Ok(fixed_result()), false);
    let (status, _) = send(&h.app, "GET", "/result", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    h.store.hydrate().unwrap();
    let response = h
        .app
        .clone()
        .oneshot(Request::get("/result").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/wizard");
}

#[tokio::test]
async fn full_intake_shows_result() {
    let h = harness(Ok(fixed_result()), true);
    walk_to_last(&h.app).await;

    let (status, body) = send(
        &h.app,
        "POST",
        "/wizard/submit",
        Some(json!({
            "kontak_erat_difteri": "1",
            "status_imunisasi": "2",
            "antibiotik_sudah_diberi": "0",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["redirect"], "/result");
    assert_eq!(body["diagnosis"], "Suspect Difteri");

    let requests = h.backend.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let id = requests[0].data["id_casebase"].as_str().unwrap();
    assert!(id.starts_with("CB-") && id[3..].len() == 4 && id[3..].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(requests[0].topk, 3);
    assert_eq!(
        requests[0].similar_fields,
        vec!["id_casebase", "no_rm", "nama", "penyakit", "usia", "suhu"]
    );

    let (status, view) = send(&h.app, "GET", "/result", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["diagnosis"], "Suspect Difteri");
    assert_eq!(view["confidence_percentage"], 64);
    assert_eq!(view["severity"], "medium");
    assert_eq!(view["suspect"], true);
    assert_eq!(view["chart"].as_array().unwrap().len(), 3);
    assert_eq!(view["submission_id"], body["submission_id"]);

    let (_, wizard) = send(&h.app, "GET", "/wizard", None).await;
    assert_eq!(wizard["loading"], false);
}

#[tokio::test]
async fn backend_rejection_is_bad_gateway_with_message() {
    let h = harness(Err(422), true);
    walk_to_last(&h.app).await;

    let (status, body) = send(&h.app, "POST", "/wizard/submit", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Data tidak valid");

    let (_, wizard) = send(&h.app, "GET", "/wizard", None).await;
    assert_eq!(wizard["loading"], false);
    assert_eq!(wizard["step"], "additional");
}

#[tokio::test]
async fn backend_failure_is_generic() {
    let h = harness(Err(500), true);
    walk_to_last(&h.app).await;

    let (status, body) = send(&h.app, "POST", "/wizard/submit", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Gagal untuk mendiagnosa data");
}

#[tokio::test]
async fn delete_result_clears_slot() {
    let h = harness(Ok(fixed_result()), true);
    walk_to_last(&h.app).await;
    send(&h.app, "POST", "/wizard/submit", None).await;

    let (status, _) = send(&h.app, "DELETE", "/result", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let response = h
        .app
        .clone()
        .oneshot(Request::get("/result").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[test]
fn config_defaults_and_overrides() {
    use difteri_server::ServerConfig;
    use difteri_server::config::{DEFAULT_API_URL, resolve_api_url};

    assert_eq!(resolve_api_url(""), DEFAULT_API_URL);
    assert_eq!(resolve_api_url("http://ml.local:9000//"), "http://ml.local:9000");

    let config = ServerConfig::from_lookup(|key| match key {
        "DIFTERI_API_URL" => Some("http://backend:8000/".into()),
        "DIFTERI_BIND" => Some("0.0.0.0:8080".into()),
        "DIFTERI_DATA_DIR" => Some("/tmp/difteri".into()),
        "DIFTERI_LOG_JSON" => Some("1".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.api_url, "http://backend:8000");
    assert_eq!(config.bind.port(), 8080);
    assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/difteri"));
    assert!(config.log_json);

    assert!(ServerConfig::from_lookup(|key| (key == "DIFTERI_BIND").then(|| "nope".into())).is_err());
}

#[tokio::test]
async fn dropped_submit_request_still_clears_loading() {
    let h = slow_harness(Ok(fixed_result()), true, Duration::from_millis(300));
    walk_to_last(&h.app).await;

    let dropped = tokio::time::timeout(
        Duration::from_millis(50),
        send(&h.app, "POST", "/wizard/submit", None),
    )
    .await;
    assert!(dropped.is_err());

    tokio::time::sleep(Duration::from_millis(600)).await;
    let (_, wizard) = send(&h.app, "GET", "/wizard", None).await;
    assert_eq!(wizard["loading"], false);
    assert!(matches!(h.store.lookup(), difteri_store::Lookup::Present(_)));

    let (status, body) = send(&h.app, "POST", "/wizard/submit", None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(h.backend.requests.lock().unwrap().len(), 2);
}
