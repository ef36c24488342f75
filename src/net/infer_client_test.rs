use super::*;

// =============================================================
// Socket URL derivation
// =============================================================

#[test]
fn infer_socket_url_uses_ws_for_http_pages() {
    assert_eq!(
        infer_socket_url("http://localhost:8080/", "localhost:8080"),
        "ws://localhost:8080/ws"
    );
}

#[test]
fn infer_socket_url_uses_wss_for_https_pages() {
    assert_eq!(
        infer_socket_url("https://eternal.example/", "eternal.example"),
        "wss://eternal.example/ws"
    );
}

// =============================================================
// Job encoding
// =============================================================

#[test]
fn encode_job_produces_camel_case_json() {
    let job = InferenceJob::image_description("bakllava", "./public/uploads/cat.png");
    let payload = encode_job(&job).expect("encode");
    assert!(payload.contains("\"modelPath\""));
    assert!(payload.contains("\"responseDelimiter\""));
    assert!(payload.contains("\"socketNumber\":\"1\""));
}

// =============================================================
// Disconnected sender
// =============================================================

#[test]
fn default_sender_reports_failure() {
    let sender = JobSender::default();
    let job = InferenceJob::image_description("bakllava", "x.png");
    assert!(!sender.send(&job));
}
