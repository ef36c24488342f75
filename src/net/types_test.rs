use super::*;

// =============================================================
// UploadResponse
// =============================================================

#[test]
fn upload_response_parses_without_content() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"status":"success","callback":"image"}"#).expect("parse");
    assert_eq!(resp.status, "success");
    assert_eq!(resp.callback, "image");
    assert!(resp.content.is_none());
}

#[test]
fn upload_response_parses_with_content() {
    let resp: UploadResponse =
        serde_json::from_str(r#"{"status":"success","callback":"text","content":"extracted"}"#)
            .expect("parse");
    assert_eq!(resp.content.as_deref(), Some("extracted"));
}

#[test]
fn image_success_requires_both_fields() {
    let image = UploadResponse {
        status: "success".to_owned(),
        callback: "image".to_owned(),
        content: None,
    };
    assert!(image.is_image_success());

    let text = UploadResponse {
        callback: "text".to_owned(),
        ..image.clone()
    };
    assert!(!text.is_image_success());

    let failed = UploadResponse {
        status: "error".to_owned(),
        ..image
    };
    assert!(!failed.is_image_success());
}

// =============================================================
// ChatRecord
// =============================================================

#[test]
fn chat_record_serializes_pascal_case() {
    let record = ChatRecord {
        prompt: "p".to_owned(),
        response: "r".to_owned(),
        model: "m".to_owned(),
    };
    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(json["Prompt"], "p");
    assert_eq!(json["Response"], "r");
    assert_eq!(json["Model"], "m");
}

// =============================================================
// InferenceJob
// =============================================================

#[test]
fn inference_job_serializes_camel_case() {
    let job = InferenceJob::image_description("bakllava", "./public/uploads/cat.png");
    let json = serde_json::to_value(&job).expect("serialize");
    assert_eq!(json["modelPath"], "models/bakllava/bakllava-1.Q8_0.gguf");
    assert_eq!(json["mmproj"], "models/bakllava/mmproj-model-f16.gguf");
    assert_eq!(json["image"], "./public/uploads/cat.png");
    assert_eq!(json["contextSize"], "4096");
    assert_eq!(json["responseDelimiter"], "encode_image_with_clip:");
    assert_eq!(json["socketNumber"], "1");
}

#[test]
fn image_description_fills_sampling_defaults() {
    let job = InferenceJob::image_description("bakllava", "x.png");
    assert_eq!(job.prompt, IMAGE_PROMPT);
    assert_eq!(job.seed, "-1");
    assert_eq!(job.temp, "0.7");
}

// =============================================================
// Host config
// =============================================================

#[test]
fn host_config_parses_language_models() {
    let config: HostConfig = serde_json::from_str(
        r#"{"CurrentUser":"User","LanguageModels":[{"Name":"llama3-8b-instruct","Homepage":"https://example.com","Ctx":8192},{"Name":"gemma-2-9b-it"}]}"#,
    )
    .expect("parse");
    assert_eq!(config.language_models.len(), 2);
    assert_eq!(config.language_models[0].name, "llama3-8b-instruct");
    assert_eq!(config.language_models[0].ctx, 8192);
    assert_eq!(config.language_models[1].homepage, "");
    assert_eq!(config.language_models[1].ctx, 0);
}

#[test]
fn host_config_without_models_defaults_empty() {
    let config: HostConfig = serde_json::from_str(r"{}").expect("parse");
    assert!(config.language_models.is_empty());
}

// =============================================================
// EventMessage
// =============================================================

#[test]
fn event_message_round_trips() {
    let message: EventMessage =
        serde_json::from_str(r#"{"message":"download complete","timestamp":"12:00"}"#)
            .expect("parse");
    assert_eq!(message.message, "download complete");
    assert_eq!(message.timestamp, "12:00");
}

#[test]
fn event_message_display_line_includes_timestamp() {
    let message = EventMessage {
        message: "download complete".to_owned(),
        timestamp: "12:00".to_owned(),
    };
    assert_eq!(message.display_line(), "download complete (received at 12:00)");
}
