//! Wire DTOs for the upload, chat, config, and inference boundaries.
//!
//! DESIGN
//! ======
//! These types mirror the host's payloads field for field so serde does the
//! whole translation. The host marshals Go structs: config fields arrive in
//! exported PascalCase, the chats store expects PascalCase, and the
//! inference runner reads camelCase with every value as a string.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server reply to `POST /upload`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub callback: String,
    /// Extracted text content, present for document uploads.
    #[serde(default)]
    pub content: Option<String>,
}

impl UploadResponse {
    /// The upload succeeded and the host recognized the file as an image.
    pub fn is_image_success(&self) -> bool {
        self.status == "success" && self.callback == "image"
    }
}

/// A prompt/response/model triple persisted via `POST /chats`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChatRecord {
    pub prompt: String,
    pub response: String,
    pub model: String,
}

/// An inference job submitted over the websocket channel.
///
/// Every value travels as a string; the host forwards them verbatim to the
/// runner's command line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceJob {
    pub model_path: String,
    pub mmproj: String,
    pub image: String,
    pub prompt: String,
    pub context_size: String,
    pub seed: String,
    pub temp: String,
    pub response_delimiter: String,
    pub socket_number: String,
}

/// Prompt sent with every image-description job.
pub const IMAGE_PROMPT: &str = "Describe the image in detail.";

impl InferenceJob {
    /// Job describing an uploaded image with the vision chain's head model.
    ///
    /// Model and projector paths follow the host's layout under `models/`.
    pub fn image_description(model: &str, image: &str) -> Self {
        Self {
            model_path: format!("models/{model}/{model}-1.Q8_0.gguf"),
            mmproj: format!("models/{model}/mmproj-model-f16.gguf"),
            image: image.to_owned(),
            prompt: IMAGE_PROMPT.to_owned(),
            context_size: "4096".to_owned(),
            seed: "-1".to_owned(),
            temp: "0.7".to_owned(),
            response_delimiter: "encode_image_with_clip:".to_owned(),
            socket_number: "1".to_owned(),
        }
    }
}

/// One language model from the host's `/config` inventory.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub ctx: i64,
}

/// The slice of the host config this client consumes.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostConfig {
    #[serde(default)]
    pub language_models: Vec<ModelInfo>,
}

/// One server-sent update on the `/sseupdates` stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
    pub message: String,
    pub timestamp: String,
}

impl EventMessage {
    /// The single-line rendering used by the event feed.
    pub fn display_line(&self) -> String {
        format!("{} (received at {})", self.message, self.timestamp)
    }
}
