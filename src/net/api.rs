//! REST API helpers for communicating with the Eternal host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Every failure
//! is surfaced as a value the caller logs and then continues from; nothing
//! here retries or propagates further.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatRecord, ModelInfo};
#[cfg(feature = "hydrate")]
use super::types::{HostConfig, UploadResponse};

#[cfg(any(test, feature = "hydrate"))]
fn stop_streaming_endpoint(turn_id: u64) -> String {
    format!("/stop-streaming/{turn_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn prompt_submit_failed_message(status: u16) -> String {
    format!("prompt submit failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_chat_failed_message(status: u16) -> String {
    format!("chat create failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn stop_streaming_failed_message(status: u16) -> String {
    format!("stop streaming failed: {status}")
}

/// Fetch the selected model names from `GET /models/selected`.
/// Returns `None` on transport, status, or parse failure.
pub async fn fetch_selected_models() -> Option<Vec<String>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/models/selected")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<String>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the language-model inventory from `GET /config`.
pub async fn fetch_language_models() -> Option<Vec<ModelInfo>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/config").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let config: HostConfig = resp.json().await.ok()?;
        Some(config.language_models)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Upload a file via `POST /upload` as a multipart form with field `file`.
/// Returns `None` on any failure; the caller inserts nothing in that case.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: &web_sys::File) -> Option<UploadResponse> {
    let form = web_sys::FormData::new().ok()?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .ok()?;
    let resp = gloo_net::http::Request::post("/upload")
        .body(form)
        .ok()?
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<UploadResponse>().await.ok()
}

/// Submit a prompt via `POST /chatsubmit` as form data, carrying the
/// content extracted from the last upload. The response body (a rendered
/// turn for the host's own templating) is not consumed here.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the host responds
/// with a non-OK status.
pub async fn submit_prompt(prompt: &str, doc_content: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| "form data unavailable".to_owned())?;
        form.append_with_str("userprompt", prompt)
            .map_err(|_| "form data unavailable".to_owned())?;
        form.append_with_str("fileContent", doc_content)
            .map_err(|_| "form data unavailable".to_owned())?;
        let resp = gloo_net::http::Request::post("/chatsubmit")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(prompt_submit_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (prompt, doc_content);
        Err("not available on server".to_owned())
    }
}

/// Persist a finished exchange via `POST /chats`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the host responds
/// with a non-OK status. The caller logs and continues.
pub async fn create_chat(record: &ChatRecord) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/chats")
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_chat_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        Err("not available on server".to_owned())
    }
}

/// Ask the host to stop streaming a turn via `POST /stop-streaming/{turn}`.
///
/// This only requests the stop; no in-flight local work is cancelled.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the host responds
/// with a non-OK status.
pub async fn stop_streaming(turn_id: u64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = stop_streaming_endpoint(turn_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(stop_streaming_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = turn_id;
        Err("not available on server".to_owned())
    }
}
