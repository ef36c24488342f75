//! Networking modules for HTTP, websocket, and server-sent events.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `infer_client` manages the inference websocket
//! lifecycle, `sse` consumes the host's update stream, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod infer_client;
pub mod sse;
pub mod types;
