//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The single chat workspace page owns route-scoped orchestration — mount
//! wiring, the upload pipeline, prompt submission — and delegates rendering
//! details to `components`.

pub mod chat;
pub(crate) mod chat_prompt_bar;
