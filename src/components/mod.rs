//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat workspace surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod chat_view;
pub mod cloud_box;
pub mod event_feed;
pub mod model_card;
pub mod model_grid;
