//! Explicit page state shared via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The original page kept its state in globals (`selectedModels`,
//! `docContent`, a scroll flag). Each concern is a small state type here,
//! provided as an `RwSignal` context so handlers read and mutate it
//! explicitly instead of through hidden shared variables.

pub mod chat;
pub mod events;
pub mod scroll;
pub mod selection;
pub mod ui;
pub mod workflow;
