//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure math from page and component logic to
//! improve reuse and testability.

pub mod rotation;
