//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the logic stays testable without a DOM.

pub mod dark_mode;
pub mod endpoint;
