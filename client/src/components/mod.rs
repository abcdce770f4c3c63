//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and media cards while reading/writing
//! shared state from Leptos context providers.

pub mod media_items_card;
pub mod nav_list;
pub mod search_bar;
pub mod toggles;
