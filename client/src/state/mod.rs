//! Client state modules shared through Leptos context.
//!
//! DESIGN
//! ======
//! `App` wraps each state struct in an `RwSignal` and provides it; pages and
//! components read it with `expect_context`.

pub mod media;
pub mod ui;
