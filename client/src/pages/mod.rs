//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `dashboard` is the parent layout; `home` and `media` render inside it.
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod dashboard;
pub mod home;
pub mod media;
