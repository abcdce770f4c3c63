//! Networking modules for the items API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `GET` against the items endpoint and `types`
//! defines the item schema it returns.

pub mod api;
pub mod types;
