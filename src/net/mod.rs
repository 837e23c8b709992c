//! Networking modules for the admin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `session` adapts the verify call to the
//! route guard, and `types` defines outcomes and wire bodies.

pub mod api;
pub mod session;
pub mod types;
