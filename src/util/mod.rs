//! Helpers shared by the guard component and its tests.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules keep mount lifecycle and logging concerns out of the
//! component body so they can be exercised without a browser.

pub mod auth;
pub mod guard_observer;
