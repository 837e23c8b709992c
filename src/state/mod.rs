//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State stays local to the component that owns it; these modules define the
//! models and the pure functions that derive rendering from them.

pub mod auth;
