//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render inside an `AuthGuard`; they never check the session
//! themselves.

pub mod home;
pub mod login;
