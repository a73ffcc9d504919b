//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `navigation`, `request`) so views can
//! depend on small focused models. Only `session` is persisted.

pub mod navigation;
pub mod request;
pub mod session;
