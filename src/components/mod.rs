//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and form pieces while reading shared state
//! from Leptos context providers.

pub mod course_form;
pub mod header;
pub mod require_session;
pub mod validation_errors;
