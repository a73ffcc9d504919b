//! Networking modules for the course-catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the browser/test seam, `api` issues the individual calls,
//! `outcome` maps results onto view behavior, and `types` defines the wire
//! schema.

pub mod api;
pub mod outcome;
pub mod transport;
pub mod types;
