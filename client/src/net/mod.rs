//! Networking modules for the remote auth/profile REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the wire schema shared by requests and views.

pub mod api;
pub mod error;
pub mod types;
