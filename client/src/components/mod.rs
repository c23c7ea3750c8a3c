//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render data handed to them by pages and do not touch session
//! storage or the network.

pub mod profile_fields;
