//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the reactive status the route guard observes; `session` owns the
//! persisted token and the transitions that change it.

pub mod auth;
pub mod session;
