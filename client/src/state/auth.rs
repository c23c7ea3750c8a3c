//! Auth-session status for the current browser context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. The home route guard
//! watches it to decide when to send the user back to login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Where the session stands relative to the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token, or the server rejected the one we had.
    #[default]
    LoggedOut,
    /// A token is stored but has not been confirmed yet.
    Checking,
    /// The server accepted the token.
    LoggedIn,
}

/// Authentication state shared between pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: SessionStatus,
}

impl AuthState {
    /// Initial state on page load. A stored token is only a claim until the
    /// profile endpoint accepts it.
    pub fn from_stored_token(present: bool) -> Self {
        let status = if present { SessionStatus::Checking } else { SessionStatus::LoggedOut };
        Self { status }
    }

    pub fn begin_check(&mut self) {
        self.status = SessionStatus::Checking;
    }

    pub fn sign_in(&mut self) {
        self.status = SessionStatus::LoggedIn;
    }

    pub fn sign_out(&mut self) {
        self.status = SessionStatus::LoggedOut;
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::LoggedIn
    }

    pub fn is_checking(&self) -> bool {
        self.status == SessionStatus::Checking
    }
}
