//! Failure classification for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a call to the remote API did not produce a usable result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the server refused the request itself rather than failing.
    pub fn is_client_rejection(&self) -> bool {
        matches!(self, Self::Status(code) if (400..500).contains(code))
    }

    /// Short message for the login form.
    pub fn sign_in_message(&self) -> &'static str {
        match self {
            Self::Status(_) if self.is_client_rejection() => "Invalid phone number or password.",
            Self::Status(_) => "Sign-in service unavailable. Try again later.",
            Self::Request(_) | Self::Unavailable => "Network error. Check your connection.",
            Self::Decode(_) => "Unexpected response from the server.",
        }
    }
}
