//! Wire DTOs for the remote auth/profile API.
//!
//! DESIGN
//! ======
//! The profile endpoint returns a flat JSON object whose key set is owned by
//! the server. `UserProfile` keeps every key in server order so the home page
//! can render fields generically instead of tracking a fixed schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::PROFILE_PLACEHOLDER;

/// Body of `POST /auth/signin-with-phone-and-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest<'a> {
    pub phone_number: &'a str,
    pub password: &'a str,
}

/// Successful sign-in response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub access_token: String,
}

/// Opaque bearer credential returned by sign-in.
///
/// `Debug` is redacted so the token never reaches console logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token. Blank strings are not tokens.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// One key/value pair from the profile record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileField {
    pub key: String,
    /// `None` when the server sent `null`.
    pub value: Option<String>,
}

impl ProfileField {
    /// Rendered value, substituting the placeholder for absent values.
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(PROFILE_PLACEHOLDER)
    }
}

/// Profile record returned by `GET /user/get-profile`, in server key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
    fields: Vec<ProfileField>,
}

impl UserProfile {
    pub fn from_map(map: Map<String, Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| ProfileField { key, value: field_text(value) })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[ProfileField] {
        &self.fields
    }

    /// Present value for `key`, if the server sent one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.value.as_deref())
    }

    /// Heading for the home page, personalized when `fullName` is known.
    pub fn greeting(&self) -> String {
        match self.get("fullName").map(str::trim) {
            Some(name) if !name.is_empty() => format!("Welcome, {name}!"),
            _ => "Welcome to the Home Page!".to_owned(),
        }
    }
}

impl<'de> Deserialize<'de> for UserProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_map)
    }
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}
