use super::*;

#[test]
fn client_rejection_covers_4xx_only() {
    assert!(ApiError::Status(401).is_client_rejection());
    assert!(ApiError::Status(404).is_client_rejection());
    assert!(!ApiError::Status(500).is_client_rejection());
    assert!(!ApiError::Request("offline".to_owned()).is_client_rejection());
}

#[test]
fn sign_in_message_for_bad_credentials() {
    assert_eq!(ApiError::Status(401).sign_in_message(), "Invalid phone number or password.");
    assert_eq!(ApiError::Status(400).sign_in_message(), "Invalid phone number or password.");
}

#[test]
fn sign_in_message_for_server_and_transport_failures() {
    assert_eq!(ApiError::Status(503).sign_in_message(), "Sign-in service unavailable. Try again later.");
    assert_eq!(
        ApiError::Request("dns".to_owned()).sign_in_message(),
        "Network error. Check your connection."
    );
    assert_eq!(ApiError::Unavailable.sign_in_message(), "Network error. Check your connection.");
    assert_eq!(
        ApiError::Decode("missing field".to_owned()).sign_in_message(),
        "Unexpected response from the server."
    );
}

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::Status(418).to_string(), "server responded with status 418");
}

#[test]
fn sign_in_message_follows_client_rejection_boundary() {
    for code in [399, 400, 499, 500] {
        let err = ApiError::Status(code);
        let bad_credentials = err.sign_in_message() == "Invalid phone number or password.";
        assert_eq!(bad_credentials, err.is_client_rejection(), "status {code}");
    }
}
