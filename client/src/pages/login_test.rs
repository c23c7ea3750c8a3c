use super::*;

#[test]
fn submit_label_reflects_in_flight_request() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Signing in...");
}
