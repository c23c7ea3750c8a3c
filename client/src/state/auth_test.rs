use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_logged_out() {
    let state = AuthState::default();
    assert_eq!(state.status, SessionStatus::LoggedOut);
    assert!(!state.is_authenticated());
}

#[test]
fn stored_token_starts_unconfirmed() {
    assert_eq!(AuthState::from_stored_token(true).status, SessionStatus::Checking);
    assert_eq!(AuthState::from_stored_token(false).status, SessionStatus::LoggedOut);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn sign_in_then_sign_out_cycles_back() {
    let mut state = AuthState::from_stored_token(false);
    state.sign_in();
    assert!(state.is_authenticated());
    state.sign_out();
    assert_eq!(state, AuthState::default());
}

#[test]
fn begin_check_marks_checking() {
    let mut state = AuthState::default();
    state.sign_in();
    state.begin_check();
    assert!(state.is_checking());
    assert!(!state.is_authenticated());
}
