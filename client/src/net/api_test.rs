use super::*;

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    assert_eq!(
        endpoint("https://dev.api.infigon.app", SIGN_IN_PATH),
        "https://dev.api.infigon.app/auth/signin-with-phone-and-password"
    );
    assert_eq!(
        endpoint("https://api.example.test/", PROFILE_PATH),
        "https://api.example.test/user/get-profile"
    );
}

#[test]
fn token_from_response_accepts_non_blank_token() {
    let body = SignInResponse { access_token: "tok-9".to_owned() };
    assert_eq!(token_from_response(body).unwrap().as_str(), "tok-9");
}

#[test]
fn token_from_response_rejects_blank_token() {
    let body = SignInResponse { access_token: String::new() };
    assert!(matches!(token_from_response(body), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    use futures::executor::block_on;

    assert_eq!(block_on(sign_in("1", "2")), Err(ApiError::Unavailable));
    let token = AccessToken::new("t").unwrap();
    assert_eq!(block_on(fetch_profile(&token)), Err(ApiError::Unavailable));
}
