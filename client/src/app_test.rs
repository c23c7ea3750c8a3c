use super::*;

#[test]
fn route_paths_match_router_segments() {
    assert_eq!(AppRoute::Login.path(), "/");
    assert_eq!(AppRoute::Home.path(), "/home");
}
