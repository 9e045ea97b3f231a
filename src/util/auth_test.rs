use super::*;
use crate::net::types::User;

fn make_user() -> User {
    User {
        id: 3,
        email: "jdoe2@illinois.edu".to_owned(),
        location: Some("Urbana".to_owned()),
    }
}

#[test]
fn unauth_redirect_fires_without_a_user() {
    let state = AuthState { user: None };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn authed_redirect_fires_with_a_user() {
    let state = AuthState { user: Some(make_user()) };
    assert!(should_redirect_authed(&state));
    assert!(!should_redirect_unauth(&state));
}
