use super::*;

fn make_user() -> User {
    User {
        id: 3,
        email: "jdoe2@illinois.edu".to_owned(),
        location: None,
    }
}

#[test]
fn greeting_names_the_signed_in_user() {
    assert_eq!(greeting_line(Some(&make_user())), "Hello, jdoe2@illinois.edu");
}

#[test]
fn greeting_is_empty_without_a_user() {
    assert_eq!(greeting_line(None), "");
}
