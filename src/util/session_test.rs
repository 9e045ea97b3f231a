use super::*;

#[test]
fn parse_stored_reads_a_full_user_record() {
    let raw = r#"{"id":3,"email":"jdoe2@illinois.edu","location":"Urbana"}"#;
    let user = parse_stored(raw);
    assert_eq!(
        user,
        Some(User {
            id: 3,
            email: "jdoe2@illinois.edu".to_owned(),
            location: Some("Urbana".to_owned()),
        })
    );
}

#[test]
fn parse_stored_tolerates_a_missing_location() {
    let raw = r#"{"id":3,"email":"jdoe2@illinois.edu"}"#;
    assert!(parse_stored(raw).is_some());
}

#[test]
fn parse_stored_rejects_malformed_json() {
    assert_eq!(parse_stored("{not json"), None);
}

#[test]
fn parse_stored_rejects_records_missing_the_id() {
    assert_eq!(parse_stored(r#"{"email":"jdoe2@illinois.edu"}"#), None);
}
