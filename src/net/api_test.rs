use super::*;

#[test]
fn claim_endpoint_embeds_the_item_id() {
    assert_eq!(claim_endpoint(7), "/items/7/claim");
}

#[test]
fn register_body_omits_an_unset_location() {
    let body = register_body("jdoe2@illinois.edu", "hunter2", None);
    assert_eq!(body["email"], "jdoe2@illinois.edu");
    assert_eq!(body["password"], "hunter2");
    assert!(body.get("location").is_none());
}

#[test]
fn register_body_carries_a_given_location() {
    let body = register_body("jdoe2@illinois.edu", "hunter2", Some("Urbana"));
    assert_eq!(body["location"], "Urbana");
}

#[test]
fn claim_body_defaults_the_message_to_empty() {
    let body = claim_body(3, None);
    assert_eq!(body["claimant_id"], 3);
    assert_eq!(body["message"], "");
}

#[test]
fn claim_body_carries_an_explicit_message() {
    let body = claim_body(3, Some("Saw this at the front desk"));
    assert_eq!(body["message"], "Saw this at the front desk");
}
