use super::*;

// =====================
// Mode copy
// =====================

#[test]
fn headings_follow_the_mode() {
    assert_eq!(heading(AuthMode::Login), "Login");
    assert_eq!(heading(AuthMode::Register), "Sign Up");
    assert_eq!(intro(AuthMode::Login), "Please enter your details");
    assert_eq!(intro(AuthMode::Register), "Create a new account");
}

#[test]
fn submit_label_shows_progress_while_submitting() {
    assert_eq!(submit_label(AuthMode::Login, false), "Login");
    assert_eq!(submit_label(AuthMode::Register, false), "Sign Up");
    assert_eq!(submit_label(AuthMode::Login, true), "Processing...");
    assert_eq!(submit_label(AuthMode::Register, true), "Processing...");
}

#[test]
fn switch_copy_points_at_the_other_mode() {
    assert_eq!(switch_prompt(AuthMode::Login), "Don't have an account?");
    assert_eq!(switch_action(AuthMode::Login), "Sign up");
    assert_eq!(switch_prompt(AuthMode::Register), "Already have an account?");
    assert_eq!(switch_action(AuthMode::Register), "Login");
}

#[test]
fn toggling_flips_between_the_two_modes() {
    assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
    assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
}

// =====================
// Validation
// =====================

#[test]
fn validation_trims_the_email() {
    let (email, password) =
        validate_credentials("  jdoe2@illinois.edu  ", "hunter2").unwrap();
    assert_eq!(email, "jdoe2@illinois.edu");
    assert_eq!(password, "hunter2");
}

#[test]
fn validation_rejects_missing_fields() {
    assert!(validate_credentials("", "hunter2").is_err());
    assert!(validate_credentials("jdoe2@illinois.edu", "").is_err());
    assert!(validate_credentials("   ", "hunter2").is_err());
}

#[test]
fn validation_keeps_password_whitespace() {
    let (_, password) = validate_credentials("jdoe2@illinois.edu", " pass word ").unwrap();
    assert_eq!(password, " pass word ");
}
