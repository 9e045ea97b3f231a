use super::*;

fn make_user() -> User {
    User {
        id: 3,
        email: "jdoe2@illinois.edu".to_owned(),
        location: None,
    }
}

fn filled_form() -> PostForm {
    PostForm {
        kind: ItemType::Lost,
        title: "Calculator".to_owned(),
        description: "TI-84, initials on the back".to_owned(),
        category: Category::Electronic,
        location: "Siebel 1404".to_owned(),
        date: "2025-11-01".to_owned(),
    }
}

#[test]
fn new_drafts_default_to_a_lost_report() {
    let form = PostForm::new("2025-11-04".to_owned());
    assert_eq!(form.kind, ItemType::Lost);
    assert_eq!(form.category, Category::Other);
    assert_eq!(form.date, "2025-11-04");
    assert!(form.title.is_empty());
}

#[test]
fn reset_clears_the_text_fields_only() {
    let mut form = filled_form();
    form.kind = ItemType::Found;
    form.reset_after_post();
    assert!(form.title.is_empty());
    assert!(form.description.is_empty());
    assert!(form.location.is_empty());
    assert_eq!(form.kind, ItemType::Found);
    assert_eq!(form.category, Category::Electronic);
    assert_eq!(form.date, "2025-11-01");
}

#[test]
fn lost_input_uses_the_lost_date_key_and_reporter_identity() {
    let form = filled_form();
    let input = form.lost_input(&make_user());
    assert_eq!(input.date_lost, "2025-11-01");
    assert_eq!(input.user_id, 3);
    assert_eq!(input.category.as_deref(), Some("electronic"));
    assert_eq!(input.contact_email.as_deref(), Some("jdoe2@illinois.edu"));
}

#[test]
fn found_input_uses_the_found_date_key() {
    let mut form = filled_form();
    form.kind = ItemType::Found;
    let input = form.found_input(&make_user());
    assert_eq!(input.date_found, "2025-11-01");
    assert_eq!(input.title, "Calculator");
}
