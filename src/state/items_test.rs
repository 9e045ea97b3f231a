use super::*;
use crate::net::types::{FoundItem, LostItem};

fn make_lost() -> LostItem {
    LostItem {
        id: 12,
        title: "Blue backpack".to_owned(),
        description: "Jansport with laptop stickers".to_owned(),
        location: "Grainger Library".to_owned(),
        date_lost: "2025-11-04".to_owned(),
        status: ItemStatus::Pending,
        created_at: "2025-11-04T16:20:00".to_owned(),
        user_id: 3,
        category: Some("bag".to_owned()),
        contact_email: Some("jdoe2@illinois.edu".to_owned()),
    }
}

fn make_found() -> FoundItem {
    FoundItem {
        id: 40,
        title: "Water bottle".to_owned(),
        description: "Green Hydro Flask".to_owned(),
        location: "Illini Union".to_owned(),
        date_found: Some("2025-11-02".to_owned()),
        status: ItemStatus::Pending,
        created_at: "2025-11-02T10:05:00".to_owned(),
        user_id: 8,
        category: None,
        contact_email: None,
    }
}

// =====================
// Derivation
// =====================

#[test]
fn lost_entries_flatten_id_date_and_contact() {
    let entry = ListedItem::from(Item::Lost(make_lost()));
    assert_eq!(entry.id, "12");
    assert_eq!(entry.kind, ItemType::Lost);
    assert_eq!(entry.date, "2025-11-04");
    assert_eq!(entry.category, Category::Bag);
    assert_eq!(entry.contact_netid, "jdoe2");
}

#[test]
fn found_entries_prefer_date_found() {
    let entry = ListedItem::from(Item::Found(make_found()));
    assert_eq!(entry.date, "2025-11-02");
}

#[test]
fn found_entries_fall_back_to_created_at() {
    let mut record = make_found();
    record.date_found = None;
    let entry = ListedItem::from(Item::Found(record));
    assert_eq!(entry.date, "2025-11-02T10:05:00");
}

#[test]
fn a_missing_contact_email_becomes_a_synthetic_netid() {
    let entry = ListedItem::from(Item::Found(make_found()));
    assert_eq!(entry.contact_netid, "user8");
}

#[test]
fn an_unknown_category_maps_to_other() {
    let mut record = make_lost();
    record.category = Some("spaceship".to_owned());
    let entry = ListedItem::from(Item::Lost(record));
    assert_eq!(entry.category, Category::Other);
}

#[test]
fn a_missing_category_maps_to_other() {
    let entry = ListedItem::from(Item::Found(make_found()));
    assert_eq!(entry.category, Category::Other);
}

// =====================
// Visibility and claims
// =====================

#[test]
fn pending_lost_entries_are_listed_and_claimable() {
    let entry = ListedItem::from(Item::Lost(make_lost()));
    assert!(entry.is_listed());
    assert!(entry.claimable());
}

#[test]
fn finished_lost_entries_leave_the_listing() {
    let mut record = make_lost();
    record.status = ItemStatus::Finished;
    let entry = ListedItem::from(Item::Lost(record));
    assert!(!entry.is_listed());
    assert!(!entry.claimable());
}

#[test]
fn found_entries_stay_listed_in_every_status_but_take_no_claims() {
    let mut record = make_found();
    record.status = ItemStatus::Finished;
    let entry = ListedItem::from(Item::Found(record));
    assert!(entry.is_listed());
    assert!(!entry.claimable());
}

// =====================
// Category parsing
// =====================

#[test]
fn every_category_parses_from_its_own_identifier() {
    for category in Category::ALL {
        assert_eq!(Category::parse(category.as_str()), Some(category));
    }
}

#[test]
fn parse_rejects_labels_and_unknown_values() {
    assert_eq!(Category::parse("Wallet"), None);
    assert_eq!(Category::parse("misc"), None);
}
