use super::*;

#[test]
fn date_part_strips_the_time_suffix() {
    assert_eq!(date_part("2025-11-04T09:30:00.000Z"), "2025-11-04");
}

#[test]
fn date_part_passes_through_bare_dates() {
    assert_eq!(date_part("2025-11-04"), "2025-11-04");
}
