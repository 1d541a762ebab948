use super::*;

fn id(n: i64) -> RecordId {
    RecordId::from(n)
}

#[test]
fn toggle_adds_then_removes() {
    let mut week = WeekSelection::new();
    week.toggle(id(1));
    assert!(week.is_selected(&id(1)));
    week.toggle(id(1));
    assert!(week.is_empty());
}

#[test]
fn third_selection_evicts_earliest() {
    let mut week = WeekSelection::new();
    week.toggle(id(1));
    week.toggle(id(2));
    week.toggle(id(3));
    assert_eq!(week.len(), 2);
    assert_eq!(week.selected(), &[id(2), id(3)]);
    assert!(!week.is_selected(&id(1)));
}

#[test]
fn eviction_follows_selection_order_after_removal() {
    let mut week = WeekSelection::new();
    week.toggle(id(1));
    week.toggle(id(2));
    week.toggle(id(1));
    week.toggle(id(3));
    week.toggle(id(4));
    assert_eq!(week.selected(), &[id(3), id(4)]);
}

#[test]
fn submission_requires_exactly_two() {
    let mut week = WeekSelection::new();
    assert!(week.submission().is_err());
    week.toggle(id(5));
    assert_eq!(week.submission().unwrap_err(), "Please select exactly 2 athletes");
    week.toggle(id(9));
    let request = week.submission().unwrap();
    assert_eq!(request.athlete_ids, vec![id(5), id(9)]);
}

#[test]
fn submission_serializes_numeric_ids() {
    let mut week = WeekSelection::new();
    week.toggle(id(5));
    week.toggle(RecordId::from("a-12"));
    let body = serde_json::to_value(week.submission().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "athleteIds": [5, "a-12"] }));
}
