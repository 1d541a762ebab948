use super::*;
use serde_json::json;

fn sports() -> Vec<Sport> {
    serde_json::from_value(json!([
        {"sport_id": 1, "sport_name": "Football"},
        {"sport_id": 2, "sport_name": "Basketball"}
    ]))
    .unwrap()
}

fn news_row() -> NewsItem {
    serde_json::from_value(json!({"id": 7, "headline": "Derby tonight", "sport": "Basketball", "date": "2024-11-02"}))
        .unwrap()
}

fn team_row() -> Team {
    serde_json::from_value(json!({"id": 3, "name": "Elite", "sportName": "Football", "sportId": 1, "coach_name": null}))
        .unwrap()
}

// =============================================================
// Save payloads
// =============================================================

#[test]
fn save_with_selected_row_includes_its_id() {
    let modal = CrudModal::edit::<NewsAdmin>(&news_row(), &sports());
    let request = modal.save_request::<NewsAdmin>();
    assert_eq!(request.field("news_id"), Some("7"));
    assert_eq!(request.encoding, Encoding::Json);
}

#[test]
fn save_without_selected_row_omits_id() {
    let mut modal = CrudModal::add::<NewsAdmin>();
    modal.values.set("headline", "Derby tonight");
    let request = modal.save_request::<NewsAdmin>();
    assert!(!request.has_field("news_id"));
    assert_eq!(request.field("headline"), Some("Derby tonight"));
}

#[test]
fn every_section_uses_its_own_id_field() {
    let id = RecordId::from(4);
    let editing = CrudModal { editing: Some(id), ..CrudModal::default() };
    assert!(editing.save_request::<HighlightAdmin>().has_field("highlight_id"));
    assert!(editing.save_request::<AthleteAdmin>().has_field("athlete_id"));
    assert!(editing.save_request::<EventAdmin>().has_field("event_id"));
    assert!(editing.save_request::<TeamAdmin>().has_field("team_id"));
}

#[test]
fn file_fields_are_not_form_values() {
    let modal = CrudModal::add::<HighlightAdmin>();
    let names: Vec<_> = modal.values.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["title", "date", "link"]);
    assert_eq!(HighlightAdmin::ENCODING, Encoding::Multipart);
}

// =============================================================
// Row to form mapping
// =============================================================

#[test]
fn edit_resolves_sport_name_to_id() {
    let modal = CrudModal::edit::<NewsAdmin>(&news_row(), &sports());
    assert_eq!(modal.values.get("sport_id"), "2");
    assert_eq!(modal.title::<NewsAdmin>(), "Edit News");
}

#[test]
fn unknown_sport_leaves_select_blank() {
    let mut row = news_row();
    row.sport = "Rowing".to_owned();
    let modal = CrudModal::edit::<NewsAdmin>(&row, &sports());
    assert_eq!(modal.values.get("sport_id"), "");
}

#[test]
fn team_form_prefers_row_sport_id() {
    let modal = CrudModal::edit::<TeamAdmin>(&team_row(), &[]);
    assert_eq!(modal.values.get("team_name"), "Elite");
    assert_eq!(modal.values.get("sport_id"), "1");
    assert_eq!(modal.values.get("coach_name"), "");
}

#[test]
fn team_cells_show_na_for_missing_contact() {
    let cells = TeamAdmin::cells(&team_row());
    assert_eq!(cells[2], Cell::Text("N/A".to_owned()));
    assert_eq!(cells.len(), TeamAdmin::COLUMNS.len());
}

#[test]
fn needs_sports_only_when_form_has_sport_select() {
    assert!(NewsAdmin::needs_sports());
    assert!(AthleteAdmin::needs_sports());
    assert!(!HighlightAdmin::needs_sports());
}

fn athlete_row(gender: &str) -> Athlete {
    serde_json::from_value(json!({
        "id": 10, "firstName": "Ama", "lastName": "Owusu", "gender": gender, "sport": "Football"
    }))
    .unwrap()
}

#[test]
fn athlete_gender_prefills_a_listed_option() {
    let modal = CrudModal::edit::<AthleteAdmin>(&athlete_row("Male"), &sports());
    assert_eq!(modal.values.get("gender"), "Male");
    assert!(ADMIN_GENDER_OPTIONS.contains(&modal.values.get("gender")));
    let request = modal.save_request::<AthleteAdmin>();
    assert_eq!(request.field("gender"), Some("Male"));
}

#[test]
fn edit_waits_for_sports_lookup() {
    let loading = ViewState::<Vec<Sport>>::Loading;
    assert!(!can_edit(AthleteAdmin::needs_sports(), &loading));
    assert!(can_edit(HighlightAdmin::needs_sports(), &loading));
    assert!(can_edit(true, &ViewState::Success(sports())));
    assert!(can_edit(true, &ViewState::Failure("Unable to connect to the server".to_owned())));
}

// =============================================================
// Modal lifecycle
// =============================================================

#[test]
fn failed_save_keeps_modal_open_with_message() {
    let mut modal = CrudModal::add::<TeamAdmin>();
    modal.begin_save();
    let close = modal.finish_save(Err(ApiError::Application("Team name already exists".to_owned())));
    assert!(!close);
    assert!(!modal.saving);
    assert_eq!(modal.error.as_deref(), Some("Team name already exists"));
}

#[test]
fn successful_save_closes_modal() {
    let mut modal = CrudModal::add::<EventAdmin>();
    modal.begin_save();
    assert!(modal.finish_save(Ok(())));
    assert_eq!(modal.title::<EventAdmin>(), "Add Event");
}

#[test]
fn sections_have_distinct_slugs() {
    let mut slugs: Vec<_> = AdminSection::ALL.iter().map(|s| s.slug()).collect();
    slugs.dedup();
    assert_eq!(slugs.len(), 6);
    assert_eq!(AdminSection::default(), AdminSection::News);
}

#[test]
fn successful_delete_reloads_the_list() {
    assert_eq!(DeleteOutcome::from_result(Ok(())), DeleteOutcome::Reload);
}

#[test]
fn failed_delete_reports_without_reloading() {
    let outcome = DeleteOutcome::from_result(Err(ApiError::Network("connection reset".to_owned())));
    assert_eq!(outcome, DeleteOutcome::Failed("Unable to connect to the server".to_owned()));
}
