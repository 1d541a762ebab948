use super::*;

fn fill_step(wizard: &mut RecruitWizard, step: RecruitStep) {
    for field in step.fields() {
        let value = match field.input() {
            RecruitInput::Date => "2006-04-12",
            RecruitInput::Number => "3",
            RecruitInput::Gender => "female",
            RecruitInput::Email => "ama@example.com",
            RecruitInput::Sport | RecruitInput::Team => "2",
            _ => "Ama",
        };
        wizard.set(field, value);
    }
}

fn completed_wizard() -> RecruitWizard {
    let mut wizard = RecruitWizard::new();
    for step in RecruitStep::ALL {
        fill_step(&mut wizard, step);
        let _ = wizard.next();
    }
    wizard
}

// =============================================================
// Field table
// =============================================================

#[test]
fn every_step_but_additional_has_required_fields() {
    for step in RecruitStep::ALL {
        let required = step.fields().filter(|f| f.required()).count();
        if step == RecruitStep::Additional {
            assert_eq!(required, 0);
        } else {
            assert!(required > 0, "{step:?} has no required fields");
        }
    }
}

#[test]
fn optional_fields_are_major_achievements_and_comments() {
    let optional: Vec<_> = RecruitField::ALL.into_iter().filter(|f| !f.required()).collect();
    assert_eq!(optional, vec![RecruitField::Major, RecruitField::Achievements, RecruitField::AdditionalComments]);
}

#[test]
fn steps_are_numbered_one_to_five() {
    let numbers: Vec<u8> = RecruitStep::ALL.into_iter().map(RecruitStep::number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_from_step_one_with_any_required_field_empty_does_not_advance() {
    for skipped in RecruitStep::Personal.fields() {
        let mut wizard = RecruitWizard::new();
        fill_step(&mut wizard, RecruitStep::Personal);
        wizard.set(skipped, "");
        let err = wizard.next().unwrap_err();
        assert_eq!(err.fields, vec![skipped]);
        assert_eq!(wizard.step(), RecruitStep::Personal);
        assert!(wizard.error().is_some());
    }
}

#[test]
fn whitespace_does_not_satisfy_required_field() {
    let mut wizard = RecruitWizard::new();
    fill_step(&mut wizard, RecruitStep::Personal);
    wizard.set(RecruitField::LastName, "   ");
    assert!(wizard.next().is_err());
    assert_eq!(wizard.step().number(), 1);
}

#[test]
fn next_advances_when_step_complete() {
    let mut wizard = RecruitWizard::new();
    fill_step(&mut wizard, RecruitStep::Personal);
    assert_eq!(wizard.next(), Ok(RecruitStep::Academic));
    assert!(wizard.error().is_none());
}

#[test]
fn academic_step_does_not_require_major() {
    let mut wizard = RecruitWizard::new();
    fill_step(&mut wizard, RecruitStep::Personal);
    wizard.next().unwrap();
    wizard.set(RecruitField::GraduationYear, "2028");
    wizard.set(RecruitField::Gpa, "3.6");
    assert_eq!(wizard.next(), Ok(RecruitStep::Athletic));
}

#[test]
fn previous_is_refused_on_step_one() {
    let mut wizard = RecruitWizard::new();
    assert_eq!(wizard.previous(), None);
    assert_eq!(wizard.step(), RecruitStep::Personal);
}

#[test]
fn previous_keeps_entered_values() {
    let mut wizard = RecruitWizard::new();
    fill_step(&mut wizard, RecruitStep::Personal);
    wizard.next().unwrap();
    assert_eq!(wizard.previous(), Some(RecruitStep::Personal));
    assert_eq!(wizard.value(RecruitField::FirstName), "Ama");
}

#[test]
fn completed_wizard_rests_on_final_step() {
    let wizard = completed_wizard();
    assert_eq!(wizard.step(), RecruitStep::Additional);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_builds_multipart_without_empty_fields() {
    let mut wizard = completed_wizard();
    wizard.set(RecruitField::Major, "");
    wizard.set(RecruitField::AdditionalComments, "Available for trials in June");
    let request = wizard.begin_submit().unwrap();
    assert_eq!(request.encoding, Encoding::Multipart);
    assert!(!request.has_field("major"));
    assert_eq!(request.field("additionalComments"), Some("Available for trials in June"));
    assert_eq!(request.field("firstName"), Some("Ama"));
    assert!(wizard.is_submitting());
}

#[test]
fn begin_submit_revalidates_earlier_steps() {
    let mut wizard = completed_wizard();
    wizard.set(RecruitField::Email, "");
    let err = wizard.begin_submit().unwrap_err();
    assert_eq!(err.step, RecruitStep::Contact);
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.step(), RecruitStep::Additional);
}

#[test]
fn successful_submission_navigates_to_recruit_and_leaves_form() {
    let mut wizard = completed_wizard();
    wizard.begin_submit().unwrap();
    assert_eq!(wizard.finish_submit(Ok(())), Some("/recruit"));
    assert!(wizard.is_submitted());
    assert!(!wizard.is_submitting());
}

#[test]
fn failed_submission_stays_on_final_step_with_server_message() {
    let mut wizard = completed_wizard();
    wizard.begin_submit().unwrap();
    let outcome = wizard.finish_submit(Err(ApiError::Application("Email already registered".to_owned())));
    assert_eq!(outcome, None);
    assert_eq!(wizard.step(), RecruitStep::Additional);
    assert_eq!(wizard.error(), Some("Email already registered"));
    assert_eq!(wizard.value(RecruitField::PhoneNumber), "Ama");
    assert!(!wizard.is_submitted());
}

// =============================================================
// Team picker
// =============================================================

fn teams() -> Vec<Team> {
    serde_json::from_value(serde_json::json!([
        {"id": 10, "name": "Elite", "sportName": "Football", "sportId": 1},
        {"id": 11, "name": "Dunkers", "sportName": "Basketball", "sportId": 2},
        {"id": 12, "name": "Walk-ons", "sportName": ""}
    ]))
    .unwrap()
}

#[test]
fn choosing_a_sport_keeps_every_team_selectable() {
    let mut wizard = RecruitWizard::new();
    wizard.set(RecruitField::Sport, "1");
    wizard.set(RecruitField::Team, "11");
    let options = team_options(&teams());
    let values: Vec<_> = options.iter().map(|(value, _)| value.as_str()).collect();
    assert_eq!(values, ["10", "11", "12"]);
    assert!(values.contains(&wizard.value(RecruitField::Team)));
}

#[test]
fn team_labels_name_the_sport() {
    let options = team_options(&teams());
    assert_eq!(options[0].1, "Elite (Football)");
    assert_eq!(options[1].1, "Dunkers (Basketball)");
    assert_eq!(options[2].1, "Walk-ons");
}
