//! Back-office CRUD sections.
//!
//! DESIGN
//! ======
//! Every managed record type (news, highlights, athletes, events, teams) is
//! described once by an [`AdminResource`]: which endpoints it talks to, the
//! id field the save endpoint uses to tell an update from a create, the modal
//! fields, and the table columns. A single generic screen renders any of
//! them, so add/edit/delete behave identically everywhere.
//!
//! The save handler is shared by add and edit. [`CrudModal::save_request`]
//! appends the row id only when a row was selected for editing.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::de::DeserializeOwned;
use wire::endpoints::{
    DELETE_ATHLETE, DELETE_EVENT, DELETE_HIGHLIGHT, DELETE_NEWS, DELETE_TEAM, GET_ATHLETES, GET_EVENTS,
    GET_HIGHLIGHTS, GET_NEWS, GET_TEAMS, SAVE_ATHLETE, SAVE_EVENT, SAVE_HIGHLIGHT, SAVE_NEWS, SAVE_TEAM,
};
use wire::{ApiError, Athlete, Encoding, Endpoint, Event, Highlight, NewsItem, RecordId, SaveRequest, Sport, Team};

use crate::state::fetch::ViewState;

// =============================================================================
// SECTIONS
// =============================================================================

/// Sidebar entries of the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdminSection {
    #[default]
    News,
    Highlights,
    Athletes,
    Events,
    AthletesOfTheWeek,
    Teams,
}

impl AdminSection {
    pub const ALL: [Self; 6] =
        [Self::News, Self::Highlights, Self::Athletes, Self::Events, Self::AthletesOfTheWeek, Self::Teams];

    pub fn title(self) -> &'static str {
        match self {
            Self::News => NewsAdmin::TITLE,
            Self::Highlights => HighlightAdmin::TITLE,
            Self::Athletes => AthleteAdmin::TITLE,
            Self::Events => EventAdmin::TITLE,
            Self::AthletesOfTheWeek => "Athletes of the Week",
            Self::Teams => TeamAdmin::TITLE,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Highlights => "highlights",
            Self::Athletes => "athletes",
            Self::Events => "events",
            Self::AthletesOfTheWeek => "athletesoftheweek",
            Self::Teams => "teams",
        }
    }
}

// =============================================================================
// FORM FIELDS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Date,
    Time,
    Url,
    Email,
    Gender,
    /// Select over the sports lookup; the value is the sport id.
    Sport,
    /// File input, sent as a multipart part and never held in [`FormValues`].
    Image,
}

/// Gender values stored on athlete records, in select order.
pub const ADMIN_GENDER_OPTIONS: [&str; 2] = ["Male", "Female"];

/// One modal input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name sent to the save endpoint.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }

    pub fn is_file(&self) -> bool {
        self.kind == FieldKind::Image
    }
}

/// Ordered text values of a modal form, keyed by wire field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(&'static str, String)>);

impl FormValues {
    /// Blank values for every non-file field in `fields`.
    pub fn blank(fields: &[FieldSpec]) -> Self {
        Self(fields.iter().filter(|f| !f.is_file()).map(|f| (f.name, String::new())).collect())
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.iter().find(|(k, _)| *k == name).map_or("", |(_, v)| v.as_str())
    }

    /// Set `name`; unknown names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some((_, slot)) = self.0.iter_mut().find(|(k, _)| *k == name) {
            *slot = value.into();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }
}

/// One rendered table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Link(String),
    Image(Option<String>),
}

/// Resolve a sport display name to its id for pre-filling sport selects.
pub fn sport_id_for(name: &str, sports: &[Sport]) -> String {
    sports
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .map(|s| s.id.to_string())
        .unwrap_or_default()
}

/// Edit stays disabled until a section's sports lookup has settled, so the
/// modal never opens with an unresolved sport.
pub fn can_edit(needs_sports: bool, sports: &ViewState<Vec<Sport>>) -> bool {
    !needs_sports || !sports.is_loading()
}

fn or_na(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "N/A".to_owned())
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Static description of one CRUD section.
pub trait AdminResource: 'static {
    type Row: Clone + DeserializeOwned + Send + Sync + 'static;

    const TITLE: &'static str;
    /// Singular label used in "Add …" / "Edit …".
    const NOUN: &'static str;
    const LIST: Endpoint;
    const SAVE: Endpoint;
    const DELETE: Endpoint;
    /// Field carrying the row id on updates.
    const ID_FIELD: &'static str;
    const ENCODING: Encoding;
    const FIELDS: &'static [FieldSpec];
    const COLUMNS: &'static [&'static str];

    fn row_id(row: &Self::Row) -> &RecordId;
    fn cells(row: &Self::Row) -> Vec<Cell>;
    fn form_from_row(row: &Self::Row, sports: &[Sport]) -> FormValues;

    /// Whether the modal needs the sports lookup.
    fn needs_sports() -> bool {
        Self::FIELDS.iter().any(|f| f.kind == FieldKind::Sport)
    }
}

pub struct NewsAdmin;

impl AdminResource for NewsAdmin {
    type Row = NewsItem;

    const TITLE: &'static str = "News Management";
    const NOUN: &'static str = "News";
    const LIST: Endpoint = GET_NEWS;
    const SAVE: Endpoint = SAVE_NEWS;
    const DELETE: Endpoint = DELETE_NEWS;
    const ID_FIELD: &'static str = "news_id";
    const ENCODING: Encoding = Encoding::Json;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("headline", "Headline", FieldKind::Text),
        FieldSpec::new("sport_id", "Sport", FieldKind::Sport),
    ];
    const COLUMNS: &'static [&'static str] = &["Headline", "Sport", "Date"];

    fn row_id(row: &NewsItem) -> &RecordId {
        &row.id
    }

    fn cells(row: &NewsItem) -> Vec<Cell> {
        vec![Cell::Text(row.headline.clone()), Cell::Text(row.sport.clone()), Cell::Text(row.date.clone())]
    }

    fn form_from_row(row: &NewsItem, sports: &[Sport]) -> FormValues {
        FormValues::blank(Self::FIELDS)
            .with("headline", row.headline.clone())
            .with("sport_id", sport_id_for(&row.sport, sports))
    }
}

pub struct HighlightAdmin;

impl AdminResource for HighlightAdmin {
    type Row = Highlight;

    const TITLE: &'static str = "Highlights Management";
    const NOUN: &'static str = "Highlight";
    const LIST: Endpoint = GET_HIGHLIGHTS;
    const SAVE: Endpoint = SAVE_HIGHLIGHT;
    const DELETE: Endpoint = DELETE_HIGHLIGHT;
    const ID_FIELD: &'static str = "highlight_id";
    const ENCODING: Encoding = Encoding::Multipart;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::new("link", "Link", FieldKind::Url),
        FieldSpec::new("image", "Image", FieldKind::Image),
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Date", "Link", "Image"];

    fn row_id(row: &Highlight) -> &RecordId {
        &row.id
    }

    fn cells(row: &Highlight) -> Vec<Cell> {
        vec![
            Cell::Text(row.title.clone()),
            Cell::Text(row.date.clone()),
            Cell::Link(row.link.clone()),
            Cell::Image(row.image.clone()),
        ]
    }

    fn form_from_row(row: &Highlight, _sports: &[Sport]) -> FormValues {
        FormValues::blank(Self::FIELDS)
            .with("title", row.title.clone())
            .with("date", row.date.clone())
            .with("link", row.link.clone())
    }
}

pub struct AthleteAdmin;

impl AdminResource for AthleteAdmin {
    type Row = Athlete;

    const TITLE: &'static str = "Athletes Management";
    const NOUN: &'static str = "Athlete";
    const LIST: Endpoint = GET_ATHLETES;
    const SAVE: Endpoint = SAVE_ATHLETE;
    const DELETE: Endpoint = DELETE_ATHLETE;
    const ID_FIELD: &'static str = "athlete_id";
    const ENCODING: Encoding = Encoding::Multipart;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("firstName", "First Name", FieldKind::Text),
        FieldSpec::new("lastName", "Last Name", FieldKind::Text),
        FieldSpec::new("gender", "Gender", FieldKind::Gender),
        FieldSpec::new("sport", "Sport", FieldKind::Sport),
        FieldSpec::new("position", "Position", FieldKind::Text),
        FieldSpec::new("yearGroup", "Year Group", FieldKind::Text),
        FieldSpec::new("nationality", "Nationality", FieldKind::Text),
        FieldSpec::new("image", "Image", FieldKind::Image),
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Sport", "Position", "Year Group", "Nationality", "Image"];

    fn row_id(row: &Athlete) -> &RecordId {
        &row.id
    }

    fn cells(row: &Athlete) -> Vec<Cell> {
        vec![
            Cell::Text(row.display_name()),
            Cell::Text(row.sport.clone()),
            Cell::Text(row.position.clone()),
            Cell::Text(row.year_group.clone()),
            Cell::Text(row.nationality.clone()),
            Cell::Image(row.image.clone()),
        ]
    }

    fn form_from_row(row: &Athlete, sports: &[Sport]) -> FormValues {
        FormValues::blank(Self::FIELDS)
            .with("firstName", row.first_name.clone())
            .with("lastName", row.last_name.clone())
            .with("gender", row.gender.clone().unwrap_or_default())
            .with("sport", sport_id_for(&row.sport, sports))
            .with("position", row.position.clone())
            .with("yearGroup", row.year_group.clone())
            .with("nationality", row.nationality.clone())
    }
}

pub struct EventAdmin;

impl AdminResource for EventAdmin {
    type Row = Event;

    const TITLE: &'static str = "Events Management";
    const NOUN: &'static str = "Event";
    const LIST: Endpoint = GET_EVENTS;
    const SAVE: Endpoint = SAVE_EVENT;
    const DELETE: Endpoint = DELETE_EVENT;
    const ID_FIELD: &'static str = "event_id";
    const ENCODING: Encoding = Encoding::Multipart;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Event Name", FieldKind::Text),
        FieldSpec::new("sport_id", "Sport", FieldKind::Sport),
        FieldSpec::new("location", "Location", FieldKind::Text),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::new("time", "Time", FieldKind::Time),
        FieldSpec::new("details", "Details", FieldKind::LongText),
        FieldSpec::new("result", "Result", FieldKind::Text),
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Sport", "Location", "Date", "Time", "Details", "Result"];

    fn row_id(row: &Event) -> &RecordId {
        &row.id
    }

    fn cells(row: &Event) -> Vec<Cell> {
        vec![
            Cell::Text(row.name.clone()),
            Cell::Text(row.sport.clone()),
            Cell::Text(row.location.clone()),
            Cell::Text(row.date.clone()),
            Cell::Text(row.time.clone()),
            Cell::Text(row.details.clone()),
            Cell::Text(row.result.clone().unwrap_or_default()),
        ]
    }

    fn form_from_row(row: &Event, sports: &[Sport]) -> FormValues {
        FormValues::blank(Self::FIELDS)
            .with("name", row.name.clone())
            .with("sport_id", sport_id_for(&row.sport, sports))
            .with("location", row.location.clone())
            .with("date", row.date.clone())
            .with("time", row.time.clone())
            .with("details", row.details.clone())
            .with("result", row.result.clone().unwrap_or_default())
    }
}

pub struct TeamAdmin;

impl AdminResource for TeamAdmin {
    type Row = Team;

    const TITLE: &'static str = "Teams Management";
    const NOUN: &'static str = "Team";
    const LIST: Endpoint = GET_TEAMS;
    const SAVE: Endpoint = SAVE_TEAM;
    const DELETE: Endpoint = DELETE_TEAM;
    const ID_FIELD: &'static str = "team_id";
    const ENCODING: Encoding = Encoding::Json;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("team_name", "Team Name", FieldKind::Text),
        FieldSpec::new("sport_id", "Sport", FieldKind::Sport),
        FieldSpec::new("team_email", "Team Email", FieldKind::Email),
        FieldSpec::new("coach_name", "Coach Name", FieldKind::Text),
    ];
    const COLUMNS: &'static [&'static str] = &["Team Name", "Sport", "Team Email", "Coach"];

    fn row_id(row: &Team) -> &RecordId {
        &row.id
    }

    fn cells(row: &Team) -> Vec<Cell> {
        vec![
            Cell::Text(row.name.clone()),
            Cell::Text(row.sport_name.clone()),
            Cell::Text(or_na(row.team_email.as_ref())),
            Cell::Text(or_na(row.coach_name.as_ref())),
        ]
    }

    fn form_from_row(row: &Team, sports: &[Sport]) -> FormValues {
        let sport_id = row.sport_id.as_ref().map_or_else(|| sport_id_for(&row.sport_name, sports), ToString::to_string);
        FormValues::blank(Self::FIELDS)
            .with("team_name", row.name.clone())
            .with("sport_id", sport_id)
            .with("team_email", row.team_email.clone().unwrap_or_default())
            .with("coach_name", row.coach_name.clone().unwrap_or_default())
    }
}

// =============================================================================
// MODAL
// =============================================================================

/// Add/edit modal state shared by every section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrudModal {
    /// Row being edited; `None` when adding.
    pub editing: Option<RecordId>,
    pub values: FormValues,
    /// Server message from the last failed save.
    pub error: Option<String>,
    pub saving: bool,
}

impl CrudModal {
    pub fn add<R: AdminResource>() -> Self {
        Self { values: FormValues::blank(R::FIELDS), ..Self::default() }
    }

    pub fn edit<R: AdminResource>(row: &R::Row, sports: &[Sport]) -> Self {
        Self { editing: Some(R::row_id(row).clone()), values: R::form_from_row(row, sports), ..Self::default() }
    }

    pub fn title<R: AdminResource>(&self) -> String {
        let verb = if self.editing.is_some() { "Edit" } else { "Add" };
        format!("{verb} {}", R::NOUN)
    }

    /// Body for the section's save endpoint. Files are attached by the
    /// transport.
    pub fn save_request<R: AdminResource>(&self) -> SaveRequest {
        SaveRequest::new(R::ENCODING, self.values.iter()).with_id(R::ID_FIELD, self.editing.as_ref())
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
    }

    /// Settle a save. Returns `true` when the modal should close and the list
    /// reload; on failure the modal stays open with the server message.
    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> bool {
        self.saving = false;
        match result {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err.user_message());
                false
            }
        }
    }
}

/// What the list does once a delete settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Clear the banner and re-fetch the whole list.
    Reload,
    /// Keep the list and show the message.
    Failed(String),
}

impl DeleteOutcome {
    pub fn from_result(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Reload,
            Err(err) => Self::Failed(err.user_message()),
        }
    }
}
