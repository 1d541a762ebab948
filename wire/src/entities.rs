//! Record types exchanged with the athletics API.
//!
//! DESIGN
//! ======
//! The upstream API is loosely typed: identifiers arrive as numbers or
//! strings, optional text arrives as `null`, and the same foreign key is
//! spelled `sport_id`, `sportId` or `id` depending on the endpoint. Every
//! struct here accepts those variants on the way in and exposes one
//! canonical Rust field name on the way out.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Primary key of any upstream record.
///
/// Compared as text, so `7` and `"7"` name the same row. The JSON type it
/// arrived as is remembered and written back unchanged: `"007"` stays a
/// string, `7` stays a number.
#[derive(Clone, Debug, Default)]
pub struct RecordId {
    raw: String,
    numeric: bool,
}

impl RecordId {
    /// A string-typed id.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into(), numeric: false }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the API sent this id as a JSON number.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialOrd for RecordId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self { raw: value.to_string(), numeric: true }
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(n) = self.raw.parse::<Number>() {
                return n.serialize(serializer);
            }
        }
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self::new(s)),
            Value::Number(n) => Ok(Self { raw: n.to_string(), numeric: true }),
            other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
        }
    }
}

// =============================================================================
// PUBLIC RECORDS
// =============================================================================

/// A sport offered by the department.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSport")]
pub struct Sport {
    pub id: RecordId,
    pub name: String,
    /// Instagram handle.
    pub insta: Option<String>,
    /// Snapchat handle.
    pub snap: Option<String>,
    /// X (Twitter) handle.
    pub x: Option<String>,
}

#[derive(Deserialize)]
struct RawSport {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    sport_id: Option<RecordId>,
    #[serde(default, rename = "sportId")]
    sport_id_camel: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    sport_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    insta: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    snap: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    x: Option<String>,
}

impl From<RawSport> for Sport {
    fn from(raw: RawSport) -> Self {
        Self {
            id: raw.sport_id.or(raw.sport_id_camel).or(raw.id).unwrap_or_default(),
            name: raw.name.or(raw.sport_name).unwrap_or_default(),
            insta: non_blank(raw.insta),
            snap: non_blank(raw.snap),
            x: non_blank(raw.x),
        }
    }
}

/// An athlete on the department roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    /// Server-composed display name, present on some list endpoints.
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Sport name (not id) as rendered by the API.
    #[serde(default, deserialize_with = "lenient_string")]
    pub sport: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year_group: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nationality: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

impl Athlete {
    /// `fullName` when the API supplied one, otherwise first + last.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|s| !s.trim().is_empty()) {
            return full.to_owned();
        }
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Read model of the "athletes of the week" endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekAthlete {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sport: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year_group: String,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

/// A competition team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTeam")]
pub struct Team {
    pub id: RecordId,
    pub name: String,
    pub sport_name: String,
    /// Foreign key to [`Sport::id`], when the endpoint includes it.
    pub sport_id: Option<RecordId>,
    pub coach_name: Option<String>,
    pub team_email: Option<String>,
}

#[derive(Deserialize)]
struct RawTeam {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    team_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    team_name: Option<String>,
    #[serde(default, rename = "sportName", deserialize_with = "lenient_opt_string")]
    sport_name_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    sport_name: Option<String>,
    #[serde(default, rename = "sportId")]
    sport_id_camel: Option<RecordId>,
    #[serde(default)]
    sport_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    coach_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    team_email: Option<String>,
}

impl From<RawTeam> for Team {
    fn from(raw: RawTeam) -> Self {
        Self {
            id: raw.id.or(raw.team_id).unwrap_or_default(),
            name: raw.name.or(raw.team_name).unwrap_or_default(),
            sport_name: raw.sport_name_camel.or(raw.sport_name).unwrap_or_default(),
            sport_id: raw.sport_id_camel.or(raw.sport_id),
            coach_name: non_blank(raw.coach_name),
            team_email: non_blank(raw.team_email),
        }
    }
}

/// A scheduled or completed fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Sport name as rendered by the API.
    #[serde(default, deserialize_with = "lenient_string")]
    pub sport: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub details: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub result: Option<String>,
}

/// A news headline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub headline: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sport: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

/// A media highlight (video or article link with a cover image).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

/// A merchandise item in the storefront.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProduct {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock_quantity: i64,
}

impl ShopProduct {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

// =============================================================================
// SESSION + AUTH
// =============================================================================

/// The user object returned by a successful login and kept in local storage.
///
/// Unknown fields are preserved so the stored object matches what the server
/// sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    pub const ADMIN_ROLE: &'static str = "administrator";

    #[must_use]
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self { email: email.into(), role: role.into(), extra: Map::new() }
    }

    /// Whether the back-office link should be shown. Not an access check.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Self::ADMIN_ROLE
    }

    /// `firstName` when the server included it, otherwise the e-mail.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.extra
            .get("firstName")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| self.email.clone(), str::to_owned)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/athletes/set_athletes_of_week`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSelectionRequest {
    pub athlete_ids: Vec<RecordId>,
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected scalar, got {other}"))),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?).map(Option::unwrap_or_default)
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?)
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| scalar_to_string::<D::Error>(item).transpose())
            .collect(),
        Value::String(s) => Ok(s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_owned)
            .collect()),
        other => Err(D::Error::custom(format!("expected list of strings, got {other}"))),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom("number out of range")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(n) => n.as_i64().ok_or_else(|| D::Error::custom("expected integer")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {s:?}"))),
        other => Err(D::Error::custom(format!("expected integer, got {other}"))),
    }
}
