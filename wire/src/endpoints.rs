//! Endpoint table for the athletics API.
//!
//! Each constant pairs a path with the HTTP method and the envelope
//! [`Shape`] that endpoint answers with, so callers never decide per screen
//! how to read a response.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::entities::RecordId;
use crate::envelope::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// One upstream operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub shape: Shape,
}

impl Endpoint {
    const fn new(method: Method, path: &'static str, shape: Shape) -> Self {
        Self { method, path, shape }
    }

    /// Path with `?id=` appended, for delete-by-id calls.
    #[must_use]
    pub fn with_id(&self, id: &RecordId) -> String {
        format!("{}?id={}", self.path, urlencoding::encode(id.as_str()))
    }
}

// -- sports --------------------------------------------------------------------

pub const GET_SPORTS: Endpoint = Endpoint::new(Method::Get, "/api/sports/get_sports", Shape::List);

// -- athletes ------------------------------------------------------------------

pub const GET_ATHLETES: Endpoint =
    Endpoint::new(Method::Get, "/api/athletes/get_athletes", Shape::Status("athletes"));
pub const SAVE_ATHLETE: Endpoint = Endpoint::new(Method::Post, "/api/athletes/addOrUpdateAthlete", Shape::Ack);
pub const DELETE_ATHLETE: Endpoint = Endpoint::new(Method::Delete, "/api/athletes/delete_athlete", Shape::Ack);
pub const GET_ATHLETES_OF_WEEK: Endpoint = Endpoint::new(
    Method::Get,
    "/api/athletes/get_athletes_of_week",
    Shape::Status("athletesOfTheWeek"),
);
pub const SET_ATHLETES_OF_WEEK: Endpoint =
    Endpoint::new(Method::Post, "/api/athletes/set_athletes_of_week", Shape::Ack);

// -- events --------------------------------------------------------------------

pub const GET_EVENTS: Endpoint = Endpoint::new(Method::Get, "/api/events/get_events", Shape::Status("events"));
pub const SAVE_EVENT: Endpoint = Endpoint::new(Method::Post, "/api/events/addOrUpdateEvent", Shape::Ack);
pub const DELETE_EVENT: Endpoint = Endpoint::new(Method::Delete, "/api/events/delete_event", Shape::Ack);

// -- news ----------------------------------------------------------------------

pub const GET_NEWS: Endpoint = Endpoint::new(Method::Get, "/api/news/get_news", Shape::Status("news"));
pub const SAVE_NEWS: Endpoint = Endpoint::new(Method::Post, "/api/news/addOrUpdateNews", Shape::Ack);
pub const DELETE_NEWS: Endpoint = Endpoint::new(Method::Delete, "/api/news/delete_news", Shape::Ack);

// -- highlights ----------------------------------------------------------------

pub const GET_HIGHLIGHTS: Endpoint = Endpoint::new(Method::Get, "/api/highlights/get_highlights", Shape::List);
pub const SAVE_HIGHLIGHT: Endpoint =
    Endpoint::new(Method::Post, "/api/highlights/addOrUpdateHighlight", Shape::Ack);
pub const DELETE_HIGHLIGHT: Endpoint =
    Endpoint::new(Method::Delete, "/api/highlights/delete_highlight", Shape::Ack);

// -- teams + recruitment -------------------------------------------------------

pub const GET_TEAMS: Endpoint = Endpoint::new(Method::Get, "/api/recruit/get_teams", Shape::List);
pub const SAVE_TEAM: Endpoint = Endpoint::new(Method::Post, "/api/teams/addOrUpdateTeam", Shape::Ack);
pub const DELETE_TEAM: Endpoint = Endpoint::new(Method::Delete, "/api/teams/delete_team", Shape::Ack);
pub const SUBMIT_RECRUITMENT: Endpoint =
    Endpoint::new(Method::Post, "/api/recruit/submit_recruitment", Shape::Ack);

// -- shop ----------------------------------------------------------------------

pub const GET_SHOP: Endpoint = Endpoint::new(Method::Get, "/api/shop/get_shop", Shape::Status("items"));

// -- auth ----------------------------------------------------------------------

pub const LOGIN: Endpoint = Endpoint::new(Method::Post, "/api/auth/login", Shape::Success(Some("user")));
pub const SIGNUP: Endpoint = Endpoint::new(Method::Post, "/api/auth/signup", Shape::Success(None));

