//! Upcoming/past split for the events page.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use time::Date;
use time::macros::format_description;
use wire::Event;

/// Tab selected on the events page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventsTab {
    #[default]
    Upcoming,
    Past,
}

impl EventsTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming Events",
            Self::Past => "Past Events",
        }
    }
}

/// Parse the calendar part of an API date (`YYYY-MM-DD`, optionally followed
/// by a time component).
pub fn event_date(raw: &str) -> Option<Date> {
    let day = raw.trim().get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

/// Split into `(upcoming, past)`. Events dated today count as upcoming.
///
/// Upcoming events are soonest first with undated rows last; past events are
/// most recent first.
pub fn split_events(events: &[Event], today: Date) -> (Vec<Event>, Vec<Event>) {
    let mut upcoming: Vec<(Option<Date>, &Event)> = Vec::new();
    let mut past: Vec<(Date, &Event)> = Vec::new();
    for event in events {
        match event_date(&event.date) {
            Some(date) if date < today => past.push((date, event)),
            date => upcoming.push((date, event)),
        }
    }
    upcoming.sort_by(|(a, ea), (b, eb)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b).then_with(|| ea.time.cmp(&eb.time)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    past.sort_by(|(a, ea), (b, eb)| b.cmp(a).then_with(|| eb.time.cmp(&ea.time)));
    (
        upcoming.into_iter().map(|(_, e)| e.clone()).collect(),
        past.into_iter().map(|(_, e)| e.clone()).collect(),
    )
}
