//! Display formatting for dates and prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

use crate::state::events::event_date;

/// `GHC 120.00`; whole amounts drop the decimals.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("GHC {amount:.0}")
    } else {
        format!("GHC {amount:.2}")
    }
}

/// `Nov 2, 2024` for API dates; anything unparseable is shown as sent.
pub fn display_date(raw: &str) -> String {
    event_date(raw)
        .and_then(|d| d.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Today's date in the viewer's local calendar.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok())
            .unwrap_or(time::Month::January);
        let day = u8::try_from(now.get_date()).unwrap_or(1);
        Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
