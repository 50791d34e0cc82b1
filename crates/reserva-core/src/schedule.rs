//! Recurrence expansion for weekly batch bookings.
//!
//! A weekly request names a set of weekdays; the candidate window runs from
//! a starting date through the last day of that same month, inclusive. The
//! recurrence never crosses into the next month; a request made on the
//! 30th may well expand to a single date.

use jiff::civil::{Date, Weekday};

use crate::error::{DeskError, Result};

/// Parse a user-entered weekday name. Full English names and common
/// three-letter abbreviations are accepted, case-insensitively.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(DeskError::invalid_input(
            "weekdays",
            format!("'{s}' is not a weekday"),
        )),
    }
}

/// Expand the candidate window: every date from `from` through the end of
/// `from`'s month whose weekday is in `weekdays`, in chronological order.
pub fn candidate_dates(from: Date, weekdays: &[Weekday]) -> Result<Vec<Date>> {
    let last = from.last_of_month();
    let mut dates = Vec::new();

    let mut day = from;
    loop {
        if weekdays.contains(&day.weekday()) {
            dates.push(day);
        }
        if day == last {
            break;
        }
        day = day.tomorrow().map_err(|_| {
            DeskError::invalid_input("date", "recurrence window is outside the supported range")
        })?;
    }

    Ok(dates)
}
