//! Parameter structures for booking operations.
//!
//! This module contains the shared parameter structures passed into the
//! desk's operations. They carry exactly what a frontend collects
//! (user-entered strings) and stay free of framework-specific derives so
//! any interface (CLI today, others later) can wrap them.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Typed domain   │
//! │  (clap derives) │───▶│ (this module)   │───▶│ (via validate)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Each request struct owns its `validate()` method: parsing the venue,
//! date and hours, and enforcing the required free-text fields. Validation
//! runs before any store access, so a rejected request has no side effects.
//! The stored representation keeps the raw strings; the typed values only
//! live as long as the operation that needed them.

use jiff::civil::{Date, Time, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    availability,
    error::{DeskError, Result},
    models::Venue,
    schedule,
};

/// Reject empty (or whitespace-only) required free-text fields.
fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeskError::invalid_input(field, "this field is required"));
    }
    Ok(())
}

/// Generic parameters for operations requiring just a booking ID.
///
/// Used for cancel and show operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the booking to operate on
    pub id: u64,
}

/// Parameters for creating a single booking.
///
/// All free-text fields are required; hours use `HH:MM` and the date
/// `YYYY-MM-DD`. An end hour at or before the start hour books across
/// midnight into the following day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBooking {
    /// Venue name ("Polideportivo" or "S.U.M.")
    pub venue: String,
    /// Booking date, `YYYY-MM-DD`
    pub date: String,
    /// Start hour, `HH:MM`
    pub start: String,
    /// End hour, `HH:MM`
    pub end: String,
    /// Person the booking is for (required)
    pub requester: String,
    /// Phone or other contact detail (required)
    pub contact: String,
    /// Contact e-mail address (required)
    pub email: String,
    /// Purpose of the booking (required)
    pub reason: String,
}

impl CreateBooking {
    /// Validate the request and return the parsed venue, date and hours.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - unknown venue, malformed date or
    ///   hours, or a missing required text field
    pub fn validate(&self) -> Result<(Venue, Date, Time, Time)> {
        let venue = self
            .venue
            .parse::<Venue>()
            .map_err(|reason| DeskError::invalid_input("venue", reason))?;
        let date = availability::parse_date(&self.date)?;
        let start = availability::parse_time(&self.start)?;
        let end = availability::parse_time(&self.end)?;

        require("requester", &self.requester)?;
        require("contact", &self.contact)?;
        require("email", &self.email)?;
        require("reason", &self.reason)?;

        Ok((venue, date, start, end))
    }
}

/// Parameters for asking whether a slot is free, without booking it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckAvailability {
    /// Venue name
    pub venue: String,
    /// Date, `YYYY-MM-DD`
    pub date: String,
    /// Start hour, `HH:MM`
    pub start: String,
    /// End hour, `HH:MM`
    pub end: String,
}

impl CheckAvailability {
    /// Validate the request and return the parsed venue, date and hours.
    pub fn validate(&self) -> Result<(Venue, Date, Time, Time)> {
        let venue = self
            .venue
            .parse::<Venue>()
            .map_err(|reason| DeskError::invalid_input("venue", reason))?;
        let date = availability::parse_date(&self.date)?;
        let start = availability::parse_time(&self.start)?;
        let end = availability::parse_time(&self.end)?;
        Ok((venue, date, start, end))
    }
}

/// Parameters for a weekly recurring booking.
///
/// The request is expanded over every matching weekday from today through
/// the end of the current month; each candidate date is booked
/// independently, and taken dates are reported back rather than failing
/// the batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyBooking {
    /// Venue name
    pub venue: String,
    /// Start hour, `HH:MM`, shared by every generated booking
    pub start: String,
    /// End hour, `HH:MM`, shared by every generated booking
    pub end: String,
    /// Person the bookings are for (required)
    pub requester: String,
    /// Phone or other contact detail (required)
    pub contact: String,
    /// Contact e-mail address (required)
    pub email: String,
    /// Purpose of the bookings (required)
    pub reason: String,
    /// Weekday names to book ("monday".."sunday" or "mon".."sun")
    #[serde(default)]
    pub weekdays: Vec<String>,
}

impl WeeklyBooking {
    /// Validate the request and return the parsed venue, hours and
    /// deduplicated weekday set.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - empty weekday set, an unrecognized
    ///   weekday name, unknown venue, malformed hours, or a missing
    ///   required text field
    pub fn validate(&self) -> Result<(Venue, Time, Time, Vec<Weekday>)> {
        if self.weekdays.is_empty() {
            return Err(DeskError::invalid_input(
                "weekdays",
                "at least one weekday is required",
            ));
        }

        let venue = self
            .venue
            .parse::<Venue>()
            .map_err(|reason| DeskError::invalid_input("venue", reason))?;
        let start = availability::parse_time(&self.start)?;
        let end = availability::parse_time(&self.end)?;

        require("requester", &self.requester)?;
        require("contact", &self.contact)?;
        require("email", &self.email)?;
        require("reason", &self.reason)?;

        let mut days: Vec<Weekday> = Vec::new();
        for raw in &self.weekdays {
            let day = schedule::parse_weekday(raw)?;
            if !days.contains(&day) {
                days.push(day);
            }
        }

        Ok((venue, start, end, days))
    }
}

/// Parameters for the occupancy view of one venue on one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    /// Venue name
    pub venue: String,
    /// Date, `YYYY-MM-DD`
    pub date: String,
}

impl DayQuery {
    /// Validate the query and return the parsed venue and date.
    pub fn validate(&self) -> Result<(Venue, Date)> {
        let venue = self
            .venue
            .parse::<Venue>()
            .map_err(|reason| DeskError::invalid_input("venue", reason))?;
        let date = availability::parse_date(&self.date)?;
        Ok((venue, date))
    }
}

/// Parameters for searching bookings.
///
/// All filters are optional. When `id` is given the other filters are
/// ignored; an id that does not parse as an integer yields an empty result
/// rather than an error, since it can never match a row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBookings {
    /// Exact booking id, as entered
    pub id: Option<String>,
    /// Substring of the requester name
    pub requester: Option<String>,
    /// Venue name, exact match
    pub venue: Option<String>,
    /// Date, `YYYY-MM-DD`, exact match
    pub date: Option<String>,
}
