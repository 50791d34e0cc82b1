//! Availability status message for operation feedback.

use std::fmt;

use jiff::civil::Date;

use crate::models::Venue;

/// Wrapper type for displaying the answer to an availability check.
pub struct AvailabilityStatus {
    /// Venue that was checked
    pub venue: Venue,
    /// Date that was checked
    pub date: Date,
    /// Start hour of the candidate slot, `HH:MM`
    pub start: String,
    /// End hour of the candidate slot, `HH:MM`
    pub end: String,
    /// Whether the slot is free
    pub available: bool,
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.available {
            writeln!(
                f,
                "{} is free on {} between {} and {}.",
                self.venue, self.date, self.start, self.end
            )
        } else {
            writeln!(
                f,
                "{} is already booked on {} between {} and {}.",
                self.venue, self.date, self.start, self.end
            )
        }
    }
}
