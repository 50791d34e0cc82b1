//! Booking model definition.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Venue;

/// Represents one confirmed reservation of a venue.
///
/// Start and end hours are kept as the stored `HH:MM` strings; the
/// availability engine is the single place that turns them into effective
/// intervals (including the overnight normalization), so a row with
/// corrupted hours degrades to "day is booked" instead of poisoning reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,

    /// Which venue the booking occupies
    pub venue: Venue,

    /// Calendar date of the booking (the date the interval starts on)
    pub date: Date,

    /// Start hour, `HH:MM` wall-clock
    pub start_time: String,

    /// End hour, `HH:MM` wall-clock; numerically at or before
    /// `start_time` means the booking runs into the following day
    pub end_time: String,

    /// Person the booking is held for
    pub requester: String,

    /// Phone or other contact detail
    pub contact: String,

    /// Contact e-mail address
    pub email: String,

    /// Stated purpose of the booking
    pub reason: String,

    /// Timestamp when the booking was created (UTC), newest-first sort key
    pub created_at: Timestamp,
}
