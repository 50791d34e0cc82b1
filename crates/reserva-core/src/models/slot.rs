//! Occupancy row for a venue's day view.

use serde::{Deserialize, Serialize};

/// One occupied slot in a venue's day schedule.
///
/// This is the projection used both to render the day's occupancy and as
/// the candidate set for the overlap check. Hours stay raw strings here;
/// see [`crate::availability`] for how they become intervals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    /// Booking ID backing this slot
    pub id: u64,

    /// Start hour, `HH:MM`
    pub start_time: String,

    /// End hour, `HH:MM`
    pub end_time: String,

    /// Person the slot is booked for
    pub requester: String,
}
