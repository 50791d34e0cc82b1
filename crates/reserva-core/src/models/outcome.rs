//! Aggregate result of a batch booking run.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Outcome of expanding a weekly recurrence into individual bookings.
///
/// A batch is never all-or-nothing: every candidate date is attempted, and
/// dates that were already taken are reported here instead of aborting the
/// run. `created > 0` together with non-empty `conflicts` is a normal
/// partial success, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchOutcome {
    /// Number of bookings actually inserted
    pub created: u32,

    /// Candidate dates skipped because the venue was already booked,
    /// in chronological order
    pub conflicts: Vec<Date>,
}
