//! Result wrapper types for displaying operation outcomes.
//!
//! These wrappers give create, cancel and batch operations a consistent
//! confirmation format: a one-line outcome first, details after.

use std::fmt;

use crate::models::{BatchOutcome, Booking};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Booking> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created booking with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of cancel operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Booking> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Cancelled booking {} for {} on {}",
            self.resource.id, self.resource.requester, self.resource.date
        )
    }
}

/// Wrapper type for displaying a weekly batch outcome.
///
/// Conflicting dates are listed, not hidden: a partial success is the
/// expected shape of a batch, and the caller decides what to do about the
/// skipped dates.
pub struct BatchReport(pub BatchOutcome);

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.created {
            1 => writeln!(f, "Created 1 booking.")?,
            n => writeln!(f, "Created {n} bookings.")?,
        }

        if !self.0.conflicts.is_empty() {
            writeln!(f)?;
            writeln!(f, "Dates skipped because the venue was already booked:")?;
            for date in &self.0.conflicts {
                writeln!(f, "- {date}")?;
            }
        }

        Ok(())
    }
}
