//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use jiff::civil::Date;

use crate::models::{Booking, Slot, Venue};

/// Newtype wrapper for displaying collections of bookings.
///
/// Formats each booking with its own Display and handles the empty
/// collection gracefully. Used by both the full listing and search
/// results, which share the newest-first ordering of the store.
pub struct Bookings(pub Vec<Booking>);

impl Bookings {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of bookings in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the bookings.
    pub fn iter(&self) -> std::slice::Iter<'_, Booking> {
        self.0.iter()
    }
}

impl IntoIterator for Bookings {
    type Item = Booking;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Bookings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No bookings found.")
        } else {
            for booking in &self.0 {
                write!(f, "{booking}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Display wrapper for one venue's occupancy on one day.
pub struct DaySchedule {
    /// Venue the view is for
    pub venue: Venue,
    /// Day the view is for
    pub date: Date,
    /// Occupied slots, ordered by start hour
    pub slots: Vec<Slot>,
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} on {}", self.venue, self.date)?;
        writeln!(f)?;

        if self.slots.is_empty() {
            writeln!(f, "No bookings for this day.")
        } else {
            for slot in &self.slots {
                write!(f, "{slot}")?;
            }
            Ok(())
        }
    }
}
