//! Weekly batch booking loop.

use jiff::civil::Date;

use crate::{
    error::Result, models::BatchOutcome, params::WeeklyBooking, schedule,
};

impl super::Database {
    /// Expands a weekly request into individual bookings from `from`
    /// through the end of that month.
    ///
    /// Each candidate date is checked and inserted independently: a taken
    /// date lands in the outcome's conflict list and the loop moves on, so
    /// one clash never blocks the rest of the batch. Validation runs
    /// before the first store access; an invalid request inserts nothing.
    /// Storage failures do propagate; rows already inserted stay (there
    /// is no batch-level rollback).
    pub fn create_weekly(&mut self, request: &WeeklyBooking, from: Date) -> Result<BatchOutcome> {
        let (venue, start, end, weekdays) = request.validate()?;

        let mut outcome = BatchOutcome::default();
        for date in schedule::candidate_dates(from, &weekdays)? {
            if self.is_available(venue, date, start, end)? {
                self.insert_booking(
                    venue,
                    date,
                    start,
                    end,
                    &request.requester,
                    &request.contact,
                    &request.email,
                    &request.reason,
                )?;
                outcome.created += 1;
            } else {
                outcome.conflicts.push(date);
            }
        }

        Ok(outcome)
    }
}
