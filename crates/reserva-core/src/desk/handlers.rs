//! Handler operations that return formatted wrapper types for the desk.
//!
//! Frontends call these when they want something renderable instead of
//! raw domain objects; each handler pairs one operation with its display
//! wrapper.

use super::BookingDesk;
use crate::{
    display::{AvailabilityStatus, BatchReport, Bookings, CreateResult, DaySchedule, DeleteResult},
    error::Result,
    models::Booking,
    params::{CheckAvailability, CreateBooking, DayQuery, Id, SearchBookings, WeeklyBooking},
};

impl BookingDesk {
    /// Handle reserving a slot, wrapped for confirmation display.
    pub async fn reserve_result(&self, params: &CreateBooking) -> Result<CreateResult<Booking>> {
        let booking = self.reserve(params).await?;
        Ok(CreateResult::new(booking))
    }

    /// Handle cancelling a booking, wrapped for confirmation display.
    ///
    /// Returns `None` when no booking with the given id exists.
    pub async fn cancel_result(&self, params: &Id) -> Result<Option<DeleteResult<Booking>>> {
        let booking = self.cancel(params).await?;
        Ok(booking.map(DeleteResult::new))
    }

    /// Handle listing every booking, newest first.
    pub async fn list_all(&self) -> Result<Bookings> {
        let bookings = self.list_bookings().await?;
        Ok(Bookings(bookings))
    }

    /// Handle searching bookings, newest first.
    pub async fn search_results(&self, params: &SearchBookings) -> Result<Bookings> {
        let bookings = self.search_bookings(params).await?;
        Ok(Bookings(bookings))
    }

    /// Handle the day occupancy view for one venue.
    pub async fn day_view(&self, params: &DayQuery) -> Result<DaySchedule> {
        let (venue, date) = params.validate()?;
        let slots = self.day_schedule(params).await?;
        Ok(DaySchedule { venue, date, slots })
    }

    /// Handle an availability check, wrapped as a status message.
    pub async fn availability_status(
        &self,
        params: &CheckAvailability,
    ) -> Result<AvailabilityStatus> {
        let (venue, date, start, end) = params.validate()?;
        let available = self.check_availability(params).await?;
        Ok(AvailabilityStatus {
            venue,
            date,
            start: crate::availability::format_time(start),
            end: crate::availability::format_time(end),
            available,
        })
    }

    /// Handle a weekly batch request, wrapped as a report.
    pub async fn weekly_report(&self, params: &WeeklyBooking) -> Result<BatchReport> {
        let outcome = self.schedule_weekly(params).await?;
        Ok(BatchReport(outcome))
    }
}
