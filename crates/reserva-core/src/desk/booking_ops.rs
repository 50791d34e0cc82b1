//! Booking operations for the BookingDesk.

use tokio::task;

use super::BookingDesk;
use crate::{
    db::Database,
    error::{DeskError, Result},
    models::{Booking, BookingFilter, Slot},
    params::{CheckAvailability, CreateBooking, DayQuery, Id, SearchBookings},
};

impl BookingDesk {
    /// Books a venue for a single date.
    ///
    /// Validates the request, then checks availability and inserts within
    /// one connection. The check runs immediately before the insert:
    /// nothing locks the gap between the two statements, which is accepted
    /// for a single-user store rather than worked around.
    ///
    /// # Errors
    ///
    /// * `DeskError::InvalidInput` - the request failed validation
    /// * `DeskError::Unavailable` - the interval overlaps an existing
    ///   booking
    /// * `DeskError::Database` - the store could not be read or written
    pub async fn reserve(&self, params: &CreateBooking) -> Result<Booking> {
        let (venue, date, start, end) = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            if !db.is_available(venue, date, start, end)? {
                return Err(DeskError::Unavailable {
                    venue: venue.to_string(),
                    date,
                });
            }
            db.insert_booking(
                venue,
                date,
                start,
                end,
                &params.requester,
                &params.contact,
                &params.email,
                &params.reason,
            )
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Cancels a booking, returning it if it existed.
    ///
    /// Uses get-before-delete so the caller can show what was removed;
    /// cancelling an unknown id returns `None` rather than an error.
    pub async fn cancel(&self, params: &Id) -> Result<Option<Booking>> {
        let db_path = self.db_path.clone();
        let booking_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let Some(booking) = db.get_booking(booking_id)? else {
                return Ok(None);
            };
            db.delete_booking(booking_id)?;
            Ok(Some(booking))
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a booking by its ID.
    pub async fn booking(&self, params: &Id) -> Result<Option<Booking>> {
        let db_path = self.db_path.clone();
        let booking_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_booking(booking_id)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all bookings, newest first.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_bookings()
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Searches bookings with the given filters, newest first.
    pub async fn search_bookings(&self, params: &SearchBookings) -> Result<Vec<Booking>> {
        let filter = BookingFilter::try_from(params)?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.search_bookings(&filter)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the occupied slots of one venue on one day.
    pub async fn day_schedule(&self, params: &DayQuery) -> Result<Vec<Slot>> {
        let (venue, date) = params.validate()?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.day_schedule(venue, date)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Checks whether a slot is free, without booking it.
    ///
    /// The answer is only advisory: by the time a reserve runs, the slot
    /// may have been taken, which is why [`reserve`](Self::reserve)
    /// re-checks on its own.
    pub async fn check_availability(&self, params: &CheckAvailability) -> Result<bool> {
        let (venue, date, start, end) = params.validate()?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.is_available(venue, date, start, end)
        })
        .await
        .map_err(|e| DeskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
