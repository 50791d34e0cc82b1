//! Booking CRUD operations and queries.

use jiff::civil::{Date, Time};
use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    availability::{self, format_time},
    error::{DatabaseResultExt, DeskError, Result},
    models::{Booking, BookingFilter, Slot, Venue},
    params::CreateBooking,
};

// Optimized SQL queries as const strings for compile-time optimization
const BOOKING_COLUMNS: &str =
    "id, venue, date, start_time, end_time, requester, contact, email, reason, created_at";
const INSERT_BOOKING_SQL: &str = "INSERT INTO bookings (venue, date, start_time, end_time, requester, contact, email, reason, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const DELETE_BOOKING_SQL: &str = "DELETE FROM bookings WHERE id = ?1";
const DAY_SCHEDULE_SQL: &str = "SELECT id, start_time, end_time, requester FROM bookings WHERE venue = ?1 AND date = ?2 ORDER BY start_time ASC";

impl super::Database {
    /// Creates a new booking after validating the request.
    ///
    /// This is the bare insert: it does not consult the availability
    /// engine. Reserving through [`crate::desk::BookingDesk`] runs the
    /// overlap check immediately before calling into here.
    pub fn create_booking(&mut self, request: &CreateBooking) -> Result<Booking> {
        let (venue, date, start, end) = request.validate()?;
        self.insert_booking(
            venue,
            date,
            start,
            end,
            &request.requester,
            &request.contact,
            &request.email,
            &request.reason,
        )
    }

    /// Inserts a validated booking and returns it with its assigned id.
    ///
    /// Hours are stored in their canonical zero-padded form so the day
    /// view's `ORDER BY start_time` string ordering matches clock order.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn insert_booking(
        &mut self,
        venue: Venue,
        date: Date,
        start: Time,
        end: Time,
        requester: &str,
        contact: &str,
        email: &str,
        reason: &str,
    ) -> Result<Booking> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let start_time = format_time(start);
        let end_time = format_time(end);

        tx.execute(
            INSERT_BOOKING_SQL,
            params![
                venue.as_str(),
                date.to_string(),
                &start_time,
                &end_time,
                requester,
                contact,
                email,
                reason,
                now.to_string()
            ],
        )
        .map_err(|e| DeskError::database_error("Failed to insert booking", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Booking {
            id,
            venue,
            date,
            start_time,
            end_time,
            requester: requester.into(),
            contact: contact.into(),
            email: email.into(),
            reason: reason.into(),
            created_at: now,
        })
    }

    /// Retrieves a booking by its ID.
    pub fn get_booking(&self, id: u64) -> Result<Option<Booking>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"
            ))
            .map_err(|e| DeskError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], Self::booking_from_row)
            .optional()
            .map_err(|e| DeskError::database_error("Failed to query booking", e))
    }

    /// Permanently deletes a booking. Returns whether a row was removed;
    /// deleting an unknown id is not an error.
    pub fn delete_booking(&mut self, id: u64) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_BOOKING_SQL, params![id as i64])
            .map_err(|e| DeskError::database_error("Failed to delete booking", e))?;

        Ok(rows_affected > 0)
    }

    /// Lists the occupied slots of one venue on one day, ordered by start
    /// hour. This doubles as the candidate set for the overlap check.
    pub fn day_schedule(&self, venue: Venue, date: Date) -> Result<Vec<Slot>> {
        let mut stmt = self
            .connection
            .prepare(DAY_SCHEDULE_SQL)
            .map_err(|e| DeskError::database_error("Failed to prepare query", e))?;

        let slots = stmt
            .query_map(params![venue.as_str(), date.to_string()], |row| {
                Ok(Slot {
                    id: row.get::<_, i64>(0)? as u64,
                    start_time: row.get(1)?,
                    end_time: row.get(2)?,
                    requester: row.get(3)?,
                })
            })
            .map_err(|e| DeskError::database_error("Failed to query day schedule", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| DeskError::database_error("Failed to fetch day schedule", e))?;

        Ok(slots)
    }

    /// Lists all bookings, newest first.
    pub fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.search_bookings(&BookingFilter::default())
    }

    /// Searches bookings with optional filtering, newest first.
    ///
    /// An id filter short-circuits into a point lookup; the other filters
    /// combine conjunctively.
    pub fn search_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        if let Some(raw) = &filter.id {
            // An unparsable id can never match a row; yield nothing
            // instead of failing the whole search.
            let Ok(id) = raw.trim().parse::<u64>() else {
                return Ok(Vec::new());
            };
            return Ok(self.get_booking(id)?.into_iter().collect());
        }

        let mut query = format!("SELECT {BOOKING_COLUMNS} FROM bookings");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref requester) = filter.requester_contains {
            conditions.push("requester LIKE ?");
            params_vec.push(Box::new(format!("%{requester}%")));
        }

        if let Some(venue) = filter.venue {
            conditions.push("venue = ?");
            params_vec.push(Box::new(venue.as_str().to_string()));
        }

        if let Some(date) = filter.date {
            conditions.push("date = ?");
            params_vec.push(Box::new(date.to_string()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| DeskError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let bookings = stmt
            .query_map(&params_refs[..], Self::booking_from_row)
            .map_err(|e| DeskError::database_error("Failed to query bookings", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| DeskError::database_error("Failed to fetch bookings", e))?;

        Ok(bookings)
    }

    /// Whether the candidate interval is free on the given venue/date.
    ///
    /// True when no existing booking's effective interval overlaps the
    /// candidate's; a stored row with unparsable hours reads as occupied.
    pub fn is_available(&self, venue: Venue, date: Date, start: Time, end: Time) -> Result<bool> {
        let existing = self.day_schedule(venue, date)?;
        Ok(!availability::conflicts(date, start, end, &existing)?)
    }

    /// Maps a full booking row in `BOOKING_COLUMNS` order.
    fn booking_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
        let venue_str: String = row.get(1)?;
        let venue = venue_str.parse::<Venue>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                Type::Text,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid venue: {venue_str}"),
                )),
            )
        })?;

        Ok(Booking {
            id: row.get::<_, i64>(0)? as u64,
            venue,
            date: row.get::<_, String>(2)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
            start_time: row.get(3)?,
            end_time: row.get(4)?,
            requester: row.get(5)?,
            contact: row.get(6)?,
            email: row.get(7)?,
            reason: row.get(8)?,
            created_at: row.get::<_, String>(9)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e))
            })?,
        })
    }
}
