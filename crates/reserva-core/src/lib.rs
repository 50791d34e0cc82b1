//! Core library for the reserva venue booking application.
//!
//! This crate provides the core business logic for booking two shared
//! venues into hourly slots: the SQLite-backed booking store, the
//! availability engine that resolves interval overlaps (including
//! bookings that cross midnight), and the weekly batch scheduler that
//! expands a recurrence into individual dates with per-date conflict
//! reporting.
//!
//! # Architecture
//!
//! - **Store** ([`db`]): one table of bookings, opened per operation,
//!   queryable by id, by venue/day, and by filtered search.
//! - **Availability engine** ([`availability`]): pure half-open interval
//!   logic over `jiff` civil types; overnight hours normalize onto the
//!   following day, and corrupt stored hours fail closed.
//! - **Batch scheduler** ([`schedule`] + [`desk`]): expands weekdays over
//!   the rest of the current month and books each candidate date
//!   independently.
//! - **Desk** ([`desk`]): the async facade frontends call; validates
//!   requests ([`params`]), coordinates check-then-insert, and hands back
//!   display wrappers ([`display`]) or domain models ([`models`]).
//!
//! # Quick Start
//!
//! ```rust
//! use reserva_core::{params::CreateBooking, BookingDeskBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a desk instance
//! let desk = BookingDeskBuilder::new()
//!     .with_database_path(Some("bookings.db"))
//!     .build()
//!     .await?;
//!
//! // Book the sports hall for a morning slot
//! let request = CreateBooking {
//!     venue: "Polideportivo".to_string(),
//!     date: "2026-09-14".to_string(),
//!     start: "09:00".to_string(),
//!     end: "10:00".to_string(),
//!     requester: "Ana Pérez".to_string(),
//!     contact: "555-0101".to_string(),
//!     email: "ana@example.com".to_string(),
//!     reason: "Basketball practice".to_string(),
//! };
//! let booking = desk.reserve(&request).await?;
//! println!("Created booking: {}", booking);
//!
//! // The same slot is now taken
//! assert!(desk.reserve(&request).await.is_err());
//! # Ok(())
//! # }
//! ```

pub mod availability;
pub mod db;
pub mod desk;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod ticket;

// Re-export commonly used types
pub use db::Database;
pub use desk::{BookingDesk, BookingDeskBuilder};
pub use display::{
    AvailabilityStatus, BatchReport, Bookings, CreateResult, DaySchedule, DeleteResult,
    LocalDateTime,
};
pub use error::{DeskError, Result};
pub use models::{BatchOutcome, Booking, BookingFilter, Slot, Venue};
pub use params::{CheckAvailability, CreateBooking, DayQuery, Id, SearchBookings, WeeklyBooking};
pub use ticket::{ticket_file_name, Ticket};
