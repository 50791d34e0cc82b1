//! High-level booking desk API.
//!
//! This module provides the main [`BookingDesk`] interface, the single
//! entry point a frontend calls. The desk coordinates the three pieces of
//! the core: input validation (via [`crate::params`]), the availability
//! check (via [`crate::availability`] through the store), and the store
//! itself ([`crate::db::Database`]).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (handlers.rs)  │───▶│ (booking_ops,   │───▶│    (via db/)    │
//! │                 │    │  batch_ops)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   display wrappers      business logic         data persistence
//! ```
//!
//! Every operation opens its own database connection inside
//! `task::spawn_blocking` and drops it on return: connections are scoped
//! to one operation, never held for the process lifetime. Because nothing
//! locks across the availability check and the insert, [`reserve`] re-runs
//! the check immediately before inserting; the remaining unlocked gap is
//! an accepted limitation of the single-user design, not a hazard this
//! crate tries to close.
//!
//! [`reserve`]: BookingDesk::reserve
//!
//! # Usage
//!
//! ```rust
//! use reserva_core::{params::CreateBooking, BookingDeskBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let desk = BookingDeskBuilder::new().build().await?;
//!
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
//! println!("{}", booking);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod batch_ops;
pub mod booking_ops;
pub mod builder;
pub mod handlers;


// Re-export the main types
pub use builder::BookingDeskBuilder;

/// Main desk interface for managing bookings.
pub struct BookingDesk {
    pub(crate) db_path: PathBuf,
}

impl BookingDesk {
    /// Creates a new desk with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
