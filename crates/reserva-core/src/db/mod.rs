//! Database operations and SQLite management for bookings.
//!
//! This module provides the storage layer of the booking system. It handles
//! the SQLite connection, schema management, and the query interfaces for
//! bookings: CRUD, the per-day occupancy view, filtered search, the
//! availability check and the weekly batch loop.
//!
//! A `Database` wraps one connection and is opened per operation by the
//! desk; nothing here holds a connection for the process lifetime.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod booking_queries;
pub mod migrations;
pub mod weekly;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
