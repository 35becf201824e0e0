// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for confirmed bookings.
//!
//! Built on Diesel with the `SQLite` backend. The schema is managed by
//! migrations embedded at compile time and applied whenever a database is
//! opened.
//!
//! ## Storage modes
//!
//! - **In-memory** (`Persistence::new_in_memory`) for tests and for running
//!   the server without a `--database` path. Every call gets its own
//!   isolated database.
//! - **File** (`Persistence::new_with_file`) for real deployments, with
//!   write-ahead logging enabled.
//!
//! Durability beyond what `SQLite` itself provides is not attempted.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

use diesel::SqliteConnection;
use roomslot::NormalizedBooking;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

pub use backend::sqlite::MIGRATIONS;
pub use data_models::BookingRecord;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Booking storage backed by a single `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so instances never
    /// see each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_roomslot_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if missing.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Stores an accepted booking.
    ///
    /// # Returns
    ///
    /// The generated `booking_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn persist_booking(&mut self, booking: &NormalizedBooking) -> Result<i64, PersistenceError> {
        mutations::bookings::insert_booking(&mut self.conn, booking)
    }

    /// Retrieves a stored booking.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BookingNotFound` if the ID is unknown.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<BookingRecord, PersistenceError> {
        queries::bookings::find_booking(&mut self.conn, booking_id)
    }

    /// Lists all stored bookings, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_bookings(&mut self) -> Result<Vec<BookingRecord>, PersistenceError> {
        queries::bookings::list_bookings(&mut self.conn)
    }

    /// Counts stored bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_bookings(&mut self) -> Result<usize, PersistenceError> {
        queries::bookings::count_bookings(&mut self.conn)
    }
}
