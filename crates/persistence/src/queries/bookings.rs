// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::BookingRecord;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Retrieves a booking by ID.
///
/// # Errors
///
/// Returns `PersistenceError::BookingNotFound` if no row has this ID, or
/// a database error if the query fails.
pub fn find_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<BookingRecord, PersistenceError> {
    debug!(booking_id, "Loading booking");

    bookings::table
        .find(booking_id)
        .select(BookingRecord::as_select())
        .first::<BookingRecord>(conn)
        .optional()?
        .ok_or(PersistenceError::BookingNotFound(booking_id))
}

/// Retrieves all bookings in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_bookings(conn: &mut SqliteConnection) -> Result<Vec<BookingRecord>, PersistenceError> {
    Ok(bookings::table
        .order(bookings::booking_id.asc())
        .select(BookingRecord::as_select())
        .load::<BookingRecord>(conn)?)
}

/// Counts stored bookings.
///
/// # Errors
///
/// Returns an error if the query fails or the count does not fit in `usize`.
pub fn count_bookings(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = bookings::table.count().get_result(conn)?;
    usize::try_from(count).map_err(|_| PersistenceError::InvalidValue {
        column: String::from("count(*)"),
        value: count.to_string(),
    })
}
