// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use roomslot::NormalizedBooking;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewBooking;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Inserts a validated booking.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking` - The accepted booking
///
/// # Returns
///
/// The new `booking_id`.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    booking: &NormalizedBooking,
) -> Result<i64, PersistenceError> {
    let row: NewBooking<'_> = NewBooking {
        name: booking.name(),
        checkin_date: booking.checkin_date(),
        checkout_date: booking.checkout_date(),
        guests: i32::from(booking.guest_count()),
    };

    let booking_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(bookings::table)
            .values(&row)
            .execute(conn)?;
        conn.get_last_insert_rowid()
    })?;

    info!(booking_id, "Booking stored");
    Ok(booking_id)
}
