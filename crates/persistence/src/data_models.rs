// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::bookings;

/// A stored booking row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = bookings)]
pub struct BookingRecord {
    pub booking_id: i64,
    pub name: String,
    /// `DD-MM-YYYY`
    pub checkin_date: String,
    /// `DD-MM-YYYY`
    pub checkout_date: String,
    pub guests: i32,
    /// Set by the database on insert.
    pub created_at: Option<String>,
}

/// Insertable form of a booking.
#[derive(Debug, Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking<'a> {
    pub name: &'a str,
    pub checkin_date: &'a str,
    pub checkout_date: &'a str,
    pub guests: i32,
}
