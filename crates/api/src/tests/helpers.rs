// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{ActionRequest, BookingStore, Tracker};
use roomslot::{CalendarDate, NormalizedBooking};
use serde_json::{Map, Value, json};

/// Wednesday 14 January 2026.
pub fn create_test_today() -> CalendarDate {
    CalendarDate::from_ymd(2026, 1, 14).expect("Valid test date")
}

pub fn create_test_tracker(slots: Value) -> Tracker {
    let slots: Map<String, Value> = match slots {
        Value::Object(map) => map,
        _ => panic!("Slots must be a JSON object"),
    };
    Tracker {
        sender_id: Some(String::from("guest-1")),
        slots,
    }
}

pub fn create_valid_tracker() -> Tracker {
    create_test_tracker(json!({
        "name": "bob smith",
        "checkin_date": "25 January 2026",
        "checkout_date": "27 January 2026",
        "number_of_guests": "3",
    }))
}

pub fn create_test_request(action: &str, tracker: Tracker) -> ActionRequest {
    ActionRequest {
        next_action: String::from(action),
        sender_id: Some(String::from("guest-1")),
        tracker,
    }
}

/// Keeps bookings in memory and hands out sequential IDs from 100.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub bookings: Vec<NormalizedBooking>,
}

impl BookingStore for RecordingStore {
    type Error = std::convert::Infallible;

    fn record_booking(&mut self, booking: &NormalizedBooking) -> Result<i64, Self::Error> {
        self.bookings.push(booking.clone());
        Ok(99 + i64::try_from(self.bookings.len()).unwrap())
    }
}

/// Refuses every booking.
#[derive(Debug, Default)]
pub struct FailingStore;

impl BookingStore for FailingStore {
    type Error = String;

    fn record_booking(&mut self, _booking: &NormalizedBooking) -> Result<i64, Self::Error> {
        Err(String::from("disk full"))
    }
}
