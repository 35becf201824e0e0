// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use roomslot::{
    BookingValidator, CalendarDate, NormalizedBooking, RawBookingInput, ValidationOutcome,
};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Validates a booking against 14 January 2026 and returns it.
pub fn create_test_booking(
    name: &str,
    checkin: &str,
    checkout: &str,
    guests: &str,
) -> NormalizedBooking {
    let validator: BookingValidator = BookingValidator::default();
    let today: CalendarDate = CalendarDate::from_ymd(2026, 1, 14).expect("Valid test date");
    let input: RawBookingInput = RawBookingInput::new(name, checkin, checkout, guests);

    match validator.validate(&input, today) {
        ValidationOutcome::Accepted(booking) => booking,
        ValidationOutcome::Rejected { field, message } => {
            panic!("Test booking rejected at {field}: {message}")
        }
    }
}

/// A booking for Bob Smith, 25-27 January 2026, three guests.
pub fn create_default_booking() -> NormalizedBooking {
    create_test_booking("bob smith", "25 January 2026", "27 January 2026", "3")
}

/// Formatted log output captured while a closure runs.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Runs `f` with every event at `DEBUG` or above written to this buffer.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer: Self = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
