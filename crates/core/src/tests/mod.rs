// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{BookingValidator, CalendarDate, NormalizedBooking, RawBookingInput, ValidationOutcome};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Builds a calendar date for tests.
pub fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("Valid test date")
}

/// The fixed "today" used across tests: Wednesday 14 January 2026.
pub fn test_today() -> CalendarDate {
    date(2026, 1, 14)
}

/// Runs the default validator against `test_today()`.
pub fn validate(name: &str, checkin: &str, checkout: &str, guests: &str) -> ValidationOutcome {
    let validator: BookingValidator = BookingValidator::default();
    let input: RawBookingInput = RawBookingInput::new(name, checkin, checkout, guests);
    validator.validate(&input, test_today())
}

/// Returns the accepted booking, failing the test on a rejection.
pub fn accepted(outcome: &ValidationOutcome) -> &NormalizedBooking {
    match outcome {
        ValidationOutcome::Accepted(booking) => booking,
        ValidationOutcome::Rejected { field, message } => {
            panic!("Expected acceptance, {field} was rejected: {message}")
        }
    }
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
