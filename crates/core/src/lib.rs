// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod booking;
mod input;
pub mod messages;
mod outcome;
mod stage;
mod validator;

#[cfg(test)]
mod tests;

pub use booking::NormalizedBooking;
pub use input::RawBookingInput;
pub use outcome::{FieldName, ValidationOutcome};
pub use stage::ValidationStage;
pub use validator::BookingValidator;

// Re-export the domain types callers need alongside the validator
pub use roomslot_domain::{CalendarDate, DateInterpreter, DateTextParser, NaturalLanguageDates};
