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

mod calendar_date;
mod checkout;
mod date_text;
mod error;
mod guests;
mod name;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar_date::CalendarDate;
pub use checkout::resolve_checkout;
pub use date_text::{DateInterpreter, DateTextParser, NaturalLanguageDates};
pub use error::DomainError;
pub use guests::{MAX_GUESTS, MIN_GUESTS, extract_guest_count};
pub use name::normalize_name;
pub use validation::{validate_checkin_not_past, validate_checkout_after_checkin};
