// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomslot_domain::CalendarDate;
use serde::Serialize;

/// A fully validated booking, ready to hand to storage.
///
/// Only the booking validator creates these. Dates are rendered in the
/// fixed `DD-MM-YYYY` slot format; check-out is always strictly after
/// check-in and check-in is never before the validation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedBooking {
    name: String,
    checkin_date: String,
    checkout_date: String,
    guest_count: u8,
}

impl NormalizedBooking {
    pub(crate) fn new(
        name: String,
        checkin: CalendarDate,
        checkout: CalendarDate,
        guest_count: u8,
    ) -> Self {
        Self {
            name,
            checkin_date: checkin.to_string(),
            checkout_date: checkout.to_string(),
            guest_count,
        }
    }

    /// Returns the title-cased guest name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the check-in date as `DD-MM-YYYY`.
    #[must_use]
    pub fn checkin_date(&self) -> &str {
        &self.checkin_date
    }

    /// Returns the check-out date as `DD-MM-YYYY`.
    #[must_use]
    pub fn checkout_date(&self) -> &str {
        &self.checkout_date
    }

    /// Returns the party size (1-20).
    #[must_use]
    pub const fn guest_count(&self) -> u8 {
        self.guest_count
    }
}
