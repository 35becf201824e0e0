// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::NormalizedBooking;
use serde::{Deserialize, Serialize};

/// The booking slot blamed by a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// The guest name.
    Name,
    /// The check-in date.
    CheckinDate,
    /// The check-out date.
    CheckoutDate,
    /// The party size.
    NumberOfGuests,
}

impl FieldName {
    /// All fields in validation order.
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::CheckinDate,
        Self::CheckoutDate,
        Self::NumberOfGuests,
    ];

    /// Returns the slot name used by the conversation runtime.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CheckinDate => "checkin_date",
            Self::CheckoutDate => "checkout_date",
            Self::NumberOfGuests => "number_of_guests",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// All four slots are valid.
    Accepted(NormalizedBooking),
    /// The first invalid slot, with the message to re-prompt the user.
    Rejected {
        /// The blamed slot.
        field: FieldName,
        /// The user-facing re-prompt.
        message: String,
    },
}
