// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed re-prompt messages, one per failure kind.

use crate::outcome::FieldName;
use roomslot_domain::DomainError;

pub const INVALID_NAME: &str = "Please provide a valid name.";

pub const INVALID_CHECKIN: &str =
    "Please provide a valid check-in date (e.g. '25 January 2025').";

pub const PAST_CHECKIN: &str = "Your check-in date is in the past!\n\
    If you meant next year, please specify the year.\n\
    Please re-enter your check-in date.";

pub const INVALID_CHECKOUT: &str =
    "Please provide a valid check-out date (e.g. '26 January 2025').";

pub const CHECKOUT_NOT_AFTER_CHECKIN: &str = "Check-out date must be after your check-in date.\n\
    If you meant a date next year, please specify that explicitly.\n\
    Please re-enter your check-out date.";

pub const MISSING_GUEST_COUNT: &str = "Please provide a valid number of guests (e.g. '3').";

pub const GUEST_COUNT_OUT_OF_RANGE: &str =
    "Please provide a valid number of guests between 1 and 20.";

/// Returns the re-prompt for a failure on `field`.
#[must_use]
pub const fn rejection_message(field: FieldName, error: &DomainError) -> &'static str {
    match (field, error) {
        (FieldName::Name, _) => INVALID_NAME,
        (FieldName::CheckinDate, DomainError::PastCheckin { .. }) => PAST_CHECKIN,
        (FieldName::CheckinDate, _) => INVALID_CHECKIN,
        (FieldName::CheckoutDate, DomainError::NotAfterCheckin { .. }) => {
            CHECKOUT_NOT_AFTER_CHECKIN
        }
        (FieldName::CheckoutDate, _) => INVALID_CHECKOUT,
        (FieldName::NumberOfGuests, DomainError::OutOfRange { .. }) => GUEST_COUNT_OUT_OF_RANGE,
        (FieldName::NumberOfGuests, _) => MISSING_GUEST_COUNT,
    }
}
