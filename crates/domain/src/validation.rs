// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar_date::CalendarDate;
use crate::error::DomainError;

/// Validates that a check-in date is not in the past.
///
/// The comparison is at calendar-date granularity, so a check-in of
/// `today` is always accepted regardless of the time of day.
///
/// # Arguments
///
/// * `checkin` - The parsed check-in date
/// * `today` - The calendar date the validation runs on
///
/// # Errors
///
/// Returns `DomainError::PastCheckin` if `checkin` is before `today`.
pub fn validate_checkin_not_past(
    checkin: CalendarDate,
    today: CalendarDate,
) -> Result<(), DomainError> {
    // Rule: check-in may be today but never earlier
    if checkin < today {
        return Err(DomainError::PastCheckin { checkin, today });
    }
    Ok(())
}

/// Validates that a check-out date falls strictly after check-in.
///
/// # Arguments
///
/// * `checkin` - The confirmed check-in date
/// * `checkout` - The resolved check-out date
///
/// # Errors
///
/// Returns `DomainError::NotAfterCheckin` if `checkout` is on or before
/// `checkin`.
pub fn validate_checkout_after_checkin(
    checkin: CalendarDate,
    checkout: CalendarDate,
) -> Result<(), DomainError> {
    // Rule: a stay is at least one night
    if checkout <= checkin {
        return Err(DomainError::NotAfterCheckin { checkin, checkout });
    }
    Ok(())
}
