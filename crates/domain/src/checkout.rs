// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Check-out date resolution relative to a confirmed check-in.

use crate::calendar_date::CalendarDate;
use crate::date_text::{DateInterpreter, DateTextParser};
use crate::error::DomainError;

/// Resolves check-out text to a date on or after `checkin`.
///
/// Users often give a check-out day and month without a year, and the
/// parser then defaults to the current year, which can land before an
/// already-confirmed check-in. Resolution proceeds as follows:
///
/// 1. Parse the text; a parsed date on or after `checkin` is returned as-is.
/// 2. Otherwise move the parsed month/day into `checkin`'s year and return
///    it if that is on or after `checkin`.
/// 3. Otherwise return the month/day in the year after `checkin`.
///
/// Step 3 is a guess at what the user meant and is not confirmed with them.
/// The caller still has to check that the result is strictly after
/// `checkin`.
///
/// # Arguments
///
/// * `parser` - The date text parser
/// * `checkout_text` - The raw check-out text
/// * `checkin` - The confirmed check-in date
/// * `today` - The calendar date the validation runs on
///
/// # Errors
///
/// Returns an error if:
/// - The text cannot be parsed as a date
/// - Moving the date into another year leaves the supported range
pub fn resolve_checkout<I: DateInterpreter>(
    parser: &DateTextParser<I>,
    checkout_text: &str,
    checkin: CalendarDate,
    today: CalendarDate,
) -> Result<CalendarDate, DomainError> {
    let parsed: CalendarDate = parser.parse(checkout_text, today)?;
    if parsed >= checkin {
        return Ok(parsed);
    }

    let same_year: CalendarDate = parsed.with_year(checkin.year())?;
    if same_year >= checkin {
        return Ok(same_year);
    }

    let next_year: i32 =
        checkin
            .year()
            .checked_add(1)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("advancing check-out past {checkin}"),
            })?;
    parsed.with_year(next_year)
}
