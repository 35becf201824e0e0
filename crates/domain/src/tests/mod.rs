// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod date_text;

use crate::CalendarDate;

/// Builds a calendar date for tests.
pub fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("Valid test date")
}

/// The fixed "today" used across tests: Wednesday 14 January 2026.
pub fn test_today() -> CalendarDate {
    date(2026, 1, 14)
}
