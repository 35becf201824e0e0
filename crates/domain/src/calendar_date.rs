// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar date value used throughout slot validation.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::{Date, Month, Weekday};

/// Largest day offset accepted by [`CalendarDate::checked_add_days`].
const MAX_DAY_OFFSET: u64 = 8_000_000;

/// A year-month-day value with no time component.
///
/// Equality and ordering are by (year, month, day). The `Display`
/// implementation renders the fixed slot format `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Creates a calendar date from its components.
    ///
    /// Returns `None` if the combination does not exist (e.g. 31 April).
    #[must_use]
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month: Month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.0.day()
    }

    /// Returns the day of the week.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the same month and day in another year.
    ///
    /// 29 February moved into a non-leap year becomes 28 February.
    ///
    /// # Errors
    ///
    /// Returns an error if the target year is outside the supported range.
    pub fn with_year(&self, year: i32) -> Result<Self, DomainError> {
        let overflow = || DomainError::DateArithmeticOverflow {
            operation: format!("moving {self} into year {year}"),
        };

        match Date::from_calendar_date(year, self.0.month(), self.0.day()) {
            Ok(date) => Ok(Self(date)),
            Err(_) if self.0.month() == Month::February && self.0.day() == 29 => {
                Date::from_calendar_date(year, Month::February, 28)
                    .map(Self)
                    .map_err(|_| overflow())
            }
            Err(_) => Err(overflow()),
        }
    }

    /// Adds (or with a negative value, subtracts) whole days.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is outside the supported range.
    pub fn checked_add_days(&self, days: i64) -> Result<Self, DomainError> {
        let overflow = || DomainError::DateArithmeticOverflow {
            operation: format!("adding {days} days to {self}"),
        };

        // Duration::days panics on overflow.
        if days.unsigned_abs() > MAX_DAY_OFFSET {
            return Err(overflow());
        }

        self.0
            .checked_add(time::Duration::days(days))
            .map(Self)
            .ok_or_else(overflow)
    }

    /// Returns the calendar date of `now` as observed in `timezone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the local date cannot be represented.
    pub fn today_in(timezone: Tz, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let local = now.with_timezone(&timezone).date_naive();
        let month: u8 =
            u8::try_from(local.month()).map_err(|_| DomainError::DateArithmeticOverflow {
                operation: format!("converting {local} to a calendar date"),
            })?;
        let day: u8 =
            u8::try_from(local.day()).map_err(|_| DomainError::DateArithmeticOverflow {
                operation: format!("converting {local} to a calendar date"),
            })?;

        Self::from_ymd(local.year(), month, day).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: format!("converting {local} to a calendar date"),
            }
        })
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day(), self.month(), self.year())
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}
