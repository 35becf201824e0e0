// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar_date::CalendarDate;

/// Errors that can occur while normalizing a booking slot.
///
/// Every variant is an ordinary, recoverable outcome of invalid user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The text could not be interpreted as a calendar date.
    Unparseable {
        /// The text that was rejected (trimmed).
        text: String,
    },
    /// The check-in date is earlier than the current calendar date.
    PastCheckin {
        /// The parsed check-in date.
        checkin: CalendarDate,
        /// The calendar date the validation ran on.
        today: CalendarDate,
    },
    /// The resolved check-out date is not strictly after check-in.
    NotAfterCheckin {
        /// The confirmed check-in date.
        checkin: CalendarDate,
        /// The resolved check-out date.
        checkout: CalendarDate,
    },
    /// No digits or known number words were found in the guest text.
    NoNumberFound,
    /// The guest count is outside the accepted range.
    OutOfRange {
        /// The extracted digit run, as typed.
        value: String,
    },
    /// The name is empty or whitespace-only.
    EmptyName,
    /// Date arithmetic left the representable range.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparseable { text } => write!(f, "Could not interpret '{text}' as a date"),
            Self::PastCheckin { checkin, today } => {
                write!(f, "Check-in date {checkin} is before today ({today})")
            }
            Self::NotAfterCheckin { checkin, checkout } => {
                write!(
                    f,
                    "Check-out date {checkout} is not after check-in date {checkin}"
                )
            }
            Self::NoNumberFound => write!(f, "No guest count found"),
            Self::OutOfRange { value } => {
                write!(f, "Guest count {value} is out of range. Must be between 1 and 20")
            }
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
