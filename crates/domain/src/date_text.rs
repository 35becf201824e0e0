// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Free-text date interpretation.
//!
//! [`DateTextParser`] owns the narrow contract used by the rest of the
//! system: text in, [`CalendarDate`] or [`DomainError::Unparseable`] out.
//! The actual reading of natural language is delegated to a
//! [`DateInterpreter`], so the interpreter can be swapped without touching
//! the checkout resolver or the booking validator.
//!
//! The bundled [`NaturalLanguageDates`] interpreter understands:
//! - Relative words: `today`, `tonight`, `tomorrow`, `yesterday`,
//!   `day after tomorrow`, `day before yesterday`
//! - Offsets: `in 3 days`, `2 weeks from now`, `a week ago`, `next week`
//! - Weekdays: `friday`, `next friday`, `last tuesday`
//! - Numeric dates: `2025-01-25`, `25-01-2025`, `25/01/25`, `25.01`
//! - Month names: `25 January 2025`, `25th of Jan`, `Jan. 25, 25`
//!
//! Only ASCII digits are read. Two-digit years are taken as `20YY`.
//!
//! A year the text does not mention defaults to the year of `today`.

use crate::calendar_date::CalendarDate;
use crate::error::DomainError;
use regex::Regex;
use std::sync::LazyLock;
use time::Weekday;

#[allow(clippy::expect_used)]
static ORDINAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2})(?:st|nd|rd|th)\b").expect("valid ordinal pattern")
});

#[allow(clippy::expect_used)]
static ABBREVIATION_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])\.").expect("valid abbreviation pattern"));

#[allow(clippy::expect_used)]
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$").expect("valid ISO pattern")
});

#[allow(clippy::expect_used)]
static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})[-/.]([0-9]{1,2})(?:[-/.]([0-9]{4}|[0-9]{2}))?$")
        .expect("valid numeric pattern")
});

#[allow(clippy::expect_used)]
static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}) ([a-z]+)(?: ([0-9]{4}|[0-9]{2}))?$")
        .expect("valid day-month pattern")
});

#[allow(clippy::expect_used)]
static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+) ([0-9]{1,2})(?: ([0-9]{4}|[0-9]{2}))?$")
        .expect("valid month-day pattern")
});

#[allow(clippy::expect_used)]
static IN_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^in ([0-9]+|an?|one) (days?|weeks?)$").expect("valid offset pattern")
});

#[allow(clippy::expect_used)]
static FROM_NOW_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+|an?|one) (days?|weeks?) from now$").expect("valid offset pattern")
});

#[allow(clippy::expect_used)]
static AGO_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+|an?|one) (days?|weeks?) ago$").expect("valid offset pattern")
});

#[allow(clippy::expect_used)]
static WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(next|this|last|coming) )?([a-z]+)$").expect("valid weekday pattern")
});

/// Something that can read a calendar date out of free text.
///
/// Implementations return `None` when the text holds no recognisable date.
/// `today` anchors relative expressions and supplies an omitted year.
pub trait DateInterpreter {
    /// Interprets `text` relative to `today`.
    fn interpret(&self, text: &str, today: CalendarDate) -> Option<CalendarDate>;
}

impl<F> DateInterpreter for F
where
    F: Fn(&str, CalendarDate) -> Option<CalendarDate>,
{
    fn interpret(&self, text: &str, today: CalendarDate) -> Option<CalendarDate> {
        self(text, today)
    }
}

/// Parses user-supplied date text into a [`CalendarDate`].
#[derive(Debug, Clone, Default)]
pub struct DateTextParser<I = NaturalLanguageDates> {
    interpreter: I,
}

impl<I: DateInterpreter> DateTextParser<I> {
    /// Creates a parser backed by the given interpreter.
    #[must_use]
    pub const fn new(interpreter: I) -> Self {
        Self { interpreter }
    }

    /// Parses `text` into a calendar date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Unparseable` if the text is empty or the
    /// interpreter cannot produce a date from it.
    pub fn parse(&self, text: &str, today: CalendarDate) -> Result<CalendarDate, DomainError> {
        let trimmed: &str = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Unparseable {
                text: String::new(),
            });
        }

        self.interpreter
            .interpret(trimmed, today)
            .ok_or_else(|| DomainError::Unparseable {
                text: trimmed.to_string(),
            })
    }
}

/// Regex-based interpreter for common English date expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalLanguageDates;

impl DateInterpreter for NaturalLanguageDates {
    fn interpret(&self, text: &str, today: CalendarDate) -> Option<CalendarDate> {
        let cleaned: String = clean(text);
        if cleaned.is_empty() {
            return None;
        }

        relative_word(&cleaned, today)
            .or_else(|| offset(&cleaned, today))
            .or_else(|| iso_date(&cleaned))
            .or_else(|| numeric_date(&cleaned, today))
            .or_else(|| named_month_date(&cleaned, today))
            .or_else(|| weekday(&cleaned, today))
    }
}

/// Lower-cases, drops filler words and punctuation, strips ordinal suffixes.
///
/// Dots after a letter (`jan.`, `fri.`) are abbreviation marks and become
/// spaces; dots between digits are kept as numeric date separators.
fn clean(text: &str) -> String {
    let lowered: String = text.to_lowercase().replace(',', " ");
    let undotted = ABBREVIATION_DOT.replace_all(&lowered, "$1 ");
    let trimmed: &str = undotted.trim().trim_end_matches(['.', '!', '?']);
    let without_ordinals = ORDINAL_SUFFIX.replace_all(trimmed, "$1");

    without_ordinals
        .split_whitespace()
        .filter(|word| !matches!(*word, "the" | "of" | "on"))
        .collect::<Vec<&str>>()
        .join(" ")
}

fn relative_word(text: &str, today: CalendarDate) -> Option<CalendarDate> {
    let days: i64 = match text {
        "today" | "tonight" | "now" => 0,
        "tomorrow" => 1,
        "day after tomorrow" => 2,
        "yesterday" => -1,
        "day before yesterday" => -2,
        "next week" => 7,
        _ => return None,
    };
    today.checked_add_days(days).ok()
}

fn offset(text: &str, today: CalendarDate) -> Option<CalendarDate> {
    let (captures, sign) = if let Some(captures) = IN_OFFSET.captures(text) {
        (captures, 1)
    } else if let Some(captures) = FROM_NOW_OFFSET.captures(text) {
        (captures, 1)
    } else if let Some(captures) = AGO_OFFSET.captures(text) {
        (captures, -1)
    } else {
        return None;
    };

    let amount: i64 = match &captures[1] {
        "a" | "an" | "one" => 1,
        digits => digits.parse().ok()?,
    };
    let unit_days: i64 = if captures[2].starts_with("week") {
        7
    } else {
        1
    };

    let days: i64 = amount.checked_mul(unit_days)?.checked_mul(sign)?;
    today.checked_add_days(days).ok()
}

fn iso_date(text: &str) -> Option<CalendarDate> {
    let captures = ISO_DATE.captures(text)?;
    CalendarDate::from_ymd(
        captures[1].parse().ok()?,
        captures[2].parse().ok()?,
        captures[3].parse().ok()?,
    )
}

/// Day-first numeric dates, matching the `DD-MM-YYYY` slot format.
fn numeric_date(text: &str, today: CalendarDate) -> Option<CalendarDate> {
    let captures = NUMERIC_DATE.captures(text)?;
    let day: u8 = captures[1].parse().ok()?;
    let month: u8 = captures[2].parse().ok()?;
    let year: i32 = match captures.get(3) {
        Some(year) => expand_year(year.as_str())?,
        None => today.year(),
    };
    CalendarDate::from_ymd(year, month, day)
}

fn named_month_date(text: &str, today: CalendarDate) -> Option<CalendarDate> {
    let (day, month, year) = if let Some(captures) = DAY_MONTH.captures(text) {
        (
            captures[1].parse::<u8>().ok()?,
            month_number(&captures[2])?,
            captures.get(3).map(|year| year.as_str().to_string()),
        )
    } else if let Some(captures) = MONTH_DAY.captures(text) {
        (
            captures[2].parse::<u8>().ok()?,
            month_number(&captures[1])?,
            captures.get(3).map(|year| year.as_str().to_string()),
        )
    } else {
        return None;
    };

    let year: i32 = match year {
        Some(year) => expand_year(&year)?,
        None => today.year(),
    };
    CalendarDate::from_ymd(year, month, day)
}

fn weekday(text: &str, today: CalendarDate) -> Option<CalendarDate> {
    let captures = WEEKDAY.captures(text)?;
    let target: Weekday = weekday_named(&captures[2])?;

    let today_index: i64 = i64::from(today.weekday().number_days_from_monday());
    let target_index: i64 = i64::from(target.number_days_from_monday());
    let ahead: i64 = (target_index - today_index).rem_euclid(7);

    let days: i64 = match captures.get(1).map(|modifier| modifier.as_str()) {
        None | Some("this" | "coming") => ahead,
        Some("next") => {
            if ahead == 0 { 7 } else { ahead }
        }
        Some(_) => {
            let behind: i64 = (today_index - target_index).rem_euclid(7);
            if behind == 0 { -7 } else { -behind }
        }
    };
    today.checked_add_days(days).ok()
}

fn expand_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    if year.len() == 2 {
        Some(2000 + value)
    } else {
        Some(value)
    }
}

fn month_number(name: &str) -> Option<u8> {
    let month: u8 = match name {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

fn weekday_named(name: &str) -> Option<Weekday> {
    let weekday: Weekday = match name {
        "mon" | "monday" => Weekday::Monday,
        "tue" | "tues" | "tuesday" => Weekday::Tuesday,
        "wed" | "wednesday" => Weekday::Wednesday,
        "thu" | "thur" | "thurs" | "thursday" => Weekday::Thursday,
        "fri" | "friday" => Weekday::Friday,
        "sat" | "saturday" => Weekday::Saturday,
        "sun" | "sunday" => Weekday::Sunday,
        _ => return None,
    };
    Some(weekday)
}
