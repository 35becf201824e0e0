// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{date, test_today};
use crate::{CalendarDate, DateTextParser, DomainError, NaturalLanguageDates};

fn parse(text: &str) -> Result<CalendarDate, DomainError> {
    let parser: DateTextParser = DateTextParser::default();
    parser.parse(text, test_today())
}

#[test]
fn test_parse_rejects_empty_text() {
    assert_eq!(
        parse(""),
        Err(DomainError::Unparseable {
            text: String::new()
        })
    );
    assert_eq!(
        parse("   \t "),
        Err(DomainError::Unparseable {
            text: String::new()
        })
    );
}

#[test]
fn test_parse_rejects_text_without_a_date() {
    assert_eq!(
        parse("  banana "),
        Err(DomainError::Unparseable {
            text: String::from("banana")
        })
    );
    assert!(parse("sometime soon").is_err());
}

#[test]
fn test_parse_rejects_impossible_calendar_dates() {
    assert!(parse("31 February 2026").is_err());
    assert!(parse("2026-02-30").is_err());
    assert!(parse("32/01/2026").is_err());
}

#[test]
fn test_parse_relative_words() {
    assert_eq!(parse("today").unwrap(), date(2026, 1, 14));
    assert_eq!(parse("Tonight").unwrap(), date(2026, 1, 14));
    assert_eq!(parse("tomorrow").unwrap(), date(2026, 1, 15));
    assert_eq!(parse("the day after tomorrow").unwrap(), date(2026, 1, 16));
    assert_eq!(parse("yesterday").unwrap(), date(2026, 1, 13));
    assert_eq!(parse("day before yesterday").unwrap(), date(2026, 1, 12));
    assert_eq!(parse("next week").unwrap(), date(2026, 1, 21));
}

#[test]
fn test_parse_day_offsets() {
    assert_eq!(parse("in 3 days").unwrap(), date(2026, 1, 17));
    assert_eq!(parse("in a week").unwrap(), date(2026, 1, 21));
    assert_eq!(parse("2 weeks from now").unwrap(), date(2026, 1, 28));
    assert_eq!(parse("a week ago").unwrap(), date(2026, 1, 7));
    assert_eq!(parse("20 days ago").unwrap(), date(2025, 12, 25));
}

#[test]
fn test_parse_rejects_absurd_offsets() {
    assert!(parse("in 99999999999999999 days").is_err());
    assert!(parse("in 9999999999 weeks").is_err());
}

#[test]
fn test_parse_weekdays() {
    // Today is a Wednesday.
    assert_eq!(parse("friday").unwrap(), date(2026, 1, 16));
    assert_eq!(parse("Next Friday").unwrap(), date(2026, 1, 16));
    assert_eq!(parse("wednesday").unwrap(), date(2026, 1, 14));
    assert_eq!(parse("next wednesday").unwrap(), date(2026, 1, 21));
    assert_eq!(parse("last wednesday").unwrap(), date(2026, 1, 7));
    assert_eq!(parse("last mon").unwrap(), date(2026, 1, 12));
    assert_eq!(parse("on sunday").unwrap(), date(2026, 1, 18));
}

#[test]
fn test_parse_iso_dates() {
    assert_eq!(parse("2025-01-25").unwrap(), date(2025, 1, 25));
    assert_eq!(parse("2027-3-5").unwrap(), date(2027, 3, 5));
}

#[test]
fn test_parse_numeric_dates_are_day_first() {
    assert_eq!(parse("25-01-2025").unwrap(), date(2025, 1, 25));
    assert_eq!(parse("05/03/2026").unwrap(), date(2026, 3, 5));
    assert_eq!(parse("5.3.2026").unwrap(), date(2026, 3, 5));
    assert_eq!(parse("25/01/25").unwrap(), date(2025, 1, 25));
}

#[test]
fn test_parse_numeric_date_without_year_uses_current_year() {
    assert_eq!(parse("25/01").unwrap(), date(2026, 1, 25));
    assert_eq!(parse("12-01").unwrap(), date(2026, 1, 12));
}

#[test]
fn test_parse_month_names() {
    assert_eq!(parse("25 January 2025").unwrap(), date(2025, 1, 25));
    assert_eq!(parse("25th of January, 2025").unwrap(), date(2025, 1, 25));
    assert_eq!(parse("January 25, 2025").unwrap(), date(2025, 1, 25));
    assert_eq!(parse("Jan 25th 2025").unwrap(), date(2025, 1, 25));
    assert_eq!(parse("1st sept 2026").unwrap(), date(2026, 9, 1));
    assert_eq!(parse("the 3rd of may 2026.").unwrap(), date(2026, 5, 3));
}

#[test]
fn test_parse_month_name_without_year_uses_current_year() {
    assert_eq!(parse("12 January").unwrap(), date(2026, 1, 12));
    assert_eq!(parse("dec 24th").unwrap(), date(2026, 12, 24));
}

#[test]
fn test_parse_month_names_with_two_digit_years() {
    assert_eq!(parse("25 jan 26").unwrap(), date(2026, 1, 25));
    assert_eq!(parse("January 25, 27").unwrap(), date(2027, 1, 25));
    assert_eq!(parse("25/01/26").unwrap(), parse("25 jan 26").unwrap());
}

#[test]
fn test_parse_strips_abbreviation_dots() {
    assert_eq!(parse("jan. 25").unwrap(), date(2026, 1, 25));
    assert_eq!(parse("25 Feb. 2026").unwrap(), date(2026, 2, 25));
    assert_eq!(parse("Sept.3").unwrap(), date(2026, 9, 3));
    assert_eq!(parse("fri.").unwrap(), date(2026, 1, 16));
    assert_eq!(parse("25.01.2026").unwrap(), date(2026, 1, 25));
}

#[test]
fn test_parse_ignores_non_ascii_digits() {
    // Full-width "25/01" and Arabic-Indic "2026-01-25".
    assert!(parse("\u{FF12}\u{FF15}/01").is_err());
    assert!(parse("\u{0662}\u{0660}\u{0662}\u{0666}-01-25").is_err());
    assert!(parse("in \u{0663} days").is_err());
}

#[test]
fn test_parse_with_custom_interpreter() {
    let fixed = |text: &str, _today: CalendarDate| {
        (text == "launch day").then(|| date(2030, 6, 1))
    };
    let parser: DateTextParser<_> = DateTextParser::new(fixed);

    assert_eq!(
        parser.parse(" launch day ", test_today()).unwrap(),
        date(2030, 6, 1)
    );
    assert!(parser.parse("tomorrow", test_today()).is_err());
}

#[test]
fn test_natural_language_dates_is_usable_directly() {
    use crate::DateInterpreter;

    let interpreter: NaturalLanguageDates = NaturalLanguageDates;
    assert_eq!(
        interpreter.interpret("tomorrow", test_today()),
        Some(date(2026, 1, 15))
    );
    assert_eq!(interpreter.interpret("???", test_today()), None);
}
