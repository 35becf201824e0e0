// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Party size extraction from free text.

use crate::error::DomainError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Smallest accepted party size.
pub const MIN_GUESTS: u8 = 1;

/// Largest accepted party size.
pub const MAX_GUESTS: u8 = 20;

#[allow(clippy::expect_used)]
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit pattern"));

#[allow(clippy::expect_used)]
static NUMBER_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(zero|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty)\b",
    )
    .expect("valid number word pattern")
});

/// Extracts the party size from free text.
///
/// The first run of ASCII digits wins, even if a later number is more plausible.
/// When the text contains no digits, the words `zero` through `twenty` are
/// replaced by digits and the text is scanned again. Larger spelled-out
/// numbers are not understood.
///
/// # Arguments
///
/// * `text` - The raw guest count text
///
/// # Returns
///
/// * `Ok(u8)` if a count between 1 and 20 was found
///
/// # Errors
///
/// Returns an error if:
/// - No digits or number words are present
/// - The first number is outside 1..=20
pub fn extract_guest_count(text: &str) -> Result<u8, DomainError> {
    let digits: String = match DIGIT_RUN.find(text) {
        Some(found) => found.as_str().to_string(),
        None => {
            let substituted = NUMBER_WORD.replace_all(text, |captures: &Captures<'_>| {
                word_value(&captures[1]).to_string()
            });
            DIGIT_RUN
                .find(&substituted)
                .map(|found| found.as_str().to_string())
                .ok_or(DomainError::NoNumberFound)?
        }
    };

    let out_of_range = || DomainError::OutOfRange {
        value: digits.clone(),
    };
    let count: u8 = digits.parse().map_err(|_| out_of_range())?;
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&count) {
        return Err(out_of_range());
    }

    Ok(count)
}

fn word_value(word: &str) -> u8 {
    match word.to_lowercase().as_str() {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        _ => 0,
    }
}
