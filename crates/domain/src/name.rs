// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Normalizes a guest name.
///
/// Each whitespace-separated token gets an upper-case first letter and
/// lower-case remainder; tokens are joined by single spaces. The character
/// set is not checked, so digits and punctuation pass through.
///
/// # Errors
///
/// Returns `DomainError::EmptyName` if the text is empty or whitespace-only.
pub fn normalize_name(text: &str) -> Result<String, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::EmptyName);
    }

    Ok(text
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" "))
}

/// Upper-cases the first character of the token's upper-case expansion and
/// lower-cases everything after it, so `ß` becomes `Ss` rather than `SS`.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut upper = first.to_uppercase();
        let head: Option<char> = upper.next();
        head.into_iter()
            .chain(upper.flat_map(char::to_lowercase))
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
