// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The four raw booking slots as collected by the conversation.
///
/// Any slot may be absent; an absent slot is validated exactly like empty
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBookingInput {
    /// The guest name as typed.
    pub name: Option<String>,
    /// The check-in date as typed.
    pub checkin_text: Option<String>,
    /// The check-out date as typed.
    pub checkout_text: Option<String>,
    /// The party size as typed.
    pub guests_text: Option<String>,
}

impl RawBookingInput {
    /// Creates an input with all four slots filled.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        checkin_text: impl Into<String>,
        checkout_text: impl Into<String>,
        guests_text: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            checkin_text: Some(checkin_text.into()),
            checkout_text: Some(checkout_text.into()),
            guests_text: Some(guests_text.into()),
        }
    }

    /// Returns the name slot, or `""` when absent.
    #[must_use]
    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Returns the check-in slot, or `""` when absent.
    #[must_use]
    pub fn checkin_text(&self) -> &str {
        self.checkin_text.as_deref().unwrap_or_default()
    }

    /// Returns the check-out slot, or `""` when absent.
    #[must_use]
    pub fn checkout_text(&self) -> &str {
        self.checkout_text.as_deref().unwrap_or_default()
    }

    /// Returns the guest count slot, or `""` when absent.
    #[must_use]
    pub fn guests_text(&self) -> &str {
        self.guests_text.as_deref().unwrap_or_default()
    }

    /// Discards all four slots.
    ///
    /// Returns how many slots held a value before clearing.
    pub fn clear(&mut self) -> usize {
        [
            self.name.take(),
            self.checkin_text.take(),
            self.checkout_text.take(),
            self.guests_text.take(),
        ]
        .iter()
        .filter(|slot| slot.is_some())
        .count()
    }
}
