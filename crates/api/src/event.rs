// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roomslot::FieldName;
use serde::{Deserialize, Serialize};

/// The form the runtime re-enters after a rejected slot.
pub const BOOKING_FORM: &str = "hotel_booking_form";

/// Slot holding the stored booking's ID.
pub const BOOKING_ID_SLOT: &str = "booking_id";

/// A conversation event returned to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Sets a slot; `None` clears it.
    Slot { name: String, value: Option<String> },
    /// Runs another action or form next.
    Followup { name: String },
    /// Clears every slot in the conversation.
    ResetSlots,
}

impl Event {
    /// Sets `name` to `value`.
    #[must_use]
    pub fn set_slot(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Slot {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Clears the slot backing `field`.
    #[must_use]
    pub fn clear_slot(field: FieldName) -> Self {
        Self::Slot {
            name: field.as_str().to_string(),
            value: None,
        }
    }

    /// Re-enters the booking form.
    #[must_use]
    pub fn followup_booking_form() -> Self {
        Self::Followup {
            name: BOOKING_FORM.to_string(),
        }
    }
}
