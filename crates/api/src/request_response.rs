// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Webhook request and response data transfer objects.

use crate::event::Event;
use roomslot::{FieldName, RawBookingInput};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A custom action request from the conversation runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The action to run.
    pub next_action: String,
    /// The conversation the request belongs to.
    #[serde(default)]
    pub sender_id: Option<String>,
    /// Conversation state at the time of the request.
    #[serde(default)]
    pub tracker: Tracker,
}

/// The runtime's view of the conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    /// Slot values keyed by slot name.
    #[serde(default)]
    pub slots: Map<String, Value>,
}

impl Tracker {
    /// Returns a slot as text.
    ///
    /// Strings pass through unchanged and other scalars are rendered as
    /// JSON text. `null` and missing slots are `None`.
    #[must_use]
    pub fn slot_text(&self, name: &str) -> Option<String> {
        match self.slots.get(name)? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Collects the four booking slots.
    #[must_use]
    pub fn booking_input(&self) -> RawBookingInput {
        RawBookingInput {
            name: self.slot_text(FieldName::Name.as_str()),
            checkin_text: self.slot_text(FieldName::CheckinDate.as_str()),
            checkout_text: self.slot_text(FieldName::CheckoutDate.as_str()),
            guests_text: self.slot_text(FieldName::NumberOfGuests.as_str()),
        }
    }
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotResponse {
    pub text: String,
}

/// The reply to an [`ActionRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotResponse>,
}

impl ActionResponse {
    /// A response carrying a single message and no events.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            events: Vec::new(),
            responses: vec![BotResponse { text: text.into() }],
        }
    }

    /// Appends an event.
    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}
