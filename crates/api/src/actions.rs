// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Custom actions invoked by the conversation runtime.

use crate::error::ApiError;
use crate::event::{BOOKING_ID_SLOT, Event};
use crate::request_response::{ActionRequest, ActionResponse, Tracker};
use roomslot::{
    BookingValidator, CalendarDate, DateInterpreter, FieldName, NormalizedBooking,
    RawBookingInput, ValidationOutcome,
};
use roomslot_persistence::{Persistence, PersistenceError};
use std::str::FromStr;
use tracing::{info, warn};

/// Text sent when the conversation is reset.
pub const RESET_MESSAGE: &str = "Resetting all your data. Let's start fresh!";

/// Text sent when the runtime could not classify the user's message.
pub const FALLBACK_MESSAGE: &str =
    "I'm sorry, I didn't understand that. Type 'help' for instructions or 'reset' to start over.";

/// The actions this server provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionName {
    /// Validate the booking slots and store an accepted booking.
    ValidateInputs,
    /// Clear every booking slot.
    ResetSlots,
    /// Reply to an unrecognised message.
    DefaultFallback,
}

impl ActionName {
    /// Returns the action name used by the runtime.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidateInputs => "action_validate_inputs",
            Self::ResetSlots => "action_reset_slots",
            Self::DefaultFallback => "action_default_fallback",
        }
    }
}

impl FromStr for ActionName {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action_validate_inputs" => Ok(Self::ValidateInputs),
            "action_reset_slots" => Ok(Self::ResetSlots),
            "action_default_fallback" => Ok(Self::DefaultFallback),
            _ => Err(ApiError::UnknownAction {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Somewhere to keep accepted bookings.
pub trait BookingStore {
    /// The store's error type.
    type Error: std::fmt::Display;

    /// Stores `booking` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the booking could not be kept.
    fn record_booking(&mut self, booking: &NormalizedBooking) -> Result<i64, Self::Error>;
}

impl BookingStore for Persistence {
    type Error = PersistenceError;

    fn record_booking(&mut self, booking: &NormalizedBooking) -> Result<i64, Self::Error> {
        self.persist_booking(booking)
    }
}

/// Builds the confirmation text for a stored booking.
#[must_use]
pub fn confirmation_message(booking: &NormalizedBooking, booking_id: i64) -> String {
    format!(
        "Your booking for {} from {} to {} for {} guest(s) is confirmed! Your booking ID is {}.",
        booking.name(),
        booking.checkin_date(),
        booking.checkout_date(),
        booking.guest_count(),
        booking_id
    )
}

/// Validates the booking slots and stores an accepted booking.
///
/// On rejection the blamed slot is cleared and the booking form is
/// re-entered so the runtime asks for that slot again. On acceptance the
/// normalized values and the new booking ID are written back to the slots.
///
/// # Arguments
///
/// * `validator` - The booking validator
/// * `tracker` - The conversation state holding the slots
/// * `today` - The calendar date in the deployment timezone
/// * `store` - Where accepted bookings are kept
///
/// # Errors
///
/// Returns `ApiError::Storage` if an accepted booking cannot be stored.
pub fn validate_inputs<I: DateInterpreter, S: BookingStore>(
    validator: &BookingValidator<I>,
    tracker: &Tracker,
    today: CalendarDate,
    store: &mut S,
) -> Result<ActionResponse, ApiError> {
    let input: RawBookingInput = tracker.booking_input();

    let booking: NormalizedBooking = match validator.validate(&input, today) {
        ValidationOutcome::Accepted(booking) => booking,
        ValidationOutcome::Rejected { field, message } => {
            info!(%field, "Booking slot rejected, re-prompting");
            return Ok(ActionResponse::message(message)
                .with_event(Event::clear_slot(field))
                .with_event(Event::followup_booking_form()));
        }
    };

    let booking_id: i64 = store.record_booking(&booking).map_err(|e| {
        warn!(error = %e, "Failed to store accepted booking");
        ApiError::Storage {
            message: e.to_string(),
        }
    })?;

    Ok(
        ActionResponse::message(confirmation_message(&booking, booking_id))
            .with_event(Event::set_slot(FieldName::Name.as_str(), booking.name()))
            .with_event(Event::set_slot(
                FieldName::CheckinDate.as_str(),
                booking.checkin_date(),
            ))
            .with_event(Event::set_slot(
                FieldName::CheckoutDate.as_str(),
                booking.checkout_date(),
            ))
            .with_event(Event::set_slot(
                FieldName::NumberOfGuests.as_str(),
                booking.guest_count().to_string(),
            ))
            .with_event(Event::set_slot(BOOKING_ID_SLOT, booking_id.to_string())),
    )
}

/// Discards every booking slot.
///
/// The runtime applies the `reset_slots` event; the tracker is only read to
/// log how many booking slots were filled.
#[must_use]
pub fn reset_slots(tracker: &Tracker) -> ActionResponse {
    let filled: usize = FieldName::ALL
        .iter()
        .filter(|field| tracker.slots.get(field.as_str()).is_some_and(|value| !value.is_null()))
        .count();
    info!(filled, "Resetting booking slots");

    ActionResponse::message(RESET_MESSAGE).with_event(Event::ResetSlots)
}

/// Replies to a message the runtime could not classify.
#[must_use]
pub fn default_fallback() -> ActionResponse {
    ActionResponse::message(FALLBACK_MESSAGE)
}

/// Dispatches a runtime request to the named action.
///
/// # Arguments
///
/// * `validator` - The booking validator
/// * `request` - The runtime request
/// * `today` - The calendar date in the deployment timezone
/// * `store` - Where accepted bookings are kept
///
/// # Errors
///
/// Returns an error if:
/// - The action name is unknown
/// - An accepted booking cannot be stored
pub fn run_action<I: DateInterpreter, S: BookingStore>(
    validator: &BookingValidator<I>,
    request: &ActionRequest,
    today: CalendarDate,
    store: &mut S,
) -> Result<ActionResponse, ApiError> {
    let action: ActionName = request.next_action.parse()?;
    info!(
        %action,
        sender_id = request.sender_id.as_deref().unwrap_or_default(),
        "Running action"
    );

    match action {
        ActionName::ValidateInputs => validate_inputs(validator, &request.tracker, today, store),
        ActionName::ResetSlots => Ok(reset_slots(&request.tracker)),
        ActionName::DefaultFallback => Ok(default_fallback()),
    }
}
