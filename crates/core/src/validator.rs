// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::NormalizedBooking;
use crate::input::RawBookingInput;
use crate::messages::rejection_message;
use crate::outcome::{FieldName, ValidationOutcome};
use crate::stage::ValidationStage;
use roomslot_domain::{
    CalendarDate, DateInterpreter, DateTextParser, DomainError, NaturalLanguageDates,
    extract_guest_count, normalize_name, resolve_checkout, validate_checkin_not_past,
    validate_checkout_after_checkin,
};
use tracing::{debug, info};

/// Validates the four booking slots in a fixed order.
///
/// Fields are checked name first, then check-in, check-out and finally the
/// guest count. Validation stops at the first failure and reports only
/// that field.
#[derive(Debug, Clone, Default)]
pub struct BookingValidator<I = NaturalLanguageDates> {
    parser: DateTextParser<I>,
}

impl<I: DateInterpreter> BookingValidator<I> {
    /// Creates a validator around the given date parser.
    #[must_use]
    pub const fn new(parser: DateTextParser<I>) -> Self {
        Self { parser }
    }

    /// Validates raw slot text against `today`.
    ///
    /// Absent slots are treated as empty text and fail their own field.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw slot values
    /// * `today` - The calendar date in the deployment timezone
    ///
    /// # Returns
    ///
    /// * `ValidationOutcome::Accepted` with the normalized booking, or
    /// * `ValidationOutcome::Rejected` naming the first invalid field
    #[must_use]
    pub fn validate(&self, input: &RawBookingInput, today: CalendarDate) -> ValidationOutcome {
        match self.run(input, today) {
            Ok(booking) => booking,
            Err(rejection) => rejection,
        }
    }

    fn run(
        &self,
        input: &RawBookingInput,
        today: CalendarDate,
    ) -> Result<ValidationOutcome, ValidationOutcome> {
        let mut progress: Progress = Progress::default();

        let name: String = progress.check(FieldName::Name, normalize_name(input.name_text()))?;

        let checkin: CalendarDate = progress.check(
            FieldName::CheckinDate,
            self.parser
                .parse(input.checkin_text(), today)
                .and_then(|checkin| validate_checkin_not_past(checkin, today).map(|()| checkin)),
        )?;

        let checkout: CalendarDate = progress.check(
            FieldName::CheckoutDate,
            resolve_checkout(&self.parser, input.checkout_text(), checkin, today).and_then(
                |checkout| validate_checkout_after_checkin(checkin, checkout).map(|()| checkout),
            ),
        )?;

        let guest_count: u8 = progress.check(
            FieldName::NumberOfGuests,
            extract_guest_count(input.guests_text()),
        )?;

        let booking: NormalizedBooking =
            NormalizedBooking::new(name, checkin, checkout, guest_count);
        info!(
            checkin = booking.checkin_date(),
            checkout = booking.checkout_date(),
            guests = booking.guest_count(),
            "Booking slots accepted"
        );
        Ok(ValidationOutcome::Accepted(booking))
    }
}

/// Walks [`ValidationStage`] as each slot is checked.
#[derive(Debug, Default)]
pub struct Progress {
    pub stage: ValidationStage,
}

impl Progress {
    /// Records the result of checking `field` and advances the stage.
    ///
    /// `field` must be the stage's pending field; checking slots out of
    /// order is a bug in the caller.
    pub fn check<T>(
        &mut self,
        field: FieldName,
        result: Result<T, DomainError>,
    ) -> Result<T, ValidationOutcome> {
        debug_assert_eq!(
            self.stage.pending_field(),
            Some(field),
            "slot {field} checked out of order at stage {}",
            self.stage
        );

        match result {
            Ok(value) => {
                self.advance(self.stage.next(), field);
                Ok(value)
            }
            Err(error) => {
                debug!(%field, %error, "Slot failed validation");
                self.advance(ValidationStage::Rejected, field);
                Err(ValidationOutcome::Rejected {
                    field,
                    message: rejection_message(field, &error).to_string(),
                })
            }
        }
    }

    fn advance(&mut self, target: ValidationStage, field: FieldName) {
        debug_assert!(
            self.stage.can_transition_to(target),
            "invalid stage transition {} -> {target}",
            self.stage
        );
        debug!(%field, from = %self.stage, to = %target, "Validation stage advanced");
        self.stage = target;
    }
}
