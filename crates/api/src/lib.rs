// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Action boundary between the conversation runtime and the booking core.
//!
//! The runtime posts an [`ActionRequest`] naming one of the actions in
//! [`ActionName`]. The booking validator never sees JSON or the store;
//! this crate translates slots in, and outcomes back into [`Event`]s and
//! user-facing text.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod actions;
mod error;
mod event;
mod request_response;

#[cfg(test)]
mod tests;

pub use actions::{
    ActionName, BookingStore, FALLBACK_MESSAGE, RESET_MESSAGE, confirmation_message,
    default_fallback, reset_slots, run_action, validate_inputs,
};
pub use error::ApiError;
pub use event::{BOOKING_FORM, BOOKING_ID_SLOT, Event};
pub use request_response::{ActionRequest, ActionResponse, BotResponse, Tracker};
