// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the action boundary.

use thiserror::Error;

/// Errors returned by action dispatch.
///
/// Validation failures are not errors here: they become re-prompt
/// responses. Only problems the conversation cannot recover from are
/// reported through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The runtime asked for an action this server does not provide.
    #[error("Unknown action: {name}")]
    UnknownAction {
        /// The requested action name.
        name: String,
    },

    /// The booking was valid but could not be stored.
    #[error("Failed to store booking: {message}")]
    Storage {
        /// The storage layer's error text.
        message: String,
    },
}
