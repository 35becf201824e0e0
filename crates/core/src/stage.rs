// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::outcome::FieldName;

/// Progress of a single validation pass.
///
/// Valid transitions are:
/// - Start → `NameChecked`
/// - `NameChecked` → `CheckinChecked`
/// - `CheckinChecked` → `CheckoutChecked`
/// - `CheckoutChecked` → Accepted
/// - any non-terminal stage → Rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationStage {
    /// Nothing validated yet.
    #[default]
    Start,
    /// The name is valid.
    NameChecked,
    /// The check-in date is valid and not in the past.
    CheckinChecked,
    /// The check-out date is resolved and after check-in.
    CheckoutChecked,
    /// Every slot is valid.
    Accepted,
    /// A slot failed validation.
    Rejected,
}

impl ValidationStage {
    /// Converts this stage to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::NameChecked => "NameChecked",
            Self::CheckinChecked => "CheckinChecked",
            Self::CheckoutChecked => "CheckoutChecked",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns the field validated when leaving this stage.
    ///
    /// Terminal stages return `None`.
    #[must_use]
    pub const fn pending_field(&self) -> Option<FieldName> {
        match self {
            Self::Start => Some(FieldName::Name),
            Self::NameChecked => Some(FieldName::CheckinDate),
            Self::CheckinChecked => Some(FieldName::CheckoutDate),
            Self::CheckoutChecked => Some(FieldName::NumberOfGuests),
            Self::Accepted | Self::Rejected => None,
        }
    }

    /// Returns the stage reached when the pending field passes.
    ///
    /// Terminal stages return themselves.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Start => Self::NameChecked,
            Self::NameChecked => Self::CheckinChecked,
            Self::CheckinChecked => Self::CheckoutChecked,
            Self::CheckoutChecked | Self::Accepted => Self::Accepted,
            Self::Rejected => Self::Rejected,
        }
    }

    /// Checks if a transition from this stage to another is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Start, Self::NameChecked)
                | (Self::NameChecked, Self::CheckinChecked)
                | (Self::CheckinChecked, Self::CheckoutChecked)
                | (Self::CheckoutChecked, Self::Accepted)
                | (
                    Self::Start | Self::NameChecked | Self::CheckinChecked | Self::CheckoutChecked,
                    Self::Rejected
                )
        )
    }
}

impl std::fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
