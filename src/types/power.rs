// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of the unit.

use std::fmt;

use crate::error::ValueError;

/// Represents the power state of the unit.
///
/// On the wire this is the `pow` field, transmitted as a single decimal
/// digit.
///
/// # Examples
///
/// ```
/// use daikin_lib::types::Power;
///
/// let on = Power::from_wire("1").unwrap();
/// assert_eq!(on, Power::On);
/// assert_eq!(on.to_wire(), "1");
/// assert_eq!(on.to_string(), "On");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum Power {
    /// The unit is off.
    #[default]
    Off,
    /// The unit is on.
    On,
}

impl Power {
    /// Decodes a wire token into a power state.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownPower` for any token other than
    /// `"0"` or `"1"`.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        match token {
            "0" => Ok(Self::Off),
            "1" => Ok(Self::On),
            _ => Err(ValueError::UnknownPower(token.to_string())),
        }
    }

    /// Returns the wire token for this power state.
    #[must_use]
    pub const fn to_wire(&self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Off => "Off",
            Self::On => "On",
        };
        write!(f, "{label}")
    }
}

impl From<bool> for Power {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
