// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relative humidity values.

use std::fmt;

use crate::error::ValueError;

/// A relative humidity value.
///
/// Used for the humidity target (`shum`) and the measured interior humidity
/// (`hhum`). Units without humidity support report the sentinel token `"-"`,
/// which decodes to [`Humidity::UNSET`] rather than failing.
///
/// # Examples
///
/// ```
/// use daikin_lib::types::Humidity;
///
/// assert_eq!(Humidity::from_wire("50").unwrap().value(), 50);
/// assert_eq!(Humidity::from_wire("-").unwrap(), Humidity::UNSET);
/// assert!(Humidity::UNSET.is_unset());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Humidity(i32);

impl Humidity {
    /// Humidity is not applicable or not set.
    pub const UNSET: Self = Self(-1);

    /// Creates a humidity value in percent.
    #[must_use]
    pub const fn percent(value: i32) -> Self {
        Self(value)
    }

    /// Decodes a wire token into a humidity value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHumidity` if the token is neither the
    /// `"-"` sentinel nor valid integer syntax.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        if token == "-" {
            return Ok(Self::UNSET);
        }
        token
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValueError::InvalidHumidity(token.to_string()))
    }

    /// Returns the wire token for this humidity value.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.0.to_string()
    }

    /// Returns the humidity in percent, or -1 when unset.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns whether this value is the "not applicable" sentinel.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0 == -1
    }
}

impl Default for Humidity {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
