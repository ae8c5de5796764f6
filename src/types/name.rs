// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-readable unit name.

use std::fmt;

use crate::error::ValueError;

/// The human-readable name of the unit, as configured in the Daikin app.
///
/// The wire carries the name percent-encoded in the `name` field of the
/// basic info response.
///
/// # Examples
///
/// ```
/// use daikin_lib::types::UnitName;
///
/// let name = UnitName::from_wire("Living%20Room").unwrap();
/// assert_eq!(name.as_str(), "Living Room");
/// assert_eq!(name.to_wire(), "Living%20Room");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct UnitName(String);

impl UnitName {
    /// Creates a unit name from a display string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Decodes a percent-encoded wire token into a unit name.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidName` if the token decodes to invalid
    /// UTF-8.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        urlencoding::decode(token)
            .map(|name| Self(name.into_owned()))
            .map_err(|_| ValueError::InvalidName(token.to_string()))
    }

    /// Returns the percent-encoded wire token for this name.
    #[must_use]
    pub fn to_wire(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    /// Returns the name as a display string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UnitName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
