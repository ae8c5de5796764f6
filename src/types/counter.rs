// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Receive-only usage counters.
//!
//! The unit reports energy usage in watt hours and runtime in minutes.
//! These fields are never written back, so the types decode but do not
//! encode. Both share the `"-"` sentinel convention for "no data".

use std::fmt;

use crate::error::ValueError;

/// An energy figure in watt hours.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct WattHours(i32);

impl WattHours {
    /// No figure reported.
    pub const UNSET: Self = Self(-1);

    /// Decodes a wire token into a watt-hour figure.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidCounter` if the token is neither the
    /// `"-"` sentinel nor valid integer syntax.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        if token == "-" {
            return Ok(Self::UNSET);
        }
        token
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValueError::InvalidCounter(token.to_string()))
    }

    /// Returns the figure in watt hours, or -1 when unset.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns whether no figure was reported.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0 == -1
    }
}

impl Default for WattHours {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for WattHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A runtime figure in minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Minutes(i32);

impl Minutes {
    /// No figure reported.
    pub const UNSET: Self = Self(-1);

    /// Decodes a wire token into a minute figure.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidCounter` if the token is neither the
    /// `"-"` sentinel nor valid integer syntax.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        if token == "-" {
            return Ok(Self::UNSET);
        }
        token
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValueError::InvalidCounter(token.to_string()))
    }

    /// Returns the figure in minutes, or -1 when unset.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Returns whether no figure was reported.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0 == -1
    }
}

impl Default for Minutes {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
