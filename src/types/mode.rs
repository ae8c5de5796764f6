// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode of the unit.

use std::fmt;

use crate::error::ValueError;

/// The operating mode of the unit.
///
/// On the wire this is the `mode` field, transmitted as a single decimal
/// digit (5 is unused by the protocol).
///
/// The Wifi module reports three distinct automatic modes (wire values 0, 1
/// and 7) depending on firmware and model. They are kept as separate values
/// so that writing a fetched mode back to the unit round-trips the exact
/// digit, but all three render as `"Auto"`.
///
/// # Examples
///
/// ```
/// use daikin_lib::types::Mode;
///
/// let cool = Mode::from_wire("3").unwrap();
/// assert_eq!(cool, Mode::Cool);
/// assert_eq!(cool.to_string(), "Cool");
///
/// // Auto variants stay distinct on the wire...
/// assert_eq!(Mode::from_wire("7").unwrap().to_wire(), "7");
/// // ...but share a display label.
/// assert_eq!(Mode::Auto7.to_string(), "Auto");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum Mode {
    /// Automatic mode (wire value 0).
    #[default]
    Auto,
    /// Automatic mode as reported by some firmware revisions (wire value 1).
    Auto1,
    /// Dehumidify mode.
    Dehumidify,
    /// Cooling mode.
    Cool,
    /// Heating mode.
    Heat,
    /// Fan-only mode.
    Fan,
    /// Automatic mode as reported by some firmware revisions (wire value 7).
    Auto7,
}

impl Mode {
    /// Decodes a wire token into an operating mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownMode` for tokens outside the accepted
    /// digit set.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        match token {
            "0" => Ok(Self::Auto),
            "1" => Ok(Self::Auto1),
            "2" => Ok(Self::Dehumidify),
            "3" => Ok(Self::Cool),
            "4" => Ok(Self::Heat),
            "6" => Ok(Self::Fan),
            "7" => Ok(Self::Auto7),
            _ => Err(ValueError::UnknownMode(token.to_string())),
        }
    }

    /// Returns the wire token for this mode.
    #[must_use]
    pub const fn to_wire(&self) -> &'static str {
        match self {
            Self::Auto => "0",
            Self::Auto1 => "1",
            Self::Dehumidify => "2",
            Self::Cool => "3",
            Self::Heat => "4",
            Self::Fan => "6",
            Self::Auto7 => "7",
        }
    }

    /// Returns whether this is one of the automatic mode variants.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto | Self::Auto1 | Self::Auto7)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Auto | Self::Auto1 | Self::Auto7 => "Auto",
            Self::Dehumidify => "Dehumidify",
            Self::Cool => "Cool",
            Self::Heat => "Heat",
            Self::Fan => "Fan",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trip() {
        for mode in [
            Mode::Auto,
            Mode::Auto1,
            Mode::Dehumidify,
            Mode::Cool,
            Mode::Heat,
            Mode::Fan,
            Mode::Auto7,
        ] {
            assert_eq!(Mode::from_wire(mode.to_wire()).unwrap(), mode);
        }
    }

    #[test]
    fn mode_from_wire_invalid() {
        // 5 is a hole in the protocol's digit assignment.
        assert!(matches!(
            Mode::from_wire("5"),
            Err(ValueError::UnknownMode(_))
        ));
        assert!(Mode::from_wire("8").is_err());
        assert!(Mode::from_wire("cool").is_err());
    }

    #[test]
    fn auto_variants_collapse_in_display() {
        assert_eq!(Mode::Auto.to_string(), "Auto");
        assert_eq!(Mode::Auto1.to_string(), "Auto");
        assert_eq!(Mode::Auto7.to_string(), "Auto");
    }

    #[test]
    fn auto_variants_stay_distinct_on_wire() {
        assert_eq!(Mode::Auto.to_wire(), "0");
        assert_eq!(Mode::Auto1.to_wire(), "1");
        assert_eq!(Mode::Auto7.to_wire(), "7");
        assert_ne!(Mode::Auto, Mode::Auto1);
        assert_ne!(Mode::Auto, Mode::Auto7);
    }

    #[test]
    fn mode_is_auto() {
        assert!(Mode::Auto.is_auto());
        assert!(Mode::Auto1.is_auto());
        assert!(Mode::Auto7.is_auto());
        assert!(!Mode::Cool.is_auto());
        assert!(!Mode::Fan.is_auto());
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::Dehumidify.to_string(), "Dehumidify");
        assert_eq!(Mode::Cool.to_string(), "Cool");
        assert_eq!(Mode::Heat.to_string(), "Heat");
        assert_eq!(Mode::Fan.to_string(), "Fan");
    }
}
