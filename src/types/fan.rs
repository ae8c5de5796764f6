// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed and louvre direction settings.

use std::fmt;

use crate::error::ValueError;

/// The fan speed of the unit.
///
/// On the wire this is the `f_rate` field. Automatic and silent operation
/// use the letters `A` and `B`; the five numeric levels are offset by two,
/// so level N is transmitted as the digit N+2.
///
/// Not all models support all values.
///
/// # Examples
///
/// ```
/// use daikin_lib::types::FanRate;
///
/// assert_eq!(FanRate::from_wire("A").unwrap(), FanRate::Auto);
/// assert_eq!(FanRate::Level3.to_wire(), "5");
/// assert_eq!(FanRate::Level3.to_string(), "3");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum FanRate {
    /// Fan speed chosen by the unit.
    #[default]
    Auto,
    /// Quietest fan setting.
    Silent,
    /// Fan level 1 (slowest manual setting).
    Level1,
    /// Fan level 2.
    Level2,
    /// Fan level 3.
    Level3,
    /// Fan level 4.
    Level4,
    /// Fan level 5 (fastest manual setting).
    Level5,
}

impl FanRate {
    /// Decodes a wire token into a fan rate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownFanRate` for tokens outside the accepted
    /// set.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        match token {
            "A" => Ok(Self::Auto),
            "B" => Ok(Self::Silent),
            "3" => Ok(Self::Level1),
            "4" => Ok(Self::Level2),
            "5" => Ok(Self::Level3),
            "6" => Ok(Self::Level4),
            "7" => Ok(Self::Level5),
            _ => Err(ValueError::UnknownFanRate(token.to_string())),
        }
    }

    /// Returns the wire token for this fan rate.
    #[must_use]
    pub const fn to_wire(&self) -> &'static str {
        match self {
            Self::Auto => "A",
            Self::Silent => "B",
            Self::Level1 => "3",
            Self::Level2 => "4",
            Self::Level3 => "5",
            Self::Level4 => "6",
            Self::Level5 => "7",
        }
    }

    /// Returns the fan rate for a numeric level (1-5), if valid.
    #[must_use]
    pub const fn level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Level1),
            2 => Some(Self::Level2),
            3 => Some(Self::Level3),
            4 => Some(Self::Level4),
            5 => Some(Self::Level5),
            _ => None,
        }
    }
}

impl fmt::Display for FanRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Auto => "Auto",
            Self::Silent => "Silent",
            Self::Level1 => "1",
            Self::Level2 => "2",
            Self::Level3 => "3",
            Self::Level4 => "4",
            Self::Level5 => "5",
        };
        write!(f, "{label}")
    }
}

/// The louvre swing setting of the unit.
///
/// On the wire this is the `f_dir` field, transmitted as a decimal digit
/// 0-3. Digits outside that range are rejected even though they parse as
/// numbers.
///
/// Not all models support all values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum FanDirection {
    /// Louvre swing stopped.
    #[default]
    Stopped,
    /// Vertical swing.
    Vertical,
    /// Horizontal swing.
    Horizontal,
    /// Vertical and horizontal swing.
    Both,
}

impl FanDirection {
    /// Decodes a wire token into a fan direction.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownFanDirection` for any token other than
    /// `"0"` through `"3"`.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        match token {
            "0" => Ok(Self::Stopped),
            "1" => Ok(Self::Vertical),
            "2" => Ok(Self::Horizontal),
            "3" => Ok(Self::Both),
            _ => Err(ValueError::UnknownFanDirection(token.to_string())),
        }
    }

    /// Returns the wire token for this fan direction.
    #[must_use]
    pub const fn to_wire(&self) -> &'static str {
        match self {
            Self::Stopped => "0",
            Self::Vertical => "1",
            Self::Horizontal => "2",
            Self::Both => "3",
        }
    }
}

impl fmt::Display for FanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stopped => "Stopped",
            Self::Vertical => "Vertical",
            Self::Horizontal => "Horizontal",
            Self::Both => "Both",
        };
        write!(f, "{label}")
    }
}
