// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature values in Celsius.

use std::fmt;

use crate::error::ValueError;

/// A temperature in degrees Celsius.
///
/// Used both for the set temperature (`stemp`) and the measured interior
/// and exterior temperatures (`htemp`, `otemp`). The wire format carries
/// exactly one fractional digit.
///
/// # Examples
///
/// ```
/// use daikin_lib::types::Temperature;
///
/// let temp = Temperature::from_wire("21.5").unwrap();
/// assert_eq!(temp.value(), 21.5);
/// assert_eq!(temp.to_wire(), "21.5");
/// assert_eq!(Temperature::celsius(23.0).to_wire(), "23.0");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Temperature(f64);

impl Temperature {
    /// Creates a temperature from a value in degrees Celsius.
    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self(value)
    }

    /// Decodes a wire token into a temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidTemperature` if the token is not valid
    /// decimal syntax.
    pub fn from_wire(token: &str) -> Result<Self, ValueError> {
        token
            .parse::<f64>()
            .map(Self)
            .map_err(|_| ValueError::InvalidTemperature(token.to_string()))
    }

    /// Returns the wire token for this temperature, with one fractional
    /// digit.
    #[must_use]
    pub fn to_wire(&self) -> String {
        format!("{:.1}", self.0)
    }

    /// Returns the temperature in degrees Celsius.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_from_wire() {
        assert_eq!(Temperature::from_wire("21.5").unwrap().value(), 21.5);
        assert_eq!(Temperature::from_wire("15").unwrap().value(), 15.0);
        assert_eq!(Temperature::from_wire("-3.5").unwrap().value(), -3.5);
    }

    #[test]
    fn temperature_from_wire_invalid() {
        assert!(matches!(
            Temperature::from_wire("warm"),
            Err(ValueError::InvalidTemperature(_))
        ));
        assert!(Temperature::from_wire("").is_err());
        assert!(Temperature::from_wire("21,5").is_err());
    }

    #[test]
    fn temperature_wire_format_keeps_one_fractional_digit() {
        assert_eq!(Temperature::celsius(23.0).to_wire(), "23.0");
        assert_eq!(Temperature::celsius(21.5).to_wire(), "21.5");
        assert_eq!(Temperature::celsius(-1.25).to_wire(), "-1.2");
    }

    #[test]
    fn temperature_round_trip() {
        let temp = Temperature::from_wire("18.5").unwrap();
        assert_eq!(Temperature::from_wire(&temp.to_wire()).unwrap(), temp);
    }

    #[test]
    fn temperature_display() {
        assert_eq!(Temperature::celsius(22.0).to_string(), "22.0");
    }
}
