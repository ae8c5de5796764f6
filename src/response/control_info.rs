// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control settings record.

use std::fmt;

use crate::error::{Error, ParseError};
use crate::protocol::{FromWireRecord, WireRecord};
use crate::types::{FanDirection, FanRate, Humidity, Mode, Power, Temperature};

/// The controllable operating state of the unit.
///
/// Fetched from `/aircon/get_control_info` and written back through
/// `/aircon/set_control_info`. Callers stage changes by mutating the fields
/// of the session's copy, then push the whole record.
///
/// # Examples
///
/// ```
/// use daikin_lib::response::ControlInfo;
/// use daikin_lib::types::{Mode, Power, Temperature};
///
/// let mut control = ControlInfo::default();
/// control.power = Power::On;
/// control.mode = Mode::Cool;
/// control.temperature = Temperature::celsius(23.0);
///
/// let params = control.query_params();
/// assert_eq!(params[0], ("pow", "1".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ControlInfo {
    /// Power state of the unit.
    pub power: Power,
    /// Operating mode of the unit.
    pub mode: Mode,
    /// Fan speed of the unit.
    pub fan_rate: FanRate,
    /// Louvre swing setting of the unit.
    pub fan_direction: FanDirection,
    /// Set temperature of the unit.
    pub temperature: Temperature,
    /// Set humidity of the unit.
    pub humidity: Humidity,
}

impl ControlInfo {
    /// Returns the wire parameters for a set operation, in the fixed order
    /// `pow, mode, f_rate, f_dir, stemp, shum`.
    ///
    /// Receive-only fields never appear here.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pow", self.power.to_wire().to_string()),
            ("mode", self.mode.to_wire().to_string()),
            ("f_rate", self.fan_rate.to_wire().to_string()),
            ("f_dir", self.fan_direction.to_wire().to_string()),
            ("stemp", self.temperature.to_wire()),
            ("shum", self.humidity.to_wire()),
        ]
    }
}

impl FromWireRecord for ControlInfo {
    fn from_record(record: &WireRecord) -> Result<Self, Error> {
        record.ensure_ok()?;

        let mut info = Self::default();
        for (name, value) in record.entries() {
            match name {
                "pow" => {
                    info.power = Power::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "mode" => {
                    info.mode =
                        Mode::from_wire(value).map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "stemp" => {
                    info.temperature = Temperature::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "shum" => {
                    info.humidity = Humidity::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "f_rate" => {
                    info.fan_rate = FanRate::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "f_dir" => {
                    info.fan_direction = FanDirection::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                _ => {}
            }
        }
        Ok(info)
    }
}

impl fmt::Display for ControlInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pow: {}\nmode: {}\nstemp: {}\nshum: {}\nf_rate: {}\nf_dir: {}",
            self.power,
            self.mode,
            self.temperature,
            self.humidity,
            self.fan_rate,
            self.fan_direction
        )
    }
}
