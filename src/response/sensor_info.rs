// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor reading record.

use std::fmt;

use crate::error::{Error, ParseError};
use crate::protocol::{FromWireRecord, WireRecord};
use crate::types::{Humidity, Temperature};

/// A read-only snapshot of the unit's sensors.
///
/// Fetched from `/aircon/get_sensor_info` and replaced wholesale on each
/// fetch.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct SensorInfo {
    /// The interior temperature.
    pub home_temperature: Temperature,
    /// The exterior temperature.
    pub outside_temperature: Temperature,
    /// The interior humidity.
    pub humidity: Humidity,
}

impl FromWireRecord for SensorInfo {
    fn from_record(record: &WireRecord) -> Result<Self, Error> {
        record.ensure_ok()?;

        let mut info = Self::default();
        for (name, value) in record.entries() {
            match name {
                "htemp" => {
                    info.home_temperature = Temperature::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "otemp" => {
                    info.outside_temperature = Temperature::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "hhum" => {
                    info.humidity = Humidity::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                _ => {}
            }
        }
        Ok(info)
    }
}

impl fmt::Display for SensorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in_temp: {}\nin_humidity: {}\nout_temp: {}",
            self.home_temperature, self.humidity, self.outside_temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeviceError;

    #[test]
    fn populate_from_full_response() {
        let record = WireRecord::parse("ret=OK,htemp=21.5,otemp=15.0,hhum=45").unwrap();
        let info: SensorInfo = record.decode().unwrap();

        assert_eq!(info.home_temperature, Temperature::celsius(21.5));
        assert_eq!(info.outside_temperature, Temperature::celsius(15.0));
        assert_eq!(info.humidity, Humidity::percent(45));
    }

    #[test]
    fn populate_with_sentinel_humidity() {
        let record = WireRecord::parse("ret=OK,htemp=22.0,otemp=15.0,hhum=-").unwrap();
        let info: SensorInfo = record.decode().unwrap();
        assert!(info.humidity.is_unset());
    }

    #[test]
    fn sentinel_is_not_accepted_for_temperatures() {
        let record = WireRecord::parse("ret=OK,htemp=22.0,otemp=-,hhum=45").unwrap();
        let err = record.decode::<SensorInfo>().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::InvalidValue { ref field, .. }) if field == "otemp"
        ));
    }

    #[test]
    fn populate_aborts_on_bad_temperature() {
        let record = WireRecord::parse("ret=OK,htemp=hot,otemp=15.0").unwrap();
        let err = record.decode::<SensorInfo>().unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::InvalidValue { ref field, .. }) if field == "htemp"
        ));
    }

    #[test]
    fn populate_aborts_on_device_error() {
        let record = WireRecord::parse("ret=ADV NG,htemp=21.5").unwrap();
        let err = record.decode::<SensorInfo>().unwrap_err();
        assert!(matches!(
            err,
            Error::Device(DeviceError::ErrorCode(ref code)) if code == "ADV NG"
        ));
    }

    #[test]
    fn display_renders_readings() {
        let info = SensorInfo {
            home_temperature: Temperature::celsius(21.5),
            outside_temperature: Temperature::celsius(15.0),
            humidity: Humidity::percent(45),
        };
        assert_eq!(
            info.to_string(),
            "in_temp: 21.5\nin_humidity: 45\nout_temp: 15.0"
        );
    }
}
