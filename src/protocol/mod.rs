// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire protocol for the Daikin Wifi module.
//!
//! The module speaks a vendor-specific HTTP+CSV protocol: every operation is
//! an HTTP GET against a fixed path, and every response body is a single
//! CSV-formatted line of `name=value` tokens. This module provides the
//! fixed path table ([`Endpoint`]), the response parser ([`WireRecord`]) and
//! the seam through which typed records are populated ([`FromWireRecord`]).

mod http;

pub use http::HttpClient;

use std::collections::HashMap;

use crate::error::{DeviceError, Error, ParseError};

/// The `ret` value signalling success.
pub(crate) const RETURN_OK: &str = "OK";

/// The fixed HTTP paths exposed by the Wifi module.
///
/// All endpoints are queried with GET; [`Endpoint::SetControlInfo`] is the
/// single write operation and carries its payload as query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Identity and configuration of the unit.
    BasicInfo,
    /// Supported polling method of the unit.
    RemoteMethod,
    /// Model information.
    ModelInfo,
    /// Current control settings.
    ControlInfo,
    /// Current sensor readings.
    SensorInfo,
    /// Configured on/off timer.
    Timer,
    /// Configured electricity price.
    Price,
    /// Target figures.
    Target,
    /// Power usage over the past week.
    WeekPower,
    /// Power usage over the past year.
    YearPower,
    /// Configured program.
    Program,
    /// Configured schedule timer.
    ScheduleTimer,
    /// Notification settings.
    Notify,
    /// Write operation for control settings.
    SetControlInfo,
}

impl Endpoint {
    /// Returns the request path for this endpoint.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::BasicInfo => "/common/basic_info",
            Self::RemoteMethod => "/common/get_remote_method",
            Self::ModelInfo => "/aircon/get_model_info",
            Self::ControlInfo => "/aircon/get_control_info",
            Self::SensorInfo => "/aircon/get_sensor_info",
            Self::Timer => "/aircon/get_timer",
            Self::Price => "/aircon/get_price",
            Self::Target => "/aircon/get_target",
            Self::WeekPower => "/aircon/get_week_power",
            Self::YearPower => "/aircon/get_year_power",
            Self::Program => "/aircon/get_program",
            Self::ScheduleTimer => "/aircon/get_scdltimer",
            Self::Notify => "/aircon/get_notify",
            Self::SetControlInfo => "/aircon/set_control_info",
        }
    }
}

/// A decoded response body: an unordered mapping from wire field name to
/// raw wire value.
///
/// Produced by [`WireRecord::parse`] from exactly one CSV row of
/// `name=value` tokens. Iteration order is unspecified; consumers must not
/// depend on key order.
///
/// # Examples
///
/// ```
/// use daikin_lib::protocol::WireRecord;
///
/// let record = WireRecord::parse("ret=OK,htemp=21.5,otemp=15.0").unwrap();
/// assert_eq!(record.get("htemp"), Some("21.5"));
/// assert!(record.ensure_ok().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireRecord {
    values: HashMap<String, String>,
}

impl WireRecord {
    /// Parses a raw response body into a wire record.
    ///
    /// The body must tokenize into exactly one non-empty CSV line; each
    /// comma-separated token is split on its first `=`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NotSingleRecord`] if the body holds zero or
    /// multiple rows, and [`ParseError::MissingSeparator`] if any token
    /// lacks a `=`.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = body.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != 1 {
            return Err(ParseError::NotSingleRecord { rows: rows.len() });
        }

        let mut values = HashMap::new();
        for token in rows[0].split(',') {
            let (name, value) = token
                .split_once('=')
                .ok_or_else(|| ParseError::MissingSeparator(token.to_string()))?;
            values.insert(name.to_string(), value.to_string());
        }
        Ok(Self { values })
    }

    /// Returns the raw wire value for a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the raw `ret` code, if the response carried one.
    #[must_use]
    pub fn return_code(&self) -> Option<&str> {
        self.get("ret")
    }

    /// Checks the device-level return code.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::ErrorCode`] with the literal code when `ret`
    /// is present and not `OK`. A response without a `ret` field passes.
    pub fn ensure_ok(&self) -> Result<(), DeviceError> {
        match self.return_code() {
            Some(code) if code != RETURN_OK => Err(DeviceError::ErrorCode(code.to_string())),
            _ => Ok(()),
        }
    }

    /// Iterates over all `(name, value)` entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the record holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Populates a typed record from this wire record.
    ///
    /// # Errors
    ///
    /// Returns error if the device reported a failure or any recognized
    /// field fails to decode.
    pub fn decode<T: FromWireRecord>(&self) -> Result<T, Error> {
        T::from_record(self)
    }
}

/// A typed record that can be populated from a [`WireRecord`].
///
/// Implementations check the device-level return code first, then route
/// each recognized field to its codec; unrecognized fields are ignored for
/// forward compatibility with newer firmware.
pub trait FromWireRecord: Sized {
    /// Populates the record from decoded wire values.
    ///
    /// # Errors
    ///
    /// Returns error if the device reported a failure or any recognized
    /// field fails to decode.
    fn from_record(record: &WireRecord) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_row() {
        let record = WireRecord::parse("ret=OK,htemp=21.5,otemp=15.0,hhum=45").unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(record.get("ret"), Some("OK"));
        assert_eq!(record.get("htemp"), Some("21.5"));
        assert_eq!(record.get("otemp"), Some("15.0"));
        assert_eq!(record.get("hhum"), Some("45"));
    }

    #[test]
    fn parse_value_with_embedded_equals() {
        // Split happens on the first '=' only.
        let record = WireRecord::parse("ret=OK,adv=a=b").unwrap();
        assert_eq!(record.get("adv"), Some("a=b"));
    }

    #[test]
    fn parse_trailing_newline_is_one_row() {
        let record = WireRecord::parse("ret=OK,pow=1\n").unwrap();
        assert_eq!(record.get("pow"), Some("1"));
    }

    #[test]
    fn parse_two_rows_fails() {
        let result = WireRecord::parse("ret=OK,pow=1\nret=OK,pow=0");
        assert_eq!(result.unwrap_err(), ParseError::NotSingleRecord { rows: 2 });
    }

    #[test]
    fn parse_empty_body_fails() {
        let result = WireRecord::parse("");
        assert_eq!(result.unwrap_err(), ParseError::NotSingleRecord { rows: 0 });
    }

    #[test]
    fn parse_token_without_separator_fails() {
        let result = WireRecord::parse("ret=OK,bare");
        assert_eq!(
            result.unwrap_err(),
            ParseError::MissingSeparator("bare".to_string())
        );
    }

    #[test]
    fn ensure_ok_passes_on_ok() {
        let record = WireRecord::parse("ret=OK,pow=1").unwrap();
        assert!(record.ensure_ok().is_ok());
    }

    #[test]
    fn ensure_ok_passes_without_ret() {
        let record = WireRecord::parse("pow=1").unwrap();
        assert!(record.ensure_ok().is_ok());
    }

    #[test]
    fn ensure_ok_fails_with_literal_code() {
        let record = WireRecord::parse("ret=PARAM NG,pow=1").unwrap();
        assert_eq!(
            record.ensure_ok().unwrap_err(),
            DeviceError::ErrorCode("PARAM NG".to_string())
        );
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(Endpoint::BasicInfo.path(), "/common/basic_info");
        assert_eq!(Endpoint::RemoteMethod.path(), "/common/get_remote_method");
        assert_eq!(Endpoint::ModelInfo.path(), "/aircon/get_model_info");
        assert_eq!(Endpoint::ControlInfo.path(), "/aircon/get_control_info");
        assert_eq!(Endpoint::SensorInfo.path(), "/aircon/get_sensor_info");
        assert_eq!(Endpoint::WeekPower.path(), "/aircon/get_week_power");
        assert_eq!(Endpoint::ScheduleTimer.path(), "/aircon/get_scdltimer");
        assert_eq!(Endpoint::SetControlInfo.path(), "/aircon/set_control_info");
    }
}
