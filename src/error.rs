// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `daikin_lib` library.
//!
//! This module provides a comprehensive error hierarchy for handling failures
//! across the library: wire value decoding, HTTP communication, response
//! parsing, and errors reported by the unit itself.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with Daikin units.
#[derive(Debug, Error)]
pub enum Error {
    /// A wire token failed to decode into a typed value.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response body.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The unit reported a failure in its response.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// Control settings were pushed before any were fetched or staged.
    #[error("control settings have not been fetched")]
    ControlNotFetched,
}

/// Errors produced by the per-field wire codecs.
///
/// Each variant carries the rejected wire token so callers can see exactly
/// what the unit sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An unrecognized power token was received.
    #[error("unknown power value: {0}")]
    UnknownPower(String),

    /// An unrecognized operating mode token was received.
    #[error("unknown mode value: {0}")]
    UnknownMode(String),

    /// An unrecognized fan rate token was received.
    #[error("unknown fan rate value: {0}")]
    UnknownFanRate(String),

    /// An unrecognized fan direction token was received.
    #[error("unknown fan direction value: {0}")]
    UnknownFanDirection(String),

    /// A temperature token was not valid decimal syntax.
    #[error("invalid temperature value: {0}")]
    InvalidTemperature(String),

    /// A humidity token was not valid integer syntax.
    #[error("invalid humidity value: {0}")]
    InvalidHumidity(String),

    /// A counter token (watt hours, minutes) was not valid integer syntax.
    #[error("invalid counter value: {0}")]
    InvalidCounter(String),

    /// A unit name token was not valid percent-encoded UTF-8.
    #[error("invalid unit name: {0}")]
    InvalidName(String),
}

/// Errors related to HTTP communication with the unit.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The unit answered with a non-success status code.
    #[error("GET {path} request failed: {status}")]
    Status {
        /// The request path that failed.
        path: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// Invalid unit address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing the CSV response bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body did not contain exactly one CSV record row.
    #[error("expected exactly one record row, got {rows}")]
    NotSingleRecord {
        /// Number of rows found in the body.
        rows: usize,
    },

    /// A CSV field did not contain a `=` separator.
    #[error("field without '=' separator: {0}")]
    MissingSeparator(String),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A recognized field carried a token that failed to decode.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The wire field that failed to decode.
        field: String,
        /// Description of the decode failure.
        message: String,
    },
}

impl ParseError {
    /// Wraps a codec error with the wire field it occurred on.
    pub(crate) fn invalid_value(field: &str, err: &ValueError) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}

/// Errors reported by the unit itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The unit answered with a `ret` code other than `OK`.
    #[error("device returned error ret={0}")]
    ErrorCode(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::UnknownMode("9".to_string());
        assert_eq!(err.to_string(), "unknown mode value: 9");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::UnknownPower("x".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::UnknownPower(_))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::NotSingleRecord { rows: 2 };
        assert_eq!(err.to_string(), "expected exactly one record row, got 2");
    }

    #[test]
    fn invalid_value_wraps_field_and_message() {
        let err = ParseError::invalid_value("f_dir", &ValueError::UnknownFanDirection("7".into()));
        assert_eq!(
            err.to_string(),
            "failed to parse f_dir: unknown fan direction value: 7"
        );
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::ErrorCode("PARAM NG".to_string());
        assert_eq!(err.to_string(), "device returned error ret=PARAM NG");
    }

    #[test]
    fn status_error_display() {
        let err = ProtocolError::Status {
            path: "/aircon/get_control_info".to_string(),
            status: 403,
        };
        assert_eq!(
            err.to_string(),
            "GET /aircon/get_control_info request failed: 403"
        );
    }
}
