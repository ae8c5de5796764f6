// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level session for one Daikin unit.
//!
//! A [`Daikin`] bundles the connection parameters of a single unit with the
//! latest fetched records. Each operation is one blocking request/response
//! cycle: fetches replace the corresponding record wholesale on success and
//! leave it untouched on any failure.

use std::fmt;
use std::time::Duration;

use crate::error::{DeviceError, Error, ParseError};
use crate::protocol::{Endpoint, HttpClient, RETURN_OK, WireRecord};
use crate::response::{BasicInfo, ControlInfo, SensorInfo, WeekPower};
use crate::types::UnitName;

/// A session with one Daikin unit.
///
/// The session holds plain mutable state and takes no locks: callers wanting
/// concurrent queries to multiple units run one session per unit on separate
/// tasks. It imposes no timeout of its own beyond the transport's, performs
/// no retries, and caches nothing across calls.
///
/// # Examples
///
/// ```no_run
/// use daikin_lib::Daikin;
/// use daikin_lib::types::{Mode, Power, Temperature};
///
/// # async fn example() -> daikin_lib::Result<()> {
/// let mut unit = Daikin::new("192.168.1.50")?;
///
/// // Read the current settings, adjust, write back.
/// unit.fetch_control_info().await?;
/// if let Some(control) = unit.control_info_mut() {
///     control.power = Power::On;
///     control.mode = Mode::Cool;
///     control.temperature = Temperature::celsius(23.0);
/// }
/// unit.set_control_info().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Daikin {
    client: HttpClient,
    name: Option<UnitName>,
    control_info: Option<ControlInfo>,
    sensor_info: Option<SensorInfo>,
    week_power: Option<WeekPower>,
}

impl Daikin {
    /// Creates a session for an unauthenticated unit with default options.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn new(address: impl Into<String>) -> Result<Self, Error> {
        Self::builder(address).build()
    }

    /// Creates a builder for a session with custom options.
    #[must_use]
    pub fn builder(address: impl Into<String>) -> DaikinBuilder {
        DaikinBuilder::new(address)
    }

    /// Returns the base URL of the unit.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Returns the unit's name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&UnitName> {
        self.name.as_ref()
    }

    /// Returns the latest fetched control settings, if any.
    #[must_use]
    pub fn control_info(&self) -> Option<&ControlInfo> {
        self.control_info.as_ref()
    }

    /// Returns the latest fetched control settings for staging changes
    /// ahead of [`set_control_info`](Self::set_control_info).
    #[must_use]
    pub fn control_info_mut(&mut self) -> Option<&mut ControlInfo> {
        self.control_info.as_mut()
    }

    /// Replaces the staged control settings.
    ///
    /// Useful for pushing a full record to a unit without fetching first.
    pub fn stage_control_info(&mut self, control: ControlInfo) {
        self.control_info = Some(control);
    }

    /// Returns the latest fetched sensor readings, if any.
    #[must_use]
    pub fn sensor_info(&self) -> Option<&SensorInfo> {
        self.sensor_info.as_ref()
    }

    /// Returns the latest fetched weekly power usage, if any.
    #[must_use]
    pub fn week_power(&self) -> Option<&WeekPower> {
        self.week_power.as_ref()
    }

    /// Fetches identity information and refreshes the unit's name.
    ///
    /// # Errors
    ///
    /// Returns error if the request, parse or populate fails.
    pub async fn fetch_basic_info(&mut self) -> Result<BasicInfo, Error> {
        let info: BasicInfo = self.fetch_record(Endpoint::BasicInfo).await?.decode()?;
        self.name = Some(info.name.clone());
        Ok(info)
    }

    /// Fetches the current control settings for the unit.
    ///
    /// On success the session's control record is replaced wholesale; on any
    /// failure the previous record stays in place.
    ///
    /// # Errors
    ///
    /// Returns error if the request, parse or populate fails.
    pub async fn fetch_control_info(&mut self) -> Result<&ControlInfo, Error> {
        let info: ControlInfo = self.fetch_record(Endpoint::ControlInfo).await?.decode()?;
        Ok(self.control_info.insert(info))
    }

    /// Fetches the current sensor values for the unit.
    ///
    /// # Errors
    ///
    /// Returns error if the request, parse or populate fails.
    pub async fn fetch_sensor_info(&mut self) -> Result<&SensorInfo, Error> {
        let info: SensorInfo = self.fetch_record(Endpoint::SensorInfo).await?.decode()?;
        Ok(self.sensor_info.insert(info))
    }

    /// Fetches the power usage of the past week.
    ///
    /// # Errors
    ///
    /// Returns error if the request, parse or populate fails.
    pub async fn fetch_week_power(&mut self) -> Result<&WeekPower, Error> {
        let power: WeekPower = self.fetch_record(Endpoint::WeekPower).await?.decode()?;
        Ok(self.week_power.insert(power))
    }

    /// Writes the staged control settings to the unit.
    ///
    /// The in-memory record is encoded into query parameters and sent as a
    /// GET; the unit must answer `ret=OK`. No record is replaced, since
    /// nothing new was fetched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ControlNotFetched`] if no control settings are
    /// staged, and error if the request fails or the unit rejects the
    /// parameters.
    pub async fn set_control_info(&self) -> Result<(), Error> {
        let control = self.control_info.as_ref().ok_or(Error::ControlNotFetched)?;
        let params = control.query_params();

        let body = self
            .client
            .get(Endpoint::SetControlInfo, &params)
            .await
            .map_err(Error::Protocol)?;
        let record = WireRecord::parse(&body).map_err(Error::Parse)?;

        match record.return_code() {
            Some(code) if code == RETURN_OK => Ok(()),
            Some(code) => Err(Error::Device(DeviceError::ErrorCode(code.to_string()))),
            None => Err(Error::Parse(ParseError::MissingField("ret".to_string()))),
        }
    }

    /// Fetches any endpoint as an untyped wire record.
    ///
    /// Endpoints without a typed record (timers, prices, targets, yearly
    /// power, programs, notifications) stay reachable this way.
    ///
    /// # Errors
    ///
    /// Returns error if the request or parse fails.
    pub async fn fetch_raw(&self, endpoint: Endpoint) -> Result<WireRecord, Error> {
        self.fetch_record(endpoint).await
    }

    async fn fetch_record(&self, endpoint: Endpoint) -> Result<WireRecord, Error> {
        let body = self
            .client
            .get(endpoint, &[])
            .await
            .map_err(Error::Protocol)?;
        WireRecord::parse(&body).map_err(Error::Parse)
    }
}

impl fmt::Display for Daikin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "name: {name}")?;
        }
        if let Some(control) = &self.control_info {
            writeln!(f, "{control}")?;
        }
        if let Some(sensor) = &self.sensor_info {
            writeln!(f, "{sensor}")?;
        }
        Ok(())
    }
}

/// Builder for creating a [`Daikin`] session.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use daikin_lib::Daikin;
///
/// # fn example() -> daikin_lib::Result<()> {
/// let unit = Daikin::builder("192.168.1.50")
///     .with_token("0123456789abcdef")
///     .with_timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DaikinBuilder {
    address: String,
    token: Option<String>,
    name: Option<UnitName>,
    timeout: Duration,
}

impl DaikinBuilder {
    fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: None,
            name: None,
            timeout: HttpClient::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the authentication token required by newer firmware.
    ///
    /// A token switches the session to the secure transport variant.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the unit's display name without fetching it.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<UnitName>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the request timeout enforced by the transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Daikin, Error> {
        let client = HttpClient::with_options(self.address, self.token, self.timeout)
            .map_err(Error::Protocol)?;
        Ok(Daikin {
            client,
            name: self.name,
            control_info: None,
            sensor_info: None,
            week_power: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_no_records() {
        let unit = Daikin::new("192.168.1.50").unwrap();
        assert!(unit.control_info().is_none());
        assert!(unit.sensor_info().is_none());
        assert!(unit.week_power().is_none());
        assert!(unit.name().is_none());
        assert_eq!(unit.base_url(), "http://192.168.1.50");
    }

    #[test]
    fn builder_with_token_uses_secure_transport() {
        let unit = Daikin::builder("192.168.1.50")
            .with_token("0123456789abcdef")
            .build()
            .unwrap();
        assert_eq!(unit.base_url(), "https://192.168.1.50");
    }

    #[test]
    fn builder_with_name() {
        let unit = Daikin::builder("192.168.1.50")
            .with_name("Living Room")
            .build()
            .unwrap();
        assert_eq!(unit.name().unwrap().as_str(), "Living Room");
    }

    #[test]
    fn builder_empty_address_rejected() {
        assert!(Daikin::new("").is_err());
    }

    #[tokio::test]
    async fn set_control_info_requires_staged_record() {
        let unit = Daikin::new("192.168.1.50").unwrap();
        let err = unit.set_control_info().await.unwrap_err();
        assert!(matches!(err, Error::ControlNotFetched));
    }

    #[test]
    fn stage_control_info_replaces_record() {
        let mut unit = Daikin::new("192.168.1.50").unwrap();
        unit.stage_control_info(ControlInfo::default());
        assert!(unit.control_info().is_some());
    }
}
