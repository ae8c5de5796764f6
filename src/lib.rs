// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `daikin_lib` - A Rust library to monitor and control Daikin split system
//! air conditioners equipped with a Wifi module.
//!
//! The library speaks the module's vendor-specific HTTP+CSV protocol: every
//! operation is a GET against a fixed path, responses are single-line CSV
//! bodies of `name=value` tokens, and the one write operation encodes its
//! payload as URL query parameters. Tested against the BRP072A42 interface.
//!
//! # Supported Features
//!
//! - **Control**: power, operating mode, set temperature and humidity, fan
//!   speed, louvre swing
//! - **Sensor readings**: interior/exterior temperature, interior humidity
//! - **Power usage**: runtime and watt-hour figures for the past week
//! - **Identity**: unit name, power state from basic info
//! - **Raw access**: untyped records from the remaining endpoints (timers,
//!   prices, yearly power, schedules)
//!
//! # Quick Start
//!
//! ```no_run
//! use daikin_lib::Daikin;
//! use daikin_lib::types::{Mode, Power, Temperature};
//!
//! #[tokio::main]
//! async fn main() -> daikin_lib::Result<()> {
//!     let mut unit = Daikin::new("192.168.1.50")?;
//!
//!     // Sensor snapshot.
//!     let sensors = unit.fetch_sensor_info().await?;
//!     println!("indoors: {}", sensors.home_temperature);
//!
//!     // Read, adjust, write back.
//!     unit.fetch_control_info().await?;
//!     if let Some(control) = unit.control_info_mut() {
//!         control.power = Power::On;
//!         control.mode = Mode::Cool;
//!         control.temperature = Temperature::celsius(23.0);
//!     }
//!     unit.set_control_info().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Authentication
//!
//! Units running newer firmware require a registered token. Configure it
//! through the builder; the session then switches to HTTPS and attaches the
//! token to every request:
//!
//! ```no_run
//! use daikin_lib::Daikin;
//!
//! # fn main() -> daikin_lib::Result<()> {
//! let unit = Daikin::builder("192.168.1.50")
//!     .with_token("0123456789abcdef")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use device::{Daikin, DaikinBuilder};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::{Endpoint, FromWireRecord, HttpClient, WireRecord};
pub use response::{BasicInfo, ControlInfo, SensorInfo, WeekPower};
pub use types::{
    FanDirection, FanRate, Humidity, Minutes, Mode, Power, Temperature, UnitName, WattHours,
};
