// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed records populated from wire responses.
//!
//! Each record type corresponds to one endpoint of the Wifi module and
//! implements [`FromWireRecord`](crate::protocol::FromWireRecord): the
//! device-level return code is checked first, recognized fields are routed
//! to their codecs, and unrecognized fields are ignored so newer firmware
//! with extra fields keeps working. Any single decode failure discards the
//! whole record.

mod basic_info;
mod control_info;
mod sensor_info;
mod week_power;

pub use basic_info::BasicInfo;
pub use control_info::ControlInfo;
pub use sensor_info::SensorInfo;
pub use week_power::WeekPower;
