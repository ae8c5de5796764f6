// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the fields of the Daikin wire protocol.
//!
//! Each type pairs an in-memory representation with its compact wire token
//! (a single character or small integer transmitted as a CSV `key=value`
//! pair or URL query parameter). Decoding rejects tokens outside the known
//! set at the edge, so values held in records are always valid.
//!
//! # Types
//!
//! - [`Power`] - On/off state of the unit
//! - [`Mode`] - Operating mode (cool, heat, dehumidify, fan, auto)
//! - [`FanRate`] - Fan speed (auto, silent, levels 1-5)
//! - [`FanDirection`] - Louvre swing setting
//! - [`Temperature`] - Set or measured temperature in Celsius
//! - [`Humidity`] - Set or measured relative humidity
//! - [`WattHours`], [`Minutes`] - Receive-only usage counters
//! - [`UnitName`] - Percent-encoded human-readable unit name

mod counter;
mod fan;
mod humidity;
mod mode;
mod name;
mod power;
mod temperature;

pub use counter::{Minutes, WattHours};
pub use fan::{FanDirection, FanRate};
pub use humidity::Humidity;
pub use mode::Mode;
pub use name::UnitName;
pub use power::Power;
pub use temperature::Temperature;
