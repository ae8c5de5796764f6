// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekly power usage record.

use std::fmt;

use crate::error::{Error, ParseError};
use crate::protocol::{FromWireRecord, WireRecord};
use crate::types::{Minutes, WattHours};

/// Number of elements the `datas` field must carry.
const WEEK_DATA_LEN: usize = 7;

/// Power usage over the past week.
///
/// Fetched from `/aircon/get_week_power`. The `datas` field packs the daily
/// watt-hour figures into one `/`-delimited list ordered oldest first; the
/// final element is the unit's running figure for the current day, which the
/// dedicated `today_watt` field reports authoritatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct WeekPower {
    /// Runtime so far today.
    pub today_runtime: Minutes,
    /// Energy used so far today.
    pub today_watt_hours: WattHours,
    /// Energy used yesterday.
    pub yesterday_watt_hours: WattHours,
    /// Energy used three days ago.
    pub three_days_ago_watt_hours: WattHours,
    /// Energy used four days ago.
    pub four_days_ago_watt_hours: WattHours,
    /// Energy used five days ago.
    pub five_days_ago_watt_hours: WattHours,
    /// Energy used six days ago.
    pub six_days_ago_watt_hours: WattHours,
    /// Energy used seven days ago.
    pub seven_days_ago_watt_hours: WattHours,
}

impl FromWireRecord for WeekPower {
    fn from_record(record: &WireRecord) -> Result<Self, Error> {
        record.ensure_ok()?;

        let mut power = Self::default();
        for (name, value) in record.entries() {
            match name {
                "today_runtime" => {
                    power.today_runtime = Minutes::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "today_watt" => {
                    power.today_watt_hours = WattHours::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "datas" => {
                    let elems: Vec<&str> = value.split('/').collect();
                    if elems.len() != WEEK_DATA_LEN {
                        return Err(ParseError::InvalidValue {
                            field: name.to_string(),
                            message: format!(
                                "expected {WEEK_DATA_LEN} elements in week power data, got {}",
                                elems.len()
                            ),
                        }
                        .into());
                    }

                    let decode = |elem: &str| {
                        WattHours::from_wire(elem).map_err(|e| ParseError::invalid_value(name, &e))
                    };
                    power.seven_days_ago_watt_hours = decode(elems[0])?;
                    power.six_days_ago_watt_hours = decode(elems[1])?;
                    power.five_days_ago_watt_hours = decode(elems[2])?;
                    power.four_days_ago_watt_hours = decode(elems[3])?;
                    power.three_days_ago_watt_hours = decode(elems[4])?;
                    power.yesterday_watt_hours = decode(elems[5])?;
                    // elems[6] is the running figure for the current day;
                    // today_watt carries the authoritative value.
                }
                _ => {}
            }
        }
        Ok(power)
    }
}

impl fmt::Display for WeekPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "today_runtime: {}\nwatt_hours: {} {} {} {} {} {} {}",
            self.today_runtime,
            self.seven_days_ago_watt_hours,
            self.six_days_ago_watt_hours,
            self.five_days_ago_watt_hours,
            self.four_days_ago_watt_hours,
            self.three_days_ago_watt_hours,
            self.yesterday_watt_hours,
            self.today_watt_hours,
        )
    }
}
