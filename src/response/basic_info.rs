// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Basic info record.

use std::fmt;

use crate::error::{Error, ParseError};
use crate::protocol::{FromWireRecord, WireRecord};
use crate::types::{Power, UnitName};

/// Identity information of the unit.
///
/// Fetched from `/common/basic_info`. The response carries many
/// firmware-specific fields; only the stable ones are decoded here.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct BasicInfo {
    /// The human-readable name of the unit.
    pub name: UnitName,
    /// Power state of the unit.
    pub power: Power,
}

impl FromWireRecord for BasicInfo {
    fn from_record(record: &WireRecord) -> Result<Self, Error> {
        record.ensure_ok()?;

        let mut info = Self::default();
        for (name, value) in record.entries() {
            match name {
                "name" => {
                    info.name = UnitName::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                "pow" => {
                    info.power = Power::from_wire(value)
                        .map_err(|e| ParseError::invalid_value(name, &e))?;
                }
                _ => {}
            }
        }
        Ok(info)
    }
}

impl fmt::Display for BasicInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}\npow: {}", self.name, self.power)
    }
}
