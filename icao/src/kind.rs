// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The supported types of ICAO ATS messages.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MessageKind {
    /// Filed flight plan.
    Fpl,
    /// Modification.
    Chg,
    /// Cancellation.
    Cnl,
    /// Delay.
    Dla,
    /// Arrival.
    Arr,
    /// Departure.
    Dep,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fpl => "FPL",
            Self::Chg => "CHG",
            Self::Cnl => "CNL",
            Self::Dla => "DLA",
            Self::Arr => "ARR",
            Self::Dep => "DEP",
        }
    }

    /// The least number of items following the title.
    pub(crate) fn required_items(&self) -> usize {
        match self {
            // items 7, 8, 9, 10, 13, 15 and 16
            Self::Fpl => 7,
            // items 7, 13 and 16 or the arrival aerodrome
            Self::Chg | Self::Cnl | Self::Dla | Self::Arr | Self::Dep => 3,
        }
    }
}

impl FromStr for MessageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FPL" => Ok(Self::Fpl),
            "CHG" => Ok(Self::Chg),
            "CNL" => Ok(Self::Cnl),
            "DLA" => Ok(Self::Dla),
            "ARR" => Ok(Self::Arr),
            "DEP" => Ok(Self::Dep),
            _ => Err(Error::UnsupportedMessage {
                title: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
