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

use adexp::Message;
use serde::Serialize;

/// An AFTN or ATS unit address.
#[derive(Message, Serialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub struct Facility {
    pub fac: String,
}

/// Message reference of ICAS messages.
#[derive(Message, Serialize, Clone, Eq, PartialEq, Debug, Default)]
#[serde(rename_all = "UPPERCASE")]
pub struct RefData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Facility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recvr: Option<Facility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seqnum: Option<String>,
}

/// A flight plan read from any supported message.
///
/// Only the title and the aircraft identification are required. All other
/// fields are set if the message carried them.
#[derive(Message, Serialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub struct Flightplan {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refdata: Option<RefData>,
    pub arcid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssrcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifplid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ades: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arctyp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wktrc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fltrul: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flttyp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fplcat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eobd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eobt: Option<String>,
    /// Date of flight from item 18 of ICAO messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eelt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eldt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newctot: Option<String>,
}
