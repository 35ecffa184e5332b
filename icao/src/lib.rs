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

//! ICAO ATS message parser.
//!
//! Flight plan messages are still exchanged in the bracketed format of ICAO
//! Doc 4444, e.g. `(DLA-WZZ5322-LYNI1025-EDJA-DOF/240228)`. This crate reads
//! the messages FPL, CHG, CNL, DLA, ARR and DEP into the same
//! [`ParsedMessage`](adexp::ParsedMessage) that the ADEXP parser returns.
//! Items are stored under their ADEXP field names, so a filed flight plan
//! gets an `ARCID`, `ADEP`, `EOBT` and so on.
//!
//! If enabled, the addresses of a preceding AFTN heading are stored as
//! `REFDATA.SENDER.FAC` and `REFDATA.RECVR.FAC`.

mod error;
mod header;
mod items;
mod kind;
mod parser;

pub use error::Error;
pub use header::AftnHeader;
pub use kind::MessageKind;
pub use parser::{Parser, ParserOptions, SET_NAME};
