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

//! Ingestion of air-traffic messages into flight plans.
//!
//! This crate ties the [`adexp`] and [`icao`] parsers together. A
//! [`Decoder`] tries to read a message as ADEXP by the grammars of its
//! catalog and falls back to the ICAO format. The parsed message can be
//! projected onto a typed [`Flightplan`].
//!
//! Grammars are either [compiled in](builtin) or loaded from JSON files
//! with [`load_grammar_set`]:
//!
//! ```no_run
//! use adexp::GrammarCatalog;
//! use flightplan::{builtin, load_grammar_set, Decoder};
//!
//! # fn main() -> Result<(), flightplan::Error> {
//! let custom = load_grammar_set("schema/p2", "p2_0.1")?;
//! let catalog = GrammarCatalog::new([custom, builtin::icas_v01()])?;
//!
//! let decoder = Decoder::new(catalog);
//! let fpl = decoder.decode_flightplan("-TITLE BFD -REFDATA -SEQNUM 1 -ARCID DLH151")?;
//! println!("{} from {:?}", fpl.arcid, fpl.adep);
//! # Ok(())
//! # }
//! ```

pub mod builtin;
mod decoder;
mod error;
mod plan;
mod schema;

pub use adexp;
pub use icao;

pub use decoder::{Decoder, DecoderOptions};
pub use error::Error;
pub use plan::{Facility, Flightplan, RefData};
pub use schema::{load_grammar, load_grammar_set};
