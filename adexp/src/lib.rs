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

//! ADEXP message parser.
//!
//! This crate parses messages in the ATS Data Exchange Presentation (ADEXP)
//! into nested [values]. The fields a message may carry are declared by
//! [grammars], which are loaded into a [`GrammarCatalog`]. The message's
//! `TITLE` selects the grammar that scans it.
//!
//! # Examples
//!
//! Lets declare a grammar of basic flight data and parse a message:
//!
//! ```
//! use adexp::{field, GrammarCatalog, GrammarSet, MessageGrammar, Parser, ParsedValue};
//!
//! # fn main() -> Result<(), adexp::Error> {
//! let bfd = MessageGrammar::new("demo", "BFD", "1", vec![
//!     field!(1, "TITLE", Basic, mandatory),
//!     field!(2, "ARCID", Basic, mandatory),
//!     field!(3, "REFDATA", Structured, [
//!         field!(0, "SENDER", Structured, [field!(0, "FAC", Basic)]),
//!     ]),
//!     field!(4, "EQCST", List, [field!(0, "EQC", Basic)]),
//! ]);
//! let catalog = GrammarCatalog::new([GrammarSet::new("demo").with(bfd)])?;
//!
//! let msg = Parser::new(&catalog).parse(
//!     "-TITLE BFD -ARCID DLH151 -REFDATA -SENDER -FAC EBBUZXZQ\n\
//!      -BEGIN EQCST -EQC W/EQ -EQC Y/NO -END EQCST",
//! )?;
//!
//! assert_eq!(msg.get_str("ARCID"), Some("DLH151"));
//! assert_eq!(
//!     msg.lookup("REFDATA.SENDER.FAC").and_then(ParsedValue::as_str),
//!     Some("EBBUZXZQ")
//! );
//! assert_eq!(msg.get("EQCST").and_then(ParsedValue::as_list).map(<[_]>::len), Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! Parsed messages can be projected onto own types by deriving [`Message`].
//!
//! [values]: crate::ParsedValue
//! [grammars]: crate::MessageGrammar

// derived implementations refer to this crate as `::adexp`
extern crate self as adexp;

#[macro_use]
mod macros;

mod catalog;
mod error;
mod grammar;
mod mandatory;
mod normalize;
mod parser;
mod project;
mod scanner;
mod title;
mod value;

pub use catalog::{CatalogBuilder, GrammarCatalog, GrammarSet};
pub use error::{Error, Warning};
pub use grammar::{FieldKind, FieldSpec, MessageGrammar};
pub use mandatory::check_mandatory;
pub use normalize::{is_adexp_char, normalize_and_validate};
pub use parser::{MessageParser, Parser, ParserOptions};
pub use project::{from_structured, FromMapping, FromValue};
pub use title::{extract_title, resolve_title};
pub use value::{Mapping, ParsedMessage, ParsedValue};

pub use adexp_derive::Message;
