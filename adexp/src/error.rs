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

use std::error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Fatal errors raised while building a catalog or parsing a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// A character outside the ADEXP character set at a byte offset of the
    /// normalized message.
    InvalidCharacter {
        char: char,
        position: usize,
    },
    /// Nothing is left after normalizing the message.
    EmptyMessage,
    /// The message has no `-TITLE` field.
    TitleNotFound,
    /// No loaded grammar is bound to the message's title.
    NoMatchingGrammar {
        title: String,
    },
    /// A mandatory top-level field is absent after scanning.
    MandatoryFieldMissing {
        name: String,
    },
    /// A catalog was built without any grammar.
    EmptyCatalog,
    /// A field name appears twice within the same field list.
    DuplicateField {
        category: String,
        name: String,
    },
    /// A basic field declares children.
    UnexpectedChildren {
        category: String,
        name: String,
    },
    /// A value required by a typed projection is absent.
    MissingValue {
        field: String,
    },
    /// A value has not the shape a typed projection expects.
    UnexpectedValue {
        field: String,
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { char, position } => {
                write!(f, "invalid character {char:?} at position {position}")
            }
            Self::EmptyMessage => write!(f, "message is empty"),
            Self::TitleNotFound => write!(f, "TITLE field not found in the message"),
            Self::NoMatchingGrammar { title } => {
                write!(f, "no matching grammar found for title: {title}")
            }
            Self::MandatoryFieldMissing { name } => {
                write!(f, "mandatory field {name} is missing")
            }
            Self::EmptyCatalog => write!(f, "catalog contains no grammar"),
            Self::DuplicateField { category, name } => {
                write!(f, "field {name} is declared twice in grammar {category}")
            }
            Self::UnexpectedChildren { category, name } => {
                write!(f, "basic field {name} in grammar {category} declares children")
            }
            Self::MissingValue { field } => write!(f, "missing value for {field}"),
            Self::UnexpectedValue { field, expected } => {
                write!(f, "{field} should be {expected}")
            }
        }
    }
}

impl error::Error for Error {}

/// Non-fatal conditions noticed while scanning a message.
///
/// Warnings never abort a parse. They are attached to the
/// [`ParsedMessage`](crate::ParsedMessage) for diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Warning {
    /// A list was closed by an `-END` marker naming another field.
    MalformedListEndMarker { expected: String, found: String },
    /// A field that the matched grammar doesn't declare was skipped.
    UnrecognizedField { name: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedListEndMarker { expected, found } => {
                write!(f, "list {expected} is closed by END {found}")
            }
            Self::UnrecognizedField { name } => write!(f, "unrecognized field: {name}"),
        }
    }
}
