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

use crate::MessageKind;

/// Errors raised while parsing an ICAO ATS message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The message has no `(` or no `)` after it.
    MissingBrackets,
    /// The message title is none of the supported message types.
    UnsupportedMessage { title: String },
    /// The message has less items than its type requires.
    IncompleteMessage {
        kind: MessageKind,
        expected: usize,
        actual: usize,
    },
    /// An item has not the format of the field it's read into.
    InvalidField { field: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBrackets => write!(f, "message is not enclosed in brackets"),
            Self::UnsupportedMessage { title } => {
                write!(f, "unsupported message type: {title}")
            }
            Self::IncompleteMessage {
                kind,
                expected,
                actual,
            } => write!(
                f,
                "incomplete {kind} message: expected at least {expected} items, found {actual}"
            ),
            Self::InvalidField { field, value } => {
                write!(f, "invalid value {value:?} for field {field}")
            }
        }
    }
}

impl error::Error for Error {}
