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

//! Typed projections of parsed values.
//!
//! Message types usually derive these traits with [`Message`](crate::Message)
//! rather than implementing them by hand.

use crate::{Error, Mapping, ParsedValue};

/// Conversion from the value of the field `field`.
///
/// The value is `None` if the field is absent. Only optional types accept
/// an absent value.
pub trait FromValue: Sized {
    fn from_value(field: &str, value: Option<&ParsedValue>) -> Result<Self, Error>;
}

/// Conversion from the fields of a structured value or a message.
pub trait FromMapping: Sized {
    fn from_mapping(mapping: &Mapping) -> Result<Self, Error>;
}

fn unexpected(field: &str, expected: &'static str) -> Error {
    Error::UnexpectedValue {
        field: field.to_string(),
        expected,
    }
}

fn missing(field: &str) -> Error {
    Error::MissingValue {
        field: field.to_string(),
    }
}

impl FromValue for String {
    fn from_value(field: &str, value: Option<&ParsedValue>) -> Result<Self, Error> {
        match value {
            Some(ParsedValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(unexpected(field, "string")),
            None => Err(missing(field)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(field: &str, value: Option<&ParsedValue>) -> Result<Self, Error> {
        value.map(|value| T::from_value(field, Some(value))).transpose()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(field: &str, value: Option<&ParsedValue>) -> Result<Self, Error> {
        match value {
            Some(ParsedValue::List(items)) => items
                .iter()
                .map(|item| T::from_value(field, Some(item)))
                .collect(),
            Some(_) => Err(unexpected(field, "list")),
            None => Err(missing(field)),
        }
    }
}

impl FromValue for Mapping {
    fn from_value(field: &str, value: Option<&ParsedValue>) -> Result<Self, Error> {
        match value {
            Some(ParsedValue::Mapping(mapping)) => Ok(mapping.clone()),
            Some(_) => Err(unexpected(field, "mapping")),
            None => Err(missing(field)),
        }
    }
}

impl FromValue for ParsedValue {
    fn from_value(field: &str, value: Option<&ParsedValue>) -> Result<Self, Error> {
        value.cloned().ok_or_else(|| missing(field))
    }
}

/// Converts a structured value with [`FromMapping`].
///
/// This is the [`FromValue`] implementation of derived types.
pub fn from_structured<T: FromMapping>(
    field: &str,
    value: Option<&ParsedValue>,
) -> Result<T, Error> {
    match value {
        Some(ParsedValue::Mapping(mapping)) => T::from_mapping(mapping),
        Some(_) => Err(unexpected(field, "mapping")),
        None => Err(missing(field)),
    }
}
