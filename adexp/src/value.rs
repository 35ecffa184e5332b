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

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Warning;

/// Values of a structured field or list item keyed by field name.
pub type Mapping = HashMap<String, ParsedValue>;

/// A parsed field value.
///
/// All leaves are strings. Dates, times or levels are not interpreted.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum ParsedValue {
    String(String),
    Mapping(Mapping),
    List(Vec<ParsedValue>),
}

impl ParsedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParsedValue]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value of the child `name` if this is a mapping.
    pub fn get(&self, name: &str) -> Option<&ParsedValue> {
        self.as_mapping().and_then(|m| m.get(name))
    }
}

impl From<&str> for ParsedValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ParsedValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Mapping> for ParsedValue {
    fn from(m: Mapping) -> Self {
        Self::Mapping(m)
    }
}

impl From<Vec<ParsedValue>> for ParsedValue {
    fn from(l: Vec<ParsedValue>) -> Self {
        Self::List(l)
    }
}

/// A parsed message with the metadata of the grammar that parsed it.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParsedMessage {
    category: String,
    set_name: String,
    version: String,
    fields: Mapping,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    raw: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    warnings: Vec<Warning>,
}

impl ParsedMessage {
    pub fn new(
        category: impl Into<String>,
        set_name: impl Into<String>,
        version: impl Into<String>,
        fields: Mapping,
    ) -> Self {
        Self {
            category: category.into(),
            set_name: set_name.into(),
            version: version.into(),
            fields,
            raw: None,
            warnings: Vec::new(),
        }
    }

    /// Attaches the message text as received.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<Warning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// The category (title) of the grammar that parsed the message.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the message text if it was retained.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    pub fn into_fields(self) -> Mapping {
        self.fields
    }

    pub fn get(&self, name: &str) -> Option<&ParsedValue> {
        self.fields.get(name)
    }

    /// Returns the top-level field `name` if it's a basic value.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParsedValue::as_str)
    }

    /// Follows a dotted `path` through structured fields.
    ///
    /// # Examples
    ///
    /// ```
    /// # use adexp::{Mapping, ParsedMessage, ParsedValue};
    /// let mut sender = Mapping::new();
    /// sender.insert("FAC".to_string(), "EBBUZXZQ".into());
    /// let mut refdata = Mapping::new();
    /// refdata.insert("SENDER".to_string(), sender.into());
    /// let mut fields = Mapping::new();
    /// fields.insert("REFDATA".to_string(), refdata.into());
    ///
    /// let msg = ParsedMessage::new("BFD", "icas", "1", fields);
    /// assert_eq!(
    ///     msg.lookup("REFDATA.SENDER.FAC").and_then(ParsedValue::as_str),
    ///     Some("EBBUZXZQ")
    /// );
    /// ```
    pub fn lookup(&self, path: &str) -> Option<&ParsedValue> {
        let mut names = path.split('.');
        let first = self.fields.get(names.next()?)?;
        names.try_fold(first, |value, name| value.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ParsedMessage {
        let mut pt = Mapping::new();
        pt.insert("PTID".to_string(), "WOODY".into());

        let mut fields = Mapping::new();
        fields.insert("ARCID".to_string(), "DLH151".into());
        fields.insert(
            "EQCST".to_string(),
            vec![ParsedValue::from("W/EQ"), ParsedValue::from("Y/NO")].into(),
        );
        fields.insert("PT".to_string(), pt.into());

        ParsedMessage::new("BFD", "icas", "0.2", fields)
    }

    #[test]
    fn accesses_values() {
        let msg = message();

        assert_eq!(msg.get_str("ARCID"), Some("DLH151"));
        assert_eq!(msg.get_str("EQCST"), None);
        assert_eq!(
            msg.get("EQCST")
                .and_then(ParsedValue::as_list)
                .map(|items| items.len()),
            Some(2)
        );
        assert_eq!(
            msg.lookup("PT.PTID").and_then(ParsedValue::as_str),
            Some("WOODY")
        );
        assert_eq!(msg.lookup("ARCID.PTID"), None);
        assert_eq!(msg.lookup("PT.FL"), None);
    }

    #[test]
    fn keeps_metadata() {
        let msg = message().with_raw("-TITLE BFD");

        assert_eq!(msg.category(), "BFD");
        assert_eq!(msg.set_name(), "icas");
        assert_eq!(msg.version(), "0.2");
        assert_eq!(msg.raw(), Some("-TITLE BFD"));
        assert!(msg.warnings().is_empty());
    }
}
