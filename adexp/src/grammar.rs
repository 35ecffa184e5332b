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

//! Field grammars of ADEXP message categories.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// The shape of a field's value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FieldKind {
    /// A single value terminated by the next field marker.
    Basic,
    /// A named group of child fields.
    Structured,
    /// A `BEGIN name ... END name` delimited repetition.
    List,
}

/// A grammar rule of one field.
///
/// The `ordinal` is the field reference number (FRN) of the documentation.
/// It's neither unique nor ordered and is never used for lookup.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub ordinal: u16,
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    pub kind: FieldKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mandatory: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<FieldSpec>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, kind: FieldKind, children: Vec<FieldSpec>) -> Self {
        Self {
            ordinal: 0,
            name: name.into(),
            description: None,
            kind,
            mandatory: false,
            children,
        }
    }

    /// Creates an optional basic field.
    pub fn basic(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Basic, Vec::new())
    }

    /// Creates an optional structured field with its `children`.
    pub fn structured(name: impl Into<String>, children: Vec<FieldSpec>) -> Self {
        Self::new(name, FieldKind::Structured, children)
    }

    /// Creates an optional list field.
    ///
    /// A single basic child makes a simple list of strings. Any other
    /// `children` make a list of tuples.
    pub fn list(name: impl Into<String>, children: Vec<FieldSpec>) -> Self {
        Self::new(name, FieldKind::List, children)
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn with_ordinal(mut self, ordinal: u16) -> Self {
        self.ordinal = ordinal;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the child named `name`.
    pub fn find(&self, name: &str) -> Option<&FieldSpec> {
        find(&self.children, name)
    }

    /// Returns `true` if this is a list of bare strings.
    pub fn is_simple_list(&self) -> bool {
        self.kind == FieldKind::List
            && self.children.len() == 1
            && self.children[0].kind == FieldKind::Basic
    }
}

/// The grammar of one message category.
///
/// A message binds this grammar if its `TITLE` equals the `category`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageGrammar {
    #[cfg_attr(feature = "serde", serde(default))]
    pub set_name: String,
    pub category: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "version::deserialize")
    )]
    pub version: String,
    pub fields: Vec<FieldSpec>,
}

impl MessageGrammar {
    pub fn new(
        set_name: impl Into<String>,
        category: impl Into<String>,
        version: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            set_name: set_name.into(),
            category: category.into(),
            version: version.into(),
            fields,
        }
    }

    /// Returns the top-level field named `name`.
    pub fn find(&self, name: &str) -> Option<&FieldSpec> {
        find(&self.fields, name)
    }

    /// Returns the mandatory top-level fields.
    pub fn mandatory_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|spec| spec.mandatory)
    }

    /// Checks that names are unique within every field list and that basic
    /// fields have no children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateField`] or [`Error::UnexpectedChildren`] for
    /// the first violation found.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_fields(&self.fields)
    }

    fn validate_fields(&self, fields: &[FieldSpec]) -> Result<(), Error> {
        let mut names = HashSet::with_capacity(fields.len());

        for spec in fields {
            if !names.insert(spec.name.as_str()) {
                return Err(Error::DuplicateField {
                    category: self.category.clone(),
                    name: spec.name.clone(),
                });
            }

            if spec.kind == FieldKind::Basic && !spec.children.is_empty() {
                return Err(Error::UnexpectedChildren {
                    category: self.category.clone(),
                    name: spec.name.clone(),
                });
            }

            self.validate_fields(&spec.children)?;
        }

        Ok(())
    }
}

fn find<'a>(fields: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    fields.iter().find(|spec| spec.name == name)
}

/// Persisted versions are written either as text or as a number, e.g. `0.2`.
#[cfg(feature = "serde")]
mod version {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Version {
        Text(String),
        Number(f64),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Version::deserialize(deserializer)? {
            Version::Text(s) => s,
            Version::Number(n) => n.to_string(),
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn deserializes_persisted_grammar() {
        let grammar: MessageGrammar = serde_json::from_str(
            r#"{
                "category": "BFD",
                "version": 0.2,
                "fields": [
                    { "ordinal": 1, "name": "TITLE", "kind": "basic", "mandatory": true },
                    { "ordinal": 2, "name": "EQCST", "description": "Equipment", "kind": "list",
                      "children": [{ "name": "EQC", "kind": "basic" }] }
                ]
            }"#,
        )
        .expect("valid grammar");

        assert_eq!(grammar.set_name, "");
        assert_eq!(grammar.version, "0.2");
        assert_eq!(
            grammar.fields[1],
            FieldSpec::list("EQCST", vec![FieldSpec::basic("EQC")])
                .with_ordinal(2)
                .with_description("Equipment")
        );
    }

    #[test]
    fn accepts_textual_version() {
        let grammar: MessageGrammar =
            serde_json::from_str(r#"{ "category": "CFD", "version": "1.0a", "fields": [] }"#)
                .expect("valid grammar");

        assert_eq!(grammar.version, "1.0a");
    }

    #[test]
    fn rejects_unknown_kind() {
        let result = serde_json::from_str::<FieldSpec>(r#"{ "name": "ARCID", "kind": "tuple" }"#);
        assert!(result.is_err());
    }
}
