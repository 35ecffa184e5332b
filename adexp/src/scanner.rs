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

//! Field scanning of normalized messages.
//!
//! The scanner walks the message once from left to right with a single
//! [`Cursor`]. Each step reads a `-NAME` marker and decides in the current
//! context what it starts:
//!
//! - at the top level, any field of the grammar or a `BEGIN` of a list
//! - within a structured field, one of its declared children
//! - within a list, the next item or the `END` marker
//!
//! Whenever a marker doesn't fit the context, the cursor is set back to the
//! checkpoint taken before the marker and the context ends. The enclosing
//! context reads the marker again and interprets it on its own. Every step
//! either consumes at least one byte or ends a context, so the scan always
//! terminates.

use log::{debug, trace, warn};

use crate::{FieldKind, FieldSpec, Mapping, MessageGrammar, ParsedValue, Warning};

const BEGIN: &str = "BEGIN";
const END: &str = "END";

/// Scan position in a normalized message.
///
/// A checkpoint is just the byte offset, which can be restored at any time.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn restore(&mut self, checkpoint: usize) {
        trace!("backtrack from {} to {}", self.pos, checkpoint);
        self.pos = checkpoint;
    }

    #[inline]
    fn rest(&self) -> &'a str {
        let text = self.text;
        &text[self.pos..]
    }

    /// Consumes `byte` if it's next.
    #[inline]
    fn eat(&mut self, byte: u8) -> bool {
        if self.text.as_bytes().get(self.pos) == Some(&byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) {
        while self.eat(b' ') {}
    }

    /// Moves to the next dash without consuming it.
    ///
    /// Returns `false` and moves to the end if there is no dash left.
    pub(crate) fn skip_to_dash(&mut self) -> bool {
        match self.rest().find('-') {
            Some(n) => {
                self.pos += n;
                true
            }
            None => {
                self.pos = self.text.len();
                false
            }
        }
    }

    /// Reads a name up to the next space, dash or the end.
    pub(crate) fn read_name(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| c == ' ' || c == '-').unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Reads the name that follows a `BEGIN` or `END` keyword.
    fn read_keyword_operand(&mut self) -> &'a str {
        self.skip_spaces();
        self.read_name()
    }

    /// Reads a basic value after its name.
    ///
    /// The separating space is consumed and the value ends at the next dash.
    pub(crate) fn read_value(&mut self) -> &'a str {
        self.eat(b' ');
        let rest = self.rest();
        let len = rest.find('-').unwrap_or(rest.len());
        self.pos += len;
        rest[..len].trim()
    }

    /// Reads the next `-NAME` marker behind optional spaces.
    ///
    /// If no dash follows, the cursor doesn't move and `None` is returned.
    pub(crate) fn next_marker(&mut self) -> Option<&'a str> {
        let checkpoint = self.pos;
        self.skip_spaces();

        if self.eat(b'-') {
            Some(self.read_name())
        } else {
            self.pos = checkpoint;
            None
        }
    }
}

/// Scans the fields of one message by its grammar.
pub(crate) struct Scanner<'a, 'g> {
    cursor: Cursor<'a>,
    grammar: &'g MessageGrammar,
    warnings: Vec<Warning>,
}

impl<'a, 'g> Scanner<'a, 'g> {
    pub(crate) fn new(text: &'a str, grammar: &'g MessageGrammar) -> Self {
        Self {
            cursor: Cursor::new(text),
            grammar,
            warnings: Vec::new(),
        }
    }

    /// Scans all top-level fields.
    ///
    /// Fields unknown to the grammar are skipped. A field that occurs more
    /// than once keeps its last value.
    pub(crate) fn scan(mut self) -> (Mapping, Vec<Warning>) {
        let grammar = self.grammar;
        let mut fields = Mapping::new();

        while self.cursor.skip_to_dash() {
            self.cursor.eat(b'-');
            let name = self.cursor.read_name();

            if name == BEGIN {
                let list = self.cursor.read_keyword_operand();
                match grammar.find(list) {
                    Some(spec) if spec.kind == FieldKind::List => {
                        let items = self.list(spec);
                        debug!("{}: {} item(s)", spec.name, items.len());
                        fields.insert(spec.name.clone(), items.into());
                    }
                    _ => self.unrecognized(list),
                }
                continue;
            }

            match grammar.find(name).map(|spec| (spec, spec.kind)) {
                Some((spec, FieldKind::Basic)) => {
                    let value = self.cursor.read_value();
                    debug!("{}: {:?}", spec.name, value);
                    fields.insert(spec.name.clone(), value.into());
                }
                Some((spec, FieldKind::Structured)) => {
                    let mapping = self.structured(spec);
                    debug!("{}: {} child field(s)", spec.name, mapping.len());
                    fields.insert(spec.name.clone(), mapping.into());
                }
                // a list is only entered by its BEGIN marker
                Some((_, FieldKind::List)) | None => self.unrecognized(name),
            }
        }

        (fields, self.warnings)
    }

    fn unrecognized(&mut self, name: &str) {
        debug!("skipping unrecognized field {:?}", name);
        self.warnings.push(Warning::UnrecognizedField {
            name: name.to_string(),
        });
    }

    /// Scans the children of a structured field until a marker that isn't
    /// one of them.
    fn structured(&mut self, spec: &'g FieldSpec) -> Mapping {
        let mut mapping = Mapping::new();

        loop {
            let checkpoint = self.cursor.position();
            let Some(name) = self.cursor.next_marker() else {
                break;
            };

            match self.child(spec, name, None) {
                Some((child, value)) => {
                    mapping.insert(child.to_string(), value);
                }
                None => {
                    self.cursor.restore(checkpoint);
                    break;
                }
            }
        }

        mapping
    }

    /// Scans the child `name` of `parent` whose marker was just read.
    ///
    /// Returns `None` if the marker doesn't continue the parent. This is the
    /// case for names that aren't declared children, for lists without a
    /// `BEGIN` and for children already `captured` by the current list item.
    fn child(
        &mut self,
        parent: &'g FieldSpec,
        name: &str,
        captured: Option<&Mapping>,
    ) -> Option<(&'g str, ParsedValue)> {
        let (spec, begin) = if name == BEGIN {
            (parent.find(self.cursor.read_keyword_operand())?, true)
        } else {
            (parent.find(name)?, false)
        };

        if captured.is_some_and(|item| item.contains_key(&spec.name)) {
            trace!("{} starts the next item of {}", spec.name, parent.name);
            return None;
        }

        let value = match (spec.kind, begin) {
            (FieldKind::Basic, false) => self.cursor.read_value().into(),
            (FieldKind::Structured, false) => self.structured(spec).into(),
            (FieldKind::List, true) => self.list(spec).into(),
            _ => return None,
        };

        Some((spec.name.as_str(), value))
    }

    /// Scans the items of a list up to its `END` marker.
    ///
    /// A list without `END` ends at the first marker that can't start an
    /// item.
    fn list(&mut self, spec: &'g FieldSpec) -> Vec<ParsedValue> {
        let mut items = Vec::new();

        loop {
            if self.end_of_list(spec) {
                break;
            }

            let item = if spec.is_simple_list() {
                self.simple_item(spec)
            } else {
                self.tuple_item(spec)
            };

            match item {
                Some(item) => items.push(item),
                None => {
                    debug!("list {} ends without END", spec.name);
                    break;
                }
            }
        }

        items
    }

    /// Consumes the `-END name` marker if it's next.
    fn end_of_list(&mut self, spec: &FieldSpec) -> bool {
        let checkpoint = self.cursor.position();

        match self.cursor.next_marker() {
            Some(END) => {
                let found = self.cursor.read_keyword_operand();
                if found != spec.name {
                    warn!("list {} is closed by END {}", spec.name, found);
                    self.warnings.push(Warning::MalformedListEndMarker {
                        expected: spec.name.clone(),
                        found: found.to_string(),
                    });
                }
                true
            }
            Some(_) => {
                self.cursor.restore(checkpoint);
                false
            }
            None => false,
        }
    }

    /// Scans one item of a list with a single basic child.
    fn simple_item(&mut self, spec: &'g FieldSpec) -> Option<ParsedValue> {
        let checkpoint = self.cursor.position();
        let child = &spec.children[0];

        match self.cursor.next_marker() {
            Some(name) if name == child.name => Some(self.cursor.read_value().into()),
            Some(_) => {
                self.cursor.restore(checkpoint);
                None
            }
            None => None,
        }
    }

    /// Scans one item of a list of tuples.
    ///
    /// A child that the item already has starts the next item.
    fn tuple_item(&mut self, spec: &'g FieldSpec) -> Option<ParsedValue> {
        let mut item = Mapping::new();

        loop {
            let checkpoint = self.cursor.position();
            let Some(name) = self.cursor.next_marker() else {
                break;
            };

            match self.child(spec, name, Some(&item)) {
                Some((child, value)) => {
                    item.insert(child.to_string(), value);
                }
                None => {
                    self.cursor.restore(checkpoint);
                    break;
                }
            }
        }

        (!item.is_empty()).then(|| item.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    fn grammar() -> MessageGrammar {
        MessageGrammar::new(
            "test",
            "BFD",
            "1",
            vec![
                field!(1, "TITLE", Basic, mandatory),
                field!(2, "REFDATA", Structured, [
                    field!(0, "SENDER", Structured, [field!(0, "FAC", Basic)]),
                    field!(0, "RECVR", Structured, [field!(0, "FAC", Basic)]),
                    field!(0, "SEQNUM", Basic),
                ]),
                field!(3, "ARCID", Basic, mandatory),
                field!(4, "EQCST", List, [field!(0, "EQC", Basic)]),
                field!(5, "RTEPTS", List, [
                    field!(0, "PT", Structured, [
                        field!(0, "PTID", Basic),
                        field!(0, "TO", Basic),
                        field!(0, "FL", Basic),
                    ]),
                ]),
                field!(6, "ESTDATA", List, [
                    field!(0, "PTID", Basic),
                    field!(0, "ETO", Basic),
                    field!(0, "FL", Basic),
                ]),
                field!(7, "ADEP", Basic),
            ],
        )
    }

    fn scan(text: &str) -> (Mapping, Vec<Warning>) {
        let grammar = grammar();
        Scanner::new(text, &grammar).scan()
    }

    fn string(s: &str) -> ParsedValue {
        ParsedValue::from(s)
    }

    fn mapping<const N: usize>(entries: [(&str, ParsedValue); N]) -> ParsedValue {
        ParsedValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn reads_cursor_tokens() {
        let mut cursor = Cursor::new("-ARCID  DLH151 -ADEP EDDW");

        assert_eq!(cursor.next_marker(), Some("ARCID"));
        assert_eq!(cursor.read_value(), "DLH151");
        let checkpoint = cursor.position();
        assert_eq!(cursor.next_marker(), Some("ADEP"));
        cursor.restore(checkpoint);
        assert!(cursor.skip_to_dash());
        assert_eq!(cursor.position(), 15);
        assert_eq!(cursor.next_marker(), Some("ADEP"));
        assert_eq!(cursor.read_value(), "EDDW");
        assert_eq!(cursor.next_marker(), None);
        assert!(!cursor.skip_to_dash());
    }

    #[test]
    fn scans_basic_fields() {
        let (fields, warnings) = scan("-TITLE BFD -ARCID DLH151 -ADEP EDDW");

        assert_eq!(fields.len(), 3);
        assert_eq!(fields["TITLE"], string("BFD"));
        assert_eq!(fields["ARCID"], string("DLH151"));
        assert_eq!(fields["ADEP"], string("EDDW"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn keeps_last_occurrence() {
        let (fields, _) = scan("-TITLE BFD -ARCID DLH151 -ARCID DLH152");
        assert_eq!(fields["ARCID"], string("DLH152"));
    }

    #[test]
    fn keeps_empty_values() {
        let (fields, _) = scan("-TITLE BFD -ARCID -ADEP EDDW");
        assert_eq!(fields["ARCID"], string(""));
        assert_eq!(fields["ADEP"], string("EDDW"));
    }

    #[test]
    fn scans_structured_field_and_resumes() {
        let (fields, _) = scan(
            "-TITLE BFD -REFDATA -SENDER -FAC EBBUZXZQ -RECVR -FAC EBSZZXZQ -SEQNUM 006 -ARCID DLH151",
        );

        assert_eq!(
            fields["REFDATA"],
            mapping([
                ("SENDER", mapping([("FAC", string("EBBUZXZQ"))])),
                ("RECVR", mapping([("FAC", string("EBSZZXZQ"))])),
                ("SEQNUM", string("006")),
            ])
        );
        assert_eq!(fields["ARCID"], string("DLH151"));
    }

    #[test]
    fn structured_field_omits_absent_children() {
        let (fields, _) = scan("-REFDATA -SEQNUM 006 -ARCID DLH151");

        assert_eq!(fields["REFDATA"], mapping([("SEQNUM", string("006"))]));
        assert_eq!(fields["ARCID"], string("DLH151"));
    }

    #[test]
    fn structured_field_at_end() {
        let (fields, _) = scan("-ARCID DLH151 -REFDATA -SENDER -FAC EBBUZXZQ  ");

        assert_eq!(
            fields["REFDATA"],
            mapping([("SENDER", mapping([("FAC", string("EBBUZXZQ"))]))])
        );
    }

    #[test]
    fn scans_simple_list() {
        let (fields, warnings) =
            scan("-TITLE BFD -BEGIN EQCST -EQC W/EQ -EQC Y/NO -END EQCST -ADEP EDDW");

        assert_eq!(
            fields["EQCST"],
            ParsedValue::List(vec![string("W/EQ"), string("Y/NO")])
        );
        assert_eq!(fields["ADEP"], string("EDDW"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn scans_empty_list() {
        let (fields, warnings) = scan("-BEGIN EQCST -END EQCST -ADEP EDDW");

        assert_eq!(fields["EQCST"], ParsedValue::List(Vec::new()));
        assert_eq!(fields["ADEP"], string("EDDW"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn scans_list_of_structured_items() {
        let (fields, _) = scan(
            "-BEGIN RTEPTS -PT -PTID WOODY -TO 1235 -FL F210 -PT -PTID CIV -TO 1239 -FL F330 -PT -PTID NEBUL -TO 1240 -FL F330 -END RTEPTS -ARCID DLH151",
        );

        let point = |ptid, to, fl| {
            mapping([(
                "PT",
                mapping([("PTID", string(ptid)), ("TO", string(to)), ("FL", string(fl))]),
            )])
        };

        assert_eq!(
            fields["RTEPTS"],
            ParsedValue::List(vec![
                point("WOODY", "1235", "F210"),
                point("CIV", "1239", "F330"),
                point("NEBUL", "1240", "F330"),
            ])
        );
        assert_eq!(fields["ARCID"], string("DLH151"));
    }

    #[test]
    fn repeated_child_starts_next_tuple() {
        let (fields, _) = scan(
            "-BEGIN ESTDATA -PTID WOODY -ETO 1235 -PTID CIV -ETO 1239 -FL F330 -END ESTDATA",
        );

        assert_eq!(
            fields["ESTDATA"],
            ParsedValue::List(vec![
                mapping([("PTID", string("WOODY")), ("ETO", string("1235"))]),
                mapping([
                    ("PTID", string("CIV")),
                    ("ETO", string("1239")),
                    ("FL", string("F330"))
                ]),
            ])
        );
    }

    #[test]
    fn warns_on_mismatched_end() {
        let (fields, warnings) = scan("-BEGIN EQCST -EQC W/EQ -END RTEPTS -ADEP EDDW");

        assert_eq!(fields["EQCST"], ParsedValue::List(vec![string("W/EQ")]));
        assert_eq!(fields["ADEP"], string("EDDW"));
        assert_eq!(
            warnings,
            vec![Warning::MalformedListEndMarker {
                expected: "EQCST".to_string(),
                found: "RTEPTS".to_string()
            }]
        );
    }

    #[test]
    fn list_without_end_stops_at_foreign_field() {
        let (fields, _) = scan("-BEGIN EQCST -EQC W/EQ -EQC Y/NO -ARCID DLH151");

        assert_eq!(
            fields["EQCST"],
            ParsedValue::List(vec![string("W/EQ"), string("Y/NO")])
        );
        assert_eq!(fields["ARCID"], string("DLH151"));
    }

    #[test]
    fn skips_unrecognized_fields() {
        let (fields, warnings) = scan("-TITLE BFD -FOO BAR -ARCID DLH151");

        assert!(!fields.contains_key("FOO"));
        assert_eq!(fields["ARCID"], string("DLH151"));
        assert_eq!(
            warnings,
            vec![Warning::UnrecognizedField {
                name: "FOO".to_string()
            }]
        );
    }

    #[test]
    fn skips_list_without_begin() {
        let (fields, _) = scan("-EQCST W/EQ -ARCID DLH151");

        assert!(!fields.contains_key("EQCST"));
        assert_eq!(fields["ARCID"], string("DLH151"));
    }

    #[test]
    fn skips_unknown_list() {
        let (fields, _) = scan("-BEGIN ADDR -FAC LFPYZMFP -END ADDR -ARCID DLH151");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["ARCID"], string("DLH151"));
    }

    #[test]
    fn ignores_preamble() {
        let (fields, _) = scan("ZCZC 001 -TITLE BFD");
        assert_eq!(fields["TITLE"], string("BFD"));
    }

    #[test]
    fn terminates_on_stray_dashes() {
        let (fields, _) = scan("- -- -BEGIN -END -ARCID DLH151 -");
        assert_eq!(fields["ARCID"], string("DLH151"));
    }
}
