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

use adexp::{Mapping, MessageParser, ParsedMessage, ParsedValue};
use log::{debug, warn};

use crate::items::{self, set};
use crate::{AftnHeader, Error, MessageKind};

/// The grammar set name of parsed ICAO messages.
pub const SET_NAME: &str = "icao";

/// Options of the ICAO [`Parser`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ParserOptions {
    /// Read sender and receiver from the AFTN heading before the message.
    pub aftn_header: bool,
}

/// Parser of ICAO ATS messages in brackets like `(FPL-...)`.
///
/// The items are mapped onto the field names of ADEXP, so that both formats
/// are read alike.
///
/// # Examples
///
/// ```
/// use icao::Parser;
///
/// let msg = Parser::new().parse("(DLA-WZZ5322-LYNI1025-EDJA-DOF/240228)")?;
///
/// assert_eq!(msg.category(), "DLA");
/// assert_eq!(msg.get_str("EOBT"), Some("1025"));
/// assert_eq!(msg.get_str("DOF"), Some("240228"));
/// # Ok::<(), icao::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parses one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message isn't bracketed, has an unsupported
    /// type, lacks required items or an item is malformed.
    pub fn parse(&self, raw: &str) -> Result<ParsedMessage, Error> {
        let start = raw.find('(').ok_or(Error::MissingBrackets)?;
        let end = raw[start..]
            .find(')')
            .map(|n| start + n)
            .ok_or(Error::MissingBrackets)?;

        let text = raw[start + 1..end]
            .replace("\r\n", " ")
            .replace(|c: char| c == '\r' || c == '\n', " ");
        let mut parts = text.split('-').map(str::trim);

        let title = parts.next().unwrap_or_default();
        let kind: MessageKind = title.parse()?;
        let items: Vec<&str> = parts.collect();

        if items.len() < kind.required_items() {
            return Err(Error::IncompleteMessage {
                kind,
                expected: kind.required_items(),
                actual: items.len(),
            });
        }

        let mut fields = Mapping::new();
        set(&mut fields, "TITLE", kind.as_str());

        match kind {
            MessageKind::Fpl => filed_flight_plan(&mut fields, &items)?,
            MessageKind::Chg => modification(&mut fields, &items)?,
            MessageKind::Cnl | MessageKind::Dla => {
                cancellation_or_delay(&mut fields, &items, "EOBT")?
            }
            MessageKind::Dep => cancellation_or_delay(&mut fields, &items, "ATD")?,
            MessageKind::Arr => arrival(&mut fields, &items)?,
        }

        if self.options.aftn_header {
            match AftnHeader::parse(&raw[..start]) {
                Some(header) => insert_refdata(&mut fields, &header),
                None => warn!("AFTN heading expected but not found"),
            }
        }

        debug!("parsed {} message with {} field(s)", kind, fields.len());
        Ok(ParsedMessage::new(kind.as_str(), SET_NAME, "", fields))
    }
}

impl MessageParser for Parser {
    type Error = Error;

    fn parse(&self, raw: &str) -> Result<ParsedMessage, Error> {
        Parser::parse(self, raw)
    }
}

fn facility(address: &str) -> ParsedValue {
    let mut fac = Mapping::new();
    fac.insert("FAC".to_string(), address.into());
    fac.into()
}

fn insert_refdata(fields: &mut Mapping, header: &AftnHeader) {
    let mut refdata = Mapping::new();
    refdata.insert("SENDER".to_string(), facility(&header.originator));
    if let Some(receiver) = header.receiver() {
        refdata.insert("RECVR".to_string(), facility(receiver));
    }
    fields.insert("REFDATA".to_string(), refdata.into());
}

/// `(FPL-7-8-9-10-13-15-16[-18[-19]])`
fn filed_flight_plan(fields: &mut Mapping, items: &[&str]) -> Result<(), Error> {
    items::aircraft_identification(fields, items[0])?;
    items::flight_rules(fields, items[1])?;
    items::aircraft_type(fields, items[2])?;
    items::equipment(fields, items[3]);
    items::aerodrome_with_time(fields, items[4], "ADEP", "EOBT")?;
    items::route(fields, items[5]);
    items::destination(fields, items[6])?;

    if let Some(other) = items.get(7) {
        items::other_information(fields, other);
    }
    if items.len() > 8 {
        // supplementary information isn't transmitted in ADEXP
        debug!("ignoring {} item(s) after item 18", items.len() - 8);
    }

    Ok(())
}

/// `(CHG-7-13-16[-18]-22...)` with amendments like `8/IS`.
fn modification(fields: &mut Mapping, items: &[&str]) -> Result<(), Error> {
    items::aircraft_identification(fields, items[0])?;
    items::aerodrome_with_time(fields, items[1], "ADEP", "EOBT")?;
    items::destination(fields, items[2])?;

    for item in &items[3..] {
        match item.split_once('/') {
            Some((number, value)) if number.chars().all(|c| c.is_ascii_digit()) => {
                amend(fields, number, value)?
            }
            _ => items::other_information(fields, item),
        }
    }

    Ok(())
}

fn amend(fields: &mut Mapping, number: &str, value: &str) -> Result<(), Error> {
    match number {
        "8" => items::flight_rules(fields, value),
        "9" => items::aircraft_type(fields, value),
        "10" => {
            items::equipment(fields, value);
            Ok(())
        }
        "13" => items::aerodrome_with_time(fields, value, "ADEP", "EOBT"),
        "15" => {
            items::route(fields, value);
            Ok(())
        }
        "16" => items::destination(fields, value),
        "18" => {
            items::other_information(fields, value);
            Ok(())
        }
        _ => {
            warn!("ignoring amendment of item {}", number);
            Ok(())
        }
    }
}

/// `(CNL-7-13-16[-18])`, `(DLA-7-13-16[-18])` and `(DEP-7-13-16[-18])`
///
/// The time of item 13 is named by `time`.
fn cancellation_or_delay(
    fields: &mut Mapping,
    items: &[&str],
    time: &'static str,
) -> Result<(), Error> {
    items::aircraft_identification(fields, items[0])?;
    items::aerodrome_with_time(fields, items[1], "ADEP", time)?;
    items::destination(fields, items[2])?;

    for other in &items[3..] {
        items::other_information(fields, other);
    }

    Ok(())
}

/// `(ARR-7-13[-16]-17)`
fn arrival(fields: &mut Mapping, items: &[&str]) -> Result<(), Error> {
    items::aircraft_identification(fields, items[0])?;
    items::aerodrome_with_time(fields, items[1], "ADEP", "EOBT")?;

    let (arrival, destination) = match items {
        [.., destination, arrival] if items.len() > 3 => (arrival, Some(destination)),
        [.., arrival] => (arrival, None),
        [] => return Ok(()),
    };

    if let Some(destination) = destination {
        items::destination(fields, destination)?;
    }
    items::aerodrome_with_time(fields, arrival, "ADARR", "ATA")
}
