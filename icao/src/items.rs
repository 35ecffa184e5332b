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

//! Readers of the numbered items of ICAO ATS messages.
//!
//! Each reader stores the fields of one item into the message's mapping
//! under their ADEXP names. Empty values are left out.

use std::collections::hash_map::Entry;

use adexp::{Mapping, ParsedValue};
use log::debug;

use crate::Error;

fn invalid(field: &'static str, value: &str) -> Error {
    Error::InvalidField {
        field,
        value: value.to_string(),
    }
}

pub(crate) fn set(fields: &mut Mapping, name: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        fields.insert(name.to_string(), value.into());
    }
}

/// Splits an aerodrome designator from the time that follows it.
fn aerodrome_and_time<'a>(field: &'static str, item: &'a str) -> Result<(&'a str, &'a str), Error> {
    let item = item.trim();
    match item.get(..4) {
        Some(aerodrome) if aerodrome.chars().all(|c| c.is_ascii_alphanumeric()) => {
            Ok((aerodrome, item[4..].trim()))
        }
        _ => Err(invalid(field, item)),
    }
}

/// Item 7: aircraft identification with an optional SSR mode and code.
pub(crate) fn aircraft_identification(fields: &mut Mapping, item: &str) -> Result<(), Error> {
    let item = item.trim();
    let (arcid, ssr) = item.split_once('/').unwrap_or((item, ""));

    if arcid.is_empty() || !arcid.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("ARCID", item));
    }

    set(fields, "ARCID", arcid);
    set(fields, "SSRCODE", ssr);
    Ok(())
}

/// Item 8: flight rules and the optional type of flight.
pub(crate) fn flight_rules(fields: &mut Mapping, item: &str) -> Result<(), Error> {
    let item = item.trim();
    match item.as_bytes().first() {
        Some(b'I' | b'V' | b'Y' | b'Z') => {
            set(fields, "FLTRUL", &item[..1]);
            set(fields, "FLTTYP", &item[1..]);
            Ok(())
        }
        _ => Err(invalid("FLTRUL", item)),
    }
}

/// Item 9: number and type of aircraft and the wake turbulence category.
pub(crate) fn aircraft_type(fields: &mut Mapping, item: &str) -> Result<(), Error> {
    let item = item.trim();
    let (aircraft, wake) = item
        .split_once('/')
        .ok_or_else(|| invalid("WKTRC", item))?;

    let arctyp = aircraft.trim_start_matches(|c: char| c.is_ascii_digit());
    let number = &aircraft[..aircraft.len() - arctyp.len()];

    if arctyp.is_empty() {
        return Err(invalid("ARCTYP", item));
    }

    set(fields, "NBARC", number);
    set(fields, "ARCTYP", arctyp);
    set(fields, "WKTRC", wake);
    Ok(())
}

/// Item 10: radio communication, navigation and approach aid equipment
/// and the surveillance equipment.
pub(crate) fn equipment(fields: &mut Mapping, item: &str) {
    let (ceqpt, seqpt) = item.split_once('/').unwrap_or((item, ""));
    set(fields, "CEQPT", ceqpt);
    set(fields, "SEQPT", seqpt);
}

/// Item 13 and similar: an aerodrome followed by a time.
pub(crate) fn aerodrome_with_time(
    fields: &mut Mapping,
    item: &str,
    aerodrome: &'static str,
    time: &'static str,
) -> Result<(), Error> {
    let (designator, at) = aerodrome_and_time(aerodrome, item)?;
    set(fields, aerodrome, designator);
    set(fields, time, at);
    Ok(())
}

/// Item 15: the route including cruising speed and level.
pub(crate) fn route(fields: &mut Mapping, item: &str) {
    set(fields, "ROUTE", item);
}

/// Item 16: destination aerodrome with total estimated elapsed time and up
/// to two alternate aerodromes.
pub(crate) fn destination(fields: &mut Mapping, item: &str) -> Result<(), Error> {
    let mut aerodromes = item.split_whitespace();

    let (ades, eelt) = aerodrome_and_time("ADES", aerodromes.next().unwrap_or_default())?;
    set(fields, "ADES", ades);
    set(fields, "EELT", eelt);

    for (name, altrnt) in ["ALTRNT1", "ALTRNT2"].into_iter().zip(aerodromes) {
        set(fields, name, altrnt);
    }

    Ok(())
}

/// Returns `true` if `key` is an indicator of item 18 like `DOF` or `RMK`.
fn is_indicator(key: &str) -> bool {
    (1..=4).contains(&key.len()) && key.chars().all(|c| c.is_ascii_uppercase())
}

/// Item 18: other information as `INDICATOR/text` groups.
///
/// Each group becomes a top-level field named by its indicator. A repeated
/// indicator appends its text. A single `0` means no information.
pub(crate) fn other_information(fields: &mut Mapping, item: &str) {
    if item.trim() == "0" {
        return;
    }

    let mut groups: Vec<(&str, String)> = Vec::new();

    for token in item.split_whitespace() {
        match token.split_once('/') {
            Some((key, text)) if is_indicator(key) => groups.push((key, text.to_string())),
            _ => match groups.last_mut() {
                Some((_, text)) => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(token);
                }
                None => debug!("item 18 text {:?} has no indicator", token),
            },
        }
    }

    for (key, text) in groups {
        if text.is_empty() {
            continue;
        }

        match fields.entry(key.to_string()) {
            Entry::Occupied(mut entry) => {
                if let ParsedValue::String(value) = entry.get_mut() {
                    value.push(' ');
                    value.push_str(&text);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(text.into());
            }
        }
    }
}
