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

//! Compiled-in grammar sets.
//!
//! - `icas_0.1`: basic and current flight data (`BFD`, `CFD`)
//! - `icas_0.2`: a reduced basic flight data (`BFD`)
//! - `atfcm`: slot messages of the network manager (`SAM`, `SRM`, `SLC`,
//!   `FLS`, `DES`)

use adexp::{field, FieldSpec, GrammarSet, MessageGrammar};

fn title() -> FieldSpec {
    field!(1, "TITLE", Basic, mandatory).with_description("Title of the ADEXP message")
}

fn refdata() -> FieldSpec {
    field!(2, "REFDATA", Structured, mandatory, [
        field!(0, "SENDER", Structured, [field!(0, "FAC", Basic)]),
        field!(0, "RECVR", Structured, [field!(0, "FAC", Basic)]),
        field!(0, "SEQNUM", Basic),
    ])
    .with_description("Message reference with sender, receiver and sequence number")
}

fn arcid(frn: u16) -> FieldSpec {
    field!(frn, "ARCID", Basic, mandatory).with_description("Aircraft identification")
}

/// Fields common to basic and current flight data of ICAS.
fn icas_flight_data() -> Vec<FieldSpec> {
    vec![
        title(),
        refdata(),
        arcid(3),
        field!(4, "SSRCODE", Basic).with_description("Assigned SSR code"),
        field!(5, "ADEP", Basic).with_description("Aerodrome of departure"),
        field!(6, "ADES", Basic).with_description("Aerodrome of destination"),
        field!(7, "ARCTYP", Basic).with_description("Aircraft type"),
        field!(8, "IFPLID", Basic).with_description("IFPS flight plan identification"),
        field!(9, "EOBT", Basic).with_description("Estimated off-block time"),
        field!(10, "ELDT", Basic).with_description("Estimated landing time"),
    ]
}

/// The ICAS grammars of version 0.1.
pub fn icas_v01() -> GrammarSet {
    let mut bfd = icas_flight_data();
    bfd.extend([
        field!(11, "WKTRC", Basic).with_description("Wake turbulence category"),
        field!(12, "EOBD", Basic).with_description("Estimated off-block date"),
        field!(13, "FLTTYP", Basic).with_description("Type of flight"),
        field!(14, "FLTRUL", Basic).with_description("Flight rules"),
        field!(15, "FPLCAT", Basic).with_description("Flight plan category"),
        field!(15, "CTOT", Basic).with_description("Calculated take-off time"),
        field!(15, "SID", Basic),
        field!(15, "STAR", Basic),
        field!(15, "REG", Basic).with_description("Aircraft registration"),
        field!(15, "NEWCTOT", Basic).with_description("Revised calculated take-off time"),
        field!(15, "ROUTE", Basic),
    ]);

    GrammarSet::new("icas_0.1")
        .with(MessageGrammar::new("icas_0.1", "BFD", "0.1", bfd))
        .with(MessageGrammar::new("icas_0.1", "CFD", "0.1", icas_flight_data()))
}

/// The ICAS grammars of version 0.2.
pub fn icas_v02() -> GrammarSet {
    let bfd = vec![
        title(),
        refdata(),
        arcid(3),
        field!(4, "SSRCODE", Basic),
        field!(5, "ADEP", Basic),
        field!(6, "ADES", Basic),
        field!(7, "ARCTYP", Basic),
        field!(8, "IFPLID", Basic),
        field!(9, "ROUTE", Basic),
    ];

    GrammarSet::new("icas_0.2").with(MessageGrammar::new("icas_0.2", "BFD", "0.2", bfd))
}

/// Identification of a flight shared by all slot messages.
fn slot_flight() -> Vec<FieldSpec> {
    vec![
        title(),
        field!(2, "ADDR", List, [field!(0, "FAC", Basic)]).with_description("Addressees"),
        arcid(3),
        field!(4, "IFPLID", Basic),
        field!(5, "ADEP", Basic, mandatory),
        field!(6, "ADES", Basic, mandatory),
        field!(7, "EOBD", Basic),
        field!(8, "EOBT", Basic, mandatory),
    ]
}

fn slot_grammar(category: &str, fields: impl IntoIterator<Item = FieldSpec>) -> MessageGrammar {
    let mut all = slot_flight();
    all.extend(fields);
    MessageGrammar::new("atfcm", category, "1", all)
}

/// The slot messages of air traffic flow and capacity management.
pub fn atfcm() -> GrammarSet {
    let regulation = || {
        [
            field!(10, "REGUL", Basic).with_description("Regulation identifier"),
            field!(11, "TAXITIME", Basic),
            field!(12, "REGCAUSE", Basic),
        ]
    };
    let comment = || field!(20, "COMMENT", Basic);

    let sam = slot_grammar(
        "SAM",
        [field!(9, "CTOT", Basic, mandatory).with_description("Calculated take-off time")]
            .into_iter()
            .chain(regulation()),
    );
    let srm = slot_grammar(
        "SRM",
        [field!(9, "NEWCTOT", Basic, mandatory).with_description("Revised calculated take-off time")]
            .into_iter()
            .chain(regulation())
            .chain([comment()]),
    );
    let slc = slot_grammar(
        "SLC",
        [field!(9, "REASON", Basic), field!(10, "TAXITIME", Basic), comment()],
    );
    let fls = slot_grammar(
        "FLS",
        [field!(9, "REGUL", Basic), field!(10, "RESPBY", Basic), comment()],
    );
    let des = slot_grammar("DES", [comment()]);

    GrammarSet::new("atfcm")
        .with(sam)
        .with(srm)
        .with(slc)
        .with(fls)
        .with(des)
}

#[cfg(test)]
mod tests {
    use adexp::GrammarCatalog;

    use super::*;

    #[test]
    fn builtin_grammars_are_valid() {
        for set in [icas_v01(), icas_v02(), atfcm()] {
            for grammar in set.grammars() {
                assert_eq!(grammar.validate(), Ok(()), "{}", grammar.category);
                assert_eq!(grammar.set_name, set.name());
            }
        }
    }

    #[test]
    fn builds_catalog() {
        let catalog =
            GrammarCatalog::new([icas_v01(), atfcm()]).expect("builtin grammars are valid");

        assert_eq!(catalog.len(), 7);
        assert_eq!(
            catalog.resolve("BFD").map(|g| g.version.as_str()),
            Some("0.1")
        );
        assert!(catalog.resolve("SAM").is_some());
    }

    #[test]
    fn first_icas_version_shadows_later() {
        let catalog =
            GrammarCatalog::new([icas_v02(), icas_v01()]).expect("builtin grammars are valid");

        assert_eq!(
            catalog.resolve("BFD").map(|g| g.set_name.as_str()),
            Some("icas_0.2")
        );
        assert_eq!(
            catalog.resolve("CFD").map(|g| g.set_name.as_str()),
            Some("icas_0.1")
        );
    }
}
