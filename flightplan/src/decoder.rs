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

use adexp::{GrammarCatalog, MessageParser, ParsedMessage};
use log::{debug, info};

use crate::{builtin, Error, Flightplan};

/// Options of the [`Decoder`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct DecoderOptions {
    /// Keep the message text as received.
    pub keep_raw: bool,
    /// Options of the fallback to ICAO messages.
    pub icao: icao::ParserOptions,
}

/// Decodes messages in ADEXP or, failing that, the ICAO format.
///
/// # Examples
///
/// ```
/// use flightplan::Decoder;
///
/// let decoder = Decoder::builtin()?;
///
/// let bfd = decoder.decode_flightplan(
///     "-TITLE BFD -REFDATA -SENDER -FAC EBBUZXZQ -SEQNUM 006 -ARCID DLH151 -ADES LEPA",
/// )?;
/// assert_eq!(bfd.arcid, "DLH151");
///
/// let dla = decoder.decode_flightplan("(DLA-WZZ5322-LYNI1025-EDJA-DOF/240228)")?;
/// assert_eq!(dla.eobt.as_deref(), Some("1025"));
/// # Ok::<(), flightplan::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Decoder {
    catalog: GrammarCatalog,
    options: DecoderOptions,
}

impl Decoder {
    pub fn new(catalog: GrammarCatalog) -> Self {
        Self {
            catalog,
            options: DecoderOptions::default(),
        }
    }

    /// Creates a decoder of the ICAS 0.1 and ATFCM messages.
    pub fn builtin() -> Result<Self, Error> {
        let catalog = GrammarCatalog::new([builtin::icas_v01(), builtin::atfcm()])?;
        Ok(Self::new(catalog))
    }

    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &GrammarCatalog {
        &self.catalog
    }

    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Decodes a message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrecognized`] with the errors of both parsers if the
    /// message is neither valid ADEXP nor ICAO.
    pub fn decode(&self, raw: &str) -> Result<ParsedMessage, Error> {
        let parser = adexp::Parser::new(&self.catalog).with_options(adexp::ParserOptions {
            keep_raw: self.options.keep_raw,
        });

        let adexp_error = match parser.parse(raw) {
            Ok(msg) => {
                info!("decoded ADEXP {} message", msg.category());
                return Ok(msg);
            }
            Err(e) => e,
        };
        debug!("not an ADEXP message: {}", adexp_error);

        match icao::Parser::with_options(self.options.icao).parse(raw) {
            Ok(msg) => {
                info!("decoded ICAO {} message", msg.category());
                Ok(if self.options.keep_raw {
                    msg.with_raw(raw)
                } else {
                    msg
                })
            }
            Err(icao_error) => Err(Error::Unrecognized {
                adexp: adexp_error,
                icao: icao_error,
            }),
        }
    }

    /// Decodes a message into a flight plan.
    pub fn decode_flightplan(&self, raw: &str) -> Result<Flightplan, Error> {
        let msg = self.decode(raw)?;
        Ok(Flightplan::try_from(&msg)?)
    }
}

impl MessageParser for Decoder {
    type Error = Error;

    fn parse(&self, raw: &str) -> Result<ParsedMessage, Error> {
        self.decode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_adexp() {
        let decoder = Decoder::builtin().expect("builtin catalog");
        let msg = decoder
            .decode("-TITLE SAM -ARCID AMC101 -ADEP EGLL -ADES LMML -EOBT 0945 -CTOT 1030")
            .expect("SAM should decode");

        assert_eq!(msg.category(), "SAM");
        assert_eq!(msg.set_name(), "atfcm");
    }

    #[test]
    fn falls_back_to_icao() {
        let decoder = Decoder::builtin()
            .expect("builtin catalog")
            .with_options(DecoderOptions {
                keep_raw: true,
                ..Default::default()
            });
        let raw = "(ARR-WZZ301-EDJA0910-BKPR1048)";
        let msg = decoder.decode(raw).expect("ARR should decode");

        assert_eq!(msg.category(), "ARR");
        assert_eq!(msg.set_name(), icao::SET_NAME);
        assert_eq!(msg.raw(), Some(raw));
    }

    #[test]
    fn reports_both_errors() {
        let decoder = Decoder::builtin().expect("builtin catalog");
        let err = decoder.decode("-TITLE IFPL -ARCID DLH151").expect_err("unknown message");

        match err {
            Error::Unrecognized { adexp, icao } => {
                assert_eq!(
                    adexp,
                    adexp::Error::NoMatchingGrammar {
                        title: "IFPL".to_string()
                    }
                );
                assert_eq!(icao, icao::Error::MissingBrackets);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn projects_slot_message() {
        let decoder = Decoder::builtin().expect("builtin catalog");
        let fpl = decoder
            .decode_flightplan("-TITLE DES -ARCID AMC101 -ADEP EGLL -ADES LMML -EOBT 0945")
            .expect("DES should decode");

        assert_eq!(fpl.title, "DES");
        assert_eq!(fpl.arcid, "AMC101");
        assert_eq!(fpl.refdata, None);
    }
}
