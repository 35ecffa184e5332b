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

use log::{debug, warn};

use crate::scanner::Scanner;
use crate::{
    check_mandatory, normalize_and_validate, resolve_title, Error, GrammarCatalog, ParsedMessage,
};

/// Parses raw messages of some format into a [`ParsedMessage`].
pub trait MessageParser {
    type Error: error::Error;

    fn parse(&self, raw: &str) -> Result<ParsedMessage, Self::Error>;
}

/// Options of the [`Parser`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ParserOptions {
    /// Keep the message text as received in [`ParsedMessage::raw`].
    pub keep_raw: bool,
}

/// The ADEXP message parser.
///
/// The parser only borrows its catalog and has no mutable state. It can be
/// shared between threads to parse messages concurrently.
///
/// # Examples
///
/// ```
/// use adexp::{field, GrammarCatalog, GrammarSet, MessageGrammar, Parser};
///
/// let set = GrammarSet::new("demo").with(MessageGrammar::new(
///     "demo",
///     "BFD",
///     "1",
///     vec![
///         field!(1, "TITLE", Basic, mandatory),
///         field!(2, "ARCID", Basic, mandatory),
///     ],
/// ));
/// let catalog = GrammarCatalog::new([set])?;
/// let parser = Parser::new(&catalog);
///
/// let msg = parser.parse("-TITLE BFD -ARCID DLH151")?;
/// assert_eq!(msg.category(), "BFD");
/// assert_eq!(msg.get_str("ARCID"), Some("DLH151"));
/// # Ok::<(), adexp::Error>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Parser<'c> {
    catalog: &'c GrammarCatalog,
    options: ParserOptions,
}

impl<'c> Parser<'c> {
    pub fn new(catalog: &'c GrammarCatalog) -> Self {
        Self {
            catalog,
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &'c GrammarCatalog {
        self.catalog
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parses one message.
    ///
    /// The message is normalized, bound to the grammar of its title and
    /// scanned by that grammar. Fields the grammar doesn't know are skipped
    /// and reported as warnings of the returned message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message contains invalid characters, has no
    /// title, has a title without grammar or lacks a mandatory field.
    pub fn parse(&self, raw: &str) -> Result<ParsedMessage, Error> {
        let message = normalize_and_validate(raw)?;
        let grammar = resolve_title(&message, self.catalog)?;

        let (fields, warnings) = Scanner::new(&message, grammar).scan();
        check_mandatory(grammar, &fields)?;

        if !warnings.is_empty() {
            warn!(
                "{} message parsed with {} warning(s)",
                grammar.category,
                warnings.len()
            );
        }
        debug!(
            "parsed {} message of {} with {} field(s)",
            grammar.category,
            grammar.set_name,
            fields.len()
        );

        let msg = ParsedMessage::new(
            grammar.category.as_str(),
            grammar.set_name.as_str(),
            grammar.version.as_str(),
            fields,
        )
        .with_warnings(warnings);

        Ok(if self.options.keep_raw {
            msg.with_raw(raw)
        } else {
            msg
        })
    }
}

impl MessageParser for Parser<'_> {
    type Error = Error;

    fn parse(&self, raw: &str) -> Result<ParsedMessage, Error> {
        Parser::parse(self, raw)
    }
}
