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

//! Grammar resolution from the message title.

use log::debug;

use crate::{Error, GrammarCatalog, MessageGrammar};

const TITLE_TOKEN: &str = "-TITLE ";

/// Returns the value of the first `-TITLE` field of a normalized message.
///
/// The field doesn't need to be the first one as headers may precede it.
pub fn extract_title(message: &str) -> Option<&str> {
    let start = message.find(TITLE_TOKEN)? + TITLE_TOKEN.len();
    let value = &message[start..];
    let end = value.find('-').unwrap_or(value.len());
    Some(value[..end].trim())
}

/// Binds the grammar of a normalized message's title.
///
/// # Errors
///
/// Returns [`Error::TitleNotFound`] if the message has no title, or
/// [`Error::NoMatchingGrammar`] if no grammar of the catalog has the title
/// as category.
pub fn resolve_title<'c>(
    message: &str,
    catalog: &'c GrammarCatalog,
) -> Result<&'c MessageGrammar, Error> {
    let title = extract_title(message).ok_or(Error::TitleNotFound)?;
    let grammar = catalog
        .resolve(title)
        .ok_or_else(|| Error::NoMatchingGrammar {
            title: title.to_string(),
        })?;

    debug!(
        "title {} resolved to grammar {} v{}",
        title, grammar.set_name, grammar.version
    );

    Ok(grammar)
}
