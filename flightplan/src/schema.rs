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

//! Grammar definitions stored as JSON.
//!
//! Each file holds the grammar of one message category:
//!
//! ```json
//! {
//!   "category": "BFD",
//!   "version": 0.1,
//!   "fields": [
//!     { "ordinal": 1, "name": "TITLE", "kind": "basic", "mandatory": true },
//!     { "ordinal": 2, "name": "REFDATA", "kind": "structured", "children": [
//!       { "name": "SEQNUM", "kind": "basic" }
//!     ] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use adexp::{GrammarSet, MessageGrammar};
use log::{debug, info};

use crate::Error;

/// Loads the grammar of one category from a JSON file.
pub fn load_grammar<P: AsRef<Path>>(path: P) -> Result<MessageGrammar, Error> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grammar: MessageGrammar = serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    grammar.validate()?;

    debug!(
        "loaded grammar {} v{} from {}",
        grammar.category,
        grammar.version,
        path.display()
    );
    Ok(grammar)
}

/// Loads every `*.json` grammar of a directory into the set `name`.
///
/// Files are read in the order of their names. A later file of the same
/// category replaces an earlier one.
pub fn load_grammar_set<P: AsRef<Path>>(dir: P, name: &str) -> Result<GrammarSet, Error> {
    let dir = dir.as_ref();
    let io_error = |source| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(Error::EmptyGrammarSet {
            path: dir.to_path_buf(),
        });
    }

    let mut set = GrammarSet::new(name);
    for path in paths {
        set.insert(load_grammar(path)?);
    }

    info!(
        "loaded grammar set {} with {} categories from {}",
        name,
        set.len(),
        dir.display()
    );
    Ok(set)
}
