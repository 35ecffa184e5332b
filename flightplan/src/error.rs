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
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading grammars or decoding messages.
#[derive(Debug)]
pub enum Error {
    /// A grammar is invalid or an ADEXP message couldn't be parsed.
    Adexp(adexp::Error),
    /// An ICAO message couldn't be parsed.
    Icao(icao::Error),
    /// A grammar file couldn't be read.
    Io { path: PathBuf, source: io::Error },
    /// A grammar file isn't a valid grammar definition.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A grammar directory has no definition.
    EmptyGrammarSet { path: PathBuf },
    /// A message is neither ADEXP nor ICAO.
    Unrecognized {
        adexp: adexp::Error,
        icao: icao::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adexp(e) => write!(f, "ADEXP: {e}"),
            Self::Icao(e) => write!(f, "ICAO: {e}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "{}: {source}", path.display()),
            Self::EmptyGrammarSet { path } => {
                write!(f, "{}: no grammar definitions found", path.display())
            }
            Self::Unrecognized { adexp, icao } => write!(
                f,
                "unrecognized message (as ADEXP: {adexp}; as ICAO: {icao})"
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Adexp(e) => Some(e),
            Self::Icao(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::EmptyGrammarSet { .. } | Self::Unrecognized { .. } => None,
        }
    }
}

impl From<adexp::Error> for Error {
    fn from(e: adexp::Error) -> Self {
        Self::Adexp(e)
    }
}

impl From<icao::Error> for Error {
    fn from(e: icao::Error) -> Self {
        Self::Icao(e)
    }
}
