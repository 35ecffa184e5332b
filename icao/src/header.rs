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

//! AFTN message heading.
//!
//! A message received over AFTN is preceded by a heading like:
//!
//! ```text
//! ZCZC ABC123
//! FF EDDFZPZX EDDMZPZX
//! 151230 LFPYZMFP
//! ```
//!
//! After the start signal `ZCZC` and the transmission identification come
//! the priority indicator, the addressees, the filing time and the
//! originator.

/// The address part of an AFTN heading.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AftnHeader {
    pub priority: String,
    pub addressees: Vec<String>,
    pub filing_time: String,
    pub originator: String,
}

const START_OF_MESSAGE: &str = "ZCZC";

fn is_priority(token: &str) -> bool {
    matches!(token, "SS" | "DD" | "FF" | "GG" | "KK")
}

fn is_address(token: &str) -> bool {
    token.len() == 8 && token.chars().all(|c| c.is_ascii_uppercase())
}

fn is_filing_time(token: &str) -> bool {
    token.len() == 6 && token.chars().all(|c| c.is_ascii_digit())
}

impl AftnHeader {
    /// Reads the heading that precedes the message text at `(`.
    ///
    /// Returns `None` if there is no heading or it's malformed.
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(START_OF_MESSAGE)? + START_OF_MESSAGE.len();
        let end = text[start..].find('(').map_or(text.len(), |n| start + n);
        let mut tokens = text[start..end].split_whitespace();

        let priority = tokens.by_ref().find(|token| is_priority(token))?;

        let mut addressees = Vec::new();
        let filing_time = loop {
            match tokens.next()? {
                token if is_filing_time(token) => break token,
                token if is_address(token) => addressees.push(token.to_string()),
                _ => return None,
            }
        };

        let originator = tokens.next().filter(|token| is_address(token))?;

        if addressees.is_empty() {
            return None;
        }

        Some(Self {
            priority: priority.to_string(),
            addressees,
            filing_time: filing_time.to_string(),
            originator: originator.to_string(),
        })
    }

    /// The first addressee.
    pub fn receiver(&self) -> Option<&str> {
        self.addressees.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_heading() {
        let header = AftnHeader::parse(
            "ZCZC ABC123 151229\r\nFF EDDFZPZX EDDMZPZX\r\n151230 LFPYZMFP\r\n(FPL-DLH151-IS",
        );

        assert_eq!(
            header,
            Some(AftnHeader {
                priority: "FF".to_string(),
                addressees: vec!["EDDFZPZX".to_string(), "EDDMZPZX".to_string()],
                filing_time: "151230".to_string(),
                originator: "LFPYZMFP".to_string(),
            })
        );
        assert_eq!(header.and_then(|h| h.receiver().map(str::to_string)), Some("EDDFZPZX".into()));
    }

    #[test]
    fn parses_single_line_heading() {
        let header = AftnHeader::parse("ZCZC ABC123 FF EDDFZPZX 151230 LFPYZMFP (CNL-");
        assert_eq!(header.map(|h| h.originator), Some("LFPYZMFP".to_string()));
    }

    #[test]
    fn rejects_missing_or_malformed_heading() {
        assert_eq!(AftnHeader::parse("(FPL-DLH151-IS"), None);
        assert_eq!(AftnHeader::parse("ZCZC ABC123 FF 151230 LFPYZMFP (FPL-"), None);
        assert_eq!(AftnHeader::parse("ZCZC ABC123 FF EDDFZPZX 151230 (FPL-"), None);
        assert_eq!(AftnHeader::parse("ZCZC ABC123 FF EDDF 151230 LFPYZMFP"), None);
    }
}
