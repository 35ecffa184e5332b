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

//! Whitespace normalization and character set validation.

use crate::Error;

/// Punctuation allowed in ADEXP messages besides letters, digits and space.
const PUNCTUATION: &[u8] = b"()-?:.,'=+/";

/// The token closing a message on AFTN.
const END_OF_MESSAGE: &str = "NNNN";

/// Returns `true` if `c` belongs to the ADEXP character set.
///
/// The set holds uppercase letters, digits, space and the punctuation
/// `( ) - ? : . , ' = + /`.
#[inline]
pub fn is_adexp_char(c: char) -> bool {
    c.is_ascii_uppercase()
        || c.is_ascii_digit()
        || c == ' '
        || (c.is_ascii() && PUNCTUATION.contains(&(c as u8)))
}

/// Normalizes a raw message and validates its characters.
///
/// Every line break (LF, CR or CRLF) becomes a single space so that no field
/// is split across lines. Surrounding whitespace and a trailing `NNNN` are
/// removed. Normalizing a normalized message returns it unchanged.
///
/// # Errors
///
/// Returns [`Error::EmptyMessage`] if nothing is left, or
/// [`Error::InvalidCharacter`] with the byte offset of the first character
/// outside the ADEXP set in the normalized text.
///
/// # Examples
///
/// ```
/// # use adexp::normalize_and_validate;
/// let msg = normalize_and_validate("-TITLE BFD\r\n-ARCID DLH151\nNNNN")?;
/// assert_eq!(msg, "-TITLE BFD -ARCID DLH151");
/// # Ok::<(), adexp::Error>(())
/// ```
pub fn normalize_and_validate(raw: &str) -> Result<String, Error> {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                text.push(' ');
            }
            '\n' => text.push(' '),
            c => text.push(c),
        }
    }

    let text = strip_end_of_message(&text);

    if text.is_empty() {
        return Err(Error::EmptyMessage);
    }

    if let Some((position, char)) = text.char_indices().find(|&(_, c)| !is_adexp_char(c)) {
        return Err(Error::InvalidCharacter { char, position });
    }

    Ok(text.to_string())
}

/// Trims the text and strips trailing `NNNN` tokens until neither changes it.
fn strip_end_of_message(mut text: &str) -> &str {
    loop {
        text = text.trim();
        match text.strip_suffix(END_OF_MESSAGE) {
            Some(rest) if rest.is_empty() || rest.ends_with(char::is_whitespace) => text = rest,
            _ => return text,
        }
    }
}
