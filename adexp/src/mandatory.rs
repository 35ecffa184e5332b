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

use crate::{Error, Mapping, MessageGrammar};

/// Checks that every mandatory top-level field of the `grammar` was scanned.
///
/// Fails on the first absent field in grammar order. An empty value counts
/// as present.
pub fn check_mandatory(grammar: &MessageGrammar, fields: &Mapping) -> Result<(), Error> {
    match grammar
        .mandatory_fields()
        .find(|spec| !fields.contains_key(&spec.name))
    {
        Some(spec) => Err(Error::MandatoryFieldMissing {
            name: spec.name.clone(),
        }),
        None => Ok(()),
    }
}
