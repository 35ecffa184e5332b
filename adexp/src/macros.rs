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

/// Declares a [`FieldSpec`](crate::FieldSpec) with its field reference
/// number, name and kind.
///
/// # Examples
///
/// ```
/// use adexp::{field, FieldKind};
///
/// let refdata = field!(2, "REFDATA", Structured, mandatory, [
///     field!(0, "SENDER", Structured, [field!(0, "FAC", Basic)]),
///     field!(0, "SEQNUM", Basic),
/// ]);
///
/// assert!(refdata.mandatory);
/// assert_eq!(refdata.kind, FieldKind::Structured);
/// assert_eq!(refdata.children.len(), 2);
/// ```
#[macro_export]
macro_rules! field {
    ($frn:expr, $name:expr, Basic) => {
        $crate::FieldSpec::basic($name).with_ordinal($frn)
    };

    ($frn:expr, $name:expr, Basic, mandatory) => {
        $crate::field!($frn, $name, Basic).mandatory()
    };

    ($frn:expr, $name:expr, Structured, [$($child:expr),* $(,)?]) => {
        $crate::FieldSpec::structured($name, vec![$($child),*]).with_ordinal($frn)
    };

    ($frn:expr, $name:expr, Structured, mandatory, [$($child:expr),* $(,)?]) => {
        $crate::field!($frn, $name, Structured, [$($child),*]).mandatory()
    };

    ($frn:expr, $name:expr, List, [$($child:expr),* $(,)?]) => {
        $crate::FieldSpec::list($name, vec![$($child),*]).with_ordinal($frn)
    };

    ($frn:expr, $name:expr, List, mandatory, [$($child:expr),* $(,)?]) => {
        $crate::field!($frn, $name, List, [$($child),*]).mandatory()
    };
}
