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

//! Immutable collection of message grammars.

use std::collections::HashMap;

use log::{debug, warn};

use crate::{Error, MessageGrammar};

/// A named set of grammars with at most one grammar per category.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct GrammarSet {
    name: String,
    grammars: Vec<MessageGrammar>,
}

impl GrammarSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grammars: Vec::new(),
        }
    }

    /// Adds the `grammar` to this set, replacing any grammar of the same
    /// category. The grammar takes the name of this set.
    pub fn insert(&mut self, mut grammar: MessageGrammar) {
        grammar.set_name.clone_from(&self.name);

        match self
            .grammars
            .iter_mut()
            .find(|g| g.category == grammar.category)
        {
            Some(g) => *g = grammar,
            None => self.grammars.push(grammar),
        }
    }

    pub fn with(mut self, grammar: MessageGrammar) -> Self {
        self.insert(grammar);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, category: &str) -> Option<&MessageGrammar> {
        self.grammars.iter().find(|g| g.category == category)
    }

    pub fn grammars(&self) -> &[MessageGrammar] {
        &self.grammars
    }

    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

/// Grammar catalog factory, which is used to build a [`GrammarCatalog`].
#[derive(Default)]
pub struct CatalogBuilder {
    sets: Vec<GrammarSet>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a grammar set. Sets are searched in the order they are added.
    pub fn add_set(&mut self, set: GrammarSet) {
        match self.sets.iter_mut().find(|s| s.name == set.name) {
            Some(existing) => set.grammars.into_iter().for_each(|g| existing.insert(g)),
            None => self.sets.push(set),
        }
    }

    /// Adds a single grammar to the set named by its `set_name`.
    pub fn add_grammar(&mut self, grammar: MessageGrammar) {
        let set = GrammarSet::new(grammar.set_name.clone()).with(grammar);
        self.add_set(set);
    }

    pub fn with_set(mut self, set: GrammarSet) -> Self {
        self.add_set(set);
        self
    }

    /// Validates all grammars and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] if no grammar was added, or the first
    /// error of [`MessageGrammar::validate`].
    pub fn build(self) -> Result<GrammarCatalog, Error> {
        let mut index = HashMap::new();

        for (i, set) in self.sets.iter().enumerate() {
            for (j, grammar) in set.grammars.iter().enumerate() {
                grammar.validate()?;

                match index.get(&grammar.category).copied() {
                    Some((first, _)) => {
                        let first: &GrammarSet = &self.sets[first];
                        warn!(
                            "grammar {} of set {} is shadowed by set {}",
                            grammar.category,
                            set.name,
                            first.name()
                        );
                    }
                    None => {
                        index.insert(grammar.category.clone(), (i, j));
                    }
                }
            }
        }

        if index.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        debug!(
            "catalog built with {} categories from {} set(s)",
            index.len(),
            self.sets.len()
        );

        Ok(GrammarCatalog {
            sets: self.sets,
            index,
        })
    }
}

/// Grammars of all loaded sets, looked up by message category.
///
/// The catalog is read-only once built and can be shared by reference
/// between threads that parse concurrently.
#[derive(Clone, PartialEq, Debug)]
pub struct GrammarCatalog {
    sets: Vec<GrammarSet>,
    // category -> (set, grammar) of the first set declaring the category
    index: HashMap<String, (usize, usize)>,
}

impl GrammarCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Builds a catalog from `sets` in search order.
    ///
    /// # Errors
    ///
    /// See [`CatalogBuilder::build`].
    pub fn new<I>(sets: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = GrammarSet>,
    {
        sets.into_iter()
            .fold(CatalogBuilder::new(), CatalogBuilder::with_set)
            .build()
    }

    /// Returns the grammar bound to `category`.
    ///
    /// If more than one set declares the category, the grammar of the set
    /// added first is returned.
    pub fn resolve(&self, category: &str) -> Option<&MessageGrammar> {
        self.index
            .get(category)
            .map(|&(i, j)| &self.sets[i].grammars[j])
    }

    pub fn sets(&self) -> &[GrammarSet] {
        &self.sets
    }

    /// Returns all categories that resolve to a grammar.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldSpec;

    fn grammar(set: &str, category: &str, version: &str) -> MessageGrammar {
        MessageGrammar::new(set, category, version, vec![FieldSpec::basic("TITLE")])
    }

    #[test]
    fn resolves_across_sets() {
        let catalog = GrammarCatalog::new([
            GrammarSet::new("icas").with(grammar("", "BFD", "0.1")),
            GrammarSet::new("atfcm").with(grammar("", "SAM", "1")),
        ])
        .expect("catalog should build");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("BFD").map(|g| g.set_name.as_str()), Some("icas"));
        assert_eq!(catalog.resolve("SAM").map(|g| g.set_name.as_str()), Some("atfcm"));
        assert!(catalog.resolve("CFD").is_none());
    }

    #[test]
    fn first_set_wins_on_shared_category() {
        let mut builder = GrammarCatalog::builder();
        builder.add_grammar(grammar("v01", "BFD", "0.1"));
        builder.add_grammar(grammar("v02", "BFD", "0.2"));
        let catalog = builder.build().expect("catalog should build");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.sets().len(), 2);
        assert_eq!(catalog.resolve("BFD").map(|g| g.version.as_str()), Some("0.1"));
    }

    #[test]
    fn same_set_replaces_category() {
        let mut builder = CatalogBuilder::new();
        builder.add_grammar(grammar("icas", "BFD", "0.1"));
        builder.add_grammar(grammar("icas", "BFD", "0.2"));
        let catalog = builder.build().expect("catalog should build");

        assert_eq!(catalog.sets()[0].len(), 1);
        assert_eq!(catalog.resolve("BFD").map(|g| g.version.as_str()), Some("0.2"));
    }

    #[test]
    fn fails_on_empty_catalog() {
        assert_eq!(CatalogBuilder::new().build(), Err(Error::EmptyCatalog));
        assert_eq!(
            GrammarCatalog::new([GrammarSet::new("empty")]),
            Err(Error::EmptyCatalog)
        );
    }

    #[test]
    fn fails_on_invalid_grammar() {
        let invalid = MessageGrammar::new(
            "icas",
            "BFD",
            "1",
            vec![FieldSpec::basic("ARCID"), FieldSpec::basic("ARCID")],
        );

        assert!(matches!(
            GrammarCatalog::new([GrammarSet::new("icas").with(invalid)]),
            Err(Error::DuplicateField { .. })
        ));
    }

    #[test]
    fn catalog_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<GrammarCatalog>();
    }
}
